//! Dominance: the Pareto relation between two labels at the same
//! (time, activity) cell.

use crate::label::Label;

/// `true` only if `l1` dominates `l2`: no worse utility, a superset of
/// visited groups, and not later in time.
///
/// A larger visited-group set blocks more future paths, so `l1` must have
/// traversed at least every restriction `l2` has while still scoring no
/// worse. This is a partial order — callers MUST NOT weaken it into a
/// total order by e.g. breaking ties on a single field.
pub fn dominates(l1: &Label, l2: &Label) -> bool {
    l1.utility >= l2.utility && l2.mem.is_subset_of(&l1.mem) && l1.time <= l2.time
}
