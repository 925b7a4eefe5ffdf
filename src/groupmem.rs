//! Group-memory set: the elementarity resource carried by every label.
//!
//! A linear linked list would suffice for the small cardinality involved
//! (a handful of activity groups) but a fixed-width bitset is both cheaper
//! to copy and cheaper to compare, so that is what a label actually stores.

/// Bitset over activity-group tags, supporting up to 64 distinct groups —
/// comfortably above the glossary's 8 named groups plus service stations.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Hash)]
pub struct GroupMemory(u64);

impl GroupMemory {
    pub fn new() -> Self {
        GroupMemory(0)
    }

    pub fn contains(&self, group: u8) -> bool {
        self.0 & (1 << group) != 0
    }

    pub fn insert(&mut self, group: u8) {
        self.0 |= 1 << group;
    }

    /// Union of `self` with `other`, deduplicated by construction.
    pub fn union(&self, other: &GroupMemory) -> GroupMemory {
        GroupMemory(self.0 | other.0)
    }

    /// `true` if every group in `self` also appears in `other` (`self ⊆ other`).
    pub fn is_subset_of(&self, other: &GroupMemory) -> bool {
        self.0 & other.0 == self.0
    }
}
