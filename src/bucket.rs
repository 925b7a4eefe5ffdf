//! Label store ("bucket"): the dense H×N grid of non-dominated labels
//! indexed by (time interval, activity).

use crate::dominance::dominates;
use crate::label::{Label, LabelArena, LabelId};

/// Dense H×N grid of label-id lists. Cell `(t, a)` holds every
/// non-dominated label ending at time `t` with last activity `a`.
///
/// The bucket owns no label storage itself — that lives in the
/// [`LabelArena`] passed alongside it — it only owns the per-cell
/// survivor lists.
pub struct Bucket {
    horizon: usize,
    num_activities: usize,
    cells: Vec<Vec<LabelId>>,
}

impl Bucket {
    pub fn new(horizon: usize, num_activities: usize) -> Self {
        Bucket {
            horizon,
            num_activities,
            cells: vec![Vec::new(); horizon * num_activities],
        }
    }

    fn index(&self, t: usize, a: usize) -> usize {
        t * self.num_activities + a
    }

    pub fn cell(&self, t: usize, a: usize) -> &[LabelId] {
        &self.cells[self.index(t, a)]
    }

    /// Appends `id` at the tail of cell `(t, a)` with no dominance check.
    /// Used only for the DAWN root insertion.
    pub fn insert_unconditional(&mut self, t: usize, a: usize, id: LabelId) {
        let idx = self.index(t, a);
        self.cells[idx].push(id);
    }

    /// Inserts `candidate` (already allocated in `arena` as `id`) into cell
    /// `(t, a)` under dominance: if any resident dominates it, it is
    /// discarded (the id is simply never retained — the arena entry is
    /// reclaimed when the bucket is freed); otherwise every resident it
    /// dominates is removed and it is appended. Returns `true` if the
    /// candidate survived.
    pub fn insert_with_dominance(&mut self, arena: &LabelArena, t: usize, a: usize, id: LabelId) -> bool {
        let candidate = arena.get(id);
        let idx = self.index(t, a);

        if self.cells[idx].iter().any(|&resident| dominates(arena.get(resident), candidate)) {
            return false;
        }

        self.cells[idx].retain(|&resident| !dominates(candidate, arena.get(resident)));
        self.cells[idx].push(id);
        true
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn num_activities(&self) -> usize {
        self.num_activities
    }

    /// Clears every cell's survivor list, leaving the arena itself for the
    /// caller to `clear()` separately (they're independent lifetimes).
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Best label (by utility) in cell `(t, a)`, or `None` if empty.
    pub fn best_in_cell<'a>(&self, arena: &'a LabelArena, t: usize, a: usize) -> Option<(LabelId, &'a Label)> {
        self.cell(t, a)
            .iter()
            .map(|&id| (id, arena.get(id)))
            .max_by(|(_, l1), (_, l2)| l1.utility.total_cmp(&l2.utility))
    }
}
