//! DSSR (Decremental State-Space Relaxation) outer loop, §4.8.
//!
//! Detects same-group cycles in the best label's back-chain and tightens
//! elementarity by marking intermediate activities' `memory`, rather than
//! re-running the whole DP with a global non-elementary-path ban.

use log::info;

use crate::activity::Activity;
use crate::label::{Label, LabelArena, LabelId};

/// Scans `best`'s back-chain for a group-level cycle, per §4.8: the most
/// recent activity `p1` whose group repeats at an earlier label `p2` with a
/// different `act_id` (DAWN, DUSK, and DUSK's immediate predecessor are
/// excluded from the scan — they are structural, not itinerary repeats).
///
/// On finding one, every intermediate activity strictly between `p2` and
/// `p1` in the chain has `p1`'s group added to its `memory`, and the
/// function returns `true` so the caller re-runs `DP()`. Returns `false`
/// (no mutation) once the chain is cycle-free.
pub fn tighten(activities: &mut [Activity], arena: &LabelArena, best: LabelId) -> bool {
    let chain = arena.chain(best);
    if chain.len() < 3 {
        return false;
    }

    // Exclude DAWN (index 0), DUSK (last index), and DUSK's immediate
    // predecessor from the scan, per §4.8 — only labels strictly between
    // DAWN and DUSK's predecessor can form an itinerary cycle.
    let scan_range = 1..chain.len() - 2;

    for i in scan_range.clone().rev() {
        let p1 = arena.get(chain[i]);
        let group = activities[p1.act_id].group;
        if group == 0 {
            continue;
        }
        for j in scan_range.clone().take_while(|&j| j < i) {
            let p2 = arena.get(chain[j]);
            if activities[p2.act_id].group == group && p2.act_id != p1.act_id {
                for &mid in &chain[j + 1..i] {
                    let mid_id = arena.get(mid).act_id;
                    activities[mid_id].memory.insert(group);
                }
                info!(
                    "DSSR: cycle on group {} between chain positions {} and {}, {} activities marked",
                    group,
                    j,
                    i,
                    i - j - 1
                );
                return true;
            }
        }
    }

    false
}

/// Clears every activity's DSSR memory, as required at the top of a fresh
/// solve (§4's lifecycle note: "the Activity's DSSR memory is cleared at
/// the top of each fresh solve").
pub fn reset_memory(activities: &mut [Activity]) {
    for activity in activities {
        activity.memory = crate::groupmem::GroupMemory::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ChargeMode;
    use crate::groupmem::GroupMemory;

    fn act(id: usize, group: u8) -> Activity {
        Activity {
            id,
            x: 0.0,
            y: 0.0,
            group,
            earliest_start: 0,
            latest_start: 287,
            min_duration: 1,
            max_duration: 286,
            des_start_time: 0,
            des_duration: 0,
            charge_mode: ChargeMode::None,
            is_charging: false,
            is_service_station: false,
            memory: GroupMemory::new(),
        }
    }

    fn label(act_id: usize, previous: Option<LabelId>) -> Label {
        Label {
            act_id,
            time: 0,
            start_time: 0,
            duration: 0,
            soc_at_activity_start: 1.0,
            current_soc: 1.0,
            delta_soc: 0.0,
            charge_duration: 0,
            charge_cost: 0.0,
            utility: 0.0,
            mem: GroupMemory::new(),
            previous,
        }
    }

    #[test]
    fn no_cycle_in_strictly_increasing_groups_returns_false() {
        let mut activities = vec![act(0, 0), act(1, 1), act(2, 2), act(3, 0)];
        let mut arena = LabelArena::new();
        let dawn = arena.alloc(label(0, None));
        let a1 = arena.alloc(label(1, Some(dawn)));
        let a2 = arena.alloc(label(2, Some(a1)));
        let dusk = arena.alloc(label(3, Some(a2)));
        assert!(!tighten(&mut activities, &arena, dusk));
    }

    #[test]
    fn repeated_group_marks_intermediate_activities() {
        // ids: 0 dawn, 1 shop (group 3), 2 leisure (group 4), 3 shop_again (group 3),
        // 4 extra leisure (group 5, DUSK's predecessor), 5 dusk.
        let mut activities = vec![act(0, 0), act(1, 3), act(2, 4), act(3, 3), act(4, 5), act(5, 0)];
        let mut arena = LabelArena::new();
        let dawn = arena.alloc(label(0, None));
        let shop1 = arena.alloc(label(1, Some(dawn)));
        let leisure = arena.alloc(label(2, Some(shop1)));
        let shop2 = arena.alloc(label(3, Some(leisure)));
        let extra = arena.alloc(label(4, Some(shop2)));
        let dusk = arena.alloc(label(5, Some(extra)));

        assert!(tighten(&mut activities, &arena, dusk));
        // the intermediate label between the two group-3 visits is `leisure`, act_id 2.
        assert!(activities[2].memory.contains(3));
    }

    #[test]
    fn a_repeat_at_dusks_immediate_predecessor_is_not_flagged() {
        // ids: 0 dawn, 1 shop (group 3), 2 leisure (group 4), 3 shop_again (group 3,
        // DUSK's immediate predecessor), 4 dusk. Per §4.8 this position is excluded
        // from the scan, so no cycle is reported even though the group repeats.
        let mut activities = vec![act(0, 0), act(1, 3), act(2, 4), act(3, 3), act(4, 0)];
        let mut arena = LabelArena::new();
        let dawn = arena.alloc(label(0, None));
        let shop1 = arena.alloc(label(1, Some(dawn)));
        let leisure = arena.alloc(label(2, Some(shop1)));
        let shop2 = arena.alloc(label(3, Some(leisure)));
        let dusk = arena.alloc(label(4, Some(shop2)));

        assert!(!tighten(&mut activities, &arena, dusk));
    }

    #[test]
    fn reset_memory_clears_every_activity() {
        let mut activities = vec![act(0, 0), act(1, 1)];
        activities[1].memory.insert(1);
        reset_memory(&mut activities);
        assert!(!activities[1].memory.contains(1));
    }
}
