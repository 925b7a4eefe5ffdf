//! DP driver: the forward sweep over time × activity × activity that
//! builds the bucket, §4.7.

use log::debug;

use crate::activity::Activity;
use crate::bucket::Bucket;
use crate::config::GeneralParameters;
use crate::extend::extend;
use crate::feasibility::feasible;
use crate::groupmem::GroupMemory;
use crate::label::{Label, LabelArena, LabelId};

/// Runs one DP sweep: initialises the DAWN root, then for every
/// `(t, a_from)` cell and every surviving label there, tries extending
/// into every `a_to`, inserting survivors under dominance.
///
/// Ordering of visits only affects performance, not correctness — dominance
/// filtering is order-independent by construction.
pub fn run(params: &GeneralParameters, activities: &[Activity], arena: &mut LabelArena, bucket: &mut Bucket) {
    let root = Label {
        act_id: 0,
        time: activities[0].min_duration,
        start_time: 0,
        duration: activities[0].min_duration,
        soc_at_activity_start: 1.0,
        current_soc: 1.0,
        delta_soc: 0.0,
        charge_duration: 0,
        charge_cost: 0.0,
        utility: 0.0,
        mem: GroupMemory::new(),
        previous: None,
    };
    let root_time = root.time as usize;
    let root_id = arena.alloc(root);
    bucket.insert_unconditional(root_time, 0, root_id);

    let horizon = bucket.horizon();
    let num_activities = bucket.num_activities();
    let mut inserted = 1usize;

    for t in root_time..horizon.saturating_sub(1) {
        for a_from in 0..num_activities {
            let residents: Vec<LabelId> = bucket.cell(t, a_from).to_vec();
            for label_id in residents {
                for a_to in 0..num_activities {
                    let target = &activities[a_to];
                    let label = arena.get(label_id);
                    if !feasible(params, activities, arena, label, target) {
                        continue;
                    }
                    let successor = extend(params, activities, arena, label_id, target);
                    let dest_time = successor.time as usize;
                    let candidate_id = arena.alloc(successor);
                    if bucket.insert_with_dominance(arena, dest_time, a_to, candidate_id) {
                        inserted += 1;
                    }
                }
            }
        }
    }

    debug!(
        "DP sweep complete: {} labels survived dominance over horizon={} activities={}",
        inserted, horizon, num_activities
    );
}
