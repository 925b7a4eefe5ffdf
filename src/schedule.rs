//! Result extraction and schedule-result CSV output, §4.9 and §10.2.

use serde::Serialize;

use crate::activity::Activity;
use crate::errors::ScheduleWriteError;
use crate::label::{LabelArena, LabelId};

/// One chronological entry of an extracted schedule, ready to serialize.
#[derive(Clone, Debug, Serialize)]
pub struct ScheduleEntry {
    pub step: usize,
    pub activity_id: usize,
    pub group: u8,
    pub start_time: u32,
    pub duration: u32,
    pub soc_start: f64,
    pub soc_end: f64,
    pub charge_mode: String,
    pub charge_duration: u32,
    pub charge_cost: f64,
    pub cumulative_utility: f64,
}

/// Walks `best.previous` back to the root and reverses into chronological
/// order, per §4.9. One entry per label on the chain, including DAWN.
pub fn extract_schedule(activities: &[Activity], arena: &LabelArena, best: LabelId) -> Vec<ScheduleEntry> {
    arena
        .chain(best)
        .into_iter()
        .enumerate()
        .map(|(step, id)| {
            let label = arena.get(id);
            let activity = &activities[label.act_id];
            ScheduleEntry {
                step,
                activity_id: label.act_id,
                group: activity.group,
                start_time: label.start_time,
                duration: label.duration,
                soc_start: label.soc_at_activity_start,
                soc_end: label.current_soc,
                charge_mode: format!("{:?}", activity.charge_mode).to_lowercase(),
                charge_duration: label.charge_duration,
                charge_cost: label.charge_cost,
                cumulative_utility: label.utility,
            }
        })
        .collect()
}

/// Writes an extracted schedule to `path` as CSV, per §10.2's column set.
pub fn write_csv(path: &str, entries: &[ScheduleEntry]) -> Result<(), ScheduleWriteError> {
    let mut writer = csv::Writer::from_path(path)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}
