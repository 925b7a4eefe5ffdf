//! Activity ingestion from CSV, §10.1.

use serde::Deserialize;

use crate::activity::{validate_pool, Activity, ChargeMode};
use crate::errors::IngestError;
use crate::groupmem::GroupMemory;

/// One raw CSV row, before it is lifted into an [`Activity`]. `memory` is
/// never a column — it is DSSR-internal state, always empty at load.
#[derive(Deserialize)]
struct ActivityRow {
    id: usize,
    x: f64,
    y: f64,
    group: u8,
    earliest_start: u32,
    latest_start: u32,
    min_duration: u32,
    max_duration: u32,
    des_start_time: u32,
    des_duration: u32,
    charge_mode: ChargeMode,
    is_charging: bool,
    is_service_station: bool,
}

impl From<ActivityRow> for Activity {
    fn from(row: ActivityRow) -> Self {
        Activity {
            id: row.id,
            x: row.x,
            y: row.y,
            group: row.group,
            earliest_start: row.earliest_start,
            latest_start: row.latest_start,
            min_duration: row.min_duration,
            max_duration: row.max_duration,
            des_start_time: row.des_start_time,
            des_duration: row.des_duration,
            charge_mode: row.charge_mode,
            is_charging: row.is_charging,
            is_service_station: row.is_service_station,
            memory: GroupMemory::new(),
        }
    }
}

/// Loads, lifts and validates an activity pool from a CSV file at `path`.
///
/// # Arguments
///
/// * `path` - path to the activities CSV file
pub fn load_from_csv(path: &str) -> Result<Vec<Activity>, IngestError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut activities = Vec::new();
    for result in reader.deserialize() {
        let row: ActivityRow = result?;
        activities.push(Activity::from(row));
    }
    validate_pool(&activities)?;
    Ok(activities)
}
