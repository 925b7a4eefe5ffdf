//! Activity: immutable (apart from DSSR memory) input to a solve.

use serde::{Deserialize, Serialize};

use crate::config::NUM_GROUPS;
use crate::errors::ParameterError;
use crate::groupmem::GroupMemory;

/// Charger speed an activity's charging variant uses, or `None` if the
/// activity does not offer charging at all.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeMode {
    None,
    Slow,
    Fast,
    Rapid,
}

/// A candidate activity in the scheduling pool.
///
/// `id = 0` is DAWN (forced first); `id = activities.len() - 1` is DUSK
/// (forced last). Charging variants of the same physical activity are
/// distinct `Activity` entries sharing the same `group`.
#[derive(Clone, Debug)]
pub struct Activity {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub group: u8,
    pub earliest_start: u32,
    pub latest_start: u32,
    pub min_duration: u32,
    pub max_duration: u32,
    pub des_start_time: u32,
    pub des_duration: u32,
    pub charge_mode: ChargeMode,
    pub is_charging: bool,
    pub is_service_station: bool,
    /// Forbidden-group marks accumulated by DSSR across outer iterations of
    /// one solve; cleared only between solves, never mutated mid-sweep.
    pub memory: GroupMemory,
}

impl Activity {
    /// Checks the invariants a single activity must hold, independent of
    /// its position in the pool. Window/position invariants that depend on
    /// DAWN/DUSK placement are checked by [`validate_pool`].
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.min_duration > self.max_duration {
            return Err(ParameterError::DurationBoundsInverted {
                id: self.id,
                min: self.min_duration,
                max: self.max_duration,
            });
        }
        if self.earliest_start > self.latest_start {
            return Err(ParameterError::WindowInverted {
                id: self.id,
                earliest: self.earliest_start,
                latest: self.latest_start,
            });
        }
        if self.is_service_station && !(self.is_charging && self.charge_mode != ChargeMode::None) {
            return Err(ParameterError::ServiceStationNotCharging { id: self.id });
        }
        if self.group as usize >= NUM_GROUPS {
            return Err(ParameterError::GroupOutOfRange { id: self.id, group: self.group });
        }
        Ok(())
    }
}

/// Validates a whole activity pool: per-activity invariants, dense id
/// assignment, and the DAWN-at-0/DUSK-at-last convention.
pub fn validate_pool(activities: &[Activity]) -> Result<(), ParameterError> {
    if activities.len() < 2 {
        return Err(ParameterError::TooFewActivities);
    }
    for (i, a) in activities.iter().enumerate() {
        if a.id != i {
            return Err(ParameterError::NonDenseIds { expected: i, found: a.id });
        }
        a.validate()?;
    }
    Ok(())
}
