//! Geometry/Energy kernel: Euclidean distance, travel time on the discrete
//! lattice, and SoC consumption for a leg between two activities.

use crate::activity::Activity;

/// Straight-line distance between two activities' coordinates, in metres.
pub fn distance(a: &Activity, b: &Activity) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Travel time between two activities, in interval counts.
///
/// Raw minutes are `distance / speed_m_per_min`, rounded UP to the next
/// multiple of `interval_minutes` — never under-report travel, so every
/// leg the feasibility predicate accepts is reachable on the lattice.
pub fn travel_time(a: &Activity, b: &Activity, speed_m_per_min: f64, interval_minutes: u32) -> u32 {
    let raw_minutes = distance(a, b) / speed_m_per_min;
    (raw_minutes / interval_minutes as f64).ceil() as u32
}

/// SoC fraction consumed driving from `a` to `b`.
pub fn energy_consumed(a: &Activity, b: &Activity, consumption_kwh_per_km: f64, battery_capacity_kwh: f64) -> f64 {
    let km = distance(a, b) / 1000.0;
    (consumption_kwh_per_km * km) / battery_capacity_kwh
}
