//! Feasibility predicate: every constraint check that must hold before a
//! label is allowed to extend into a candidate activity.

use crate::activity::{Activity, ChargeMode};
use crate::config::GeneralParameters;
use crate::geometry::{energy_consumed, travel_time};
use crate::label::{Label, LabelArena};

/// Returns `true` only if `label` may extend into `target`, per §4.4.
///
/// `activities` is the whole pool (needed to reach DUSK for the
/// can-still-finish check); `arena` resolves `label.previous` for the
/// no-A-B-A-chatter rule.
pub fn feasible(
    params: &GeneralParameters,
    activities: &[Activity],
    arena: &LabelArena,
    label: &Label,
    target: &Activity,
) -> bool {
    let dusk_id = activities.len() - 1;

    // DAWN (id 0) may only ever occupy position 0.
    if label.act_id != 0 && target.id == 0 {
        return false;
    }

    if target.id == label.act_id {
        feasible_stay(params, label, target)
    } else {
        feasible_transition(params, activities, arena, label, target, dusk_id)
    }
}

/// Case A: staying at the same activity for one more interval.
fn feasible_stay(params: &GeneralParameters, label: &Label, target: &Activity) -> bool {
    if label.duration + 1 > target.max_duration {
        return false;
    }
    if target.is_service_station && !target.is_charging {
        return false;
    }
    if target.is_charging {
        if target.charge_mode == ChargeMode::None {
            return false;
        }
        let (rate, _price) = params
            .charger
            .rate_and_price(target, params.geometry.battery_capacity_kwh, params.solver.interval_minutes);
        if label.current_soc + rate > 1.0 {
            return false;
        }
    }
    true
}

/// Case B: transitioning to a different activity.
fn feasible_transition(
    params: &GeneralParameters,
    activities: &[Activity],
    arena: &LabelArena,
    label: &Label,
    target: &Activity,
    dusk_id: usize,
) -> bool {
    let from = &activities[label.act_id];

    if let Some(prev_id) = label.previous {
        if arena.get(prev_id).act_id == target.id {
            return false; // no A -> B -> A chatter of length 2
        }
    }
    if label.act_id == dusk_id {
        return false; // cannot leave DUSK
    }
    if label.duration < from.min_duration {
        return false; // minimum stay not yet satisfied
    }

    let tt = travel_time(from, target, params.geometry.speed_m_per_min, params.solver.interval_minutes);
    let t = label.time;

    let dusk = &activities[dusk_id];
    let return_trip = travel_time(target, dusk, params.geometry.speed_m_per_min, params.solver.interval_minutes);
    if t + tt + target.min_duration + return_trip >= params.solver.horizon - 1 {
        return false; // could never reach DUSK afterwards
    }

    let arrival = t + tt;
    if arrival < target.earliest_start || arrival > target.latest_start {
        return false;
    }

    if target.group != 0 && (label.mem.contains(target.group) || target.memory.contains(target.group)) {
        return false; // elementarity
    }

    let energy = energy_consumed(from, target, params.geometry.consumption_kwh_per_km, params.geometry.battery_capacity_kwh);
    if label.current_soc - energy < 0.0 {
        return false;
    }

    if target.is_service_station && !target.is_charging {
        return false;
    }
    if target.is_charging && target.charge_mode == ChargeMode::None {
        return false;
    }

    true
}
