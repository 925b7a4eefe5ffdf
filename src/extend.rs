//! Label extension: produce the successor label for a feasible
//! (label, activity) pair — §4.5.

use crate::activity::Activity;
use crate::config::GeneralParameters;
use crate::geometry::{energy_consumed, travel_time};
use crate::label::{Label, LabelArena, LabelId};

/// Produces `L'`, the successor of `label` extended into `target`.
///
/// Callers MUST have already confirmed `feasible(label, target)`; this
/// function does not re-check feasibility.
pub fn extend(
    params: &GeneralParameters,
    activities: &[Activity],
    arena: &LabelArena,
    label_id: LabelId,
    target: &Activity,
) -> Label {
    let label = arena.get(label_id);
    let dusk_id = activities.len() - 1;

    if target.id == label.act_id {
        extend_stay(params, label, label_id, target)
    } else {
        extend_transition(params, activities, arena, label, label_id, target, dusk_id)
    }
}

fn extend_stay(params: &GeneralParameters, label: &Label, label_id: LabelId, target: &Activity) -> Label {
    let mut next = Label {
        act_id: target.id,
        time: label.time + 1,
        start_time: label.start_time,
        duration: label.duration + 1,
        soc_at_activity_start: label.soc_at_activity_start,
        current_soc: label.current_soc,
        delta_soc: 0.0,
        charge_duration: label.charge_duration,
        charge_cost: label.charge_cost,
        utility: label.utility,
        mem: label.mem,
        previous: Some(label_id),
    };

    if target.is_charging && next.current_soc < 1.0 {
        apply_charging_interval(params, target, label.time, &mut next);
    }

    next
}

fn extend_transition(
    params: &GeneralParameters,
    activities: &[Activity],
    arena: &LabelArena,
    label: &Label,
    label_id: LabelId,
    target: &Activity,
    dusk_id: usize,
) -> Label {
    let from = &activities[label.act_id];
    let tt = travel_time(from, target, params.geometry.speed_m_per_min, params.solver.interval_minutes);
    let start_time = label.time + tt;

    let (time, duration) = if target.id == dusk_id {
        (params.solver.horizon - 1, params.solver.horizon - 1 - start_time)
    } else {
        (start_time + target.min_duration, target.min_duration)
    };

    let energy = energy_consumed(from, target, params.geometry.consumption_kwh_per_km, params.geometry.battery_capacity_kwh);
    let soc_at_start = label.current_soc - energy;

    let mut mem = label.mem.union(&target.memory);
    if target.group != 0 {
        mem.insert(target.group);
    }

    let mut next = Label {
        act_id: target.id,
        time,
        start_time,
        duration,
        soc_at_activity_start: soc_at_start,
        current_soc: soc_at_start,
        delta_soc: 0.0,
        charge_duration: 0,
        charge_cost: label.charge_cost,
        utility: label.utility,
        mem,
        previous: Some(label_id),
    };

    if target.is_charging {
        apply_charging_interval(params, target, label.time, &mut next);
    }

    next.utility += transition_utility(params, arena, from, target, label, start_time, tt);

    next
}

/// One interval of charging at `activity`, applied in place to `next`.
fn apply_charging_interval(params: &GeneralParameters, activity: &Activity, t_now: u32, next: &mut Label) {
    let (rate, price) = params
        .charger
        .rate_and_price(activity, params.geometry.battery_capacity_kwh, params.solver.interval_minutes);
    let delta = (1.0 - next.current_soc).min(rate);
    next.current_soc += delta;
    next.delta_soc = delta;
    next.charge_duration += 1;
    let factor = params.tou.factor(t_now, params.solver.interval_minutes);
    next.charge_cost += price * factor * delta * params.geometry.battery_capacity_kwh;
}

/// Utility delta applied at a transition into `target`, after finishing `from`.
fn transition_utility(
    params: &GeneralParameters,
    arena: &LabelArena,
    from: &Activity,
    target: &Activity,
    label_before: &Label,
    new_start_time: u32,
    tt: u32,
) -> f64 {
    let u = &params.utility;
    let mut delta = u.asc[target.group as usize] - u.travel_time_penalty * tt as f64;

    if from.group != 0 && !from.is_service_station {
        let w = params.solver.interval_minutes as f64;
        delta += u.short[from.group as usize] * w * (from.des_duration as i64 - label_before.duration as i64).max(0) as f64;
        delta += u.long[from.group as usize] * w * (label_before.duration as i64 - from.des_duration as i64).max(0) as f64;
    }

    if target.group != 0 && !target.is_service_station {
        let w = params.solver.interval_minutes as f64;
        delta += u.early[target.group as usize] * w * (target.des_start_time as i64 - new_start_time as i64).max(0) as f64;
        delta += u.late[target.group as usize] * w * (new_start_time as i64 - target.des_start_time as i64).max(0) as f64;
    }

    if from.is_charging {
        delta += match from.group {
            0 => u.gamma_home,
            g if is_work_group(g) => u.gamma_work,
            _ => u.gamma_non_work,
        };
        delta += u.theta_soc * (u.soc_threshold - label_before.soc_at_activity_start).max(0.0);
        delta += u.beta_delta_soc * (label_before.current_soc - label_before.soc_at_activity_start);
        let previous_cost = label_before.previous.map(|p| arena.get(p).charge_cost).unwrap_or(0.0);
        delta += u.beta_cost * (label_before.charge_cost - previous_cost);
    }

    delta
}

/// The work group tag, per the glossary. Kept as a free function rather
/// than a magic number sprinkled through `transition_utility`.
fn is_work_group(group: u8) -> bool {
    group == 6
}
