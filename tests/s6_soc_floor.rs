mod common;

use ev_scheduler::config::Geometry;
use ev_scheduler::solver::SolverContext;

#[test]
fn a_first_leg_beyond_remaining_soc_is_rejected_and_never_goes_negative() {
    let mut params = common::default_params();
    // Exaggerate consumption so the very first leg from DAWN costs far more
    // than the available charge.
    params.geometry = Geometry { speed_m_per_min: 500.0, battery_capacity_kwh: 60.0, consumption_kwh_per_km: 50.0 };

    let distant = common::home_at(1, 454070.0 + 50_000.0, 382249.0, 0, 287, 1, 286);
    let activities = vec![common::dawn(), distant];
    let mut ctx = SolverContext::new(params, activities).unwrap();

    assert!(ctx.solve().is_err(), "an unaffordable first leg must be rejected rather than produce a schedule");
}
