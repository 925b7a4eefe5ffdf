mod common;

use ev_scheduler::solver::SolverContext;

#[test]
fn minimal_two_activity_pool_is_feasible_with_zero_charging_cost() {
    let activities = vec![common::dawn(), common::dusk(1, 454070.0, 382249.0)];
    let mut ctx = SolverContext::new(common::default_params(), activities).unwrap();

    let schedule = ctx.solve().expect("S1 must be feasible");
    let last = schedule.last().unwrap();
    assert_eq!(last.activity_id, 1);
    assert!(last.cumulative_utility.is_finite());
    assert_eq!(last.charge_cost, 0.0);
}
