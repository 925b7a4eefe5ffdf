//! `SolverContext`: the explicit, no-global-state collaborator that owns
//! everything one solve touches — §5's "bundle into an explicit
//! solver-context value" and §6's external interface surface.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::activity::{validate_pool, Activity};
use crate::bucket::Bucket;
use crate::config::GeneralParameters;
use crate::dssr;
use crate::errors::SolveError;
use crate::label::{LabelArena, LabelId};
use crate::schedule::{extract_schedule, ScheduleEntry};
use crate::{dp, errors::ParameterError};

/// Owns the general parameters, the activity pool, the label arena and the
/// bucket for one solve. Two `SolverContext` values share nothing, so
/// independent concurrent solves are a type-level property rather than a
/// documentation promise (§5).
pub struct SolverContext {
    params: GeneralParameters,
    activities: Vec<Activity>,
    arena: LabelArena,
    bucket: Option<Bucket>,
    elapsed: Option<Duration>,
}

impl SolverContext {
    /// Builds a context from already-loaded parameters and an activity pool,
    /// rejecting a non-positive horizon/interval width or an invalid pool
    /// up front rather than discovering it mid-sweep.
    pub fn new(params: GeneralParameters, activities: Vec<Activity>) -> Result<Self, ParameterError> {
        if params.solver.horizon == 0 {
            return Err(ParameterError::NonPositiveHorizon(params.solver.horizon as i64));
        }
        if params.solver.interval_minutes == 0 {
            return Err(ParameterError::NonPositiveInterval(params.solver.interval_minutes as i64));
        }
        validate_pool(&activities)?;
        Ok(SolverContext {
            params,
            activities,
            arena: LabelArena::new(),
            bucket: None,
            elapsed: None,
        })
    }

    /// (Re-)allocates the bucket for a fresh sweep, per `create_bucket(H, N)`.
    pub fn create_bucket(&mut self) {
        self.bucket = Some(Bucket::new(self.params.solver.horizon as usize, self.activities.len()));
    }

    /// Releases the bucket and every label the arena holds, per
    /// `free_bucket()`: "the single release point" for a sweep's memory.
    pub fn free_bucket(&mut self) {
        self.bucket = None;
        self.arena.clear();
    }

    /// Runs one DP sweep over the current bucket, per §4.7. Panics if
    /// called before [`SolverContext::create_bucket`] — a host driver
    /// always calls them in that order.
    pub fn dp(&mut self) {
        let bucket = self.bucket.as_mut().expect("create_bucket must run before DP");
        dp::run(&self.params, &self.activities, &mut self.arena, bucket);
    }

    /// Runs one DSSR tightening pass against `best`'s back-chain, per §4.8.
    /// Returns `true` if a cycle was found and the caller must re-run DP.
    pub fn dssr(&mut self, best: LabelId) -> bool {
        dssr::tighten(&mut self.activities, &self.arena, best)
    }

    /// The best label in the terminal cell `bucket[H-1][N-1]`, if any.
    pub fn find_best(&self) -> Option<LabelId> {
        let bucket = self.bucket.as_ref()?;
        let horizon = bucket.horizon();
        let last_activity = bucket.num_activities() - 1;
        bucket.best_in_cell(&self.arena, horizon - 1, last_activity).map(|(id, _)| id)
    }

    /// Drives the full outer {build bucket → DP → find best → DSSR} loop
    /// to a fixed point (or the DSSR iteration cap), per §4.8/§5.1, and
    /// extracts the resulting schedule.
    pub fn solve(&mut self) -> Result<Vec<ScheduleEntry>, SolveError> {
        let start = Instant::now();
        dssr::reset_memory(&mut self.activities);

        let mut best = self.run_sweep()?;
        let mut iterations = 0u32;

        while self.dssr(best) {
            iterations += 1;
            if iterations >= self.params.solver.dssr_iteration_cap {
                self.elapsed = Some(start.elapsed());
                info!("DSSR iteration cap ({}) reached; returning best-effort schedule", iterations);
                return Err(SolveError::DssrIterationCapReached { iterations });
            }
            best = self.run_sweep()?;
        }

        self.elapsed = Some(start.elapsed());
        info!("solve converged after {} DSSR iteration(s), utility={}", iterations, self.arena.get(best).utility);
        Ok(extract_schedule(&self.activities, &self.arena, best))
    }

    fn run_sweep(&mut self) -> Result<LabelId, SolveError> {
        self.create_bucket();
        self.dp();
        debug!("DP sweep produced {} labels", self.arena.len());
        self.find_best().ok_or(SolveError::Infeasible {
            horizon: self.params.solver.horizon as usize,
            activities: self.activities.len(),
        })
    }

    /// Number of labels the arena currently holds, per `get_count()`.
    pub fn get_count(&self) -> usize {
        self.arena.len()
    }

    /// Wall-clock time the most recent [`SolverContext::solve`] call took,
    /// per `get_total_time()`. `None` before any solve has run.
    pub fn get_total_time(&self) -> Option<Duration> {
        self.elapsed
    }
}
