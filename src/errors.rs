use thiserror::Error;

/// Rejected at a `set_*`/builder entry point before a solve ever starts.
///
/// Mirrors the "Parameter error" kind: the engine refuses to build a
/// [`crate::solver::SolverContext`] on malformed input rather than discover
/// the problem mid-sweep.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("horizon must be positive, got {0}")]
    NonPositiveHorizon(i64),
    #[error("interval width must be positive, got {0}")]
    NonPositiveInterval(i64),
    #[error("activity {id}: min_duration {min} exceeds max_duration {max}")]
    DurationBoundsInverted { id: usize, min: u32, max: u32 },
    #[error("activity {id}: earliest_start {earliest} exceeds latest_start {latest}")]
    WindowInverted { id: usize, earliest: u32, latest: u32 },
    #[error("activity {id}: is_service_station requires is_charging and a charge_mode other than none")]
    ServiceStationNotCharging { id: usize },
    #[error("activity {id}: group {group} is out of the configured coefficient range")]
    GroupOutOfRange { id: usize, group: u8 },
    #[error("activity list must contain at least DAWN and DUSK (id 0 and id N-1)")]
    TooFewActivities,
    #[error("activity ids must be dense: expected id {expected}, found {found}")]
    NonDenseIds { expected: usize, found: usize },
}

/// Errors surfaced by a solve itself, once parameters and activities have
/// already been accepted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// No label reached the terminal cell `bucket[H-1][N-1]`.
    #[error("no feasible schedule found over horizon={horizon} intervals, {activities} activities")]
    Infeasible { horizon: usize, activities: usize },
    /// The DSSR safety cap was hit with a same-type cycle still present in
    /// the best label's back-chain.
    #[error("DSSR iteration cap ({iterations}) reached with a cycle still present; returning best-effort schedule")]
    DssrIterationCapReached { iterations: u32 },
}

/// Failures while reading an activities CSV.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("failed to read activities file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse activities CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid activity row: {0}")]
    Parameter(#[from] ParameterError),
}

/// Failures while writing a schedule-result CSV.
#[derive(Error, Debug)]
pub enum ScheduleWriteError {
    #[error("failed to write schedule file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize schedule row: {0}")]
    Csv(#[from] csv::Error),
}

/// Failures loading the general-parameters / tariff configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to configure logger: {0}")]
    Logger(#[from] log4rs::config::runtime::ConfigErrors),
    #[error("failed to install logger: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

/// Top-level error the CLI host driver matches on to pick an exit code.
#[derive(Error, Debug)]
pub enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Solve(#[from] SolveError),
    #[error(transparent)]
    ScheduleWrite(#[from] ScheduleWriteError),
}
