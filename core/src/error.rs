use thiserror::Error;

/// Errors that indicate a programmer/contract violation rather than a bad
/// `SolveRequest`. Per-record malformed input (unparseable callout times,
/// out-of-range allied-health slots) is never surfaced here: those records
/// are dropped and logged via `tracing::warn!` instead, per the "one bad
/// callout must not block the day" design note.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SolveError {
    #[error("slot_size_minutes must be 15, got {0}")]
    InvalidSlotSize(u32),
    #[error("operating hours end ({end}) is not after start ({start})")]
    InvalidOperatingHours { start: String, end: String },
    #[error("ideal lunch window end ({end}) is before start ({start})")]
    InvalidLunchWindow { start: String, end: String },
    #[error("failed to build the ILP model: {0}")]
    ModelBuild(String),
    #[error("solver backend failed to produce a configuration")]
    SolverFailure,
}
