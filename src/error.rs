use thiserror::Error;

/// Errors surfaced across the engine boundary. Nothing in here is
/// fatal: callers decide the user-facing messaging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A coordinate from outside the core fell off the 8x8 grid.
    /// Internally the occupancy validator absorbs these as `Invalid`
    /// verdicts; only boundary APIs return this.
    #[error("position off the board: rank {rank}, file {file}")]
    OutOfBounds { rank: i8, file: i8 },

    #[error("FEN must have exactly 6 fields, found {found}")]
    FenFieldCount { found: usize },

    #[error("invalid {field} field in FEN: {value:?}")]
    FenField {
        field: &'static str,
        value: String,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
