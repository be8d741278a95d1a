//! Timeline error types.
//!
//! User input never produces an error; it is normalized instead. These cover
//! wiring mistakes and configuration loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("timeline context requested outside of a TimelineProvider")]
    MissingProvider,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid timeline config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type TimelineResult<T> = Result<T, TimelineError>;
