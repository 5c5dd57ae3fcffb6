//! Error types for reveal sequencing

use thiserror::Error;

/// Reveal scheduling errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RevealError {
    #[error("reveal sequence already started")]
    AlreadyStarted,

    #[error("reveal sequence is still running")]
    StillRunning,
}

/// Result type alias
pub type RevealResult<T> = Result<T, RevealError>;
