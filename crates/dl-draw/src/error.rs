//! Error types for the draw engine

use thiserror::Error;

/// Draw validation errors
///
/// Validation failures surface synchronously and the engine performs no
/// retries; a rejected field produces no partial draw.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("cannot draw from an empty field")]
    NoParticipants,

    #[error("participant '{name}' has weight {weight}, which cannot win")]
    InvalidWeight { name: String, weight: u32 },
}
