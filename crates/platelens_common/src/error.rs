//! Error types for Platelens.

use thiserror::Error;

/// Failures from the external generation service.
///
/// Both variants are terminal for the calling stage: the pipeline does not
/// retry, and the error propagates to the caller of the analysis.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("transport error reaching generation service: {0}")]
    Transport(String),

    #[error("generation service returned status {status}: {body}")]
    Response { status: u16, body: String },
}

/// Top-level error taxonomy for the binary edge.
///
/// Extraction failures and verification findings are deliberately absent:
/// the former are absorbed by stage fallbacks, the latter are advisory and
/// only lower confidence.
#[derive(Error, Debug)]
pub enum PlateError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("image error: {0}")]
    Image(String),

    #[error("user profile error: {0}")]
    Profile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
