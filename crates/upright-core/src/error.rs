//! Error types for the upright-core library.

use thiserror::Error;

/// Main error type for the upright library.
#[derive(Error, Debug)]
pub enum OrientError {
    /// Input bytes could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    Decode(String),

    /// The classifier model is not loaded or failed to load.
    #[error("model not ready: {0}")]
    ModelNotReady(String),

    /// Inference error from the inference layer.
    #[error("inference error: {0}")]
    Inference(#[from] upright_inference::InferenceError),

    /// Failed to encode the output image.
    #[error("failed to encode image: {0}")]
    Encode(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the upright library.
pub type Result<T> = std::result::Result<T, OrientError>;
