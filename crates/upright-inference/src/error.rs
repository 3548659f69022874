//! Error types for the inference layer.

use thiserror::Error;

/// Errors from loading or running the ONNX model.
#[derive(Error, Debug)]
pub enum InferenceError {
    /// The model artifact could not be read into a session.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// Session construction failed before the model was committed.
    #[error("failed to create session: {0}")]
    SessionCreate(String),

    /// An input tensor had the wrong shape or dtype for the model.
    #[error("invalid input tensor: {0}")]
    InvalidInput(String),

    /// The forward pass itself failed.
    #[error("inference run failed: {0}")]
    InferenceFailed(String),

    /// A model output could not be converted to a supported tensor.
    #[error("failed to extract output tensor: {0}")]
    OutputExtraction(String),

    /// I/O failure reading the model file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
