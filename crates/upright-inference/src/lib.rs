//! ONNX inference abstraction for upright.
//!
//! This crate wraps the ONNX Runtime behind a small backend trait so the
//! orientation classifier can be exercised with a stub scorer in tests and
//! with `ort` (XNNPACK execution provider) in production.

mod backend;
mod error;
mod tensor;

pub use backend::InferenceBackend;
pub use backend::ort::OrtBackend;
pub use error::InferenceError;
pub use tensor::{InputTensor, OutputTensor, TensorType};

/// Result type for inference operations.
pub type Result<T> = std::result::Result<T, InferenceError>;
