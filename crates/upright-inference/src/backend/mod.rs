//! Inference backend implementations.

pub mod ort;

use crate::{InputTensor, OutputTensor, Result};

/// Trait for ONNX inference backends.
///
/// Abstracts over the actual runtime so the classifier can run against a
/// loaded ONNX session in production and against a fixed-score stub in
/// tests. Implementations must be safe to share across threads: the model
/// is read-only after load.
pub trait InferenceBackend: Send + Sync {
    /// Run inference with the given named input tensors.
    fn run(&self, inputs: &[(&str, InputTensor)]) -> Result<Vec<(String, OutputTensor)>>;

    /// Get the input names expected by the model.
    fn input_names(&self) -> &[String];

    /// Get the output names produced by the model.
    fn output_names(&self) -> &[String];
}

impl<B: InferenceBackend + ?Sized> InferenceBackend for Box<B> {
    fn run(&self, inputs: &[(&str, InputTensor)]) -> Result<Vec<(String, OutputTensor)>> {
        (**self).run(inputs)
    }

    fn input_names(&self) -> &[String] {
        (**self).input_names()
    }

    fn output_names(&self) -> &[String] {
        (**self).output_names()
    }
}
