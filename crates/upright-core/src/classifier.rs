//! Orientation classification over a frozen 4-class model.

use std::path::Path;

use image::DynamicImage;
use tracing::debug;

use upright_inference::{InferenceBackend, InputTensor, OrtBackend, OutputTensor};

use crate::error::{OrientError, Result};
use crate::orientation::{Prediction, decode_scores};
use crate::preprocess::ImagePreprocessor;

/// Fallback input name when the model does not declare one.
const DEFAULT_INPUT_NAME: &str = "input";

/// Classifier for detecting photo orientation.
///
/// Wraps a frozen 4-class softmax model. Read-only after construction, so a
/// single instance can serve any number of concurrent callers.
pub struct OrientationClassifier<B: InferenceBackend> {
    backend: B,
    preprocessor: ImagePreprocessor,
}

impl<B: InferenceBackend> OrientationClassifier<B> {
    /// Create a classifier over an already-loaded backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            preprocessor: ImagePreprocessor::new(),
        }
    }

    /// Replace the default preprocessor.
    pub fn with_preprocessor(mut self, preprocessor: ImagePreprocessor) -> Self {
        self.preprocessor = preprocessor;
        self
    }

    /// Run a single forward pass over a prepared tensor.
    ///
    /// Returns the 4 class probabilities in model output order.
    pub fn score(&self, tensor: ndarray::Array4<f32>) -> Result<[f32; 4]> {
        let input_name = self
            .backend
            .input_names()
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_INPUT_NAME);

        let input = InputTensor::Float32(tensor.into_dyn());

        let outputs = self.backend.run(&[(input_name, input)])?;

        let output = outputs
            .into_iter()
            .next()
            .ok_or_else(|| {
                OrientError::Inference(upright_inference::InferenceError::OutputExtraction(
                    "no output from classifier".to_string(),
                ))
            })?
            .1;

        let arr = match output {
            OutputTensor::Float32(arr) => arr,
            other => {
                return Err(OrientError::Inference(
                    upright_inference::InferenceError::OutputExtraction(format!(
                        "unexpected output dtype: {:?}",
                        other.dtype()
                    )),
                ));
            }
        };

        let values: Vec<f32> = arr.iter().cloned().collect();
        if values.len() < 4 {
            return Err(OrientError::Inference(
                upright_inference::InferenceError::OutputExtraction(format!(
                    "expected 4 class scores, got {}",
                    values.len()
                )),
            ));
        }

        Ok([values[0], values[1], values[2], values[3]])
    }

    /// Classify the orientation of an image.
    pub fn classify(&self, image: &DynamicImage) -> Result<Prediction> {
        let tensor = self.preprocessor.prepare(image);
        let probs = self.score(tensor)?;
        let prediction = decode_scores(probs);

        debug!(
            "Classified orientation: {} (probabilities: {:?})",
            prediction.label, probs
        );

        Ok(prediction)
    }
}

/// Load the orientation classifier from an ONNX model file.
///
/// The backend is boxed so callers can swap in another scorer behind the
/// same type. Load failures surface as [`OrientError::ModelNotReady`].
pub fn load_classifier<P: AsRef<Path>>(
    path: P,
) -> Result<OrientationClassifier<Box<dyn InferenceBackend>>> {
    let backend = OrtBackend::from_file(path.as_ref())
        .map_err(|e| OrientError::ModelNotReady(e.to_string()))?;
    Ok(OrientationClassifier::new(Box::new(backend)))
}
