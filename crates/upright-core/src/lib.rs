//! Core library for photo orientation classification and correction.
//!
//! This crate provides:
//! - Image preprocessing into the classifier's fixed input tensor
//! - Orientation classification over a frozen 4-class ONNX model
//! - Label decoding with the fixed class-order table
//! - Rotation correction back to upright
//! - Image byte decode/encode helpers

pub mod classifier;
pub mod codec;
pub mod config;
pub mod error;
pub mod orientation;
pub mod preprocess;
pub mod rotate;

pub use classifier::{OrientationClassifier, load_classifier};
pub use codec::{decode_image, encode_jpeg};
pub use config::{ModelConfig, ServiceConfig, UprightConfig};
pub use error::{OrientError, Result};
pub use orientation::{CLASS_ORDER, Orientation, Prediction, decode_scores};
pub use preprocess::ImagePreprocessor;
pub use rotate::correct_orientation;

/// Re-export inference types.
pub use upright_inference::{
    InferenceBackend, InferenceError, InputTensor, OrtBackend, OutputTensor,
};
