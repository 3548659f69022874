//! Configuration structures for the upright service.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codec::DEFAULT_JPEG_QUALITY;
use crate::error::{OrientError, Result};
use crate::preprocess::DEFAULT_INPUT_SIZE;

/// Main configuration for the upright service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UprightConfig {
    /// Model artifact configuration.
    pub model: ModelConfig,

    /// HTTP service configuration.
    pub service: ServiceConfig,
}

impl UprightConfig {
    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        serde_json::from_str(&contents).map_err(|e| OrientError::Config(e.to_string()))
    }
}

impl Default for UprightConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            service: ServiceConfig::default(),
        }
    }
}

/// Model artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the frozen 4-class ONNX classifier.
    pub path: PathBuf,

    /// Classifier input edge length in pixels.
    pub input_size: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("models/orientation.onnx"),
            input_size: DEFAULT_INPUT_SIZE,
        }
    }
}

/// HTTP service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Socket address to bind.
    pub bind_addr: String,

    /// Maximum accepted request body size in bytes.
    pub body_limit: usize,

    /// JPEG quality for corrected output (1-100).
    pub jpeg_quality: u8,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            body_limit: 16 * 1024 * 1024,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}
