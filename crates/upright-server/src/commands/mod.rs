//! CLI command implementations.

pub mod correct;
pub mod predict;
pub mod serve;

use std::path::PathBuf;

use upright_core::{ImagePreprocessor, Result as CoreResult, UprightConfig, load_classifier};
use upright_server::Classifier;

/// Resolve configuration from an optional file path, falling back to
/// defaults.
pub fn resolve_config(config_path: Option<&str>) -> anyhow::Result<UprightConfig> {
    match config_path {
        Some(path) => Ok(UprightConfig::from_file(path)?),
        None => Ok(UprightConfig::default()),
    }
}

/// Load the classifier described by the config, with an optional model-path
/// override from the command line.
pub fn build_classifier(
    config: &UprightConfig,
    model_override: Option<PathBuf>,
) -> CoreResult<Classifier> {
    let path = model_override.unwrap_or_else(|| config.model.path.clone());
    let classifier = load_classifier(&path)?;
    Ok(classifier
        .with_preprocessor(ImagePreprocessor::new().with_target_size(config.model.input_size)))
}
