//! Application state.

use std::sync::Arc;

use upright_core::{InferenceBackend, OrientationClassifier, ServiceConfig};

/// The classifier type served by the API: backend-erased so production and
/// test scorers share one state type.
pub type Classifier = OrientationClassifier<Box<dyn InferenceBackend>>;

/// Shared application state.
///
/// The classifier is loaded once at startup and read-only afterwards; every
/// in-flight request shares the same instance.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<Classifier>,
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(classifier: Classifier, config: ServiceConfig) -> Self {
        Self {
            classifier: Arc::new(classifier),
            config: Arc::new(config),
        }
    }
}
