//! Axum HTTP API for photo orientation classification.
//!
//! This crate provides:
//! - `POST /predict` — orientation probabilities as JSON
//! - `POST /correct` — the uploaded photo rotated back to upright, as JPEG
//! - `GET /health` — liveness probe
//!
//! The binary wraps the same app in a CLI together with offline
//! single-image `predict` and `correct` subcommands.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::{AppState, Classifier};
