//! Request handlers for the orientation API.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::debug;

use upright_core::{Orientation, Prediction, correct_orientation, decode_image, encode_jpeg};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Multipart form field carrying the image payload.
const IMAGE_FIELD: &str = "image";

/// One label/probability pair in a prediction response.
#[derive(Debug, Serialize)]
pub struct PredictionEntry {
    pub label: Orientation,
    pub probability: f32,
}

/// Response body for `POST /predict`.
///
/// On failure only `{"success": false}` is sent; the optional fields are
/// omitted entirely.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predictions: Option<Vec<PredictionEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_label: Option<Orientation>,
}

impl PredictResponse {
    fn failure() -> Self {
        Self {
            success: false,
            predictions: None,
            final_label: None,
        }
    }

    fn from_prediction(prediction: Prediction) -> Self {
        let predictions = prediction
            .scores
            .iter()
            .map(|&(label, probability)| PredictionEntry { label, probability })
            .collect();

        Self {
            success: true,
            predictions: Some(predictions),
            final_label: Some(prediction.label),
        }
    }
}

/// Classify the orientation of an uploaded photo.
///
/// Missing or undecodable input degrades to `{"success": false}` rather
/// than an HTTP error; only inference-side failures surface as 5xx.
pub async fn predict(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<PredictResponse>> {
    let Some(bytes) = read_image_field(multipart).await else {
        debug!("Predict request without a usable image field");
        return Ok(Json(PredictResponse::failure()));
    };

    let image = match decode_image(&bytes) {
        Ok(image) => image,
        Err(err) => {
            debug!("Predict request with undecodable image: {}", err);
            return Ok(Json(PredictResponse::failure()));
        }
    };

    let classifier = state.classifier.clone();
    let prediction = tokio::task::spawn_blocking(move || classifier.classify(&image))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(PredictResponse::from_prediction(prediction)))
}

/// Rotate an uploaded photo back to upright and return it as a JPEG
/// attachment.
///
/// The corrected image is held in memory for the duration of the request;
/// nothing is written to disk. Invalid input is a 400.
pub async fn correct(State(state): State<AppState>, multipart: Multipart) -> ApiResult<Response> {
    let bytes = read_image_field(multipart)
        .await
        .ok_or_else(|| ApiError::BadRequest("missing image field".to_string()))?;

    let image = decode_image(&bytes)?;

    let classifier = state.classifier.clone();
    let quality = state.config.jpeg_quality;
    let jpeg = tokio::task::spawn_blocking(move || {
        let prediction = classifier.classify(&image)?;
        let corrected = correct_orientation(&image, prediction.label);
        encode_jpeg(&corrected, quality)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    let headers = [
        (header::CONTENT_TYPE, "image/jpeg"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"corrected.jpg\"",
        ),
    ];

    Ok((headers, jpeg).into_response())
}

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Pull the image field out of a multipart form.
///
/// Returns `None` for a missing field, an empty payload, or a malformed
/// form — the callers decide whether that is fail-soft or a 400.
async fn read_image_field(mut multipart: Multipart) -> Option<Bytes> {
    while let Some(field) = multipart.next_field().await.ok().flatten() {
        if field.name() == Some(IMAGE_FIELD) {
            return field.bytes().await.ok().filter(|bytes| !bytes.is_empty());
        }
    }

    None
}
