//! In-process API tests driving the router with a stub scorer.

use std::io::Cursor;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use ndarray::{ArrayD, IxDyn};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use upright_core::{
    InferenceBackend, InferenceError, InputTensor, OrientationClassifier, OutputTensor,
    ServiceConfig,
};
use upright_server::{AppState, create_router};

const BOUNDARY: &str = "upright-test-boundary";

/// Backend returning a fixed probability vector regardless of input.
struct StubBackend {
    scores: [f32; 4],
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl StubBackend {
    fn new(scores: [f32; 4]) -> Self {
        Self {
            scores,
            input_names: vec!["input".to_string()],
            output_names: vec!["probs".to_string()],
        }
    }
}

impl InferenceBackend for StubBackend {
    fn run(
        &self,
        _inputs: &[(&str, InputTensor)],
    ) -> Result<Vec<(String, OutputTensor)>, InferenceError> {
        let arr = ArrayD::from_shape_vec(IxDyn(&[1, 4]), self.scores.to_vec()).expect("stub shape");
        Ok(vec![("probs".to_string(), OutputTensor::Float32(arr))])
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

fn test_app(scores: [f32; 4]) -> Router {
    let backend: Box<dyn InferenceBackend> = Box::new(StubBackend::new(scores));
    let state = AppState::new(
        OrientationClassifier::new(backend),
        ServiceConfig::default(),
    );
    create_router(state)
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        width,
        height,
        image::Rgb([40, 90, 160]),
    ));
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}

fn multipart_body(field: &str, payload: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
             filename=\"photo.png\"\r\nContent-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(payload);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn multipart_request(uri: &str, field: &str, payload: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(field, payload)))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn predict_reports_labels_in_class_order() {
    let app = test_app([0.1, 0.2, 0.3, 0.4]);
    let response = app
        .oneshot(multipart_request("/predict", "image", &png_bytes(8, 8)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["final_label"], 90);

    let predictions = json["predictions"].as_array().unwrap();
    assert_eq!(predictions.len(), 4);
    let labels: Vec<u64> = predictions
        .iter()
        .map(|p| p["label"].as_u64().unwrap())
        .collect();
    assert_eq!(labels, vec![0, 180, 270, 90]);
}

#[tokio::test]
async fn predict_final_label_follows_argmax() {
    let app = test_app([0.7, 0.1, 0.1, 0.1]);
    let response = app
        .oneshot(multipart_request("/predict", "image", &png_bytes(8, 8)))
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["final_label"], 0);
}

#[tokio::test]
async fn predict_is_idempotent_over_identical_bytes() {
    let app = test_app([0.15, 0.25, 0.35, 0.25]);
    let payload = png_bytes(10, 6);

    let first = app
        .clone()
        .oneshot(multipart_request("/predict", "image", &payload))
        .await
        .unwrap();
    let second = app
        .oneshot(multipart_request("/predict", "image", &payload))
        .await
        .unwrap();

    assert_eq!(body_bytes(first).await, body_bytes(second).await);
}

#[tokio::test]
async fn predict_fails_soft_without_an_image_field() {
    let app = test_app([0.25; 4]);
    let response = app
        .oneshot(multipart_request("/predict", "file", &png_bytes(8, 8)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_bytes(response).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["success"], false);
    // Failure body carries nothing but the flag
    assert_eq!(json.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn predict_fails_soft_on_undecodable_and_empty_payloads() {
    for payload in [&b"definitely not an image"[..], &b""[..]] {
        let app = test_app([0.25; 4]);
        let response = app
            .oneshot(multipart_request("/predict", "image", payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("predictions").is_none());
    }
}

#[tokio::test]
async fn correct_returns_a_rotated_jpeg_attachment() {
    // One-hot at index 3 -> detected 90° clockwise -> corrected image is the
    // counter-clockwise quarter turn, swapping the canvas dimensions
    let app = test_app([0.0, 0.0, 0.0, 1.0]);
    let response = app
        .oneshot(multipart_request("/correct", "image", &png_bytes(3, 5)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/jpeg"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"corrected.jpg\""
    );

    let jpeg = body_bytes(response).await;
    assert_eq!(
        image::guess_format(&jpeg).unwrap(),
        image::ImageFormat::Jpeg
    );
    let corrected = image::load_from_memory(&jpeg).unwrap();
    assert_eq!((corrected.width(), corrected.height()), (5, 3));
}

#[tokio::test]
async fn correct_keeps_dimensions_for_upright_input() {
    let app = test_app([1.0, 0.0, 0.0, 0.0]);
    let response = app
        .oneshot(multipart_request("/correct", "image", &png_bytes(7, 4)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let corrected = image::load_from_memory(&body_bytes(response).await).unwrap();
    assert_eq!((corrected.width(), corrected.height()), (7, 4));
}

#[tokio::test]
async fn correct_rejects_invalid_input_with_400() {
    let app = test_app([0.25; 4]);
    let response = app
        .clone()
        .oneshot(multipart_request("/correct", "image", b"garbage"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(json["error"].is_string());

    // Missing field is a 400 as well
    let response = app
        .oneshot(multipart_request("/correct", "file", &png_bytes(4, 4)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app([0.25; 4]);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["status"], "ok");
}
