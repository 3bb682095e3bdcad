// cardiorisk/src/server/handlers.rs
//! Handlers for `/calculate-risk`.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::debug;

use cardiorisk_core::{reference_data, PatientRecord, ReferenceData, ScoreResult};

use crate::server::error::ApiError;
use crate::server::{AppState, ENDPOINT_SEGMENT};

/// `GET`: the network layout and metadata.
pub async fn reference() -> Json<&'static ReferenceData> {
    Json(reference_data())
}

/// `POST`: scores the JSON patient record in the body.
///
/// The body is parsed by hand rather than through the `Json` extractor so that
/// a missing or unusual `Content-Type` does not change the outcome.
pub async fn calculate(State(state): State<AppState>, body: Bytes) -> Result<Json<ScoreResult>, ApiError> {
    let record = PatientRecord::from_json(&body)?;
    debug!("Scoring record with engine '{}': {:?}", state.engine.name(), record);
    let result = state.engine.score(&record)?;
    Ok(Json(result))
}

/// `OPTIONS` without CORS request headers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Serves the endpoint under any prefix, e.g. `/functions/v1/calculate-risk`.
///
/// Only the last path segment counts, so a trailing slash is a 404.
pub async fn fallback(state: State<AppState>, method: Method, uri: Uri, body: Bytes) -> Response {
    if uri.path().rsplit('/').next() != Some(ENDPOINT_SEGMENT) {
        return ApiError::NotFound.into_response();
    }
    match method {
        Method::GET => reference().await.into_response(),
        Method::POST => calculate(state, body).await.into_response(),
        Method::OPTIONS => preflight().await.into_response(),
        _ => ApiError::NotFound.into_response(),
    }
}
