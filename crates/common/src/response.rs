//! Success envelope: `{"success": true, ...payload}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Wraps a payload struct so its fields are flattened next to `"success": true`.
///
/// The payload must serialize as a JSON object (a struct or a map).
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    success: bool,
    #[serde(flatten)]
    payload: T,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> Success<T> {
    pub fn new(payload: T) -> Self {
        Self {
            success: true,
            payload,
            status: StatusCode::OK,
        }
    }

    /// Same envelope with `201 Created`
    pub fn created(payload: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            ..Self::new(payload)
        }
    }
}

/// Empty payload for endpoints that only acknowledge
#[derive(Debug, Default, Serialize)]
pub struct Ack {}

impl Success<Ack> {
    pub fn ack() -> Self {
        Self::new(Ack {})
    }
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}
