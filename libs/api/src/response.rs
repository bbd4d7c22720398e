use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use query::FetchState;
use serde::Serialize;
use tracing::warn;

pub enum ApiError {
    ClientError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::ClientError(message) => {
                warn!(task = "respond", err = message);
                (StatusCode::BAD_REQUEST, message).into_response()
            }
        }
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

/// A screen's fetch state as an HTTP response. A failed query answers
/// 502 with the raw backend message.
pub struct Screen<T>(pub FetchState<T>);

impl<T: Serialize> IntoResponse for Screen<T> {
    fn into_response(self) -> Response {
        let status_code = match &self.0 {
            FetchState::Error { .. } => StatusCode::BAD_GATEWAY,
            FetchState::Loading | FetchState::Success { .. } => StatusCode::OK,
        };
        (status_code, Json(self.0)).into_response()
    }
}

impl<T> From<FetchState<T>> for Screen<T> {
    fn from(state: FetchState<T>) -> Self {
        Screen(state)
    }
}
