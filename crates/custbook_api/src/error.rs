//! Error envelope for the HTTP surface.
//!
//! Every failure becomes HTTP 400 with `{"error": <message>}`. Storage
//! engine messages pass through unchanged.

use crate::response::ErrorResponse;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use custbook_core::RepoError;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};
use tokio::task::JoinError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    /// Validation or storage failure from core.
    Repo(RepoError),
    /// Request could not be decoded (body or path).
    BadRequest(String),
    /// Blocking storage task panicked or was cancelled.
    Task(String),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::BadRequest(message) => write!(f, "{message}"),
            Self::Task(message) => write!(f, "storage task failed: {message}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::BadRequest(_) | Self::Task(_) => None,
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::BadRequest(value.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(value: PathRejection) -> Self {
        Self::BadRequest(value.body_text())
    }
}

impl From<JoinError> for ApiError {
    fn from(value: JoinError) -> Self {
        Self::Task(value.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.to_string();
        warn!("event=request_failed module=api status=error error={error}");
        (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use custbook_core::{RepoError, ValidationError};

    #[test]
    fn every_variant_maps_to_bad_request() {
        let errors = [
            ApiError::Repo(RepoError::Validation(ValidationError::MissingField("city"))),
            ApiError::BadRequest("bad body".to_string()),
            ApiError::Task("cancelled".to_string()),
        ];
        for error in errors {
            assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn repo_message_is_passed_through() {
        let error = ApiError::from(RepoError::Validation(ValidationError::MissingField(
            "first_name",
        )));
        assert_eq!(error.to_string(), "first_name is required");
    }
}
