//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure reaches the client as `{"message": "..."}`. Persistence
//! failures are logged in full and replaced by a generic message.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Shown to clients in place of any storage failure.
pub const INTERNAL_MESSAGE: &str =
  "Something went wrong on our end. Please try again later.";

/// Coarse classification used for the status-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  Authorization,
  Validation,
  Persistence,
}

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  Authorization(String),

  #[error("{0}")]
  Validation(String),

  #[error("store error: {0}")]
  Persistence(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn persistence(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    ApiError::Persistence(Box::new(e))
  }

  pub fn kind(&self) -> ErrorKind {
    match self {
      ApiError::Authorization(_) => ErrorKind::Authorization,
      ApiError::Validation(_) => ErrorKind::Validation,
      ApiError::Persistence(_) => ErrorKind::Persistence,
    }
  }

  pub fn status(&self) -> StatusCode {
    match self.kind() {
      ErrorKind::Authorization => StatusCode::UNAUTHORIZED,
      ErrorKind::Validation => StatusCode::BAD_REQUEST,
      ErrorKind::Persistence => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl From<rsvp_core::Error> for ApiError {
  fn from(e: rsvp_core::Error) -> Self {
    match e {
      rsvp_core::Error::Authorization(m) => ApiError::Authorization(m),
      rsvp_core::Error::Validation(v) => ApiError::Validation(v.message),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let message = match self {
      ApiError::Authorization(m) | ApiError::Validation(m) => m,
      ApiError::Persistence(e) => {
        tracing::error!(error = %e, "store failure");
        INTERNAL_MESSAGE.to_owned()
      }
    };
    (status, Json(json!({ "message": message }))).into_response()
  }
}
