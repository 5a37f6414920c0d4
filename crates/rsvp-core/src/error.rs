//! Error types for `rsvp-core`.
//!
//! Both variants are raised before any storage call is made. Persistence
//! failures belong to the storage backend's own error type.

use serde_json::Value;
use thiserror::Error;

/// A field-level rejection produced by a [`crate::validate::Check`] or by the
/// submission validator.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
  pub message: String,
  /// Optional structured context, e.g. which attendee failed.
  pub extra:   Option<Value>,
}

impl ValidationError {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      extra:   None,
    }
  }

  pub fn with_extra(mut self, extra: Value) -> Self {
    self.extra = Some(extra);
    self
  }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  /// The submission did not carry the configured invite code.
  #[error("{0}")]
  Authorization(String),

  #[error(transparent)]
  Validation(#[from] ValidationError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
