//! HTTP API for the RSVP service.
//!
//! Exposes an axum [`Router`] backed by any [`RsvpStore`]. CORS, TLS and
//! transport concerns are the caller's responsibility.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/rsvp` | See [`rsvp::create`] |
//! | `GET`  | `/attendees` | Plain-text guest list |
//! | `GET`  | `/_health` | Liveness |
//! | `GET`  | `/_db_health` | Store connectivity; 502 on failure |

pub mod attendees;
pub mod error;
pub mod health;
pub mod rsvp;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use rsvp_core::store::RsvpStore;

pub use error::{ApiError, ErrorKind};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct AppState<S> {
  pub store:       Arc<S>,
  /// The shared secret printed on the paper invitations.
  pub invite_code: Arc<str>,
}

impl<S> AppState<S> {
  pub fn new(store: S, invite_code: impl Into<Arc<str>>) -> Self {
    Self {
      store:       Arc::new(store),
      invite_code: invite_code.into(),
    }
  }
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store:       Arc::clone(&self.store),
      invite_code: Arc::clone(&self.invite_code),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the API router for `state`.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: RsvpStore + 'static,
{
  Router::new()
    .route("/rsvp", post(rsvp::create::<S>))
    .route("/attendees", get(attendees::list::<S>))
    .route("/_health", get(health::liveness))
    .route("/_db_health", get(health::database::<S>))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
