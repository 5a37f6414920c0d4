//! Handler for `POST /rsvp`.
//!
//! Body: [`RsvpSubmission`]. The submission is validated in full before the
//! store is touched; a rejected submission never issues a query.
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | created | 201 | the stored [`Rsvp`](rsvp_core::rsvp::Rsvp) |
//! | bad invite code | 401 | `{"message": ...}` |
//! | invalid body | 400 | `{"message": ...}` |
//! | store failure | 500 | `{"message": ...}` |

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use rsvp_core::{store::RsvpStore, submission::RsvpSubmission};

use crate::{AppState, error::ApiError};

/// `POST /rsvp`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  body: Result<Json<RsvpSubmission>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RsvpStore + 'static,
{
  let Json(submission) = body.map_err(|e| ApiError::Validation(e.body_text()))?;

  let new_rsvp = submission.validate(&state.invite_code).inspect_err(|e| {
    if let rsvp_core::Error::Validation(v) = e {
      tracing::debug!(reason = %v.message, extra = ?v.extra, "rejected rsvp");
    } else {
      tracing::debug!("rejected rsvp: invite code mismatch");
    }
  })?;

  let attendee_count = new_rsvp.attendees.len();
  let rsvp = state
    .store
    .insert_rsvp(new_rsvp)
    .await
    .map_err(ApiError::persistence)?;

  tracing::info!(rsvp_id = rsvp.id, attendee_count, "rsvp recorded");
  Ok((StatusCode::CREATED, Json(rsvp)))
}
