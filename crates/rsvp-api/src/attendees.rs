//! Handler for `GET /attendees`, the plain-text guest list.
//!
//! One block per RSVP, separated by a blank line:
//!
//! ```text
//! Note: Super excited!
//! Foo McBarson - Yes
//!
//! Note: None
//! Baz Batter - No
//! Blah Blahgerty - No
//! ```

use axum::{
  extract::State,
  http::header,
  response::IntoResponse,
};
use rsvp_core::{rsvp::GuestListEntry, store::RsvpStore};

use crate::{AppState, error::ApiError};

/// `GET /attendees`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RsvpStore + 'static,
{
  let entries = state
    .store
    .guest_list()
    .await
    .map_err(ApiError::persistence)?;

  Ok((
    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
    format_guest_list(&entries),
  ))
}

/// Render `entries` as text. Entries must already be ordered so that rows of
/// the same RSVP are adjacent; a new block starts whenever `rsvp_id` changes.
pub fn format_guest_list(entries: &[GuestListEntry]) -> String {
  let mut lines: Vec<String> = Vec::new();
  let mut current: Option<i64> = None;

  for entry in entries {
    if current != Some(entry.rsvp_id) {
      if current.is_some() {
        lines.push(String::new());
      }
      let note = match entry.additional_notes.trim() {
        "" => "None",
        _ => entry.additional_notes.as_str(),
      };
      lines.push(format!("Note: {note}"));
      current = Some(entry.rsvp_id);
    }

    let answer = if entry.is_attending { "Yes" } else { "No" };
    lines.push(format!("{} - {answer}", entry.full_name));
  }

  lines.join("\n")
}
