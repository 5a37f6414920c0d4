//! RSVP and attendee records.
//!
//! An [`Rsvp`] is one party's response; it owns one or more [`Attendee`]s.
//! Both are written exactly once, together, and never updated.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted RSVP row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
  pub id:               i64,
  /// Free text; empty when the party left no note.
  pub additional_notes: String,
  /// Store-assigned at insert time.
  pub created_at:       DateTime<Utc>,
}

/// A persisted attendee row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
  pub id:           i64,
  pub rsvp_id:      i64,
  pub full_name:    String,
  pub is_attending: bool,
  pub created_at:   DateTime<Utc>,
}

/// Input to [`crate::store::RsvpStore::insert_rsvp`].
///
/// Produced by [`crate::submission::RsvpSubmission::validate`]; `id` and
/// `created_at` are always assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRsvp {
  pub additional_notes: String,
  pub attendees:        Vec<NewAttendee>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAttendee {
  pub full_name:    String,
  pub is_attending: bool,
}

impl NewAttendee {
  pub fn new(full_name: impl Into<String>, is_attending: bool) -> Self {
    Self {
      full_name: full_name.into(),
      is_attending,
    }
  }
}

/// One line of the guest list: an attendee joined with its RSVP's notes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestListEntry {
  pub rsvp_id:          i64,
  pub additional_notes: String,
  pub full_name:        String,
  pub is_attending:     bool,
}
