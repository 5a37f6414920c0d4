//! Decoding helpers between SQLite column text and domain types.
//!
//! Timestamps are written by SQLite itself as RFC 3339 UTC strings with
//! millisecond precision (`2024-06-01T17:30:00.123Z`).

use chrono::{DateTime, Utc};
use rsvp_core::rsvp::{Attendee, Rsvp};

use crate::{Error, Result};

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Raw rows ────────────────────────────────────────────────────────────────

/// An `rsvp` row exactly as read from SQLite.
pub struct RawRsvp {
  pub id:               i64,
  pub additional_notes: String,
  pub created_at:       String,
}

impl RawRsvp {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:               row.get(0)?,
      additional_notes: row.get(1)?,
      created_at:       row.get(2)?,
    })
  }

  pub fn into_rsvp(self) -> Result<Rsvp> {
    Ok(Rsvp {
      id:               self.id,
      additional_notes: self.additional_notes,
      created_at:       decode_dt(&self.created_at)?,
    })
  }
}

/// An `attendee` row exactly as read from SQLite.
pub struct RawAttendee {
  pub id:           i64,
  pub rsvp_id:      i64,
  pub full_name:    String,
  pub is_attending: bool,
  pub created_at:   String,
}

impl RawAttendee {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:           row.get(0)?,
      rsvp_id:      row.get(1)?,
      full_name:    row.get(2)?,
      is_attending: row.get(3)?,
      created_at:   row.get(4)?,
    })
  }

  pub fn into_attendee(self) -> Result<Attendee> {
    Ok(Attendee {
      id:           self.id,
      rsvp_id:      self.rsvp_id,
      full_name:    self.full_name,
      is_attending: self.is_attending,
      created_at:   decode_dt(&self.created_at)?,
    })
  }
}
