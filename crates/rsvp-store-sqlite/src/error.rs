//! Error type for `rsvp-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// Refused before any SQL runs; an RSVP always owns at least one attendee.
  #[error("an RSVP must have at least one attendee")]
  NoAttendees,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
