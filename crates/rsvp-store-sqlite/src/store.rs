//! The SQLite implementation of [`RsvpStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use rsvp_core::{
  rsvp::{Attendee, GuestListEntry, NewRsvp, Rsvp},
  store::RsvpStore,
};

use crate::{
  Error, Result,
  encode::{RawAttendee, RawRsvp},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An RSVP store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, used by the tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Read-back ─────────────────────────────────────────────────────────────

  /// Retrieve an RSVP by id. Returns `None` if not found.
  pub async fn get_rsvp(&self, id: i64) -> Result<Option<Rsvp>> {
    let raw: Option<RawRsvp> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT id, additional_notes, created_at FROM rsvp WHERE id = ?1",
            rusqlite::params![id],
            RawRsvp::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawRsvp::into_rsvp).transpose()
  }

  /// All attendees of one RSVP, in insertion order.
  pub async fn attendees(&self, rsvp_id: i64) -> Result<Vec<Attendee>> {
    let raws: Vec<RawAttendee> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, rsvp_id, full_name, is_attending, created_at
           FROM attendee
           WHERE rsvp_id = ?1
           ORDER BY id",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![rsvp_id], RawAttendee::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawAttendee::into_attendee).collect()
  }
}

// ─── RsvpStore impl ──────────────────────────────────────────────────────────

impl RsvpStore for SqliteStore {
  type Error = Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn insert_rsvp(&self, rsvp: NewRsvp) -> Result<Rsvp> {
    if rsvp.attendees.is_empty() {
      return Err(Error::NoAttendees);
    }
    let attendee_count = rsvp.attendees.len();

    // One call, one transaction. Returning early on any error drops `tx`,
    // which rolls back both the rsvp row and any attendee rows already
    // inserted.
    let raw: RawRsvp = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let raw = tx.query_row(
          "INSERT INTO rsvp (additional_notes) VALUES (?1)
           RETURNING id, additional_notes, created_at",
          rusqlite::params![rsvp.additional_notes],
          RawRsvp::from_row,
        )?;

        {
          let mut stmt = tx.prepare(
            "INSERT INTO attendee (full_name, is_attending, rsvp_id)
             VALUES (?1, ?2, ?3)",
          )?;
          for attendee in &rsvp.attendees {
            stmt.execute(rusqlite::params![
              attendee.full_name,
              attendee.is_attending,
              raw.id,
            ])?;
          }
        }

        tx.commit()?;
        Ok(raw)
      })
      .await?;

    tracing::debug!(rsvp_id = raw.id, attendee_count, "inserted rsvp");
    raw.into_rsvp()
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn guest_list(&self) -> Result<Vec<GuestListEntry>> {
    let entries = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT a.rsvp_id, r.additional_notes, a.full_name, a.is_attending
           FROM attendee a
           JOIN rsvp r ON r.id = a.rsvp_id
           ORDER BY r.created_at, r.id, a.full_name",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(GuestListEntry {
              rsvp_id:          row.get(0)?,
              additional_notes: row.get(1)?,
              full_name:        row.get(2)?,
              is_attending:     row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(entries)
  }

  async fn health(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
