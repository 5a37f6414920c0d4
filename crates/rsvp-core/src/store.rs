//! The `RsvpStore` trait.
//!
//! Implemented by storage backends (e.g. `rsvp-store-sqlite`). The HTTP layer
//! depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::rsvp::{GuestListEntry, NewRsvp, Rsvp};

/// Abstraction over an RSVP store backend.
///
/// Records are append-only: nothing here updates or deletes a row.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait RsvpStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Persist an RSVP and all of its attendees as one atomic unit.
  ///
  /// Either every row is written or none is. Attendee rows reference the
  /// RSVP id generated by this same write. `id` and `created_at` are set by
  /// the store.
  fn insert_rsvp(
    &self,
    rsvp: NewRsvp,
  ) -> impl Future<Output = Result<Rsvp, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Every attendee joined with its RSVP, ordered by RSVP creation time,
  /// then RSVP id, then attendee name.
  fn guest_list(
    &self,
  ) -> impl Future<Output = Result<Vec<GuestListEntry>, Self::Error>> + Send + '_;

  /// Cheap round-trip to confirm the store is reachable.
  fn health(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
