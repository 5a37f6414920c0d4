//! SQL schema for the RSVP SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision for future migrations.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS rsvp (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    additional_notes TEXT NOT NULL DEFAULT '',
    created_at       TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE TABLE IF NOT EXISTS attendee (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name    TEXT    NOT NULL CHECK (length(trim(full_name)) > 0),
    is_attending INTEGER NOT NULL CHECK (is_attending IN (0, 1)),
    rsvp_id      INTEGER NOT NULL REFERENCES rsvp(id),
    created_at   TEXT    NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS attendee_rsvp_idx ON attendee(rsvp_id);

PRAGMA user_version = 1;
";
