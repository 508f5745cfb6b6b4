//! # Relational Store
//!
//! SQLite persistence for founders, founder inputs, testers, sessions and
//! responses. A `Database` only knows the file path; every operation opens its
//! own connection, so the value can be cloned freely into request handlers.
//!
//! ## Sub-modules:
//! - `founders`: founder identity and founder-input upserts keyed by email.
//! - `sessions`: session inserts and lookups (steps stored as JSON text).
//! - `testers`: tester identity upserts and lookups.
//! - `responses`: append-only answer submissions.
//!
//! Timestamps are RFC 3339 UTC strings with microsecond precision, so ordering
//! by the text column orders by time. Ties fall back to `rowid`.

pub mod founders;
pub mod responses;
pub mod sessions;
pub mod testers;

use crate::error::StoreError;
use chrono::{SecondsFormat, Utc};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub type StoreResult<T> = Result<T, StoreError>;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS founders (
    id           TEXT PRIMARY KEY,
    email        TEXT NOT NULL UNIQUE,
    display_name TEXT,
    created_at   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS founder_inputs (
    id                       TEXT PRIMARY KEY,
    founder_email            TEXT NOT NULL UNIQUE,
    founder_display_name     TEXT,
    problem_domain           TEXT,
    target_audience          TEXT,
    problems                 TEXT NOT NULL DEFAULT '[]',
    value_prop               TEXT,
    is_paid_service          INTEGER NOT NULL DEFAULT 0,
    pricing_model            TEXT,
    pricing_model_considered TEXT NOT NULL DEFAULT '[]',
    price_points             TEXT NOT NULL DEFAULT '[]',
    pricing_questions        TEXT NOT NULL DEFAULT '[]',
    segment_mode             TEXT,
    target_segments          TEXT NOT NULL DEFAULT '[]',
    target_action            TEXT,
    follow_up_action         TEXT,
    target_actions           TEXT NOT NULL DEFAULT '[]',
    founder_feedback         TEXT,
    updated_at               TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS testers (
    id              TEXT PRIMARY KEY,
    email           TEXT NOT NULL UNIQUE,
    telegram_handle TEXT,
    created_at      TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS sessions (
    id                TEXT PRIMARY KEY,
    founder_email     TEXT NOT NULL,
    founder_inputs_id TEXT NOT NULL REFERENCES founder_inputs(id),
    questions         TEXT NOT NULL,
    status            TEXT NOT NULL DEFAULT 'active',
    created_at        TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_sessions_founder ON sessions(founder_email);

CREATE TABLE IF NOT EXISTS responses (
    id             TEXT PRIMARY KEY,
    session_id     TEXT NOT NULL REFERENCES sessions(id),
    tester_id      TEXT REFERENCES testers(id),
    tester_email   TEXT,
    founder_email  TEXT NOT NULL,
    answers        TEXT NOT NULL,
    answer_hash    TEXT NOT NULL,
    payment_amount REAL NOT NULL DEFAULT 0,
    paid           INTEGER NOT NULL DEFAULT 0,
    created_at     TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_responses_session ON responses(session_id);
CREATE INDEX IF NOT EXISTS idx_responses_tester ON responses(tester_id);
";

/// Handle to the SQLite database file.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a connection with foreign keys enforced.
    pub fn connect(&self) -> StoreResult<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    /// Creates missing tables and indexes.
    pub fn init(&self) -> StoreResult<()> {
        let conn = self.connect()?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }
}

pub(crate) fn now_ts() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Emails are stored trimmed and lowercased.
pub fn canon_email(email: &str) -> String {
    email.trim().to_lowercase()
}
