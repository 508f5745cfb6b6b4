use super::{canon_email, new_id, now_ts, StoreResult};
use crate::error::StoreError;
use common::model::session::Session;
use common::model::step::InterviewStep;
use rusqlite::{params, Connection, OptionalExtension, Row};

pub const STATUS_ACTIVE: &str = "active";

/// Founder details shown next to a session on tester dashboards.
#[derive(Debug, Clone, Default)]
pub struct FounderProfile {
    pub display_name: Option<String>,
    pub email: String,
    pub problem_domain: Option<String>,
    pub value_prop: Option<String>,
}

impl FounderProfile {
    pub fn company_name(&self) -> String {
        self.display_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| Some(self.email.clone()).filter(|e| !e.is_empty()))
            .unwrap_or_else(|| "Unknown Company".to_string())
    }

    pub fn domain_or_general(&self) -> String {
        self.problem_domain
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| "General".to_string())
    }
}

/// Session columns before the step list is decoded.
struct SessionRow {
    id: String,
    founder_email: String,
    founder_inputs_id: String,
    questions: String,
    status: String,
    created_at: String,
}

const SESSION_COLUMNS: &str =
    "s.id, s.founder_email, s.founder_inputs_id, s.questions, s.status, s.created_at";

fn session_row(row: &Row<'_>) -> rusqlite::Result<SessionRow> {
    Ok(SessionRow {
        id: row.get(0)?,
        founder_email: row.get(1)?,
        founder_inputs_id: row.get(2)?,
        questions: row.get(3)?,
        status: row.get(4)?,
        created_at: row.get(5)?,
    })
}

impl SessionRow {
    fn into_session(self) -> StoreResult<Session> {
        Ok(Session {
            questions: serde_json::from_str(&self.questions)?,
            id: self.id,
            founder_email: self.founder_email,
            founder_inputs_id: self.founder_inputs_id,
            status: self.status,
            created_at: self.created_at,
        })
    }
}

/// Persists a compiled step list as a new active session.
pub fn insert_session(
    conn: &Connection,
    founder_email: &str,
    founder_inputs_id: &str,
    steps: &[InterviewStep],
) -> StoreResult<Session> {
    let session = Session {
        id: new_id(),
        founder_email: canon_email(founder_email),
        founder_inputs_id: founder_inputs_id.to_string(),
        questions: steps.to_vec(),
        status: STATUS_ACTIVE.to_string(),
        created_at: now_ts(),
    };
    conn.execute(
        "INSERT INTO sessions (id, founder_email, founder_inputs_id, questions, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            session.id,
            session.founder_email,
            session.founder_inputs_id,
            serde_json::to_string(&session.questions)?,
            session.status,
            session.created_at,
        ],
    )?;
    Ok(session)
}

pub fn get_session(conn: &Connection, session_id: &str) -> StoreResult<Session> {
    let sql = format!("SELECT {} FROM sessions s WHERE s.id = ?1", SESSION_COLUMNS);
    conn.query_row(&sql, params![session_id], session_row)
        .optional()?
        .ok_or(StoreError::NotFound("session"))?
        .into_session()
}

/// A founder's sessions, newest first.
pub fn founder_sessions(conn: &Connection, founder_email: &str) -> StoreResult<Vec<Session>> {
    let sql = format!(
        "SELECT {} FROM sessions s WHERE s.founder_email = ?1
         ORDER BY s.created_at DESC, s.rowid DESC",
        SESSION_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![canon_email(founder_email)], session_row)?
        .collect::<Result<Vec<_>, _>>()?;
    rows.into_iter().map(SessionRow::into_session).collect()
}

/// Active sessions with their founder details, newest first.
pub fn active_sessions_with_founders(
    conn: &Connection,
) -> StoreResult<Vec<(Session, FounderProfile)>> {
    let sql = format!(
        "SELECT {}, f.founder_display_name, f.founder_email, f.problem_domain, f.value_prop
         FROM sessions s
         JOIN founder_inputs f ON f.id = s.founder_inputs_id
         WHERE s.status = ?1
         ORDER BY s.created_at DESC, s.rowid DESC",
        SESSION_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![STATUS_ACTIVE], |row| {
            Ok((
                session_row(row)?,
                FounderProfile {
                    display_name: row.get(6)?,
                    email: row.get(7)?,
                    problem_domain: row.get(8)?,
                    value_prop: row.get(9)?,
                },
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;
    rows.into_iter()
        .map(|(row, profile)| Ok((row.into_session()?, profile)))
        .collect()
}
