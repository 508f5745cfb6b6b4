use super::sessions::FounderProfile;
use super::{canon_email, new_id, now_ts, StoreResult};
use common::model::response::{Answers, ResponseRecord};
use rusqlite::{params, Connection, Row};

/// A submission about to be stored.
#[derive(Debug, Clone)]
pub struct NewResponse {
    pub session_id: String,
    pub tester_id: Option<String>,
    pub tester_email: Option<String>,
    pub founder_email: String,
    pub answers: Answers,
    pub answer_hash: String,
}

/// How a tester is identified in dashboard queries.
#[derive(Debug, Clone, PartialEq)]
pub enum TesterFilter {
    Id(String),
    /// Matches responses submitted with this email or by the tester
    /// registered under it.
    Email(String),
}

/// Response count and first/last submission time for a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseStats {
    pub count: usize,
    pub first_ts: Option<String>,
    pub last_ts: Option<String>,
}

const RESPONSE_COLUMNS: &str = "r.id, r.session_id, r.tester_id, r.tester_email, r.founder_email, \
     r.answers, r.answer_hash, r.payment_amount, r.paid, r.created_at";

struct ResponseRow {
    id: String,
    session_id: String,
    tester_id: Option<String>,
    tester_email: Option<String>,
    founder_email: String,
    answers: String,
    answer_hash: String,
    payment_amount: f64,
    paid: bool,
    created_at: String,
}

fn response_row(row: &Row<'_>) -> rusqlite::Result<ResponseRow> {
    Ok(ResponseRow {
        id: row.get(0)?,
        session_id: row.get(1)?,
        tester_id: row.get(2)?,
        tester_email: row.get(3)?,
        founder_email: row.get(4)?,
        answers: row.get(5)?,
        answer_hash: row.get(6)?,
        payment_amount: row.get(7)?,
        paid: row.get(8)?,
        created_at: row.get(9)?,
    })
}

impl ResponseRow {
    fn into_record(self) -> StoreResult<ResponseRecord> {
        Ok(ResponseRecord {
            answers: serde_json::from_str(&self.answers)?,
            id: self.id,
            session_id: self.session_id,
            tester_id: self.tester_id,
            tester_email: self.tester_email,
            founder_email: self.founder_email,
            answer_hash: self.answer_hash,
            payment_amount: self.payment_amount,
            paid: self.paid,
            created_at: self.created_at,
        })
    }
}

/// Appends a submission. Earlier submissions for the same session and tester
/// are kept; readers take the latest one.
pub fn insert_response(conn: &Connection, new: NewResponse) -> StoreResult<ResponseRecord> {
    let record = ResponseRecord {
        id: new_id(),
        session_id: new.session_id,
        tester_id: new.tester_id,
        tester_email: new.tester_email.map(|e| canon_email(&e)),
        founder_email: new.founder_email,
        answers: new.answers,
        answer_hash: new.answer_hash,
        payment_amount: 0.0,
        paid: false,
        created_at: now_ts(),
    };
    conn.execute(
        "INSERT INTO responses (
             id, session_id, tester_id, tester_email, founder_email, answers,
             answer_hash, payment_amount, paid, created_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            record.id,
            record.session_id,
            record.tester_id,
            record.tester_email,
            record.founder_email,
            serde_json::to_string(&record.answers)?,
            record.answer_hash,
            record.payment_amount,
            record.paid,
            record.created_at,
        ],
    )?;
    Ok(record)
}

pub fn session_stats(conn: &Connection, session_id: &str) -> StoreResult<ResponseStats> {
    let (count, first_ts, last_ts): (i64, Option<String>, Option<String>) = conn.query_row(
        "SELECT COUNT(*), MIN(created_at), MAX(created_at) FROM responses WHERE session_id = ?1",
        params![session_id],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;
    Ok(ResponseStats {
        count: count as usize,
        first_ts,
        last_ts,
    })
}

/// Responses to a session, newest first, optionally limited to one tester.
pub fn session_responses(
    conn: &Connection,
    session_id: &str,
    tester_id: Option<&str>,
) -> StoreResult<Vec<ResponseRecord>> {
    let sql = format!(
        "SELECT {} FROM responses r
         WHERE r.session_id = ?1 AND (?2 IS NULL OR r.tester_id = ?2)
         ORDER BY r.created_at DESC, r.rowid DESC",
        RESPONSE_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![session_id, tester_id], response_row)?
        .collect::<Result<Vec<_>, _>>()?;
    rows.into_iter().map(ResponseRow::into_record).collect()
}

fn tester_clause(filter: &TesterFilter) -> (&'static str, String) {
    match filter {
        TesterFilter::Id(id) => ("r.tester_id = ?1", id.clone()),
        TesterFilter::Email(email) => (
            "(r.tester_email = ?1 OR r.tester_id IN (SELECT id FROM testers WHERE email = ?1))",
            canon_email(email),
        ),
    }
}

/// All responses by one tester, newest first.
pub fn tester_responses(
    conn: &Connection,
    filter: &TesterFilter,
) -> StoreResult<Vec<ResponseRecord>> {
    let (clause, value) = tester_clause(filter);
    let sql = format!(
        "SELECT {} FROM responses r WHERE {} ORDER BY r.created_at DESC, r.rowid DESC",
        RESPONSE_COLUMNS, clause
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![value], response_row)?
        .collect::<Result<Vec<_>, _>>()?;
    rows.into_iter().map(ResponseRow::into_record).collect()
}

/// A tester's responses joined with session status and founder details,
/// newest first.
pub fn tester_responses_with_sessions(
    conn: &Connection,
    filter: &TesterFilter,
) -> StoreResult<Vec<(ResponseRecord, String, FounderProfile)>> {
    let (clause, value) = tester_clause(filter);
    let sql = format!(
        "SELECT {}, s.status, f.founder_display_name, f.founder_email, f.problem_domain, f.value_prop
         FROM responses r
         JOIN sessions s ON s.id = r.session_id
         JOIN founder_inputs f ON f.id = s.founder_inputs_id
         WHERE {}
         ORDER BY r.created_at DESC, r.rowid DESC",
        RESPONSE_COLUMNS, clause
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![value], |row| {
            Ok((
                response_row(row)?,
                row.get::<_, String>(10)?,
                FounderProfile {
                    display_name: row.get(11)?,
                    email: row.get(12)?,
                    problem_domain: row.get(13)?,
                    value_prop: row.get(14)?,
                },
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;
    rows.into_iter()
        .map(|(row, status, profile)| Ok((row.into_record()?, status, profile)))
        .collect()
}
