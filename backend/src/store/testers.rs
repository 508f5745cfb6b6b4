use super::{canon_email, new_id, now_ts, StoreResult};
use crate::error::StoreError;
use common::model::response::Tester;
use rusqlite::{params, Connection, OptionalExtension};

/// Creates the tester or refreshes its handle, returning the tester id.
pub fn upsert_tester(conn: &Connection, email: &str, handle: Option<&str>) -> StoreResult<String> {
    let email = canon_email(email);
    conn.execute(
        "INSERT INTO testers (id, email, telegram_handle, created_at) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(email) DO UPDATE SET
             telegram_handle = COALESCE(excluded.telegram_handle, testers.telegram_handle)",
        params![new_id(), email, handle, now_ts()],
    )?;
    find_tester_id(conn, &email)?.ok_or(StoreError::NotFound("tester"))
}

/// Inserts a tester with a generated placeholder email for submissions that
/// came without one.
pub fn insert_anonymous_tester(conn: &Connection, handle: Option<&str>) -> StoreResult<String> {
    let id = new_id();
    let email = format!("anon_{}@tg.local", uuid::Uuid::new_v4().simple());
    conn.execute(
        "INSERT INTO testers (id, email, telegram_handle, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![id, email, handle, now_ts()],
    )?;
    Ok(id)
}

pub fn find_tester_id(conn: &Connection, email: &str) -> StoreResult<Option<String>> {
    Ok(conn
        .query_row(
            "SELECT id FROM testers WHERE email = ?1",
            params![canon_email(email)],
            |row| row.get(0),
        )
        .optional()?)
}

pub fn get_tester(conn: &Connection, id: &str) -> StoreResult<Option<Tester>> {
    Ok(conn
        .query_row(
            "SELECT id, email, telegram_handle FROM testers WHERE id = ?1",
            params![id],
            |row| {
                Ok(Tester {
                    id: row.get(0)?,
                    email: row.get(1)?,
                    telegram_handle: row.get(2)?,
                })
            },
        )
        .optional()?)
}
