use super::{canon_email, new_id, now_ts, StoreResult};
use crate::error::StoreError;
use common::model::founder::{Founder, FounderInputs};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::{Map, Value};

/// Creates the founder or refreshes its display name. An absent display name
/// keeps the stored one.
pub fn upsert_founder(
    conn: &Connection,
    email: &str,
    display_name: Option<&str>,
) -> StoreResult<Founder> {
    let email = canon_email(email);
    let display_name = display_name.map(str::trim).filter(|n| !n.is_empty());
    conn.execute(
        "INSERT INTO founders (id, email, display_name, created_at) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(email) DO UPDATE SET
             display_name = COALESCE(excluded.display_name, founders.display_name)",
        params![new_id(), email, display_name, now_ts()],
    )?;

    conn.query_row(
        "SELECT id, email, display_name, created_at FROM founders WHERE email = ?1",
        params![email],
        |row| {
            Ok(Founder {
                id: row.get(0)?,
                email: row.get(1)?,
                display_name: row.get(2)?,
                created_at: row.get(3)?,
            })
        },
    )
    .optional()?
    .ok_or(StoreError::NotFound("founder"))
}

/// Stores the founder's latest wizard inputs (one row per founder email) and
/// returns the row id. List fields are kept as JSON text.
pub fn upsert_founder_inputs(conn: &Connection, inputs: &FounderInputs) -> StoreResult<String> {
    let founder_email = canon_email(&inputs.email);
    conn.execute(
        "INSERT INTO founder_inputs (
             id, founder_email, founder_display_name, problem_domain, target_audience,
             problems, value_prop, is_paid_service, pricing_model, pricing_model_considered,
             price_points, pricing_questions, segment_mode, target_segments, target_action,
             follow_up_action, target_actions, founder_feedback, updated_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19)
         ON CONFLICT(founder_email) DO UPDATE SET
             founder_display_name = excluded.founder_display_name,
             problem_domain = excluded.problem_domain,
             target_audience = excluded.target_audience,
             problems = excluded.problems,
             value_prop = excluded.value_prop,
             is_paid_service = excluded.is_paid_service,
             pricing_model = excluded.pricing_model,
             pricing_model_considered = excluded.pricing_model_considered,
             price_points = excluded.price_points,
             pricing_questions = excluded.pricing_questions,
             segment_mode = excluded.segment_mode,
             target_segments = excluded.target_segments,
             target_action = excluded.target_action,
             follow_up_action = excluded.follow_up_action,
             target_actions = excluded.target_actions,
             founder_feedback = excluded.founder_feedback,
             updated_at = excluded.updated_at",
        params![
            new_id(),
            founder_email,
            inputs.founder_display_name,
            inputs.problem_domain,
            inputs.target_audience,
            serde_json::to_string(&inputs.problems)?,
            inputs.value_prop,
            inputs.is_paid_service,
            inputs.pricing_model,
            serde_json::to_string(&inputs.pricing_model_considered)?,
            serde_json::to_string(&inputs.price_points)?,
            serde_json::to_string(&inputs.pricing_questions)?,
            inputs.segment_mode,
            serde_json::to_string(&inputs.target_segments)?,
            inputs.target_action,
            inputs.follow_up_action,
            serde_json::to_string(&inputs.target_actions)?,
            inputs.founder_feedback,
            now_ts(),
        ],
    )?;

    conn.query_row(
        "SELECT id FROM founder_inputs WHERE founder_email = ?1",
        params![founder_email],
        |row| row.get(0),
    )
    .optional()?
    .ok_or(StoreError::NotFound("founder inputs"))
}

const TEXT_COLUMNS: &[&str] = &[
    "id",
    "founder_email",
    "founder_display_name",
    "problem_domain",
    "target_audience",
    "problems",
    "value_prop",
    "pricing_model",
    "pricing_model_considered",
    "price_points",
    "pricing_questions",
    "segment_mode",
    "target_segments",
    "target_action",
    "follow_up_action",
    "target_actions",
    "founder_feedback",
];

/// The stored founder-input row as a JSON object, the shape the questionnaire
/// normalizer consumes. List columns are returned as their raw JSON text.
pub fn founder_inputs_record(conn: &Connection, id: &str) -> StoreResult<Value> {
    let sql = format!(
        "SELECT {}, is_paid_service FROM founder_inputs WHERE id = ?1",
        TEXT_COLUMNS.join(", ")
    );
    conn.query_row(&sql, params![id], |row| {
        let mut record = Map::new();
        for (idx, name) in TEXT_COLUMNS.iter().enumerate() {
            let value: Option<String> = row.get(idx)?;
            record.insert(
                name.to_string(),
                value.map(Value::String).unwrap_or(Value::Null),
            );
        }
        let paid: i64 = row.get(TEXT_COLUMNS.len())?;
        record.insert("is_paid_service".to_string(), Value::Bool(paid != 0));
        Ok(Value::Object(record))
    })
    .optional()?
    .ok_or(StoreError::NotFound("founder inputs"))
}
