use crate::error::ServiceResult;
use crate::questionnaire::progress::answers_preview;
use crate::state::AppState;
use crate::store::responses::session_responses;
use crate::store::testers::{find_tester_id, get_tester};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::response::{ResponseListItem, SessionResponses, Tester};
use common::requests::SessionResponsesQuery;
use std::collections::HashMap;

const PREVIEW_ANSWERS: usize = 3;
const PREVIEW_CHARS: usize = 40;

pub(crate) async fn process(
    state: web::Data<AppState>,
    session_id: web::Path<String>,
    query: web::Query<SessionResponsesQuery>,
) -> impl Responder {
    match list_session_responses(&state, &session_id, &query) {
        Ok(responses) => HttpResponse::Ok().json(responses),
        Err(e) => e.error_response(),
    }
}

/// Submissions for a session, newest first. An unknown `tester_email`
/// yields an empty list rather than an error.
pub fn list_session_responses(
    state: &AppState,
    session_id: &str,
    query: &SessionResponsesQuery,
) -> ServiceResult<SessionResponses> {
    let conn = state.db.connect()?;
    let empty = SessionResponses {
        session_id: session_id.to_string(),
        responses: Vec::new(),
    };

    let tester_id = match query.tester_email.as_deref().map(str::trim) {
        Some(email) if !email.is_empty() => match find_tester_id(&conn, email)? {
            Some(id) => Some(id),
            None => return Ok(empty),
        },
        _ => None,
    };

    let records = session_responses(&conn, session_id, tester_id.as_deref())?;
    let mut testers: HashMap<String, Option<Tester>> = HashMap::new();
    let mut responses = Vec::with_capacity(records.len());
    for record in records {
        let tester = match record.tester_id.as_deref() {
            Some(id) => {
                if !testers.contains_key(id) {
                    testers.insert(id.to_string(), get_tester(&conn, id)?);
                }
                testers.get(id).cloned().flatten()
            }
            None => None,
        };
        responses.push(ResponseListItem {
            id: record.id,
            created_at: record.created_at,
            answer_hash: record.answer_hash,
            tester_email: tester.as_ref().map(|t| t.email.clone()),
            tester_handle: tester.and_then(|t| t.telegram_handle),
            preview: answers_preview(&record.answers, PREVIEW_ANSWERS, PREVIEW_CHARS),
            answers: query.include_answers.then_some(record.answers),
        });
    }

    Ok(SessionResponses {
        session_id: session_id.to_string(),
        responses,
    })
}
