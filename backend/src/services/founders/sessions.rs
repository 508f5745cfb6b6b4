use crate::error::{ServiceError, ServiceResult};
use crate::state::AppState;
use crate::store::responses::session_stats;
use crate::store::sessions::founder_sessions;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::session::{FounderSessionEntry, FounderSessions};
use common::requests::FounderSessionsQuery;

pub(crate) async fn process(
    state: web::Data<AppState>,
    query: web::Query<FounderSessionsQuery>,
) -> impl Responder {
    match list_founder_sessions(&state, &query.founder_email) {
        Ok(sessions) => HttpResponse::Ok().json(sessions),
        Err(e) => e.error_response(),
    }
}

/// The founder's sessions with response counts, newest first.
pub fn list_founder_sessions(state: &AppState, founder_email: &str) -> ServiceResult<FounderSessions> {
    if founder_email.trim().is_empty() {
        return Err(ServiceError::BadRequest("founder_email is required".to_string()));
    }
    let conn = state.db.connect()?;
    let sessions = founder_sessions(&conn, founder_email)?
        .into_iter()
        .map(|session| -> ServiceResult<FounderSessionEntry> {
            let stats = session_stats(&conn, &session.id)?;
            Ok(FounderSessionEntry {
                id: session.id,
                created_at: session.created_at,
                status: session.status,
                responses_count: stats.count,
                last_response_at: stats.last_ts,
            })
        })
        .collect::<ServiceResult<Vec<_>>>()?;
    Ok(FounderSessions { sessions })
}
