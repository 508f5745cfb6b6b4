use crate::error::ServiceResult;
use crate::state::AppState;
use crate::store::responses::session_stats;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::session::SessionSummary;

pub(crate) async fn process(
    state: web::Data<AppState>,
    session_id: web::Path<String>,
) -> impl Responder {
    match session_summary(&state, &session_id) {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => e.error_response(),
    }
}

pub fn session_summary(state: &AppState, session_id: &str) -> ServiceResult<SessionSummary> {
    let conn = state.db.connect()?;
    let stats = session_stats(&conn, session_id)?;
    Ok(SessionSummary {
        session_id: session_id.to_string(),
        responses_count: stats.count,
        first_ts: stats.first_ts,
        last_ts: stats.last_ts,
    })
}
