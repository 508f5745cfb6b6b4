use crate::error::ServiceResult;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::session::SessionSummary;

pub(crate) async fn process(
    state: web::Data<AppState>,
    session_id: web::Path<String>,
) -> impl Responder {
    match file_session_summary(&state, &session_id) {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => e.error_response(),
    }
}

pub fn file_session_summary(state: &AppState, session_id: &str) -> ServiceResult<SessionSummary> {
    Ok(state.files.summary(session_id)?)
}
