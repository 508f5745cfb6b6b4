use crate::error::ServiceResult;
use crate::state::AppState;
use crate::store::sessions::get_session;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::session::SessionQuestions;

pub(crate) async fn process(
    state: web::Data<AppState>,
    session_id: web::Path<String>,
) -> impl Responder {
    match session_questions(&state, &session_id) {
        Ok(questions) => HttpResponse::Ok().json(questions),
        Err(e) => e.error_response(),
    }
}

/// The steps stored with the session.
pub fn session_questions(state: &AppState, session_id: &str) -> ServiceResult<SessionQuestions> {
    let conn = state.db.connect()?;
    let session = get_session(&conn, session_id)?;
    Ok(SessionQuestions {
        session_id: session.id,
        steps: session.questions,
    })
}
