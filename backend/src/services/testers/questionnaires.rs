use super::tester_filter;
use crate::error::ServiceResult;
use crate::questionnaire::progress::completion_percentage;
use crate::state::AppState;
use crate::store::responses::tester_responses;
use crate::store::sessions::active_sessions_with_founders;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::response::{TesterQuestionnaire, TesterQuestionnaires};
use common::requests::TesterQuery;

pub(crate) async fn process(
    state: web::Data<AppState>,
    query: web::Query<TesterQuery>,
) -> impl Responder {
    match list_questionnaires(&state, &query) {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => e.error_response(),
    }
}

/// Active sessions, newest first. Completion is derived on every call from the
/// tester's latest response to each session and the session's stored steps.
pub fn list_questionnaires(
    state: &AppState,
    query: &TesterQuery,
) -> ServiceResult<TesterQuestionnaires> {
    let conn = state.db.connect()?;
    let responses = match tester_filter(query) {
        Some(filter) => tester_responses(&conn, &filter)?,
        None => Vec::new(),
    };

    let questionnaires = active_sessions_with_founders(&conn)?
        .into_iter()
        .map(|(session, founder)| {
            // responses are newest first
            let latest = responses.iter().find(|r| r.session_id == session.id);
            TesterQuestionnaire {
                company_name: founder.company_name(),
                problem_domain: founder.domain_or_general(),
                value_prop: founder.value_prop.clone().unwrap_or_default(),
                is_completed: latest.is_some(),
                completion_percentage: latest
                    .map(|r| completion_percentage(&session.questions, &r.answers))
                    .unwrap_or(0),
                total_questions: session.questions.len(),
                payment_amount: latest.map(|r| r.payment_amount).unwrap_or(0.0),
                paid: latest.is_some_and(|r| r.paid),
                last_response_at: latest.map(|r| r.created_at.clone()),
                share_link: state.config.respond_link(&session.id),
                session_id: session.id,
                founder_email: session.founder_email,
                created_at: session.created_at,
            }
        })
        .collect();

    Ok(TesterQuestionnaires { questionnaires })
}
