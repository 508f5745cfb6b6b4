use super::tester_filter;
use crate::error::ServiceResult;
use crate::state::AppState;
use crate::store::responses::tester_responses_with_sessions;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::response::{TesterResponse, TesterResponses};
use common::requests::TesterQuery;

pub(crate) async fn process(
    state: web::Data<AppState>,
    query: web::Query<TesterQuery>,
) -> impl Responder {
    match list_tester_responses(&state, &query) {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => e.error_response(),
    }
}

pub fn list_tester_responses(state: &AppState, query: &TesterQuery) -> ServiceResult<TesterResponses> {
    let Some(filter) = tester_filter(query) else {
        return Ok(TesterResponses { responses: Vec::new() });
    };
    let conn = state.db.connect()?;
    let responses = tester_responses_with_sessions(&conn, &filter)?
        .into_iter()
        .map(|(record, session_status, founder)| TesterResponse {
            id: record.id,
            session_id: record.session_id,
            created_at: record.created_at,
            answer_hash: record.answer_hash,
            answers: record.answers,
            founder_email: record.founder_email,
            company_name: founder.company_name(),
            problem_domain: founder.domain_or_general(),
            session_status,
            payment_amount: record.payment_amount,
            paid: record.paid,
        })
        .collect();
    Ok(TesterResponses { responses })
}
