//! # Answer Submission
//!
//! 1.  The answer map must be non-empty and the session must exist.
//! 2.  Answer keys are checked against the session's stored step keys. In strict
//!     mode (the default) unknown keys reject the submission; otherwise they are
//!     stored and logged.
//! 3.  The tester is upserted by email when one is given, or a new anonymous tester
//!     is created.
//! 4.  The answers are serialized canonically (sorted keys) and hashed; the
//!     Keccak-256 digest is stored as the response's `answer_hash`.
//!
//! Submissions are append-only: a tester answering in several passes produces
//! several rows, and readers use the latest one.

use crate::error::{ServiceError, ServiceResult, StoreError};
use crate::hashing::{canonical_json, digests};
use crate::questionnaire::progress::unknown_answer_keys;
use crate::services::is_valid_email;
use crate::state::AppState;
use crate::store::canon_email;
use crate::store::responses::{insert_response, NewResponse};
use crate::store::sessions::get_session;
use crate::store::testers::{insert_anonymous_tester, upsert_tester};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::response::SubmitAnswersResponse;
use common::requests::SubmitAnswersRequest;
use log::{info, warn};

pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<SubmitAnswersRequest>,
) -> impl Responder {
    match submit_answers(&state, payload.into_inner()) {
        Ok(stored) => HttpResponse::Ok().json(stored),
        Err(e) => e.error_response(),
    }
}

pub fn submit_answers(
    state: &AppState,
    req: SubmitAnswersRequest,
) -> ServiceResult<SubmitAnswersResponse> {
    if req.answers.is_empty() {
        return Err(ServiceError::BadRequest(
            "answers must be a non-empty object".to_string(),
        ));
    }

    let mut conn = state.db.connect()?;
    let session = get_session(&conn, &req.session_id)?;

    let unknown = unknown_answer_keys(&session.questions, &req.answers);
    if !unknown.is_empty() {
        if state.config.strict_answer_keys {
            warn!(
                "Rejected answers for session {} with unknown keys: {:?}",
                session.id, unknown
            );
            return Err(ServiceError::BadRequest(format!(
                "unknown answer keys: {}",
                unknown.join(", ")
            )));
        }
        warn!(
            "Storing answers for session {} with unknown keys: {:?}",
            session.id, unknown
        );
    }

    let tester_email = req
        .tester_email
        .as_deref()
        .filter(|e| is_valid_email(e))
        .map(canon_email);
    let handle = req.tester_handle.as_deref();

    let payload = canonical_json(&req.answers).map_err(StoreError::from)?;
    let hashes = digests(payload.as_bytes());

    let tx = conn.transaction().map_err(StoreError::from)?;
    let tester_id = match tester_email.as_deref() {
        Some(email) => upsert_tester(&tx, email, handle)?,
        None => insert_anonymous_tester(&tx, handle)?,
    };
    let record = insert_response(
        &tx,
        NewResponse {
            session_id: session.id,
            tester_id: Some(tester_id),
            tester_email,
            founder_email: session.founder_email,
            answers: req.answers,
            answer_hash: hashes.keccak.clone(),
        },
    )?;
    tx.commit().map_err(StoreError::from)?;

    info!(
        "Stored response {} for session {}",
        record.id, record.session_id
    );
    Ok(SubmitAnswersResponse { ok: true, hashes })
}
