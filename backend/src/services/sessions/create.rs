//! # Session Creation
//!
//! 1.  The founder's email is validated and canonicalized; the founder row is upserted.
//! 2.  The wizard inputs are upserted into `founder_inputs` (one row per founder).
//! 3.  The stored row is read back and normalized into a `FounderProductDescription`,
//!     so the questionnaire reflects exactly what was persisted.
//! 4.  The questionnaire is compiled and written with the new session. It is never
//!     recompiled afterwards.

use crate::error::{ServiceError, ServiceResult, StoreError};
use crate::questionnaire::{self, FounderProductDescription};
use crate::services::is_valid_email;
use crate::state::AppState;
use crate::store::canon_email;
use crate::store::founders::{founder_inputs_record, upsert_founder, upsert_founder_inputs};
use crate::store::sessions::insert_session;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::founder::FounderInputs;
use common::model::session::CreateSessionResponse;
use log::{debug, info};

pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<FounderInputs>,
) -> impl Responder {
    match create_session(&state, payload.into_inner()) {
        Ok(created) => HttpResponse::Ok().json(created),
        Err(e) => e.error_response(),
    }
}

pub fn create_session(state: &AppState, inputs: FounderInputs) -> ServiceResult<CreateSessionResponse> {
    if !is_valid_email(&inputs.email) {
        return Err(ServiceError::BadRequest("valid email is required".to_string()));
    }
    let founder_email = canon_email(&inputs.email);
    let inputs = FounderInputs {
        email: founder_email.clone(),
        ..inputs
    };

    let mut conn = state.db.connect()?;
    let tx = conn.transaction().map_err(StoreError::from)?;

    upsert_founder(&tx, &founder_email, inputs.founder_display_name.as_deref())?;
    let founder_inputs_id = upsert_founder_inputs(&tx, &inputs)?;
    let record = founder_inputs_record(&tx, &founder_inputs_id)?;

    let steps = questionnaire::compile(&FounderProductDescription::from_record(&record));
    debug!("Compiled {} steps for {}", steps.len(), founder_email);

    let session = insert_session(&tx, &founder_email, &founder_inputs_id, &steps)?;
    tx.commit().map_err(StoreError::from)?;

    info!("Created session {} for {}", session.id, founder_email);
    Ok(CreateSessionResponse {
        share_link: state.config.share_link(&session.id),
        session_id: session.id,
    })
}
