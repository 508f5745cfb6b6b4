use crate::error::{ServiceError, ServiceResult};
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::{FileResponsePayload, FileResponseStored};

pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<FileResponsePayload>,
) -> impl Responder {
    match store_file_response(&state, &payload) {
        Ok(stored) => HttpResponse::Ok().json(stored),
        Err(e) => e.error_response(),
    }
}

pub fn store_file_response(
    state: &AppState,
    payload: &FileResponsePayload,
) -> ServiceResult<FileResponseStored> {
    if payload.answers.is_empty() {
        return Err(ServiceError::BadRequest(
            "answers must be a non-empty object".to_string(),
        ));
    }
    let stored = state.files.store_response(payload)?;
    log::info!("Stored file-mode response {}", stored.file);
    Ok(stored)
}
