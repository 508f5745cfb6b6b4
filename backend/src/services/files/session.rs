use crate::error::{ServiceError, ServiceResult};
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::{FileSessionCreate, FileSessionCreated};
use log::info;

pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<FileSessionCreate>,
) -> impl Responder {
    match create_file_session(&state, &payload) {
        Ok(created) => HttpResponse::Ok().json(created),
        Err(e) => e.error_response(),
    }
}

pub fn create_file_session(
    state: &AppState,
    req: &FileSessionCreate,
) -> ServiceResult<FileSessionCreated> {
    if req.founder_inputs.problems.is_empty() {
        return Err(ServiceError::BadRequest(
            "problems must contain at least one entry".to_string(),
        ));
    }
    let session_id = state.files.create_session(&req.founder_inputs)?;
    info!("Created file-mode session {}", session_id);
    Ok(FileSessionCreated { session_id })
}
