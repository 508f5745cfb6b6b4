use crate::error::{ServiceError, ServiceResult};
use crate::services::is_valid_email;
use crate::state::AppState;
use crate::store::founders::upsert_founder;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::founder::{Founder, FounderRegister};
use log::info;

pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<FounderRegister>,
) -> impl Responder {
    match register_founder(&state, &payload) {
        Ok(founder) => HttpResponse::Ok().json(serde_json::json!({ "ok": true, "founder": founder })),
        Err(e) => e.error_response(),
    }
}

pub fn register_founder(state: &AppState, req: &FounderRegister) -> ServiceResult<Founder> {
    if !is_valid_email(&req.email) {
        return Err(ServiceError::BadRequest("valid email is required".to_string()));
    }
    let conn = state.db.connect()?;
    let founder = upsert_founder(&conn, &req.email, req.display_name.as_deref())?;
    info!("Registered founder {}", founder.email);
    Ok(founder)
}
