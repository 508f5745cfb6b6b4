//! # Hash Service
//!
//! *   **`POST /api/hash`**: SHA-256 and Keccak-256 of the trimmed `text` field, as
//!     lowercase hex. Empty text is rejected.

use crate::error::{ServiceError, ServiceResult};
use crate::hashing::digests;
use actix_web::web::{self, post, scope};
use actix_web::{HttpResponse, Responder, ResponseError, Scope};
use common::requests::{HashRequest, HashResponse};

const API_PATH: &str = "/api/hash";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(process))
}

async fn process(payload: web::Json<HashRequest>) -> impl Responder {
    match hash_text(&payload.text) {
        Ok(hashes) => HttpResponse::Ok().json(hashes),
        Err(e) => e.error_response(),
    }
}

pub fn hash_text(text: &str) -> ServiceResult<HashResponse> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ServiceError::BadRequest("text cannot be empty".to_string()));
    }
    let hashes = digests(text.as_bytes());
    Ok(HashResponse {
        sha256: hashes.sha256,
        keccak: hashes.keccak,
    })
}
