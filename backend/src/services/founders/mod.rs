//! # Founder Service Module
//!
//! Routes under `/api/founders`:
//!
//! *   **`POST /register`** (`register::process`): upserts a founder by canonical email.
//! *   **`GET /sessions?founder_email=`** (`sessions::process`): the founder's sessions,
//!     newest first, each with its response count and last response time.

mod register;
mod sessions;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/founders";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/register", post().to(register::process))
        .route("/sessions", get().to(sessions::process))
}
