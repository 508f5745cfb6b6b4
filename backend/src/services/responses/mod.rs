//! # Response Service Module
//!
//! *   **`POST /api/responses`** (`submit::process`): stores a tester's answers for a
//!     session together with their SHA-256 and Keccak-256 digests.

mod submit;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/responses";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(submit::process))
}
