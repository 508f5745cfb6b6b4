//! # File-Mode Service Module
//!
//! Routes under `/api/files`, backed by the flat-file JSON store instead of the
//! database:
//!
//! *   **`POST /sessions`** (`session::process`): archives founder inputs under a new id.
//! *   **`POST /responses`** (`response::process`): writes one response file named after
//!     the payload's SHA-256.
//! *   **`GET /sessions/{session_id}/summary`** (`summary::process`): response count and
//!     first/last receive time, read from file names.

mod response;
mod session;
mod summary;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/files";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/sessions", post().to(session::process))
        .route("/responses", post().to(response::process))
        .route("/sessions/{session_id}/summary", get().to(summary::process))
}
