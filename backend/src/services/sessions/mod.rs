//! # Session Service Module
//!
//! Routes under `/api/sessions`:
//!
//! *   **`POST /`** (`create::process`): stores the founder's inputs, compiles the
//!     questionnaire and persists it as a new session. Returns the session id and
//!     the link testers open.
//! *   **`GET /{session_id}/questions`** (`questions::process`): the stored step list,
//!     exactly as compiled at creation time.
//! *   **`GET /{session_id}/summary`** (`summary::process`): response count with first
//!     and last submission times.
//! *   **`GET /{session_id}/responses`** (`list_responses::process`): submissions newest
//!     first with tester identity and a short answer preview; full answers with
//!     `include_answers=true`, one tester only with `tester_email=`.

mod create;
mod list_responses;
mod questions;
mod summary;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/sessions";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("/{session_id}/questions", get().to(questions::process))
        .route("/{session_id}/summary", get().to(summary::process))
        .route("/{session_id}/responses", get().to(list_responses::process))
}
