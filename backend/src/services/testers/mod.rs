//! # Tester Service Module
//!
//! Routes under `/api/testers`. Both take `tester_id=` or `tester_email=`.
//!
//! *   **`GET /questionnaires`** (`questionnaires::process`): every active session with
//!     the tester's completion percentage and payment state.
//! *   **`GET /responses`** (`responses::process`): the tester's submissions with
//!     session and founder details.

mod questionnaires;
mod responses;

use crate::store::responses::TesterFilter;
use actix_web::web::{get, scope};
use actix_web::Scope;
use common::requests::TesterQuery;

const API_PATH: &str = "/api/testers";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/questionnaires", get().to(questionnaires::process))
        .route("/responses", get().to(responses::process))
}

/// Tester id takes precedence over email. Blank values count as absent.
fn tester_filter(query: &TesterQuery) -> Option<TesterFilter> {
    let present = |v: &Option<String>| {
        v.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    present(&query.tester_id)
        .map(TesterFilter::Id)
        .or_else(|| present(&query.tester_email).map(TesterFilter::Email))
}
