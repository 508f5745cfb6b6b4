//! HTTP services. Each sub-module owns one `/api/...` scope and exposes a
//! `configure_routes` function returning it.

pub mod files;
pub mod founders;
pub mod hash;
pub mod health;
pub mod responses;
pub mod sessions;
pub mod testers;

#[cfg(test)]
mod api_tests;

use actix_cors::Cors;
use actix_web::http::Uri;
use actix_web::web;
use log::warn;

/// Registers every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::configure_routes())
        .service(founders::configure_routes())
        .service(sessions::configure_routes())
        .service(responses::configure_routes())
        .service(testers::configure_routes())
        .service(hash::configure_routes())
        .service(files::configure_routes());
}

/// CORS policy for the browser clients. `*` admits any origin, echoed back
/// so credentialed requests still work. Unparseable origins are skipped.
pub fn cors(allowed_origins: &[String]) -> Cors {
    let base = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600);
    if allowed_origins.iter().any(|o| o == "*") {
        return base.allow_any_origin();
    }
    allowed_origins.iter().fold(base, |cors, origin| {
        if origin.parse::<Uri>().is_ok() {
            cors.allowed_origin(origin)
        } else {
            warn!("Ignoring invalid CORS origin {:?}", origin);
            cors
        }
    })
}

/// Minimal shape check used before touching the store.
pub(crate) fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    matches!(email.split_once('@'), Some((user, domain)) if !user.is_empty() && !domain.is_empty())
}
