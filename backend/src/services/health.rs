use actix_web::web::{get, resource};
use actix_web::{HttpResponse, Resource, Responder};
use chrono::Utc;
use serde_json::json;

pub fn configure_routes() -> Vec<Resource> {
    vec![
        resource("/health").route(get().to(health)),
        resource("/").route(get().to(root)),
    ]
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "verity-backend",
        "time": Utc::now().to_rfc3339(),
    }))
}

async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Verity backend is running.",
    }))
}
