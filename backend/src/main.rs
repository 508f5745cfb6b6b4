mod config;
mod error;
mod file_store;
mod hashing;
mod questionnaire;
mod services;
mod state;
mod store;

use crate::config::Config;
use crate::state::AppState;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let state = AppState::new(config);
    state.db.init().map_err(io::Error::other)?;
    state.files.init().map_err(io::Error::other)?;

    let host = state.config.host.clone();
    let port = state.config.port;
    let allowed_origins = state.config.allowed_origins.clone();
    info!(
        "Database at {:?}, file store at {:?}",
        state.db.path(),
        state.config.data_dir
    );
    info!("CORS origins: {}", allowed_origins.join(", "));
    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(services::cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .app_data(web::JsonConfig::default().limit(1024 * 1024)) // 1 MB
            .app_data(web::Data::new(state.clone()))
            .configure(services::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
