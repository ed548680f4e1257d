use actix_web::{middleware::Logger, App, HttpServer};
use saberroar_portal::config::EnvConfig;
use saberroar_portal::db::db_service::DbService;
use saberroar_portal::routes::configure_routes;
use saberroar_portal::state::AppState;
use saberroar_portal::utils::auth_provider::{SharedAuthProvider, StackAuthProvider};
use std::io;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env().map_err(io::Error::other)?;
    let addr = format!("0.0.0.0:{}", config.port);

    let db = Arc::new(
        DbService::new(&config.db_url)
            .await
            .map_err(io::Error::other)?
    );
    let auth: SharedAuthProvider = Arc::new(
        StackAuthProvider::new(config.stack.clone()).map_err(io::Error::other)?
    );
    let state = AppState::new(&config, db, auth);

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| state.configure(cfg))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
