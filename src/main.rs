mod web;

use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use aras_web::content::SiteContent;
use web::middleware::SecurityHeaders;
use web::{AppState, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    web::logging::init_logging();

    let config = ServerConfig::from_env()
        .expect("Invalid server configuration (check BIND_ADDR and SITE_ROOT)");

    let content = match &config.content_path {
        Some(path) => SiteContent::from_path(path),
        None => SiteContent::embedded(),
    }
    .expect("Failed to load site content");

    tracing::info!(
        addr = %config.bind_addr,
        root = %config.site_root.display(),
        "serving site"
    );

    let state = AppState::new(content, config.site_root.clone());
    let data = Data::new(state.clone());

    HttpServer::new(move || {
        App::new()
            .wrap(SecurityHeaders)
            .wrap(Logger::default())
            .app_data(data.clone())
            .configure(web::routes::configure)
            .service(web::routes::spa_files(&state))
    })
    .bind(config.bind_addr)?
    .run()
    .await
}
