mod config;
mod db;
mod entity;
mod error;
mod migrate;
mod repository;
mod response;
mod routes;
#[cfg(test)]
mod test_support;

use actix_web::{middleware, web, App, HttpServer};
use config::AppConfig;
use db::connect_db;
use log::{error, info};
use repository::CommentRepository;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("server has started");

    let config = AppConfig::from_env();
    // keep serving without a database; comment endpoints then report it as unavailable
    let db = match connect_db(&config).await {
        Ok(db) => Some(db),
        Err(e) => {
            error!("error starting the database: {}", e);
            None
        }
    };
    let repo = web::Data::new(CommentRepository::new(db));
    let server_port = config.server_port;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(repo.clone())
            .wrap(middleware::Logger::default())
            .configure(routes::config)
    })
    .bind(("0.0.0.0", server_port))?;
    info!("server listening on http://0.0.0.0:{}", server_port);
    server.run().await
}
