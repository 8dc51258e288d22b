use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;

mod api;
mod config;
mod errors;
mod models;
mod services;

use services::{
    data_api_client::AlchemyClient,
    portfolio_service::{PortfolioService, PortfolioSessions},
    validation_service::ValidationService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = config::Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let source = AlchemyClient::new(&config.base_url, &config.api_key);
    let portfolio_service = web::Data::new(PortfolioService::new(
        Arc::new(source),
        ValidationService::new(),
    ));
    let sessions = web::Data::new(PortfolioSessions::new());

    log::info!("Starting portfolio backend on port {}", config.port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:8080")
            .allowed_origin("http://localhost:5173")
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec![
                header::CONTENT_TYPE,
                header::ACCEPT,
            ]);
        App::new()
            .app_data(portfolio_service.clone())
            .app_data(sessions.clone())
            .configure(api::config)
            .wrap(cors)
    })
    .bind(("127.0.0.1", config.port))?
    .run()
    .await
}
