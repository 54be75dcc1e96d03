use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod domain;
mod error;
mod keywords;
mod models;
mod mood;
mod sentiment;
mod store;
mod tips;

use sentiment::{LexiconAnalyzer, SentimentAnalyzer};
use store::CompanionStore;

pub struct AppState {
    pub store: Arc<CompanionStore>,
    pub sentiment: Arc<dyn SentimentAnalyzer>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let bind_address = config::bind_address();
    let port = config::port();

    // Process-wide state: constructed once, shared by every worker.
    // All data is in memory only and lost on restart.
    let store = Arc::new(CompanionStore::new());
    let analyzer: Arc<dyn SentimentAnalyzer> = Arc::new(LexiconAnalyzer::new());

    log::info!("[Companion] Listening on {}:{}", bind_address, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                store: Arc::clone(&store),
                sentiment: Arc::clone(&analyzer),
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config)
            .configure(controllers::notes::config)
            .configure(controllers::moods::config)
            .configure(controllers::tasks::config)
            .configure(controllers::sessions::config)
            .configure(controllers::stats::config)
            .configure(controllers::tips::config)
            .configure(controllers::data::config)
    })
    .bind((bind_address, port))?
    .run()
    .await
}
