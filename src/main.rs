use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use recruit_match::config::{LoggingSettings, Settings};
use recruit_match::core::MatchEngine;
use recruit_match::routes::{self, matches::AppState};
use recruit_match::services::{InMemoryJobStore, JobStore};
use std::sync::Arc;
use tracing::{info, error, warn};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber
///
/// `RUST_LOG` wins over the configured level; `LOG_FORMAT` wins over the
/// configured format.
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let loaded = match std::env::var("CONFIG_FILE") {
        Ok(path) => Settings::load_from(path),
        Err(_) => Settings::load(),
    };

    let settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_logging(&settings.logging);

    info!("Starting recruit-match scoring service...");

    let jobs: Arc<dyn JobStore> = match InMemoryJobStore::load(&settings.jobs.seed_file).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Failed to load job seed {}: {}", settings.jobs.seed_file, e);
            warn!("Starting with an empty job store; requests must supply their own jobs");
            Arc::new(InMemoryJobStore::default())
        }
    };

    let engine = MatchEngine::new();

    info!("Match engine initialized (current year: {})", engine.current_year());

    let app_state = AppState {
        jobs,
        engine,
        matching: settings.matching.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
