use actix_cors::Cors;
use actix_web::{middleware, App, HttpServer};
use capmatch::config::{LoggingSettings, Settings};
use capmatch::core::Matcher;
use capmatch::routes::{self, AppState};
use capmatch::services::InvestorRegistry;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn startup_error<E: std::fmt::Display>(what: &str, e: E) -> std::io::Error {
    error!("{}: {}", what, e);
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", what, e))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Capmatch matching service...");

    let weights = settings
        .scoring
        .weights
        .to_weights()
        .map_err(|e| startup_error("Invalid scoring weights", e))?;

    let registry = match &settings.matching.investors_path {
        Some(path) => {
            info!("Loading investors from {}", path);
            InvestorRegistry::load(path).await
        }
        None => {
            info!("Using built-in investor list");
            InvestorRegistry::builtin()
        }
    }
    .map_err(|e| startup_error("Failed to load investors", e))?;

    info!("Investor registry loaded ({} investors)", registry.len());

    let matcher = Matcher::new(
        weights,
        settings.matching.top_n,
        settings.matching.good_match_threshold,
    );

    info!(
        "Matcher initialized with weights: {:?} (top {}, good match > {})",
        weights, settings.matching.top_n, settings.matching.good_match_threshold
    );

    let app_state = AppState {
        registry: Arc::new(registry),
        matcher,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .configure(routes::configure_app(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
