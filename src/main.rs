use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use gbhm_matcher::config::{LoggingSettings, Settings};
use gbhm_matcher::core::Matcher;
use gbhm_matcher::error::handle_json_payload_error;
use gbhm_matcher::routes::{self, matches::AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// RUST_LOG takes precedence over the configured level.
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.compact().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_tracing(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_tracing(&settings.logging);

    info!("{}", "=".repeat(60));
    info!("GBHM MATCHING SERVICE STARTING");
    info!("{}", "=".repeat(60));

    let matcher = Matcher::new(settings.scoring_weights());

    info!("Matcher initialized with weights: {:?}", matcher.weights());

    let app_state = AppState {
        matcher,
        default_limit: settings.matching.default_limit,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{} ({} workers)", host, port, workers);

    let result = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await;

    info!("GBHM Matching Service shutting down");

    result
}
