use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use clap::Parser;
use coda_explorer::{
    config::{self, Settings},
    create_app,
    db::PgStatisticsStore,
    metrics::{self, Metrics},
    services::{IndexDataUpdater, IndexPageDataCache},
    version::VERSION,
    AppState,
};
use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(version = VERSION)]
struct Args {
    /// Configuration file name, without extension
    #[arg(long, default_value = "config")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting coda explorer {}", VERSION);

    // Load configuration
    let settings = Settings::new(&args.config).unwrap_or_else(|e| {
        error!("Failed to load configuration: {:?}", e);
        std::process::exit(1);
    });

    if let Err(e) = config::validate_database_settings(&settings)
        .and_then(|_| config::validate_index_settings(&settings))
    {
        error!("Invalid configuration: {:?}", e);
        std::process::exit(1);
    }

    // Set up metrics
    let metrics = Metrics::new(metrics::setup_metrics_recorder()?);

    info!("Prometheus metrics initialized");

    let connection_string = settings.database.connection_string();

    info!("Connection string (sanitized): {}", settings.database.sanitized_connection_string());

    // Initialize database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .min_connections(settings.database.min_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&connection_string)
        .await?;

    info!("Successfully connected to database");

    // Prime the snapshot before serving so the first page has blocks
    let cache = Arc::new(IndexPageDataCache::new());
    let updater = IndexDataUpdater::new(
        pool.clone(),
        Arc::clone(&cache),
        Duration::from_secs(settings.index.refresh_interval_seconds),
        settings.index.latest_blocks_limit,
    );

    if let Err(e) = updater.refresh().await {
        warn!("Initial index page data refresh failed, serving empty snapshot: {:?}", e);
    }

    let updater_handle = tokio::spawn(updater.run());

    let state = AppState::new(cache, Arc::new(PgStatisticsStore::new(pool.clone())));

    let cors = CorsLayer::new()
        .allow_origin(settings.application.cors_allow_origin.parse::<HeaderValue>().unwrap_or_else(|_| {
            HeaderValue::from_static("*")
        }))
        .allow_methods(
            settings.application.cors_allow_methods
                .split(',')
                .map(|s| s.trim().parse::<Method>().unwrap_or(Method::GET))
                .collect::<Vec<Method>>()
        )
        .allow_headers(
            settings.application.cors_allow_headers
                .split(',')
                .map(|s| match s.trim().to_lowercase().as_str() {
                    "content-type" => header::CONTENT_TYPE,
                    "authorization" => header::AUTHORIZATION,
                    _ => header::HeaderName::from_lowercase(s.trim().to_lowercase().as_bytes()).unwrap_or(header::CONTENT_TYPE),
                })
                .collect::<Vec<_>>()
        );

    let app = create_app(state)
        .route("/metrics", axum::routing::get(move || async move {
            (
                [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
                metrics.render(),
            )
        }))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    info!("Successfully initialized router");

    // Start the HTTP server
    let ip = settings.application.host.parse::<std::net::IpAddr>().unwrap_or_else(|_| {
        warn!("Invalid application.host {:?}, binding to 0.0.0.0", settings.application.host);
        std::net::IpAddr::from([0, 0, 0, 0])
    });
    let addr = SocketAddr::from((ip, settings.application.port));

    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    updater_handle.abort();
    pool.close().await;

    info!("coda explorer stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
