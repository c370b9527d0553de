mod assessment;
mod career;
mod config;
mod db;
mod errors;
mod models;
mod recommendation;
mod report;
mod routes;
mod scoring;
mod state;
mod store;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::db::create_pool;
use crate::report::archive::S3ReportArchive;
use crate::routes::build_router;
use crate::scoring::{CareerScorer, HeuristicScorer};
use crate::state::AppState;
use crate::store::postgres::PgAssessmentStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Counsel API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (runs migrations, seeds reference data)
    let db = create_pool(&config.database_url).await?;
    let store = Arc::new(PgAssessmentStore::new(db));

    // Initialize S3 / MinIO
    let s3 = build_s3_client(&config).await;
    let archive = Arc::new(S3ReportArchive::new(s3, config.s3_bucket.clone()));
    info!("S3 client initialized (bucket: {})", config.s3_bucket);

    // Initialize scorer once; shared by every request
    let scorer = Arc::new(HeuristicScorer::new(config.scoring_weights));
    let weights = scorer.weights();
    info!(
        "Career scorer initialized ({}: skills={}, interests={}, personality={})",
        scorer.backend(),
        weights.skills,
        weights.interests,
        weights.personality
    );

    // Build app state
    let state = AppState {
        store,
        scorer,
        archive,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS once the web client origin is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        None,
        None,
        "counsel-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.s3_endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
