//! Advisor API /v1: REST endpoints
//!
//! Stateless evaluation, sensor state intake, options updates and the
//! published advisor states, on top of a running [`AdvisorRuntime`].
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;

use advisor_config::AdvisorFile;
use advisor_runtime::{AdvisorRuntime, InMemoryPublisher, RuntimeHandle};
use anyhow::Context;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::path::Path;

pub use error::ApiError;
pub use metrics::{Metrics, MetricsPublisher};

/// Shared state of every handler
#[derive(Clone)]
pub struct AppState {
    pub runtime: RuntimeHandle,
    pub states: InMemoryPublisher,
    pub metrics: Metrics,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/v1/evaluate", post(handlers::evaluate))
        .route("/v1/states", post(handlers::state_changed))
        .route("/v1/entries/{entry_id}/options", put(handlers::update_options))
        .route("/v1/entities", get(handlers::list_entities))
        .route("/v1/entities/{entity_id}", get(handlers::get_entity))
        .route("/v1/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(middleware::trace())
        .layer(middleware::cors())
        .with_state(state)
}

/// Build the runtime for a config file and the state the router shares with it
pub fn build(file: &AdvisorFile) -> anyhow::Result<(AdvisorRuntime<MetricsPublisher<InMemoryPublisher>>, AppState)> {
    let metrics = Metrics::new().context("failed to register metrics")?;
    let states = InMemoryPublisher::new();
    let publisher = MetricsPublisher::new(states.clone(), metrics.clone());

    let (runtime, handle) =
        AdvisorRuntime::from_file(file, publisher).context("invalid advisor configuration")?;

    Ok((
        runtime,
        AppState {
            runtime: handle,
            states,
            metrics,
        },
    ))
}

/// Load the config, start the runtime and serve until ctrl-c
pub async fn run(config_path: impl AsRef<Path>, addr: &str) -> anyhow::Result<()> {
    let config_path = config_path.as_ref();
    let file = AdvisorFile::load(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    tracing::info!(
        path = %config_path.display(),
        entries = file.entries.len(),
        language = %file.language,
        "loaded advisor configuration"
    );

    let (runtime, state) = build(&file)?;
    let handle = state.runtime.clone();
    let runtime_task = tokio::spawn(runtime.run());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Advisor API listening on {}", addr);

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %err, "failed to listen for ctrl-c");
            }
        })
        .await
        .context("server error")?;

    if handle.shutdown().await.is_ok() {
        runtime_task.await.context("advisor runtime panicked")?;
    }
    Ok(())
}
