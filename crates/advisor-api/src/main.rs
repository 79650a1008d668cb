//! Binary entrypoint for the door/window advisor service.
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Both can be overridden from the environment
    let config = std::env::var("ADVISOR_CONFIG").unwrap_or_else(|_| "advisor.yaml".to_string());
    let addr = std::env::var("ADVISOR_ADDR").unwrap_or_else(|_| "0.0.0.0:8787".to_string());

    advisor_api::run(&config, &addr).await
}
