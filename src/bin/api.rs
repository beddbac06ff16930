use anyhow::Context;
use newsbrief::{
    api::{AppState, router},
    config::Config,
    telemetry,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(?config, "starting api server");

    let app = router(AppState::new(&config));
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr()))?;

    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("shutting down");
        })
        .await?;
    Ok(())
}
