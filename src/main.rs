use anyhow::Context;

use keycloak_authz_quickstart::{
    config::AppConfig,
    logging::init_tracing,
    server::{serve, shutdown_signal},
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        if tracing::dispatcher::has_been_set() {
            tracing::error!("server failed: {err:?}");
        } else {
            eprintln!("server failed: {err:?}");
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env().context("failed to load config")?;
    init_tracing(&cfg.logging)?;

    let addr = cfg.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on http://{}", addr);

    serve(listener, shutdown_signal()).await
}
