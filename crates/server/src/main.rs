mod api;
mod cli;
mod config;
mod logging;
mod page;

use crate::api::{router, AppState};
use crate::cli::Args;
use crate::config::load_server_config;
use crate::logging::init_tracing;
use anyhow::Context;
use clap::Parser;
use inference_client::{HostedClassifier, TextClassifier};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _log_guard = init_tracing(args.log_dir.as_deref(), args.log_to_stderr)?;

    let config = load_server_config(args.config.as_deref(), args.listen_addr)?;
    let listen_addr = config.socket_addr()?;
    let token = config.read_token();
    if token.is_none() {
        warn!(
            token_env = %config.inference.token_env,
            "inference token not set; requests will be sent unauthenticated"
        );
    }
    let classifier = HostedClassifier::new(config.hosted_config(token))
        .context("failed to configure classifier")?;
    info!(
        listen_addr = %listen_addr,
        model = %classifier.model(),
        inference_url = %classifier.url(),
        "sentiment server starting"
    );

    let app = router(AppState::new(Arc::new(classifier)));
    let listener = TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", listen_addr))?;
    info!(addr = %listen_addr, "sentiment server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await?;
    info!("sentiment server shutting down");
    Ok(())
}

async fn wait_for_shutdown() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
