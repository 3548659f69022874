//! The `serve` subcommand: run the HTTP inference service.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use upright_server::{AppState, create_router};

use super::{build_classifier, resolve_config};

#[derive(Args)]
pub struct ServeArgs {
    /// Socket address to bind (overrides config)
    #[arg(short, long)]
    addr: Option<String>,

    /// Path to the ONNX model (overrides config)
    #[arg(short, long)]
    model: Option<PathBuf>,
}

pub async fn run(args: ServeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = resolve_config(config_path)?;
    if let Some(addr) = args.addr {
        config.service.bind_addr = addr;
    }

    info!(
        "Loading model from {}",
        args.model
            .as_deref()
            .unwrap_or(&config.model.path)
            .display()
    );
    let classifier = build_classifier(&config, args.model)?;

    let state = AppState::new(classifier, config.service.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.service.bind_addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
