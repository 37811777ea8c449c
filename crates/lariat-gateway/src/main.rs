mod app;
mod cli;
mod error;
mod handlers;
mod model;
mod state;

use crate::app::App;
use crate::cli::Cli;
use crate::state::AppState;
use clap::Parser;
use lariat_shortener::{InMemoryRepository, ShortenerService};
use lariat_snowflake::{Snowflake, SnowflakeSettings};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Cli::try_parse()?;

    let settings = SnowflakeSettings::builder()
        .worker_id(config.worker_id)
        .build();
    let generator = Snowflake::new(settings)?;
    let service = ShortenerService::new(InMemoryRepository::new(), generator);
    let state = AppState::new(Arc::new(service), config.base_url.clone());

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        worker_id = config.worker_id,
        base_url = %config.base_url,
        "starting gateway server"
    );

    axum::serve(listener, App::router(state)).await?;

    Ok(())
}
