mod app;
mod config;
mod doc;
mod dtos;
mod error;
mod extract;
mod routes;
mod state;
mod utils;

use crate::{config::ServerConfig, state::AppState, utils::shutdown::shutdown_signal};
use database::Gateway;
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    info!("Starting with {config:?}");

    let gateway = Gateway::connect(&config.database).await?;
    Migrator::up(gateway.connection(), None).await?;
    info!("Migrations applied");

    let app = app::router(AppState::new(gateway.clone()));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!("Running axum on http://{}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down, closing database connections");
    gateway.close().await?;
    Ok(())
}
