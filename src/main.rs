mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::process::ExitCode;

use crate::{config::Config, error::AppError, scheduler::maintenance};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    startup::init_logging();

    match run().await {
        Ok(()) => {
            tracing::info!("Shut down cleanly");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    let state = startup::build_state(config).await?;

    let mut scheduler = maintenance::start_scheduler(state.store.clone()).await?;

    let client = bot::start::init_bot(state).await?;
    let result = bot::start::start_bot(client).await;

    if let Err(e) = scheduler.shutdown().await {
        tracing::error!("Failed to stop scheduler: {}", e);
    }

    result
}
