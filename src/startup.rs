use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, model::code::CodeRoleMap, state::BotState};

const DEFAULT_LOG_FILTER: &str = "info,serenity=warn,tracing=warn";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to info level for the bot with
/// Serenity's gateway chatter limited to warnings.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Loads the code mapping and prepares the logs directory.
///
/// # Arguments
/// - `config` - Configuration naming the codes file and logs directory
///
/// # Returns
/// - `Ok(BotState)` - State ready to hand to the event handler
/// - `Err(AppError::ConfigErr)` - Codes file missing or invalid
/// - `Err(AppError::IoErr)` - Logs directory could not be created
pub async fn build_state(config: Config) -> Result<BotState, AppError> {
    let codes = CodeRoleMap::load(&config.codes_file).await?;
    if codes.is_empty() {
        tracing::warn!(
            "No verification codes configured in {}",
            config.codes_file.display()
        );
    } else {
        tracing::info!(
            "Loaded {} verification codes from {}",
            codes.len(),
            config.codes_file.display()
        );
    }

    let state = BotState::new(config, codes);
    state.store.init().await?;

    Ok(state)
}
