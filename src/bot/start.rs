use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, error::AppError, state::BotState};

/// Builds the Discord client
///
/// # Arguments
/// - `state` - Bot state moved into the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - The client could not be built, e.g. a malformed token
pub async fn init_bot(state: BotState) -> Result<Client, AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::MESSAGE_CONTENT;

    let token = state.config.discord_bot_token.clone();
    let client = Client::builder(&token, intents)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Runs the bot until it disconnects or the process receives SIGINT/SIGTERM
///
/// On a shutdown signal all shards are shut down before returning.
///
/// # Returns
/// - `Ok(())` - The bot stopped cleanly
/// - `Err(AppError)` - The gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();

    tracing::info!("Starting Discord bot...");

    tokio::select! {
        result = client.start() => result?,
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received, stopping shards");
            shard_manager.shutdown_all().await;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
