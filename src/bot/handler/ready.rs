//! Ready event handler for bot initialization.
//!
//! Fired once the gateway handshake completes. Logs the connection and the command
//! table, then sets the presence.

use rand::seq::IndexedRandom;
use serenity::all::{ActivityData, Context, Ready};

use crate::{bot::command::COMMANDS, state::BotState};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Bot state holding the configured presence texts
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guild(s)",
        ready.user.name,
        ready.guilds.len()
    );

    for spec in COMMANDS {
        tracing::info!(
            "Registered command {}{}{}",
            state.config.prefix,
            spec.usage,
            if spec.admin_only { " (admin)" } else { "" }
        );
    }
    tracing::info!("{} commands loaded", COMMANDS.len());

    let activity = state.config.activities.choose(&mut rand::rng()).cloned();

    if let Some(activity) = activity {
        tracing::info!("Activity set to \"{}\"", activity);
        ctx.set_activity(Some(ActivityData::playing(activity)));
    }
}
