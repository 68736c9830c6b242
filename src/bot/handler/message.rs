use serenity::all::{Context, GuildId, Message};

use crate::{
    bot::{
        command::{dispatch, find_command, parse_invocation},
        permission::is_administrator,
        transient::{reply_transient, SHORT_REPLY_TTL},
    },
    state::BotState,
};

const PERMISSION_DENIED_REPLY: &str = "❌ You do not have permission to use this command.";
const COMMAND_FAILED_REPLY: &str = "❌ An error occurred while running the command.";

/// Handle message creation in a channel
///
/// Only prefixed commands from non-bot users in the configured guild are handled.
/// Administrator-only commands are checked before dispatch. Any command error is
/// logged and answered with a generic reply.
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    // Guild channels only, and only the configured guild
    let Some(guild_id) = message.guild_id else {
        return;
    };
    if guild_id != GuildId::new(state.config.guild_id) {
        return;
    }

    let Some(invocation) = parse_invocation(&message.content, &state.config.prefix) else {
        return;
    };

    let Some(spec) = find_command(&invocation.name) else {
        tracing::debug!(
            "Ignoring unknown command {:?} from {}",
            invocation.name,
            message.author.name
        );
        return;
    };

    tracing::info!(
        "Command {} from {} ({}) in guild {}",
        spec.name,
        message.author.name,
        message.author.id,
        guild_id
    );

    if spec.admin_only {
        match is_administrator(&ctx, guild_id, message.author.id).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(
                    "Denied {} to {} ({}): not an administrator",
                    spec.name,
                    message.author.name,
                    message.author.id
                );
                if let Err(e) =
                    reply_transient(&ctx, &message, PERMISSION_DENIED_REPLY, SHORT_REPLY_TTL).await
                {
                    tracing::error!("Failed to send permission denial: {}", e);
                }
                return;
            }
            Err(e) => {
                tracing::error!("Failed to check permissions for {}: {}", message.author.id, e);
                if let Err(e) =
                    reply_transient(&ctx, &message, COMMAND_FAILED_REPLY, SHORT_REPLY_TTL).await
                {
                    tracing::error!("Failed to send error reply: {}", e);
                }
                return;
            }
        }
    }

    if let Err(e) = dispatch(&ctx, state, &message, spec, &invocation.args).await {
        tracing::error!("Command {} failed: {}", spec.name, e);

        if let Err(e) = reply_transient(&ctx, &message, COMMAND_FAILED_REPLY, SHORT_REPLY_TTL).await
        {
            tracing::error!("Failed to send error reply: {}", e);
        }
    }
}
