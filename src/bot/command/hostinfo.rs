use chrono::Utc;
use serenity::all::{Context, Message};

use crate::{
    bot::{
        embed::host::host_embed,
        transient::{reply_embed_transient, reply_transient, DIAGNOSTIC_REPLY_TTL, SHORT_REPLY_TTL},
    },
    error::AppError,
    model::host::GatewayStats,
    service::host::collect_snapshot,
    state::BotState,
};

/// Handles `hostinfo`: replies with the host diagnostics embed.
pub async fn run(ctx: &Context, state: &BotState, message: &Message) -> Result<(), AppError> {
    let snapshot = match collect_snapshot(state.started_at).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!("Failed to collect host information: {}", e);
            reply_transient(
                ctx,
                message,
                "❌ Failed to retrieve host information.",
                SHORT_REPLY_TTL,
            )
            .await?;
            return Ok(());
        }
    };

    let gateway = GatewayStats {
        latency_ms: (Utc::now() - message.timestamp.to_utc())
            .num_milliseconds()
            .max(0),
        guilds: ctx.cache.guild_count(),
        users: ctx.cache.user_count(),
    };

    let embed = host_embed(&snapshot, &gateway, &message.author.tag());
    reply_embed_transient(ctx, message, embed, DIAGNOSTIC_REPLY_TTL).await?;

    Ok(())
}
