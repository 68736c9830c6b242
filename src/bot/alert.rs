use serenity::all::{ChannelId, Context, CreateMessage};

use crate::{bot::embed::alert::alert_embed, model::security::SecurityAlert};

/// Posts a verification alert to the configured security channel.
///
/// Does nothing when no alert channel is configured. Send failures are logged and
/// never reach the requester.
pub async fn send_security_alert(ctx: &Context, channel_id: Option<u64>, alert: &SecurityAlert) {
    let Some(channel_id) = channel_id else {
        return;
    };

    let message = CreateMessage::new().embed(alert_embed(alert));
    if let Err(e) = ChannelId::new(channel_id)
        .send_message(&ctx.http, message)
        .await
    {
        tracing::error!(
            "Failed to send security alert to channel {}: {}",
            channel_id,
            e
        );
    }
}
