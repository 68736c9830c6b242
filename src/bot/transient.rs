//! Self-deleting replies.
//!
//! Command replies and the messages that triggered them are removed after a short
//! delay to keep the verification channel clean. Each deletion is a one-shot task
//! that can be cancelled through its abort handle. Deletion is best effort: a
//! message that is already gone or cannot be deleted is only logged.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serenity::all::{ChannelId, Context, CreateEmbed, CreateMessage, Message, MessageId};
use serenity::http::Http;
use tokio::task::AbortHandle;

use crate::error::AppError;

/// Lifetime of plain text replies.
pub const SHORT_REPLY_TTL: Duration = Duration::from_secs(5);

/// Lifetime of diagnostic embeds such as `hostinfo`.
pub const DIAGNOSTIC_REPLY_TTL: Duration = Duration::from_secs(120);

/// Runs `task` once after `delay` on its own tokio task.
///
/// Aborting the returned handle before the delay elapses cancels the task.
pub fn schedule_once<F>(delay: Duration, task: F) -> AbortHandle
where
    F: Future<Output = ()> + Send + 'static,
{
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        task.await;
    });

    handle.abort_handle()
}

/// Deletes the given messages after `delay`.
pub fn delete_after(
    http: Arc<Http>,
    messages: Vec<(ChannelId, MessageId)>,
    delay: Duration,
) -> AbortHandle {
    schedule_once(delay, async move {
        for (channel_id, message_id) in messages {
            if let Err(e) = channel_id.delete_message(&http, message_id).await {
                tracing::debug!(
                    "Failed to delete message {} in channel {}: {}",
                    message_id,
                    channel_id,
                    e
                );
            }
        }
    })
}

/// Replies with text and deletes both the reply and the triggering message after
/// `ttl`.
///
/// # Returns
/// - `Ok(())` - Reply sent, deletion scheduled
/// - `Err(AppError::DiscordErr)` - The reply could not be sent
pub async fn reply_transient(
    ctx: &Context,
    message: &Message,
    content: impl Into<String>,
    ttl: Duration,
) -> Result<(), AppError> {
    let reply = message.reply(ctx, content).await?;

    delete_after(
        ctx.http.clone(),
        vec![(reply.channel_id, reply.id), (message.channel_id, message.id)],
        ttl,
    );

    Ok(())
}

/// Replies with an embed and deletes both the reply and the triggering message
/// after `ttl`.
pub async fn reply_embed_transient(
    ctx: &Context,
    message: &Message,
    embed: CreateEmbed,
    ttl: Duration,
) -> Result<(), AppError> {
    let reply = message
        .channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new().embed(embed).reference_message(message),
        )
        .await?;

    delete_after(
        ctx.http.clone(),
        vec![(reply.channel_id, reply.id), (message.channel_id, message.id)],
        ttl,
    );

    Ok(())
}
