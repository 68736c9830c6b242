use serenity::all::{ActivityData, Context, Message};

use crate::{
    bot::transient::{reply_transient, SHORT_REPLY_TTL},
    error::AppError,
};

/// Handles `activity <text>`: sets a "Playing" presence.
pub async fn run(
    ctx: &Context,
    message: &Message,
    prefix: &str,
    args: &[&str],
) -> Result<(), AppError> {
    let text = args.join(" ");

    if text.is_empty() {
        reply_transient(ctx, message, usage_hint(prefix), SHORT_REPLY_TTL).await?;
        return Ok(());
    }

    ctx.set_activity(Some(ActivityData::playing(text.as_str())));
    tracing::info!("Activity changed to \"{}\" by {}", text, message.author.name);

    reply_transient(
        ctx,
        message,
        format!("✅ Activity changed to: \"{}\"", text),
        SHORT_REPLY_TTL,
    )
    .await?;

    Ok(())
}

fn usage_hint(prefix: &str) -> String {
    format!(
        "❌ Please provide the activity text. Example: `{}activity the server`",
        prefix
    )
}
