use serenity::all::{Context, Message};

use crate::{
    bot::{
        command::COMMANDS,
        embed::help::help_embed,
        transient::{reply_embed_transient, DIAGNOSTIC_REPLY_TTL},
    },
    error::AppError,
    state::BotState,
};

/// Handles `help`: lists the command table.
pub async fn run(ctx: &Context, state: &BotState, message: &Message) -> Result<(), AppError> {
    let embed = help_embed(&state.config.prefix, COMMANDS);
    reply_embed_transient(ctx, message, embed, DIAGNOSTIC_REPLY_TTL).await?;
    Ok(())
}
