use serenity::all::{Context, GuildId, UserId};

use crate::error::AppError;

/// Checks whether a guild member holds the Administrator permission.
///
/// The guild owner always passes. The member is read from the cache when present
/// and fetched over HTTP otherwise.
///
/// # Arguments
/// - `ctx` - Serenity context
/// - `guild_id` - Guild to check in
/// - `user_id` - Member to check
///
/// # Returns
/// - `Ok(bool)` - Whether the member is an administrator
/// - `Err(AppError::DiscordErr)` - The member could not be fetched
/// - `Err(AppError::InternalError)` - The guild is not in the cache
pub async fn is_administrator(
    ctx: &Context,
    guild_id: GuildId,
    user_id: UserId,
) -> Result<bool, AppError> {
    let member = guild_id.member(ctx, user_id).await?;

    let guild = ctx
        .cache
        .guild(guild_id)
        .ok_or_else(|| AppError::InternalError(format!("Guild {} is not cached", guild_id)))?;

    Ok(guild.member_permissions(&member).administrator())
}
