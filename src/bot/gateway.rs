//! Serenity-backed `RoleGateway`.
//!
//! Role lookups are answered from a copy of the cached guild taken when the
//! command arrives, so the verification gates before the grant make no API calls.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serenity::all::{Context, Guild, GuildId, Member, Message, RoleId, UserId};
use serenity::http::Http;
use serenity::async_trait;

use crate::{
    error::AppError,
    model::discord::role::{BotAuthority, GuildRole},
    service::verification::RoleGateway,
};

const GRANT_AUDIT_REASON: &str = "Verified with a verification code";

pub struct SerenityRoleGateway {
    http: Arc<Http>,
    guild_id: GuildId,
    user_id: UserId,
    roles: HashMap<u64, GuildRole>,
    member_roles: HashSet<u64>,
    authority: BotAuthority,
}

impl SerenityRoleGateway {
    /// Captures the guild's roles, the author's roles and the bot's authority.
    ///
    /// # Arguments
    /// - `ctx` - Serenity context with the cache and HTTP client
    /// - `guild_id` - Guild the command was sent in
    /// - `message` - The command message; its author is the member to verify
    ///
    /// # Returns
    /// - `Ok(SerenityRoleGateway)` - Gateway for the message's author
    /// - `Err(AppError::InternalError)` - The guild is not in the cache
    pub fn from_cache(ctx: &Context, guild_id: GuildId, message: &Message) -> Result<Self, AppError> {
        let bot_id = ctx.cache.current_user().id;

        let guild = ctx
            .cache
            .guild(guild_id)
            .ok_or_else(|| AppError::InternalError(format!("Guild {} is not cached", guild_id)))?;

        let roles = guild
            .roles
            .values()
            .map(|role| (role.id.get(), GuildRole::from_role(role)))
            .collect();

        let member_roles: HashSet<u64> = match &message.member {
            Some(member) => member.roles.iter().map(|id| id.get()).collect(),
            None => guild
                .members
                .get(&message.author.id)
                .map(|member| member.roles.iter().map(|id| id.get()).collect())
                .unwrap_or_default(),
        };

        let authority = match guild.members.get(&bot_id) {
            Some(bot_member) => authority_for(&guild, bot_member),
            None => {
                tracing::warn!("Bot member missing from cache for guild {}", guild_id);
                BotAuthority {
                    is_owner: guild.owner_id == bot_id,
                    ..BotAuthority::default()
                }
            }
        };

        Ok(Self {
            http: ctx.http.clone(),
            guild_id,
            user_id: message.author.id,
            roles,
            member_roles,
            authority,
        })
    }
}

/// Derives what the bot may do with roles from its cached member.
fn authority_for(guild: &Guild, bot_member: &Member) -> BotAuthority {
    let permissions = guild.member_permissions(bot_member);

    let top_position = bot_member
        .roles
        .iter()
        .filter_map(|id| guild.roles.get(id))
        .map(|role| role.position)
        .max()
        .unwrap_or(0);

    BotAuthority {
        top_position,
        manage_roles: permissions.manage_roles() || permissions.administrator(),
        is_owner: guild.owner_id == bot_member.user.id,
    }
}

#[async_trait]
impl RoleGateway for SerenityRoleGateway {
    fn find_role(&self, role_id: u64) -> Option<GuildRole> {
        self.roles.get(&role_id).cloned()
    }

    fn member_has_role(&self, role_id: u64) -> bool {
        self.member_roles.contains(&role_id)
    }

    fn can_assign(&self, role: &GuildRole) -> bool {
        self.authority.can_assign(role)
    }

    async fn grant_role(&self, role_id: u64) -> Result<(), AppError> {
        self.http
            .add_member_role(
                self.guild_id,
                self.user_id,
                RoleId::new(role_id),
                Some(GRANT_AUDIT_REASON),
            )
            .await?;
        Ok(())
    }
}
