//! Discord guild role domain model.
//!
//! Provides the role view used by the verification flow: identity, display name,
//! hierarchy position, and whether Discord manages the role for an integration.

use serenity::all::Role;

/// Discord role within a guild with its hierarchy position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildRole {
    /// Discord role ID as a u64.
    pub role_id: u64,
    /// Role display name.
    pub name: String,
    /// Role position in the guild's role hierarchy (higher = more important).
    pub position: u16,
    /// Managed roles belong to an integration or bot and cannot be assigned.
    pub managed: bool,
}

impl GuildRole {
    /// Converts a Serenity role at the gateway boundary.
    ///
    /// # Arguments
    /// - `role` - Role from the Serenity cache
    ///
    /// # Returns
    /// - `GuildRole` - Domain model with the fields the verification flow needs
    pub fn from_role(role: &Role) -> Self {
        Self {
            role_id: role.id.get(),
            name: role.name.clone(),
            position: role.position,
            managed: role.managed,
        }
    }
}

/// What the bot itself is allowed to do with roles in the guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BotAuthority {
    /// Position of the bot's highest role.
    pub top_position: u16,
    /// Whether the bot holds Manage Roles or Administrator.
    pub manage_roles: bool,
    /// Whether the bot owns the guild.
    pub is_owner: bool,
}

impl BotAuthority {
    /// Checks whether Discord would let the bot assign `role`.
    ///
    /// Managed roles are never assignable. The guild owner can assign any other
    /// role. Everyone else needs Manage Roles and a highest role strictly above the
    /// target role.
    pub fn can_assign(&self, role: &GuildRole) -> bool {
        if role.managed {
            return false;
        }
        if self.is_owner {
            return true;
        }
        self.manage_roles && self.top_position > role.position
    }
}
