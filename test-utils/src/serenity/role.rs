//! Test factory for creating Serenity Role objects.
//!
//! This module provides factory functions for creating mock Serenity `Role` structs
//! for testing purposes. These factories create valid Role objects by deserializing
//! JSON, simulating what Discord's API would return.

use serenity::all::Role;

/// Creates a test Serenity Role with customizable fields.
///
/// Creates a Role object by deserializing JSON with the provided values.
/// All other fields are set to reasonable defaults (not hoisted, not managed,
/// not mentionable, with zero permissions).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 32-bit integer (RGB)
/// - `position` - Role position in the hierarchy (higher = more important)
///
/// # Returns
/// - `Role` - A valid Serenity Role struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(123456789, "Verified", 0x00FF00, 3);
/// assert_eq!(role.name, "Verified");
/// assert_eq!(role.position, 3);
/// ```
pub fn create_test_role(role_id: u64, name: &str, color: u32, position: u16) -> Role {
    build_role(role_id, name, color, position, false)
}

/// Creates a test Serenity Role that is managed by an integration.
///
/// Managed roles are created by Discord for bots and integrations and can never
/// be assigned manually.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `position` - Role position in the hierarchy
///
/// # Returns
/// - `Role` - A managed Serenity Role struct for testing
pub fn create_managed_role(role_id: u64, name: &str, position: u16) -> Role {
    build_role(role_id, name, 0, position, true)
}

fn build_role(role_id: u64, name: &str, color: u32, position: u16, managed: bool) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "colors": {
            "primary_color": color,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": "0",
        "managed": managed,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
