//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User.
///
/// Uses the post-migration username format (discriminator `"0"`), which Serenity
/// deserializes as no discriminator.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Unique username
/// - `global_name` - Optional display name
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str, global_name: Option<&str>) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": global_name,
        "avatar": null,
        "bot": false,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
