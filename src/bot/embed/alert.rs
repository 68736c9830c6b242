use serenity::all::CreateEmbed;

use crate::{
    bot::embed::{with_timestamp, COLOR_GREEN, COLOR_RED},
    model::security::SecurityAlert,
};

/// Builds the embed posted to the security alert channel.
///
/// Successful verifications are green and name the granted role; failed attempts
/// are red and show the invalid code.
pub fn alert_embed(alert: &SecurityAlert) -> CreateEmbed {
    let embed = CreateEmbed::new().title("🔐 Security Alert - Verification Activity");

    match alert {
        SecurityAlert::SuccessfulVerification {
            user,
            code,
            role,
            guild,
            timestamp,
        } => with_timestamp(
            embed
                .color(COLOR_GREEN)
                .description("✅ **Successful Verification**")
                .field("👤 User", format!("{} ({})", user.username, user.id), true)
                .field("🔑 Code Used", format!("`{}`", code), true)
                .field("🏷️ Role Granted", &role.name, true)
                .field("🏠 Server", &guild.name, false),
            *timestamp,
        ),
        SecurityAlert::FailedVerification {
            user,
            code,
            guild,
            timestamp,
        } => with_timestamp(
            embed
                .color(COLOR_RED)
                .description("❌ **Failed Verification Attempt**")
                .field("👤 User", format!("{} ({})", user.username, user.id), true)
                .field("🔑 Invalid Code", format!("`{}`", code), true)
                .field("🏠 Server", &guild.name, false),
            *timestamp,
        ),
    }
}
