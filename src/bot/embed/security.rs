//! Embeds for the `security` command.

use serenity::all::CreateEmbed;

use crate::{
    bot::embed::{with_timestamp, COLOR_BLUE, COLOR_GREEN, COLOR_ORANGE},
    model::security::{RetentionSweep, SecurityReport, VerificationStats},
};

/// Number of repeat offenders listed in the stats embed.
const MAX_LISTED_USERS: usize = 5;

/// Builds the statistics embed for the last 7 and 30 days.
///
/// # Arguments
/// - `week` - Statistics for the last 7 days, also used for the suspicious activity
///   section
/// - `month` - Statistics for the last 30 days
pub fn stats_embed(week: &VerificationStats, month: &VerificationStats) -> CreateEmbed {
    let activity = &week.suspicious_activity;

    let mut embed = CreateEmbed::new()
        .title("📊 Verification Security Statistics")
        .color(COLOR_BLUE)
        .field("📅 Last 7 Days", period_summary(week), true)
        .field("📅 Last 30 Days", period_summary(month), true)
        .field(
            "🔍 Suspicious Activity (7 days)",
            format!(
                "🔄 Users with repeated failures: {}\n⚠️ Suspicious codes: {}\n⚡ Rapid attempts: {}",
                activity.repeated_failures.len(),
                activity.suspicious_codes.len(),
                activity.rapid_attempts.len()
            ),
            false,
        );

    if !activity.repeated_failures.is_empty() {
        let users = activity
            .repeated_failures
            .values()
            .take(MAX_LISTED_USERS)
            .map(|entry| format!("• {} ({} failures)", entry.user.username, entry.count))
            .collect::<Vec<_>>()
            .join("\n");
        embed = embed.field("⚠️ Suspicious Users", users, false);
    }

    with_timestamp(embed, chrono::Utc::now())
}

fn period_summary(stats: &VerificationStats) -> String {
    format!(
        "✅ Successful: {}\n❌ Failed: {}\n📈 Success Rate: {}",
        stats.successful,
        stats.failed,
        stats.success_rate_display()
    )
}

/// Builds the security report embed.
///
/// Lists every recommendation, or a single all-clear field when none fired.
pub fn report_embed(report: &SecurityReport) -> CreateEmbed {
    let totals = |stats: &VerificationStats| {
        format!(
            "Total: {}\nSuccessful: {}\nFailed: {}",
            stats.total, stats.successful, stats.failed
        )
    };

    let embed = CreateEmbed::new()
        .title("📋 Security Report")
        .color(COLOR_ORANGE)
        .field("📊 7 Day Summary", totals(&report.last_7_days), true)
        .field("📊 30 Day Summary", totals(&report.last_30_days), true);

    let embed = if report.recommendations.is_empty() {
        embed.field("✅ Security Status", "No security issues detected.", false)
    } else {
        let recommendations = report
            .recommendations
            .iter()
            .map(|rec| format!("• {}", rec))
            .collect::<Vec<_>>()
            .join("\n");
        embed.field("💡 Security Recommendations", recommendations, false)
    };

    with_timestamp(embed, report.generated_at)
}

/// Builds the embed confirming a retention sweep.
pub fn clean_embed(sweep: &RetentionSweep) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("🧹 Log Cleanup Complete")
        .description(format!(
            "Removed {} log entries older than {} days.",
            sweep.total_removed(),
            sweep.retention_days
        ))
        .color(COLOR_GREEN);

    with_timestamp(embed, chrono::Utc::now())
}

/// Builds the usage embed for the `security` command.
pub fn security_help_embed(prefix: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("📚 Security Command Help")
        .description("Monitoring commands for the verification system")
        .color(COLOR_BLUE)
        .field(
            format!("{}security stats", prefix),
            "Show verification statistics",
            false,
        )
        .field(
            format!("{}security report", prefix),
            "Show the full security report",
            false,
        )
        .field(
            format!("{}security clean", prefix),
            "Remove log entries older than 30 days",
            false,
        )
}
