//! Text formatting helpers for embeds.

/// Formats a duration in seconds as `1d 2h 3m 4s`, omitting empty leading units.
pub fn format_uptime(total_seconds: u64) -> String {
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    parts.push(format!("{}s", seconds));

    parts.join(" ")
}

/// Renders a ten cell usage bar followed by the percentage, e.g. `███░░░░░░░ 30.0%`.
pub fn usage_bar(used: u64, total: u64) -> String {
    const BAR_LENGTH: usize = 10;

    let percentage = if total == 0 {
        0.0
    } else {
        (used as f64 / total as f64) * 100.0
    };
    let filled = ((percentage / 100.0) * BAR_LENGTH as f64).round() as usize;
    let filled = filled.min(BAR_LENGTH);

    format!(
        "{}{} {:.1}%",
        "█".repeat(filled),
        "░".repeat(BAR_LENGTH - filled),
        percentage
    )
}

/// Truncates text to `max` characters, appending `...` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max).collect();
    format!("{}...", head)
}

/// Converts bytes to whole mebibytes.
pub fn bytes_to_mb(bytes: u64) -> u64 {
    bytes / 1024 / 1024
}
