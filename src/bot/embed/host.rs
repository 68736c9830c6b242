use serenity::all::{CreateEmbed, CreateEmbedFooter};

use crate::{
    bot::embed::{with_timestamp, COLOR_GREEN},
    model::host::{GatewayStats, HostSnapshot},
    util::format::{bytes_to_mb, format_uptime, truncate, usage_bar},
};

const MAX_CPU_MODEL_LEN: usize = 35;

/// Builds the `hostinfo` embed.
///
/// # Arguments
/// - `snapshot` - Host and process details
/// - `gateway` - Latency and cache counts from the Discord side
/// - `requested_by` - Name shown in the footer
pub fn host_embed(snapshot: &HostSnapshot, gateway: &GatewayStats, requested_by: &str) -> CreateEmbed {
    let total_mb = bytes_to_mb(snapshot.total_memory_bytes);
    let used_mb = bytes_to_mb(snapshot.used_memory_bytes);
    let used_pct = if snapshot.total_memory_bytes == 0 {
        0.0
    } else {
        snapshot.used_memory_bytes as f64 / snapshot.total_memory_bytes as f64 * 100.0
    };

    let embed = CreateEmbed::new()
        .title("🖥️ Host Information")
        .description("Details of the system running this bot")
        .color(COLOR_GREEN)
        .field(
            "🤖 Bot Information",
            format!(
                "**Uptime:** {}\n**Ping:** {}ms\n**Version:** {}\n**Guilds:** {}\n**Users:** {}",
                format_uptime(snapshot.bot_uptime_secs),
                gateway.latency_ms,
                env!("CARGO_PKG_VERSION"),
                gateway.guilds,
                gateway.users
            ),
            true,
        )
        .field(
            "🏢 Host Detection",
            format!(
                "**Provider:** {}\n**Server Type:** {}\n**Location:** {}\n**Timezone:** {}",
                snapshot.hosting.provider,
                snapshot.hosting.server_type,
                snapshot.hosting.location,
                snapshot.hosting.timezone
            ),
            true,
        )
        .field(
            "🌐 Network & Identity",
            format!(
                "**Hostname:** {}\n**Username:** {}\n**Process ID:** {}",
                snapshot.hostname, snapshot.username, snapshot.process_id
            ),
            false,
        )
        .field(
            "💻 System Information",
            format!(
                "**OS:** {} {} {}\n**System Uptime:** {}\n**Bot Started:** {}\n**Working Dir:** {}",
                snapshot.os_name,
                snapshot.os_version,
                snapshot.architecture,
                format_uptime(snapshot.system_uptime_secs),
                snapshot.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
                short_path(&snapshot.working_directory)
            ),
            true,
        )
        .field(
            "🔧 CPU Information",
            format!(
                "**Model:** {}\n**Cores:** {}\n**Load Average:** {:.2}, {:.2}, {:.2}",
                truncate(&snapshot.cpu_model, MAX_CPU_MODEL_LEN),
                snapshot.cpu_cores,
                snapshot.load_average[0],
                snapshot.load_average[1],
                snapshot.load_average[2]
            ),
            true,
        )
        .field(
            "🧠 Memory Usage",
            format!(
                "**System Total:** {} MB\n**System Used:** {} MB ({:.1}%)\n**Bot Memory:** {} MB\n**Usage:** {}",
                total_mb,
                used_mb,
                used_pct,
                bytes_to_mb(snapshot.process_memory_bytes),
                usage_bar(snapshot.used_memory_bytes, snapshot.total_memory_bytes)
            ),
            true,
        )
        .footer(CreateEmbedFooter::new(format!(
            "Requested by {} • Auto-detected",
            requested_by
        )));

    with_timestamp(embed, chrono::Utc::now())
}

/// Last two components of a path, to keep home directories out of the embed.
fn short_path(path: &str) -> String {
    let parts: Vec<&str> = path
        .split(['/', '\\'])
        .filter(|part| !part.is_empty())
        .collect();
    let start = parts.len().saturating_sub(2);
    parts[start..].join("/")
}
