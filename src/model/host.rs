//! Host and process diagnostics shown by the hostinfo command.

use chrono::{DateTime, Utc};

/// Point-in-time view of the host the bot is running on.
#[derive(Debug, Clone, PartialEq)]
pub struct HostSnapshot {
    /// Seconds since the bot process started.
    pub bot_uptime_secs: u64,
    /// When the bot process started.
    pub started_at: DateTime<Utc>,
    pub os_name: String,
    pub os_version: String,
    pub architecture: String,
    pub hostname: String,
    pub username: String,
    pub process_id: u32,
    pub working_directory: String,
    pub system_uptime_secs: u64,
    pub cpu_model: String,
    pub cpu_cores: usize,
    /// One, five and fifteen minute load averages.
    pub load_average: [f64; 3],
    pub total_memory_bytes: u64,
    pub used_memory_bytes: u64,
    /// Resident memory of the bot process.
    pub process_memory_bytes: u64,
    pub hosting: HostingInfo,
}

/// Best-effort guess of where the bot is hosted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostingInfo {
    pub provider: String,
    pub server_type: String,
    /// Rough location derived from the timezone.
    pub location: String,
    pub timezone: String,
}

/// Discord-side figures shown next to the host snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GatewayStats {
    /// Time between the command message being created and it being handled.
    pub latency_ms: i64,
    /// Guilds in the cache.
    pub guilds: usize,
    /// Users in the cache.
    pub users: usize,
}
