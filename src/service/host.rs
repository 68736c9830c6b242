//! Host introspection for the hostinfo command and the memory monitor.
//!
//! Collection goes through `sysinfo`, which reads `/proc` and friends
//! synchronously, so `collect_snapshot` runs it on the blocking pool.

use std::path::Path;

use chrono::{DateTime, Utc};
use sysinfo::System;

use crate::{
    error::AppError,
    model::host::{HostSnapshot, HostingInfo},
};

const UNKNOWN: &str = "Unknown";

/// Collects a full host snapshot.
///
/// # Arguments
/// - `started_at` - When the bot process started, for the bot uptime
///
/// # Returns
/// - `Ok(HostSnapshot)` - Current host, CPU, memory and hosting details
/// - `Err(AppError::InternalError)` - The blocking collection task panicked
pub async fn collect_snapshot(started_at: DateTime<Utc>) -> Result<HostSnapshot, AppError> {
    tokio::task::spawn_blocking(move || snapshot_blocking(started_at))
        .await
        .map_err(|e| AppError::InternalError(format!("Host info collection failed: {}", e)))
}

fn snapshot_blocking(started_at: DateTime<Utc>) -> HostSnapshot {
    let sys = System::new_all();

    let hostname = System::host_name().unwrap_or_else(|| UNKNOWN.to_string());
    let os = std::env::consts::OS;
    let load = System::load_average();

    let process_memory_bytes = sysinfo::get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map(|process| process.memory())
        .unwrap_or(0);

    let bot_uptime_secs = (Utc::now() - started_at).num_seconds().max(0) as u64;

    HostSnapshot {
        bot_uptime_secs,
        started_at,
        os_name: System::name().unwrap_or_else(|| os.to_string()),
        os_version: System::os_version().unwrap_or_default(),
        architecture: std::env::consts::ARCH.to_string(),
        hostname: hostname.clone(),
        username: current_username(),
        process_id: std::process::id(),
        working_directory: std::env::current_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|_| UNKNOWN.to_string()),
        system_uptime_secs: System::uptime(),
        cpu_model: sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        cpu_cores: sys.cpus().len(),
        load_average: [load.one, load.five, load.fifteen],
        total_memory_bytes: sys.total_memory(),
        used_memory_bytes: sys.used_memory(),
        process_memory_bytes,
        hosting: detect_hosting(&hostname, os),
    }
}

/// Resident memory of the bot process in bytes, if it can be read.
pub fn process_memory_bytes() -> Option<u64> {
    let pid = sysinfo::get_current_pid().ok()?;
    let mut sys = System::new();
    if !sys.refresh_process(pid) {
        return None;
    }
    sys.process(pid).map(|process| process.memory())
}

fn current_username() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| UNKNOWN.to_string())
}

fn current_timezone() -> String {
    if let Ok(tz) = std::env::var("TZ") {
        if !tz.is_empty() {
            return tz;
        }
    }
    std::fs::read_to_string("/etc/timezone")
        .map(|tz| tz.trim().to_string())
        .ok()
        .filter(|tz| !tz.is_empty())
        .unwrap_or_else(|| "UTC".to_string())
}

fn detect_hosting(hostname: &str, os: &str) -> HostingInfo {
    let in_docker = std::env::var_os("DOCKER_CONTAINER").is_some()
        || Path::new("/.dockerenv").exists();
    let proc_version = if os == "linux" {
        std::fs::read_to_string("/proc/version").ok()
    } else {
        None
    };

    let mut provider = detect_provider(hostname, os).to_string();
    let server_type = detect_server_type(os, in_docker, proc_version.as_deref());
    if server_type == ServerType::Wsl {
        provider = "Windows PC (WSL)".to_string();
    }

    let timezone = current_timezone();

    HostingInfo {
        provider,
        server_type: server_type.to_string(),
        location: location_for_timezone(&timezone),
        timezone,
    }
}

/// Guesses the hosting provider from the hostname, falling back to the OS family.
pub fn detect_provider(hostname: &str, os: &str) -> &'static str {
    let hostname = hostname.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| hostname.contains(n));

    if has(&["digitalocean", "droplet"]) {
        "DigitalOcean"
    } else if has(&["aws", "ec2", "amazon"]) {
        "Amazon AWS"
    } else if has(&["gcp", "google"]) {
        "Google Cloud Platform"
    } else if has(&["azure", "microsoft"]) {
        "Microsoft Azure"
    } else if has(&["vultr"]) {
        "Vultr"
    } else if has(&["linode"]) {
        "Linode"
    } else if has(&["ovh"]) {
        "OVH"
    } else if has(&["contabo"]) {
        "Contabo"
    } else if has(&["hetzner"]) {
        "Hetzner"
    } else if has(&["vps", "server"]) {
        "VPS Provider"
    } else {
        match os {
            "windows" => "Windows PC/Server",
            "macos" => "macOS",
            _ => "Linux Server/PC",
        }
    }
}

/// Kind of machine the bot runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerType {
    Docker,
    Wsl,
    NativeLinux,
    Windows,
    MacOs,
    Unknown,
}

impl std::fmt::Display for ServerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Docker => "Docker Container",
            Self::Wsl => "Windows Subsystem for Linux (WSL)",
            Self::NativeLinux => "Native Linux",
            Self::Windows => "Windows System",
            Self::MacOs => "macOS System",
            Self::Unknown => UNKNOWN,
        };
        f.write_str(text)
    }
}

/// Classifies the machine from the container marker and `/proc/version`.
///
/// # Arguments
/// - `os` - `std::env::consts::OS` value
/// - `in_docker` - Whether a Docker marker was found
/// - `proc_version` - Contents of `/proc/version` on Linux
pub fn detect_server_type(os: &str, in_docker: bool, proc_version: Option<&str>) -> ServerType {
    if in_docker {
        return ServerType::Docker;
    }
    match (os, proc_version) {
        ("linux", Some(version)) if version.contains("Microsoft") || version.contains("WSL") => {
            ServerType::Wsl
        }
        ("linux", _) => ServerType::NativeLinux,
        ("windows", _) => ServerType::Windows,
        ("macos", _) => ServerType::MacOs,
        _ => ServerType::Unknown,
    }
}

/// Maps an IANA timezone name to a rough location.
pub fn location_for_timezone(timezone: &str) -> String {
    let known = [
        ("Jakarta", "Jakarta, Indonesia"),
        ("Singapore", "Singapore"),
        ("Tokyo", "Tokyo, Japan"),
        ("New_York", "New York, USA"),
        ("London", "London, UK"),
        ("Europe/", "Europe"),
        ("America/", "Americas"),
        ("Asia/", "Asia"),
    ];

    known
        .iter()
        .find(|(needle, _)| timezone.contains(needle))
        .map(|(_, location)| location.to_string())
        .unwrap_or_else(|| timezone.to_string())
}
