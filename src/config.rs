use std::path::PathBuf;

use crate::{error::config::ConfigError, util::parse::parse_env_id};

const DEFAULT_PREFIX: &str = "!";
const DEFAULT_CODES_FILE: &str = "config/codes.json";
const DEFAULT_LOG_DIR: &str = "logs";
const DEFAULT_ACTIVITY: &str = "the server";

pub struct Config {
    pub discord_bot_token: String,

    /// The only guild the bot answers commands in.
    pub guild_id: u64,
    /// Channel the verify command is accepted in.
    pub verify_channel_id: u64,
    /// Channel receiving verification alerts; alerts are disabled when unset.
    pub security_alert_channel_id: Option<u64>,

    pub prefix: String,
    pub codes_file: PathBuf,
    pub log_dir: PathBuf,
    /// Presence texts, one is picked at random on ready.
    pub activities: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidEnvVar)` - An ID is not a valid snowflake
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require = |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let security_alert_channel_id = get("SECURITY_ALERT_CHANNEL_ID")
            .map(|value| parse_env_id("SECURITY_ALERT_CHANNEL_ID", &value))
            .transpose()?;

        let activities: Vec<String> = get("BOT_ACTIVITIES")
            .map(|value| {
                value
                    .split('|')
                    .map(str::trim)
                    .filter(|activity| !activity.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            guild_id: parse_env_id("GUILD_ID", &require("GUILD_ID")?)?,
            verify_channel_id: parse_env_id("VERIFY_CHANNEL_ID", &require("VERIFY_CHANNEL_ID")?)?,
            security_alert_channel_id,
            prefix: get("BOT_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            codes_file: get("CODES_FILE")
                .unwrap_or_else(|| DEFAULT_CODES_FILE.to_string())
                .into(),
            log_dir: get("LOG_DIR")
                .unwrap_or_else(|| DEFAULT_LOG_DIR.to_string())
                .into(),
            activities: if activities.is_empty() {
                vec![DEFAULT_ACTIVITY.to_string()]
            } else {
                activities
            },
        })
    }
}
