use crate::error::config::ConfigError;

/// Parses a Discord snowflake ID read from an environment variable
///
/// # Arguments
/// - `name` - Name of the environment variable, used in the error
/// - `value` - The raw value to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed the value
/// - `Err(ConfigError::InvalidEnvVar)` - Failed to parse the value as a u64
pub fn parse_env_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Parses the role ID a verification code maps to
///
/// # Arguments
/// - `code` - The verification code, used in the error
/// - `value` - The raw role ID string
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed role ID
/// - `Err(ConfigError::InvalidRoleId)` - Failed to parse the value as a u64
pub fn parse_role_id(code: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidRoleId {
            code: code.to_string(),
            value: value.to_string(),
        })
}
