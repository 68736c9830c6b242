use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the environment variable
        name: String,
        /// The rejected value
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The verification code file could not be read.
    #[error("Failed to read verification codes from {}: {source}", path.display())]
    CodesFileUnreadable {
        /// Path of the codes file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The verification code file is not a JSON object of code to role ID.
    #[error("Invalid verification codes file {}: {source}", path.display())]
    CodesFileInvalid {
        /// Path of the codes file
        path: PathBuf,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A verification code maps to something that is not a Discord role ID.
    #[error("Verification code '{code}' maps to invalid role ID '{value}'")]
    InvalidRoleId {
        /// The verification code
        code: String,
        /// The value that failed to parse as a role ID
        value: String,
    },
}
