//! Verification code to role mapping.
//!
//! The mapping is loaded once at startup from a JSON object whose keys are the codes
//! and whose values are Discord role IDs as strings:
//!
//! ```json
//! { "Admin123": "123456789012345678" }
//! ```
//!
//! Codes are matched exactly, including case.

use std::collections::HashMap;
use std::path::Path;

use crate::error::config::ConfigError;
use crate::util::parse::parse_role_id;

/// Read-only map from verification code to Discord role ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeRoleMap {
    codes: HashMap<String, u64>,
}

impl CodeRoleMap {
    /// Builds a map from already parsed pairs.
    #[cfg(test)]
    pub fn new(codes: HashMap<String, u64>) -> Self {
        Self { codes }
    }

    /// Parses the JSON object form of the mapping.
    ///
    /// # Arguments
    /// - `path` - Path reported in errors
    /// - `json` - File contents
    ///
    /// # Returns
    /// - `Ok(CodeRoleMap)` - Every value parsed as a role ID
    /// - `Err(ConfigError::CodesFileInvalid)` - Not a JSON object of strings
    /// - `Err(ConfigError::InvalidRoleId)` - A value is not a role ID
    pub fn from_json(path: &Path, json: &str) -> Result<Self, ConfigError> {
        let raw: HashMap<String, String> =
            serde_json::from_str(json).map_err(|source| ConfigError::CodesFileInvalid {
                path: path.to_path_buf(),
                source,
            })?;

        let codes = raw
            .into_iter()
            .map(|(code, value)| {
                let role_id = parse_role_id(&code, &value)?;
                Ok((code, role_id))
            })
            .collect::<Result<HashMap<_, _>, ConfigError>>()?;

        Ok(Self { codes })
    }

    /// Reads and parses the mapping file.
    ///
    /// # Returns
    /// - `Ok(CodeRoleMap)` - Loaded mapping
    /// - `Err(ConfigError::CodesFileUnreadable)` - File missing or unreadable
    /// - `Err(ConfigError)` - Contents invalid, see `from_json`
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = tokio::fs::read_to_string(path).await.map_err(|source| {
            ConfigError::CodesFileUnreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Self::from_json(path, &json)
    }

    /// Looks up the role granted by a code.
    pub fn role_for(&self, code: &str) -> Option<u64> {
        self.codes.get(code).copied()
    }

    /// Number of configured codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
