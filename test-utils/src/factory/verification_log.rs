//! Verification log record factory.
//!
//! Builds records in the on-disk JSON layout:
//! `{timestamp, type, user {id, username, displayName}, code, role?, error?, guild}`.

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Factory for creating verification log records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::verification_log::VerificationLogFactory;
///
/// let record = VerificationLogFactory::success()
///     .user_id("111")
///     .username("alice")
///     .code("Admin123")
///     .role("222", "Member")
///     .at(timestamp)
///     .build();
/// ```
pub struct VerificationLogFactory {
    event: &'static str,
    timestamp: DateTime<Utc>,
    user_id: String,
    username: String,
    code: String,
    role: Option<(String, String)>,
    error: Option<String>,
    guild_id: String,
    guild_name: String,
}

impl VerificationLogFactory {
    fn with_event(event: &'static str) -> Self {
        let id = next_id();
        Self {
            event,
            timestamp: Utc::now(),
            user_id: format!("{}", 100_000 + id),
            username: format!("user{}", id),
            code: format!("code{}", id),
            role: None,
            error: None,
            guild_id: "900000000000000000".to_string(),
            guild_name: "Test Guild".to_string(),
        }
    }

    /// Creates a factory for a `SUCCESSFUL_VERIFICATION` record.
    ///
    /// Defaults:
    /// - timestamp: now
    /// - user id/username: unique per factory
    /// - role: `("500000000000000000", "Member")`
    pub fn success() -> Self {
        let mut factory = Self::with_event("SUCCESSFUL_VERIFICATION");
        factory.role = Some(("500000000000000000".to_string(), "Member".to_string()));
        factory
    }

    /// Creates a factory for a `FAILED_VERIFICATION` record.
    pub fn failure() -> Self {
        Self::with_event("FAILED_VERIFICATION")
    }

    /// Creates a factory for a `VERIFICATION_ERROR` record.
    ///
    /// Defaults the error text to `Missing Permissions`.
    pub fn error() -> Self {
        let mut factory = Self::with_event("VERIFICATION_ERROR");
        factory.error = Some("Missing Permissions".to_string());
        factory
    }

    /// Sets the user ID.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the username, also used as display name.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the code as typed by the user.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the granted role.
    pub fn role(mut self, role_id: impl Into<String>, name: impl Into<String>) -> Self {
        self.role = Some((role_id.into(), name.into()));
        self
    }

    /// Sets the error text.
    pub fn error_message(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Sets an absolute timestamp.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Sets the timestamp to `days` days before now.
    pub fn days_ago(mut self, days: i64) -> Self {
        self.timestamp = Utc::now() - Duration::days(days);
        self
    }

    /// Builds the record as a JSON value.
    pub fn build(self) -> Value {
        let mut record = json!({
            "timestamp": self.timestamp.to_rfc3339(),
            "type": self.event,
            "user": {
                "id": self.user_id,
                "username": self.username,
                "displayName": self.username,
            },
            "code": self.code,
            "guild": {
                "id": self.guild_id,
                "name": self.guild_name,
            },
        });

        if let Some((id, name)) = self.role {
            record["role"] = json!({ "id": id, "name": name });
        }
        if let Some(error) = self.error {
            record["error"] = json!(error);
        }

        record
    }
}

/// Creates a failure record for `user_id` with `code` at `timestamp`.
pub fn create_failure(user_id: &str, code: &str, timestamp: DateTime<Utc>) -> Value {
    VerificationLogFactory::failure()
        .user_id(user_id)
        .username(format!("user-{}", user_id))
        .code(code)
        .at(timestamp)
        .build()
}

/// Creates a success record for `user_id` with `code` at `timestamp`.
pub fn create_success(user_id: &str, code: &str, timestamp: DateTime<Utc>) -> Value {
    VerificationLogFactory::success()
        .user_id(user_id)
        .username(format!("user-{}", user_id))
        .code(code)
        .at(timestamp)
        .build()
}
