//! Verification log records.
//!
//! A `VerificationLog` is written for every verification attempt that reaches the
//! code lookup. Records are grouped into one JSON array file per `LogCategory` and
//! never edited after they are appended.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serenity::all::User;

/// Log file category. Each category is persisted in its own file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogCategory {
    /// Roles granted through a valid code.
    Success,
    /// Codes that did not map to any role.
    Failure,
    /// Valid codes whose role grant failed on Discord's side.
    Error,
}

impl LogCategory {
    /// All categories in sweep order.
    pub const ALL: [LogCategory; 3] = [Self::Success, Self::Failure, Self::Error];

    /// File name of the category inside the logs directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Success => "verification_success.json",
            Self::Failure => "verification_failed.json",
            Self::Error => "verification_errors.json",
        }
    }
}

/// Event tag stored in the `type` field of each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationEvent {
    SuccessfulVerification,
    FailedVerification,
    VerificationError,
}

impl VerificationEvent {
    /// Category file the event is written to.
    pub fn category(self) -> LogCategory {
        match self {
            Self::SuccessfulVerification => LogCategory::Success,
            Self::FailedVerification => LogCategory::Failure,
            Self::VerificationError => LogCategory::Error,
        }
    }
}

/// Identity of the user who attempted verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogUser {
    /// Discord user ID as a string.
    pub id: String,
    /// Discord username.
    pub username: String,
    /// Legacy four digit discriminator, absent for migrated usernames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    /// Global display name, falling back to the username.
    #[serde(default)]
    pub display_name: String,
}

impl LogUser {
    /// Captures the identity fields of a Serenity user.
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.name.clone(),
            discriminator: user.discriminator.map(|d| format!("{:04}", d.get())),
            display_name: user
                .global_name
                .clone()
                .unwrap_or_else(|| user.name.clone()),
        }
    }
}

/// Role granted by a successful verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRole {
    pub id: String,
    pub name: String,
}

/// Guild the verification happened in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogGuild {
    pub id: String,
    pub name: String,
}

/// A single verification attempt as persisted in the category files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationLog {
    /// When the attempt was recorded.
    pub timestamp: DateTime<Utc>,
    /// Outcome of the attempt.
    #[serde(rename = "type")]
    pub event: VerificationEvent,
    /// Who attempted verification.
    pub user: LogUser,
    /// Code exactly as typed by the user.
    pub code: String,
    /// Granted role, present on success only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<LogRole>,
    /// Grant failure detail, present on error only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Guild the attempt was made in.
    pub guild: LogGuild,
}

impl VerificationLog {
    /// Builds a record for a role granted through a valid code.
    pub fn success(
        user: LogUser,
        code: impl Into<String>,
        role: LogRole,
        guild: LogGuild,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            event: VerificationEvent::SuccessfulVerification,
            user,
            code: code.into(),
            role: Some(role),
            error: None,
            guild,
        }
    }

    /// Builds a record for a code that matched no role.
    pub fn failure(
        user: LogUser,
        code: impl Into<String>,
        guild: LogGuild,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            event: VerificationEvent::FailedVerification,
            user,
            code: code.into(),
            role: None,
            error: None,
            guild,
        }
    }

    /// Builds a record for a valid code whose role grant failed.
    pub fn error(
        user: LogUser,
        code: impl Into<String>,
        error: impl Into<String>,
        guild: LogGuild,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            event: VerificationEvent::VerificationError,
            user,
            code: code.into(),
            role: None,
            error: Some(error.into()),
            guild,
        }
    }

    /// Category file this record belongs to.
    pub fn category(&self) -> LogCategory {
        self.event.category()
    }
}
