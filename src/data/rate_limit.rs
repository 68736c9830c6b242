//! Per-user verification rate limiting.
//!
//! This module provides the `RateLimiter`, a fixed window attempt counter persisted as
//! a JSON object keyed by user ID. A user's window opens on their first attempt and
//! resets on the first attempt after it has expired. Denied attempts leave the entry
//! untouched.
//!
//! The limiter fails open: if the table cannot be read or written, the attempt is
//! allowed and the failure is only logged.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;

use crate::error::AppError;

/// File name of the rate limit table inside the logs directory.
pub const RATE_LIMIT_FILE: &str = "rate_limits.json";

/// Attempts allowed per window.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Length of a user's attempt window.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(300);

/// Attempt counter for a single user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitEntry {
    /// Attempts made in the current window, at least 1.
    pub attempts: u32,
    /// Start of the current window in Unix milliseconds.
    pub first_attempt: i64,
}

/// Persisted table of attempt counters keyed by user ID.
pub type RateLimitTable = BTreeMap<String, RateLimitEntry>;

/// Result of a rate limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    /// The attempt was counted and may proceed.
    Allowed,
    /// The user has used up their attempts for the current window.
    Denied {
        /// Whole seconds until the window expires, rounded up.
        seconds_remaining: u64,
    },
}

impl RateLimitDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Applies one attempt by `user_id` at `now_ms` to the table.
///
/// # Arguments
/// - `table` - Attempt counters, updated in place on allowed attempts
/// - `user_id` - User making the attempt
/// - `now_ms` - Current time in Unix milliseconds
/// - `max_attempts` - Attempts allowed per window
/// - `window_ms` - Window length in milliseconds
///
/// # Returns
/// - `RateLimitDecision::Allowed` - Entry created, reset or incremented
/// - `RateLimitDecision::Denied` - Entry at the limit with its window still open
pub fn record_attempt(
    table: &mut RateLimitTable,
    user_id: &str,
    now_ms: i64,
    max_attempts: u32,
    window_ms: i64,
) -> RateLimitDecision {
    let fresh = RateLimitEntry {
        attempts: 1,
        first_attempt: now_ms,
    };

    let Some(entry) = table.get_mut(user_id) else {
        table.insert(user_id.to_string(), fresh);
        return RateLimitDecision::Allowed;
    };

    let elapsed = now_ms - entry.first_attempt;

    if elapsed > window_ms {
        *entry = fresh;
        return RateLimitDecision::Allowed;
    }

    if entry.attempts >= max_attempts {
        let remaining_ms = window_ms - elapsed;
        let seconds_remaining = (remaining_ms.max(0) as u64).div_ceil(1000);
        return RateLimitDecision::Denied { seconds_remaining };
    }

    entry.attempts += 1;
    RateLimitDecision::Allowed
}

/// Verification rate limiter backed by a JSON file.
///
/// Cheap to clone; clones share the same lock. The lock covers the whole
/// read-modify-write of the table, so two attempts by the same user inside this
/// process are always counted separately.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    path: PathBuf,
    max_attempts: u32,
    window: Duration,
    lock: Arc<Mutex<()>>,
}

impl RateLimiter {
    /// Creates a limiter storing its table in `log_dir` with the default limits.
    pub fn new(log_dir: &Path) -> Self {
        Self {
            path: log_dir.join(RATE_LIMIT_FILE),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            window: DEFAULT_WINDOW,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Overrides the attempt limit and window length.
    #[cfg(test)]
    pub fn with_limits(mut self, max_attempts: u32, window: Duration) -> Self {
        self.max_attempts = max_attempts;
        self.window = window;
        self
    }

    #[cfg(test)]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Checks and records an attempt by `user_id` at `now`.
    ///
    /// Allowed attempts persist the updated table before returning. Any I/O or
    /// serialization failure is logged and the attempt is allowed.
    pub async fn check_and_record(&self, user_id: &str, now: DateTime<Utc>) -> RateLimitDecision {
        let _guard = self.lock.lock().await;

        match self.try_check_and_record(user_id, now).await {
            Ok(decision) => decision,
            Err(e) => {
                tracing::error!(
                    "Rate limit check failed for user {}, allowing attempt: {}",
                    user_id,
                    e
                );
                RateLimitDecision::Allowed
            }
        }
    }

    /// Returns the stored entry for a user, if any.
    #[cfg(test)]
    pub async fn entry(&self, user_id: &str) -> Option<RateLimitEntry> {
        let _guard = self.lock.lock().await;

        match self.load().await {
            Ok(table) => table.get(user_id).copied(),
            Err(e) => {
                tracing::warn!("Failed to read rate limit table: {}", e);
                None
            }
        }
    }

    async fn try_check_and_record(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<RateLimitDecision, AppError> {
        let mut table = self.load().await?;

        let window_ms = i64::try_from(self.window.as_millis()).unwrap_or(i64::MAX);
        let decision = record_attempt(
            &mut table,
            user_id,
            now.timestamp_millis(),
            self.max_attempts,
            window_ms,
        );

        if decision.is_allowed() {
            self.save(&table).await?;
        } else {
            tracing::debug!("Rate limited verification attempt by user {}", user_id);
        }

        Ok(decision)
    }

    async fn load(&self) -> Result<RateLimitTable, AppError> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(RateLimitTable::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&data).unwrap_or_else(|e| {
            tracing::warn!(
                "Treating unparsable {} as empty: {}",
                self.path.display(),
                e
            );
            RateLimitTable::new()
        }))
    }

    async fn save(&self, table: &RateLimitTable) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(table)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}
