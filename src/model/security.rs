//! Derived security statistics.
//!
//! None of these types are persisted. They are computed from the verification logs
//! on demand and rendered by the security command.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::model::verification::{LogCategory, LogGuild, LogRole, LogUser, VerificationLog};

/// Failures by a single user inside the analysis window.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatedFailure {
    /// Number of failed attempts.
    pub count: usize,
    /// Codes tried, in log order.
    pub codes: Vec<String>,
    /// Identity from the user's first failure in the window.
    pub user: LogUser,
}

/// A failed attempt whose code resembles a credential guess.
#[derive(Debug, Clone, PartialEq)]
pub struct SuspiciousCode {
    pub user: LogUser,
    pub code: String,
    pub timestamp: DateTime<Utc>,
}

/// Two consecutive failures by the same user less than a minute apart.
#[derive(Debug, Clone, PartialEq)]
pub struct RapidAttempt {
    pub user: LogUser,
    /// The earlier and the later attempt.
    pub attempts: [VerificationLog; 2],
    /// Time between the two attempts.
    pub gap: Duration,
}

/// Findings of the suspicious activity heuristics.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SuspiciousActivity {
    /// Users with three or more failures, keyed by user ID.
    pub repeated_failures: BTreeMap<String, RepeatedFailure>,
    pub suspicious_codes: Vec<SuspiciousCode>,
    pub rapid_attempts: Vec<RapidAttempt>,
}

/// Verification counts over a trailing window of days.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationStats {
    pub period_days: i64,
    pub successful: usize,
    pub failed: usize,
    pub total: usize,
    /// Percentage of successful attempts in `[0, 100]`, `0` when there were none.
    pub success_rate: f64,
    pub suspicious_activity: SuspiciousActivity,
}

impl VerificationStats {
    /// Success rate formatted with two decimals, e.g. `66.67%`.
    ///
    /// An empty window renders as `0%`.
    pub fn success_rate_display(&self) -> String {
        if self.total == 0 {
            return "0%".to_string();
        }
        format!("{:.2}%", self.success_rate)
    }
}

/// Follow-up actions suggested by the security report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// More failures than successes in the last week.
    ReviewCodes,
    /// At least one code matched a suspicious pattern.
    MonitorBruteForce,
    /// At least one user failed three or more times.
    StricterRateLimit,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::ReviewCodes => {
                "High failure rate detected - consider reviewing verification codes"
            }
            Self::MonitorBruteForce => {
                "Suspicious code attempts detected - monitor for potential brute force attacks"
            }
            Self::StricterRateLimit => {
                "Users with multiple failed attempts detected - consider implementing stricter rate limiting"
            }
        };
        f.write_str(text)
    }
}

/// Security report over the last 7 and 30 days.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityReport {
    pub generated_at: DateTime<Utc>,
    pub last_7_days: VerificationStats,
    pub last_30_days: VerificationStats,
    pub recommendations: Vec<Recommendation>,
}

/// Outcome of a retention sweep over the category files.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RetentionSweep {
    pub retention_days: i64,
    /// Records removed per category. Categories whose file was missing report 0;
    /// categories that failed to sweep are absent.
    pub removed: Vec<(LogCategory, usize)>,
}

impl RetentionSweep {
    /// Total records removed across all categories.
    pub fn total_removed(&self) -> usize {
        self.removed.iter().map(|(_, count)| count).sum()
    }
}

/// Verification activity forwarded to the security alert channel.
#[derive(Debug, Clone, PartialEq)]
pub enum SecurityAlert {
    SuccessfulVerification {
        user: LogUser,
        code: String,
        role: LogRole,
        guild: LogGuild,
        timestamp: DateTime<Utc>,
    },
    FailedVerification {
        user: LogUser,
        code: String,
        guild: LogGuild,
        timestamp: DateTime<Utc>,
    },
}
