//! Abuse detection over the verification logs.
//!
//! The analysis is a batch pass over the success and failure files. It is run on
//! demand by the security command and never blocks verification itself.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::{
    data::log_store::LogStore,
    model::{
        security::{
            RapidAttempt, Recommendation, RepeatedFailure, RetentionSweep, SecurityReport,
            SuspiciousActivity, SuspiciousCode, VerificationStats,
        },
        verification::{LogCategory, VerificationLog},
    },
};

/// Failures per user at which the user is reported.
pub const REPEATED_FAILURE_THRESHOLD: usize = 3;

/// Consecutive failures by one user closer than this many seconds are reported as
/// rapid.
pub const RAPID_ATTEMPT_GAP_SECS: i64 = 60;

/// Retention used by the `clean` subcommand and the daily sweep.
pub const LOG_RETENTION_DAYS: i64 = 30;

/// Substrings that mark a code as a likely credential guess. Matched against the
/// lowercased code.
const SUSPICIOUS_PATTERNS: [&str; 8] = [
    "admin",
    "owner",
    "moderator",
    "root",
    "sudo",
    "password",
    "secret",
    "123456",
];

pub struct SecurityService<'a> {
    store: &'a LogStore,
}

impl<'a> SecurityService<'a> {
    pub fn new(store: &'a LogStore) -> Self {
        Self { store }
    }

    /// Computes verification statistics over the last `window_days` days.
    pub async fn compute_stats(&self, window_days: i64) -> VerificationStats {
        self.compute_stats_at(window_days, Utc::now()).await
    }

    /// Computes verification statistics over the `window_days` days before `now`.
    ///
    /// # Arguments
    /// - `window_days` - Length of the trailing window
    /// - `now` - End of the window
    ///
    /// # Returns
    /// - `VerificationStats` - Counts, success rate and suspicious activity for
    ///   records with `timestamp >= now - window_days`
    pub async fn compute_stats_at(&self, window_days: i64, now: DateTime<Utc>) -> VerificationStats {
        let cutoff = now - Duration::days(window_days);

        let successes = self.store.read_all(LogCategory::Success).await;
        let failures: Vec<VerificationLog> = self
            .store
            .read_all(LogCategory::Failure)
            .await
            .into_iter()
            .filter(|log| log.timestamp >= cutoff)
            .collect();

        let successful = successes
            .iter()
            .filter(|log| log.timestamp >= cutoff)
            .count();
        let failed = failures.len();
        let total = successful + failed;

        let success_rate = if total == 0 {
            0.0
        } else {
            successful as f64 / total as f64 * 100.0
        };

        VerificationStats {
            period_days: window_days,
            successful,
            failed,
            total,
            success_rate,
            suspicious_activity: detect_suspicious_activity(&failures),
        }
    }

    /// Generates the security report for the last 7 and 30 days.
    pub async fn generate_report(&self) -> SecurityReport {
        self.generate_report_at(Utc::now()).await
    }

    /// Generates the security report as of `now`.
    ///
    /// Recommendations are derived from the 7-day statistics only.
    pub async fn generate_report_at(&self, now: DateTime<Utc>) -> SecurityReport {
        let last_7_days = self.compute_stats_at(7, now).await;
        let last_30_days = self.compute_stats_at(30, now).await;
        let recommendations = recommendations_for(&last_7_days);

        SecurityReport {
            generated_at: now,
            last_7_days,
            last_30_days,
            recommendations,
        }
    }

    /// Removes log records older than `retention_days` from every category.
    pub async fn clean_old_logs(&self, retention_days: i64) -> RetentionSweep {
        let sweep = self.store.prune_all(retention_days).await;

        tracing::info!(
            "Retention sweep removed {} records older than {} days",
            sweep.total_removed(),
            retention_days
        );

        sweep
    }
}

/// Whether a code looks like a credential guess.
pub fn is_suspicious_code(code: &str) -> bool {
    let lowered = code.to_lowercase();
    SUSPICIOUS_PATTERNS
        .iter()
        .any(|pattern| lowered.contains(pattern))
}

/// Runs the suspicious activity heuristics over a set of failures.
///
/// # Arguments
/// - `failures` - Failed verification records, in log order
///
/// # Returns
/// - `SuspiciousActivity` - Users with at least three failures, every failure with
///   a suspicious code, and every pair of time-adjacent failures by the same user
///   less than a minute apart
pub fn detect_suspicious_activity(failures: &[VerificationLog]) -> SuspiciousActivity {
    let mut repeated_failures: BTreeMap<String, RepeatedFailure> = BTreeMap::new();
    for log in failures {
        repeated_failures
            .entry(log.user.id.clone())
            .and_modify(|entry| {
                entry.count += 1;
                entry.codes.push(log.code.clone());
            })
            .or_insert_with(|| RepeatedFailure {
                count: 1,
                codes: vec![log.code.clone()],
                user: log.user.clone(),
            });
    }
    repeated_failures.retain(|_, entry| entry.count >= REPEATED_FAILURE_THRESHOLD);

    let suspicious_codes = failures
        .iter()
        .filter(|log| is_suspicious_code(&log.code))
        .map(|log| SuspiciousCode {
            user: log.user.clone(),
            code: log.code.clone(),
            timestamp: log.timestamp,
        })
        .collect();

    // Vec::sort_by_key is stable, so equal timestamps keep log order
    let mut sorted: Vec<&VerificationLog> = failures.iter().collect();
    sorted.sort_by_key(|log| log.timestamp);

    let max_gap = Duration::seconds(RAPID_ATTEMPT_GAP_SECS);
    let rapid_attempts = sorted
        .windows(2)
        .filter_map(|pair| {
            let (earlier, later) = (pair[0], pair[1]);
            let gap = later.timestamp - earlier.timestamp;

            (earlier.user.id == later.user.id && gap < max_gap).then(|| RapidAttempt {
                user: earlier.user.clone(),
                attempts: [earlier.clone(), later.clone()],
                gap,
            })
        })
        .collect();

    SuspiciousActivity {
        repeated_failures,
        suspicious_codes,
        rapid_attempts,
    }
}

/// Derives report recommendations from a week of statistics.
pub fn recommendations_for(stats: &VerificationStats) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if stats.failed > stats.successful {
        recommendations.push(Recommendation::ReviewCodes);
    }
    if !stats.suspicious_activity.suspicious_codes.is_empty() {
        recommendations.push(Recommendation::MonitorBruteForce);
    }
    if !stats.suspicious_activity.repeated_failures.is_empty() {
        recommendations.push(Recommendation::StricterRateLimit);
    }

    recommendations
}
