//! Append-only verification log files.
//!
//! This module provides the `LogStore` for the three verification categories. Every
//! append rewrites the category's whole file; there is no partial-write recovery, so a
//! crash mid-write can leave a corrupt file. Reads treat a missing or corrupt file as
//! empty rather than failing the caller.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use tokio::fs;
use tokio::sync::Mutex;

use crate::{
    error::AppError,
    model::{
        security::RetentionSweep,
        verification::{LogCategory, VerificationLog},
    },
};

/// Maximum number of records kept per category file.
pub const MAX_RECORDS_PER_CATEGORY: usize = 1000;

/// Store for the verification category files inside a logs directory.
///
/// Cheap to clone; clones share the same lock and therefore serialize with each other.
#[derive(Clone, Debug)]
pub struct LogStore {
    dir: PathBuf,
    max_records: usize,
    lock: Arc<Mutex<()>>,
}

impl LogStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    ///
    /// # Arguments
    /// - `dir` - Logs directory
    ///
    /// # Returns
    /// - `LogStore` - Store keeping at most `MAX_RECORDS_PER_CATEGORY` per file
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            max_records: MAX_RECORDS_PER_CATEGORY,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Path of a category's file.
    pub fn path_for(&self, category: LogCategory) -> PathBuf {
        self.dir.join(category.file_name())
    }

    /// Creates the logs directory if it does not exist.
    pub async fn init(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Appends a record to its category file.
    ///
    /// Loads the existing records (empty if the file is missing or not a JSON array),
    /// pushes the new one, drops the oldest records beyond the cap and rewrites the
    /// file. Existing records are carried over as stored, including ones that do not
    /// match `VerificationLog`.
    ///
    /// # Arguments
    /// - `category` - Category file to append to
    /// - `record` - Record to append
    ///
    /// # Returns
    /// - `Ok(())` - File rewritten with the new record
    /// - `Err(AppError::IoErr)` - File could not be read or written
    /// - `Err(AppError::JsonErr)` - Records could not be serialized
    pub async fn append(
        &self,
        category: LogCategory,
        record: VerificationLog,
    ) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;

        fs::create_dir_all(&self.dir).await?;

        let mut records = match self.load_raw(category).await? {
            RawFile::Records(records) => records,
            RawFile::Missing | RawFile::Corrupt => Vec::new(),
        };
        records.push(serde_json::to_value(record)?);

        if records.len() > self.max_records {
            let excess = records.len() - self.max_records;
            records.drain(..excess);
        }

        self.write(category, &records).await
    }

    /// Reads every record of a category in file order.
    ///
    /// A missing, unreadable or corrupt file yields an empty vector. Records that do
    /// not match `VerificationLog` are skipped.
    pub async fn read_all(&self, category: LogCategory) -> Vec<VerificationLog> {
        let _guard = self.lock.lock().await;

        let records = match self.load_raw(category).await {
            Ok(RawFile::Records(records)) => records,
            Ok(RawFile::Missing | RawFile::Corrupt) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", category.file_name(), e);
                return Vec::new();
            }
        };

        let total = records.len();
        let logs: Vec<VerificationLog> = records
            .into_iter()
            .filter_map(|record| serde_json::from_value(record).ok())
            .collect();

        if logs.len() < total {
            tracing::warn!(
                "Skipped {} malformed records in {}",
                total - logs.len(),
                category.file_name()
            );
        }

        logs
    }

    /// Removes records older than `retention_days` from a category file at `now`.
    ///
    /// Records with `timestamp >= now - retention_days` are kept, as are records
    /// without a readable timestamp. A file that is present but not a JSON array is
    /// left untouched.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of records removed; 0 if the file does not exist
    /// - `Err(AppError)` - File could not be read or rewritten
    pub async fn prune(
        &self,
        category: LogCategory,
        retention_days: i64,
        now: DateTime<Utc>,
    ) -> Result<usize, AppError> {
        let _guard = self.lock.lock().await;

        let mut records = match self.load_raw(category).await? {
            RawFile::Records(records) => records,
            RawFile::Missing | RawFile::Corrupt => return Ok(0),
        };

        let cutoff = now - Duration::days(retention_days);
        let before = records.len();
        records.retain(|record| record_timestamp(record).map_or(true, |at| at >= cutoff));
        let removed = before - records.len();

        self.write(category, &records).await?;

        tracing::info!(
            "Cleaned {} old entries from {}",
            removed,
            category.file_name()
        );

        Ok(removed)
    }

    /// Runs the retention sweep over every category.
    ///
    /// A category that fails to sweep is logged and left out of the result; the
    /// remaining categories are still swept.
    pub async fn prune_all(&self, retention_days: i64) -> RetentionSweep {
        self.prune_all_at(retention_days, Utc::now()).await
    }

    /// Same as `prune_all` with an explicit current time.
    pub async fn prune_all_at(&self, retention_days: i64, now: DateTime<Utc>) -> RetentionSweep {
        let mut sweep = RetentionSweep {
            retention_days,
            removed: Vec::new(),
        };

        for category in LogCategory::ALL {
            match self.prune(category, retention_days, now).await {
                Ok(count) => sweep.removed.push((category, count)),
                Err(e) => tracing::error!(
                    "Failed to clean old entries from {}: {}",
                    category.file_name(),
                    e
                ),
            }
        }

        sweep
    }

    async fn load_raw(&self, category: LogCategory) -> Result<RawFile, AppError> {
        let path = self.path_for(category);

        let data = match fs::read_to_string(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(RawFile::Missing),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&data) {
            Ok(records) => Ok(RawFile::Records(records)),
            Err(e) => {
                tracing::warn!("Treating unparsable {} as empty: {}", path.display(), e);
                Ok(RawFile::Corrupt)
            }
        }
    }

    async fn write(&self, category: LogCategory, records: &[Value]) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(self.path_for(category), json).await?;
        Ok(())
    }
}

/// Contents of a category file before records are typed.
enum RawFile {
    Missing,
    /// Present but not a JSON array.
    Corrupt,
    Records(Vec<Value>),
}

/// Reads the `timestamp` of a stored record, if it has a valid one.
fn record_timestamp(record: &Value) -> Option<DateTime<Utc>> {
    let timestamp = record.get("timestamp")?.as_str()?;
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|at| at.with_timezone(&Utc))
}
