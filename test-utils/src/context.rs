use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

use crate::error::TestError;

/// Test context owning a temporary logs directory.
///
/// The directory and everything in it is removed when the context is dropped, so
/// keep the context alive for as long as the code under test uses the path.
pub struct TestContext {
    /// Temporary directory acting as the bot's logs directory.
    dir: TempDir,
}

impl TestContext {
    /// Creates a new context with an empty logs directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with a fresh temporary directory
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn new() -> Result<Self, TestError> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Path of the temporary logs directory.
    pub fn log_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a file inside the logs directory.
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.dir.path().join(file_name)
    }

    /// Writes a JSON value to a file inside the logs directory.
    ///
    /// # Arguments
    /// - `file_name` - File name relative to the logs directory
    /// - `value` - JSON value to write, pretty-printed like the bot writes it
    ///
    /// # Returns
    /// - `Ok(())` - File written
    /// - `Err(TestError)` - Serialization or write failure
    pub fn write_json(&self, file_name: &str, value: &Value) -> Result<(), TestError> {
        let json = serde_json::to_string_pretty(value)?;
        std::fs::write(self.path(file_name), json)?;
        Ok(())
    }

    /// Writes raw text to a file inside the logs directory.
    ///
    /// Used to simulate corrupt files.
    pub fn write_raw(&self, file_name: &str, contents: &str) -> Result<(), TestError> {
        std::fs::write(self.path(file_name), contents)?;
        Ok(())
    }

    /// Reads and parses a JSON file from the logs directory.
    ///
    /// # Returns
    /// - `Ok(Value)` - Parsed file contents
    /// - `Err(TestError)` - File missing or not valid JSON
    pub fn read_json(&self, file_name: &str) -> Result<Value, TestError> {
        let data = std::fs::read_to_string(self.path(file_name))?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Whether a file exists inside the logs directory.
    pub fn exists(&self, file_name: &str) -> bool {
        self.path(file_name).exists()
    }
}
