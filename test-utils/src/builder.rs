use serde_json::Value;

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with seeded log files.
///
/// Provides a fluent interface for preparing the logs directory before the code
/// under test runs. Each seeded file is written when `build()` is called, in the
/// order it was added.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_records("verification_success.json", vec![record])
///     .with_file("rate_limits.json", json!({}))
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Files to write, as (file name, contents) pairs.
    files: Vec<(String, Value)>,
    /// Files to write verbatim, for corrupt-file scenarios.
    raw_files: Vec<(String, String)>,
}

impl TestBuilder {
    /// Creates a new builder with nothing seeded.
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            raw_files: Vec::new(),
        }
    }

    /// Seeds a category file with the given records as a JSON array.
    ///
    /// # Arguments
    /// - `file_name` - Category file name, e.g. `verification_failed.json`
    /// - `records` - Records, usually built with `VerificationLogFactory`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_records(self, file_name: &str, records: Vec<Value>) -> Self {
        self.with_file(file_name, Value::Array(records))
    }

    /// Seeds an arbitrary JSON file.
    pub fn with_file(mut self, file_name: &str, value: Value) -> Self {
        self.files.push((file_name.to_string(), value));
        self
    }

    /// Seeds a file with raw text that does not need to be valid JSON.
    pub fn with_raw_file(mut self, file_name: &str, contents: &str) -> Self {
        self.raw_files
            .push((file_name.to_string(), contents.to_string()));
        self
    }

    /// Builds the test context and writes all seeded files.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with seeded logs directory
    /// - `Err(TestError)` - Failed to create the directory or write a file
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        for (file_name, value) in &self.files {
            context.write_json(file_name, value)?;
        }

        for (file_name, contents) in &self.raw_files {
            context.write_raw(file_name, contents)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
