use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Creating the temporary directory or writing a seed file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A seed file could not be serialized or a written file could not be parsed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
