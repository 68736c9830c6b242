use crate::{
    error::AppError,
    model::verification::{LogCategory, VerificationLog},
};
use serde_json::Value;

mod log_store;

/// Deserializes a factory-built JSON record into the bot's record type.
fn record(value: Value) -> VerificationLog {
    serde_json::from_value(value).expect("factory produced an invalid record")
}
