//! Domain models and parameter types.
//!
//! These types flow between the bot layer, the services and the JSON-backed data
//! layer. Types that are persisted keep the on-disk field names stable through
//! serde attributes; the rest are derived values that only live in memory.

pub mod code;
pub mod discord;
pub mod host;
pub mod security;
pub mod verification;
