//! JSON file persistence layer.
//!
//! The bot keeps no database. Verification attempts are appended to one JSON array
//! file per category and per-user attempt counters live in a single JSON object
//! file, all inside the configured logs directory. Each store serializes its own
//! read-modify-write cycles with an async mutex so concurrent gateway events in this
//! process never interleave on the same file.

pub mod log_store;
pub mod rate_limit;

#[cfg(test)]
mod test;
