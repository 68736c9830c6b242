//! Bot state shared across all event handlers.
//!
//! `BotState` is built once in `main` and moved into the Serenity event handler.
//! Every field is cheap to clone: the stores share their locks and file paths, and
//! the configuration and code map are behind `Arc`s.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    config::Config,
    data::{log_store::LogStore, rate_limit::RateLimiter},
    model::code::CodeRoleMap,
};

#[derive(Clone)]
pub struct BotState {
    pub config: Arc<Config>,

    /// Verification log files.
    pub store: LogStore,

    /// Per-user verification attempt limiter.
    pub limiter: RateLimiter,

    /// Code to role mapping loaded at startup.
    pub codes: Arc<CodeRoleMap>,

    /// When this process started, for uptime reporting.
    pub started_at: DateTime<Utc>,
}

impl BotState {
    /// # Arguments
    /// - `config` - Loaded configuration; the stores are rooted at its log directory
    /// - `codes` - Verification code mapping
    pub fn new(config: Config, codes: CodeRoleMap) -> Self {
        let store = LogStore::new(&config.log_dir);
        let limiter = RateLimiter::new(&config.log_dir);

        Self {
            config: Arc::new(config),
            store,
            limiter,
            codes: Arc::new(codes),
            started_at: Utc::now(),
        }
    }
}
