//! Factory methods for creating test data.
//!
//! Factories produce verification log records as `serde_json::Value` in the exact
//! layout the bot persists, so tests can seed log files through `TestBuilder` or
//! deserialize the values into the bot's own record type.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory::verification_log::VerificationLogFactory;
//!
//! let record = VerificationLogFactory::failure()
//!     .user_id("111")
//!     .code("admin")
//!     .days_ago(3)
//!     .build();
//! ```
//!
//! # Available Factories
//!
//! - `verification_log` - Success, failure and error records
//! - `helpers` - ID generation shared by the factories

pub mod helpers;
pub mod verification_log;

pub use verification_log::{create_failure, create_success, VerificationLogFactory};
