//! Gatekeeper Test Utils
//!
//! Provides shared testing utilities for the gatekeeper bot. This crate offers a
//! builder for test contexts backed by a temporary logs directory, factories for
//! verification log records, and factories for Serenity model objects.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for seeding the logs directory
//! - **TestContext**: Test environment owning the temporary logs directory
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Verification log records as JSON values
//! - **serenity**: Serenity `Role` and `User` objects deserialized from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory::verification_log::VerificationLogFactory};
//!
//! #[tokio::test]
//! async fn test_store_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_records(
//!             "verification_failed.json",
//!             vec![VerificationLogFactory::failure().code("admin").build()],
//!         )
//!         .build()?;
//!
//!     let dir = test.log_dir();
//!     // Point the store under test at `dir`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
