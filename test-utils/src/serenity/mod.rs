//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Role, User) for testing purposes. These factories create valid Serenity
//! objects by deserializing JSON, simulating what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{role::create_test_role, user::create_test_user};
//!
//! #[test]
//! fn test_role_conversion() {
//!     let member_role = create_test_role(222222222, "Member", 0x00FF00, 1);
//!     let user = create_test_user(333333333, "alice", Some("Alice"));
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects
//! - `user::create_test_user` - Create Serenity User objects

pub mod role;
pub mod user;

// Re-export commonly used functions for convenience
pub use role::{create_managed_role, create_test_role};
pub use user::create_test_user;
