//! Service layer for the bot's policy logic.
//!
//! Services sit between the command handlers and the JSON stores. They hold no
//! Discord types beyond the role gateway seam, so the verification flow and the
//! security analysis can be exercised without a gateway connection.

pub mod host;
pub mod security;
pub mod verification;
