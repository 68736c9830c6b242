//! Rejections produced by the verification flow.
//!
//! Every variant is shown to the requester, so `Display` is the reply text. Details
//! that must not leak to the requester (API error text) are kept in fields and only
//! written to the error log.

use thiserror::Error;

/// Broad category of a verification rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationErrorKind {
    /// Missing or invalid code, wrong channel.
    UserInput,
    /// Role misconfigured, already held, or out of the bot's reach.
    Permission,
    /// Too many attempts inside the current window.
    RateLimit,
    /// Role grant failed on Discord's side.
    Operational,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// The command was used outside the designated verification channel.
    #[error("❌ The verify command can only be used in the verification channel.")]
    WrongChannel,

    /// No code was supplied after the command name.
    #[error("❌ Please provide a verification code. Example: `{prefix}verify Admin123`")]
    MissingCode {
        /// Command prefix used in the usage hint
        prefix: String,
    },

    /// The requester exceeded the attempt limit for the current window.
    #[error("❌ Too many verification attempts. Try again in {seconds_remaining} seconds.")]
    RateLimited {
        /// Seconds until the requester's window resets
        seconds_remaining: u64,
    },

    /// The code does not map to any role.
    #[error("❌ Invalid code.")]
    InvalidCode {
        /// The code as typed by the requester
        code: String,
    },

    /// The code maps to a role that no longer exists in the guild.
    #[error("❌ Role not found. Check the role ID configured for this code.")]
    RoleNotFound {
        /// Role ID from the code mapping
        role_id: u64,
    },

    /// The requester already holds the role.
    #[error("❌ You already have the \"{role_name}\" role.")]
    AlreadyVerified {
        /// Name of the role
        role_name: String,
    },

    /// The bot is not allowed to assign the role.
    #[error("❌ I can't assign the \"{role_name}\" role. Make sure my role is above it.")]
    RoleNotAssignable {
        /// Name of the role
        role_name: String,
    },

    /// Discord rejected the role grant.
    ///
    /// `detail` is logged to the error category and never shown to the requester.
    #[error("❌ Failed to assign the role. Make sure I have sufficient permissions.")]
    GrantFailed {
        /// Name of the role
        role_name: String,
        /// Underlying API error text
        detail: String,
    },
}

impl VerificationError {
    /// Returns the broad category of this rejection.
    pub fn kind(&self) -> VerificationErrorKind {
        match self {
            Self::WrongChannel | Self::MissingCode { .. } | Self::InvalidCode { .. } => {
                VerificationErrorKind::UserInput
            }
            Self::RoleNotFound { .. }
            | Self::AlreadyVerified { .. }
            | Self::RoleNotAssignable { .. } => VerificationErrorKind::Permission,
            Self::RateLimited { .. } => VerificationErrorKind::RateLimit,
            Self::GrantFailed { .. } => VerificationErrorKind::Operational,
        }
    }
}
