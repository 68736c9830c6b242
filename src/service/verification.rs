//! Code-for-role verification flow.
//!
//! `VerificationService::verify` runs a request through a fixed sequence of gates
//! and stops at the first one that rejects it:
//!
//! 1. channel, 2. code present, 3. rate limit, 4. code lookup, 5. role exists,
//! 6. not already held, 7. bot can assign, 8. grant.
//!
//! Only the lookup and the grant write to the log files. Discord access goes
//! through the `RoleGateway` trait so the flow can run against a fake guild.

use chrono::{DateTime, Utc};
use serenity::async_trait;

use crate::{
    data::{
        log_store::LogStore,
        rate_limit::{RateLimitDecision, RateLimiter},
    },
    error::{verification::VerificationError, AppError},
    model::{
        code::CodeRoleMap,
        discord::role::GuildRole,
        security::SecurityAlert,
        verification::{LogGuild, LogRole, LogUser, VerificationLog},
    },
};

/// Role operations the verification flow needs from the guild.
///
/// The lookups are answered from cached guild state and must not block; only the
/// grant talks to Discord.
#[async_trait]
pub trait RoleGateway: Send + Sync {
    /// Looks up a role in the guild.
    fn find_role(&self, role_id: u64) -> Option<GuildRole>;

    /// Whether the requesting member already holds the role.
    fn member_has_role(&self, role_id: u64) -> bool;

    /// Whether the bot is allowed to assign the role.
    fn can_assign(&self, role: &GuildRole) -> bool;

    /// Adds the role to the requesting member.
    async fn grant_role(&self, role_id: u64) -> Result<(), AppError>;
}

/// A parsed `verify` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationRequest {
    /// Channel the command was sent in.
    pub channel_id: u64,
    pub user: LogUser,
    pub guild: LogGuild,
    /// First argument after the command name, if any.
    pub code: Option<String>,
}

/// Role granted by a successful verification.
#[derive(Debug, Clone, PartialEq)]
pub struct GrantedRole {
    pub role: GuildRole,
    pub code: String,
    pub timestamp: DateTime<Utc>,
}

pub struct VerificationService<'a> {
    store: &'a LogStore,
    limiter: &'a RateLimiter,
    codes: &'a CodeRoleMap,
    verify_channel_id: u64,
    prefix: &'a str,
}

impl<'a> VerificationService<'a> {
    /// # Arguments
    /// - `store` - Log store receiving success, failure and error records
    /// - `limiter` - Per-user attempt limiter
    /// - `codes` - Code to role mapping
    /// - `verify_channel_id` - The only channel verification is accepted in
    /// - `prefix` - Command prefix, used in the usage hint
    pub fn new(
        store: &'a LogStore,
        limiter: &'a RateLimiter,
        codes: &'a CodeRoleMap,
        verify_channel_id: u64,
        prefix: &'a str,
    ) -> Self {
        Self {
            store,
            limiter,
            codes,
            verify_channel_id,
            prefix,
        }
    }

    /// Runs the channel and input gates, which need no guild data or I/O.
    ///
    /// # Returns
    /// - `Ok(&str)` - The code to look up
    /// - `Err(VerificationError::WrongChannel)` - Not the verification channel
    /// - `Err(VerificationError::MissingCode)` - No code after the command name
    pub fn check_input<'r>(
        &self,
        request: &'r VerificationRequest,
    ) -> Result<&'r str, VerificationError> {
        if request.channel_id != self.verify_channel_id {
            return Err(VerificationError::WrongChannel);
        }

        match request.code.as_deref() {
            Some(code) if !code.is_empty() => Ok(code),
            _ => Err(VerificationError::MissingCode {
                prefix: self.prefix.to_string(),
            }),
        }
    }

    /// Verifies a request at `now`.
    ///
    /// # Arguments
    /// - `gateway` - Role access for the request's guild and member
    /// - `request` - The parsed invocation
    /// - `now` - Timestamp used for the rate limit and any log record
    ///
    /// # Returns
    /// - `Ok(GrantedRole)` - Role added and success record appended
    /// - `Err(VerificationError)` - The first gate that rejected the request
    pub async fn verify(
        &self,
        gateway: &dyn RoleGateway,
        request: &VerificationRequest,
        now: DateTime<Utc>,
    ) -> Result<GrantedRole, VerificationError> {
        let code = self.check_input(request)?;

        if let RateLimitDecision::Denied { seconds_remaining } =
            self.limiter.check_and_record(&request.user.id, now).await
        {
            tracing::warn!(
                "Verification by {} ({}) rate limited for {}s",
                request.user.username,
                request.user.id,
                seconds_remaining
            );
            return Err(VerificationError::RateLimited { seconds_remaining });
        }

        let Some(role_id) = self.codes.role_for(code) else {
            tracing::info!(
                "Invalid verification code from {} ({})",
                request.user.username,
                request.user.id
            );
            self.record(VerificationLog::failure(
                request.user.clone(),
                code,
                request.guild.clone(),
                now,
            ))
            .await;
            return Err(VerificationError::InvalidCode {
                code: code.to_string(),
            });
        };

        let Some(role) = gateway.find_role(role_id) else {
            tracing::error!(
                "Code maps to role {} which does not exist in guild {}",
                role_id,
                request.guild.id
            );
            return Err(VerificationError::RoleNotFound { role_id });
        };

        if gateway.member_has_role(role.role_id) {
            return Err(VerificationError::AlreadyVerified {
                role_name: role.name,
            });
        }

        if !gateway.can_assign(&role) {
            tracing::error!(
                "Cannot assign role {} ({}): missing Manage Roles or role is not below the bot's highest role",
                role.name,
                role.role_id
            );
            return Err(VerificationError::RoleNotAssignable {
                role_name: role.name,
            });
        }

        if let Err(e) = gateway.grant_role(role.role_id).await {
            let detail = e.to_string();
            tracing::error!(
                "Failed to add role {} to {} ({}): {}",
                role.name,
                request.user.username,
                request.user.id,
                detail
            );
            self.record(VerificationLog::error(
                request.user.clone(),
                code,
                detail.clone(),
                request.guild.clone(),
                now,
            ))
            .await;
            return Err(VerificationError::GrantFailed {
                role_name: role.name,
                detail,
            });
        }

        tracing::info!(
            "Verified {} ({}) with role {}",
            request.user.username,
            request.user.id,
            role.name
        );
        self.record(VerificationLog::success(
            request.user.clone(),
            code,
            LogRole {
                id: role.role_id.to_string(),
                name: role.name.clone(),
            },
            request.guild.clone(),
            now,
        ))
        .await;

        Ok(GrantedRole {
            role,
            code: code.to_string(),
            timestamp: now,
        })
    }

    async fn record(&self, log: VerificationLog) {
        let category = log.category();
        if let Err(e) = self.store.append(category, log).await {
            tracing::error!(
                "Failed to write verification log to {}: {}",
                category.file_name(),
                e
            );
        }
    }
}

/// Builds the security alert for a verification outcome, if it warrants one.
///
/// Successful grants and invalid codes are reported; every other outcome is not.
/// `attempted_at` stamps the failure alert and should match the failure record.
pub fn alert_for(
    request: &VerificationRequest,
    result: &Result<GrantedRole, VerificationError>,
    attempted_at: DateTime<Utc>,
) -> Option<SecurityAlert> {
    match result {
        Ok(granted) => Some(SecurityAlert::SuccessfulVerification {
            user: request.user.clone(),
            code: granted.code.clone(),
            role: LogRole {
                id: granted.role.role_id.to_string(),
                name: granted.role.name.clone(),
            },
            guild: request.guild.clone(),
            timestamp: granted.timestamp,
        }),
        Err(VerificationError::InvalidCode { code }) => Some(SecurityAlert::FailedVerification {
            user: request.user.clone(),
            code: code.clone(),
            guild: request.guild.clone(),
            timestamp: attempted_at,
        }),
        Err(_) => None,
    }
}
