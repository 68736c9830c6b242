use super::*;
use crate::{
    data::rate_limit::RateLimiter,
    error::{
        verification::{VerificationError, VerificationErrorKind},
        AppError,
    },
    model::{
        code::CodeRoleMap,
        discord::role::GuildRole,
        security::SecurityAlert,
        verification::{LogGuild, LogUser},
    },
    service::{
        security::SecurityService,
        verification::{alert_for, RoleGateway, VerificationRequest, VerificationService},
    },
};
use serenity::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

mod check_input;
mod verify;

const VERIFY_CHANNEL: u64 = 700_000_000_000_000_001;
const OTHER_CHANNEL: u64 = 700_000_000_000_000_002;
const MEMBER_ROLE: u64 = 500_000_000_000_000_001;

/// In-memory guild standing in for the Serenity cache and HTTP client.
struct FakeGateway {
    roles: Vec<GuildRole>,
    held: Mutex<HashSet<u64>>,
    assignable: bool,
    grant_error: Option<String>,
    grants: Mutex<Vec<u64>>,
}

impl FakeGateway {
    fn with_member_role() -> Self {
        Self {
            roles: vec![GuildRole {
                role_id: MEMBER_ROLE,
                name: "Member".to_string(),
                position: 2,
                managed: false,
            }],
            held: Mutex::new(HashSet::new()),
            assignable: true,
            grant_error: None,
            grants: Mutex::new(Vec::new()),
        }
    }

    fn without_roles() -> Self {
        Self {
            roles: Vec::new(),
            ..Self::with_member_role()
        }
    }

    fn unassignable(mut self) -> Self {
        self.assignable = false;
        self
    }

    fn failing_grant(mut self, error: &str) -> Self {
        self.grant_error = Some(error.to_string());
        self
    }

    fn grants(&self) -> Vec<u64> {
        self.grants.lock().unwrap().clone()
    }
}

#[async_trait]
impl RoleGateway for FakeGateway {
    fn find_role(&self, role_id: u64) -> Option<GuildRole> {
        self.roles.iter().find(|r| r.role_id == role_id).cloned()
    }

    fn member_has_role(&self, role_id: u64) -> bool {
        self.held.lock().unwrap().contains(&role_id)
    }

    fn can_assign(&self, _role: &GuildRole) -> bool {
        self.assignable
    }

    async fn grant_role(&self, role_id: u64) -> Result<(), AppError> {
        if let Some(error) = &self.grant_error {
            return Err(AppError::InternalError(error.clone()));
        }
        self.grants.lock().unwrap().push(role_id);
        self.held.lock().unwrap().insert(role_id);
        Ok(())
    }
}

fn codes() -> CodeRoleMap {
    CodeRoleMap::new(HashMap::from([("Admin123".to_string(), MEMBER_ROLE)]))
}

fn request(user_id: &str, channel_id: u64, code: Option<&str>) -> VerificationRequest {
    VerificationRequest {
        channel_id,
        user: LogUser {
            id: user_id.to_string(),
            username: format!("user-{}", user_id),
            discriminator: None,
            display_name: format!("User {}", user_id),
        },
        guild: LogGuild {
            id: "900000000000000000".to_string(),
            name: "Test Guild".to_string(),
        },
        code: code.map(str::to_string),
    }
}
