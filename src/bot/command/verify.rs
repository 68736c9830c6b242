use chrono::Utc;
use serenity::all::{Context, Message};

use crate::{
    bot::{
        alert::send_security_alert,
        gateway::SerenityRoleGateway,
        transient::{reply_transient, SHORT_REPLY_TTL},
    },
    error::{
        verification::{VerificationError, VerificationErrorKind},
        AppError,
    },
    model::verification::{LogGuild, LogUser},
    service::verification::{alert_for, VerificationRequest, VerificationService},
    state::BotState,
};

/// Handles `verify <code>`.
///
/// Runs the verification flow, posts the security alert for grants and invalid
/// codes, and answers with a reply that deletes itself with the command message.
pub async fn run(
    ctx: &Context,
    state: &BotState,
    message: &Message,
    args: &[&str],
) -> Result<(), AppError> {
    let guild_id = message
        .guild_id
        .ok_or_else(|| AppError::InternalError("verify used outside a guild".to_string()))?;

    let request = VerificationRequest {
        channel_id: message.channel_id.get(),
        user: LogUser::from_user(&message.author),
        guild: LogGuild {
            id: guild_id.to_string(),
            name: guild_id
                .name(ctx)
                .unwrap_or_else(|| guild_id.to_string()),
        },
        code: args.first().map(|code| code.to_string()),
    };

    let service = VerificationService::new(
        &state.store,
        &state.limiter,
        &state.codes,
        state.config.verify_channel_id,
        &state.config.prefix,
    );

    let attempted_at = Utc::now();
    let result = match service.check_input(&request) {
        Ok(_) => {
            let gateway = SerenityRoleGateway::from_cache(ctx, guild_id, message)?;
            service.verify(&gateway, &request, attempted_at).await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = &result {
        log_rejection(&request, e);
    }

    if let Some(alert) = alert_for(&request, &result, attempted_at) {
        send_security_alert(ctx, state.config.security_alert_channel_id, &alert).await;
    }

    let reply = match &result {
        Ok(granted) => format!(
            "✅ Verification successful! Role `{}` has been granted.",
            granted.role.name
        ),
        Err(e) => e.to_string(),
    };

    reply_transient(ctx, message, reply, SHORT_REPLY_TTL).await?;

    Ok(())
}

fn log_rejection(request: &VerificationRequest, error: &VerificationError) {
    match error.kind() {
        VerificationErrorKind::Operational => tracing::error!(
            "Verification by {} ({}) failed: {:?}",
            request.user.username,
            request.user.id,
            error
        ),
        VerificationErrorKind::Permission | VerificationErrorKind::RateLimit => tracing::warn!(
            "Verification by {} ({}) rejected: {:?}",
            request.user.username,
            request.user.id,
            error
        ),
        VerificationErrorKind::UserInput => tracing::debug!(
            "Verification by {} ({}) rejected: {:?}",
            request.user.username,
            request.user.id,
            error
        ),
    }
}
