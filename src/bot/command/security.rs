use serenity::all::{Context, CreateMessage, EditMessage, Message};

use crate::{
    bot::embed::security::{clean_embed, report_embed, security_help_embed, stats_embed},
    error::AppError,
    service::security::{SecurityService, LOG_RETENTION_DAYS},
    state::BotState,
};

/// `security` subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecuritySubcommand {
    Stats,
    Report,
    Clean,
    Help,
}

impl SecuritySubcommand {
    /// Parses the first argument, defaulting to `stats`. Unknown values show help.
    pub fn parse(arg: Option<&str>) -> Self {
        match arg.map(str::to_lowercase).as_deref() {
            None | Some("stats") => Self::Stats,
            Some("report") => Self::Report,
            Some("clean") => Self::Clean,
            Some(_) => Self::Help,
        }
    }
}

/// Handles `security [stats|report|clean]`.
///
/// Replies stay in the channel; only verification traffic is cleaned up.
pub async fn run(
    ctx: &Context,
    state: &BotState,
    message: &Message,
    args: &[&str],
) -> Result<(), AppError> {
    let service = SecurityService::new(&state.store);

    let embed = match SecuritySubcommand::parse(args.first().copied()) {
        SecuritySubcommand::Stats => {
            let week = service.compute_stats(7).await;
            let month = service.compute_stats(30).await;
            stats_embed(&week, &month)
        }
        SecuritySubcommand::Report => report_embed(&service.generate_report().await),
        SecuritySubcommand::Clean => {
            let mut progress = message.reply(ctx, "🧹 Cleaning old logs...").await?;
            let sweep = service.clean_old_logs(LOG_RETENTION_DAYS).await;
            progress
                .edit(ctx, EditMessage::new().content("").embed(clean_embed(&sweep)))
                .await?;
            return Ok(());
        }
        SecuritySubcommand::Help => security_help_embed(&state.config.prefix),
    };

    message
        .channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new().embed(embed).reference_message(message),
        )
        .await?;

    Ok(())
}
