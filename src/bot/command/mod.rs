//! Prefix command table, parsing and dispatch.
//!
//! Commands are a fixed table rather than a registry: adding a command means adding
//! a `CommandKind`, a `COMMANDS` entry and a match arm in `dispatch`.

pub mod activity;
pub mod help;
pub mod hostinfo;
pub mod security;
pub mod verify;

use serenity::all::{Context, Message};

use crate::{error::AppError, state::BotState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Verify,
    Activity,
    HostInfo,
    Security,
    Help,
}

/// Static description of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub kind: CommandKind,
    /// Lowercase name typed after the prefix.
    pub name: &'static str,
    /// Usage without the prefix.
    pub usage: &'static str,
    pub description: &'static str,
    /// Requires the Administrator permission.
    pub admin_only: bool,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        kind: CommandKind::Verify,
        name: "verify",
        usage: "verify <code>",
        description: "Verify with a code to receive a role",
        admin_only: false,
    },
    CommandSpec {
        kind: CommandKind::Activity,
        name: "activity",
        usage: "activity <text>",
        description: "Change the bot's activity status",
        admin_only: true,
    },
    CommandSpec {
        kind: CommandKind::HostInfo,
        name: "hostinfo",
        usage: "hostinfo",
        description: "Show hosting and system information",
        admin_only: true,
    },
    CommandSpec {
        kind: CommandKind::Security,
        name: "security",
        usage: "security [stats|report|clean]",
        description: "Show verification security statistics and reports",
        admin_only: true,
    },
    CommandSpec {
        kind: CommandKind::Help,
        name: "help",
        usage: "help",
        description: "List available commands",
        admin_only: false,
    },
];

/// A prefixed message split into command name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    /// Command name, lowercased.
    pub name: String,
    pub args: Vec<&'a str>,
}

/// Splits a message into a command invocation.
///
/// # Arguments
/// - `content` - Raw message content
/// - `prefix` - Command prefix
///
/// # Returns
/// - `Some(Invocation)` - Content starts with the prefix followed by a name
/// - `None` - Not a command
pub fn parse_invocation<'a>(content: &'a str, prefix: &str) -> Option<Invocation<'a>> {
    let rest = content.strip_prefix(prefix)?;
    let mut tokens = rest.split_whitespace();
    let name = tokens.next()?.to_lowercase();

    Some(Invocation {
        name,
        args: tokens.collect(),
    })
}

/// Looks up a command by its lowercase name.
pub fn find_command(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// Runs a command that has passed the guild and permission checks.
pub async fn dispatch(
    ctx: &Context,
    state: &BotState,
    message: &Message,
    spec: &CommandSpec,
    args: &[&str],
) -> Result<(), AppError> {
    match spec.kind {
        CommandKind::Verify => verify::run(ctx, state, message, args).await,
        CommandKind::Activity => activity::run(ctx, message, &state.config.prefix, args).await,
        CommandKind::HostInfo => hostinfo::run(ctx, state, message).await,
        CommandKind::Security => security::run(ctx, state, message, args).await,
        CommandKind::Help => help::run(ctx, state, message).await,
    }
}
