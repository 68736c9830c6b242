//! Discord bot: gateway connection, event handling and prefix commands.
//!
//! The bot reacts to prefixed messages in the configured guild. Each command lives
//! in `command` and works against the shared `BotState`; embeds are built in
//! `embed` and short-lived replies are cleaned up by `transient`.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and role data for the cache
//! - `GUILD_MESSAGES` - Receive messages in guild channels
//! - `GUILD_MEMBERS` - Member roles for permission and verification checks (privileged)
//! - `MESSAGE_CONTENT` - Read command text (privileged)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer
//! Portal for the bot application.

pub mod alert;
pub mod command;
pub mod embed;
pub mod gateway;
pub mod handler;
pub mod permission;
pub mod start;
pub mod transient;
