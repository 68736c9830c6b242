//! Embed builders for command replies and security alerts.
//!
//! Builders are pure: they take domain models and return a `CreateEmbed`, leaving
//! sending and deletion to the command handlers.

pub mod alert;
pub mod help;
pub mod host;
pub mod security;

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, Timestamp};

pub const COLOR_GREEN: u32 = 0x00FF00;
pub const COLOR_RED: u32 = 0xFF0000;
pub const COLOR_BLUE: u32 = 0x0099FF;
pub const COLOR_ORANGE: u32 = 0xFF9900;

/// Sets the embed timestamp, leaving it unset if `at` is out of Discord's range.
pub(crate) fn with_timestamp(embed: CreateEmbed, at: DateTime<Utc>) -> CreateEmbed {
    match Timestamp::from_unix_timestamp(at.timestamp()) {
        Ok(timestamp) => embed.timestamp(timestamp),
        Err(_) => embed,
    }
}
