//! Discord bot integration.
//!
//! The bot listens for prefix commands in guild channels, resolves the invoking
//! member into a `Caller`, checks access through the fake permission gate and runs
//! the command.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and role data for caller resolution
//! - `GUILD_MESSAGES` - Receive messages in guilds
//! - `MESSAGE_CONTENT` - Read the command text (privileged intent)
//! - `GUILD_MEMBERS` - Member roles for caller resolution (privileged intent)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer Portal
//! for the bot application.

pub mod caller;
pub mod command;
pub mod handler;
pub mod start;
