//! Ready event handler.
//!
//! Fired once per gateway connection after authentication. Logs the connection and
//! whether fake permissions are usable, and sets the bot's activity to the help
//! command.

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Context, Ready};

use crate::state::BotState;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guilds",
        ready.user.name,
        ready.guilds.len()
    );

    match &state.permissions {
        Some(subsystem) if subsystem.catalog.is_empty() => tracing::warn!(
            "Permission catalog is empty, only native administrators can use gated commands"
        ),
        Some(subsystem) => tracing::info!(
            "Fake permissions enabled with {} catalog entries",
            subsystem.catalog.len()
        ),
        None => tracing::warn!("Fake permissions are unavailable"),
    }

    ctx.set_activity(Some(ActivityData::custom(format!("{}help", state.prefix))));
}
