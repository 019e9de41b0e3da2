use dioxus_logger::tracing;
use serenity::all::{Context, Message};

use crate::{bot::command, state::BotState};

/// Handle a message sent in a channel the bot can see.
///
/// Messages from bots and messages that are not a registered prefix command are
/// ignored. Every invocation gets exactly one reply: the command's output or the
/// rendered error.
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let Some((name, args)) = command::split_invocation(&state.prefix, &message.content) else {
        return;
    };

    let Some(spec) = command::find(name) else {
        return;
    };

    tracing::debug!(
        "User {} invoked {} in channel {}",
        message.author.id,
        spec.name,
        message.channel_id
    );

    let reply = match command::dispatch(&ctx, state, &message, spec, &args).await {
        Ok(reply) => reply,
        Err(e) => e.to_reply(),
    };

    if let Err(e) = message.channel_id.say(&ctx.http, reply).await {
        tracing::error!(
            "Failed to reply to {} in channel {}: {}",
            spec.name,
            message.channel_id,
            e
        );
    }
}
