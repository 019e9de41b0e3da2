//! Prefix command registry and dispatch.
//!
//! Commands are declared once in [`COMMANDS`]. The message handler splits an
//! invocation into a name and arguments, looks the name up here, and `dispatch`
//! enforces the command's access requirement before running its body. Every failure
//! comes back as an `AppError` and is rendered into a reply by the handler.

pub mod fakeperms;
pub mod help;
pub mod moderation;

use serenity::all::{Context, GuildId, Message};

use crate::{
    bot::caller::resolve_caller,
    error::{auth::AuthError, AppError},
    middleware::{owner::require_guild_owner, permission::PermissionGuard},
    model::permission::Caller,
    state::BotState,
};

/// Who may run a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAccess {
    Everyone,
    GuildOwner,
    /// Gated by the named fake permission.
    Permission(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Kick,
    Ban,
    Unban,
    Mute,
    Unmute,
    FakePerms,
}

/// Static description of a registered command.
#[derive(Debug)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub access: CommandAccess,
    /// Argument synopsis, without prefix and name.
    pub usage: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        aliases: &[],
        access: CommandAccess::Everyone,
        usage: "",
        description: "Lists the available commands",
        kind: CommandKind::Help,
    },
    CommandSpec {
        name: "kick",
        aliases: &[],
        access: CommandAccess::Permission("kick_members"),
        usage: "<member> [reason...]",
        description: "Kicks a member",
        kind: CommandKind::Kick,
    },
    CommandSpec {
        name: "ban",
        aliases: &[],
        access: CommandAccess::Permission("ban_members"),
        usage: "<member> [duration] [reason...]",
        description: "Bans a member, lifting the ban after the duration (default 30d)",
        kind: CommandKind::Ban,
    },
    CommandSpec {
        name: "unban",
        aliases: &[],
        access: CommandAccess::Permission("ban_members"),
        usage: "<user> [reason...]",
        description: "Lifts a ban",
        kind: CommandKind::Unban,
    },
    CommandSpec {
        name: "mute",
        aliases: &["timeout"],
        access: CommandAccess::Permission("moderate_members"),
        usage: "<member> [duration] [reason...]",
        description: "Times a member out (default 3h, at most 28d)",
        kind: CommandKind::Mute,
    },
    CommandSpec {
        name: "unmute",
        aliases: &["untimeout"],
        access: CommandAccess::Permission("moderate_members"),
        usage: "<member>",
        description: "Removes a member's timeout",
        kind: CommandKind::Unmute,
    },
    CommandSpec {
        name: "fakeperms",
        aliases: &["fp"],
        access: CommandAccess::GuildOwner,
        usage: "grant <role> <permission> | revoke <role> <permission> | list <role> | catalog",
        description: "Manages fake permissions on roles",
        kind: CommandKind::FakePerms,
    },
];

/// Looks up a command by name or alias, ignoring case.
pub fn find(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| {
        spec.name.eq_ignore_ascii_case(name)
            || spec.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    })
}

/// Splits `content` into a command name and its whitespace-separated arguments.
///
/// # Returns
/// - `Some((name, args))` - `content` starts with `prefix` followed by a name
/// - `None` - Not a command invocation
pub fn split_invocation<'a>(prefix: &str, content: &'a str) -> Option<(&'a str, Vec<&'a str>)> {
    let rest = content.trim_start().strip_prefix(prefix)?;
    let mut words = rest.split_whitespace();
    let name = words.next()?;

    if !rest.starts_with(name) {
        return None;
    }

    Some((name, words.collect()))
}

/// Usage line of `spec` for error replies.
pub fn usage(prefix: &str, spec: &CommandSpec) -> String {
    if spec.usage.is_empty() {
        format!("Usage: `{}{}`", prefix, spec.name)
    } else {
        format!("Usage: `{}{} {}`", prefix, spec.name, spec.usage)
    }
}

/// Enforces `access` for `caller`.
async fn check_access(
    state: &BotState,
    caller: &Caller,
    access: CommandAccess,
) -> Result<(), AppError> {
    match access {
        CommandAccess::Everyone => Ok(()),
        CommandAccess::GuildOwner => require_guild_owner(caller),
        CommandAccess::Permission(permission) => {
            PermissionGuard::new(state.permissions.as_ref())
                .require(caller, permission)
                .await
                .map(|_| ())
        }
    }
}

/// Runs `spec` for the author of `message`.
///
/// # Returns
/// - `Ok(String)` - Reply text
/// - `Err(AppError)` - Denied, malformed, or failed; rendered by the caller
pub async fn dispatch(
    ctx: &Context,
    state: &BotState,
    message: &Message,
    spec: &'static CommandSpec,
    args: &[&str],
) -> Result<String, AppError> {
    if spec.kind == CommandKind::Help {
        return Ok(help::render(&state.prefix));
    }

    let guild_id: GuildId = message.guild_id.ok_or(AuthError::NotInGuild)?;
    let caller = resolve_caller(ctx, guild_id, message.author.id).await?;

    check_access(state, &caller, spec.access).await?;

    let bad_request = || AppError::BadRequest(usage(&state.prefix, spec));

    match spec.kind {
        CommandKind::Help => Ok(help::render(&state.prefix)),
        CommandKind::Kick => {
            let args = moderation::KickArgs::parse(args).ok_or_else(bad_request)?;
            moderation::kick(ctx, guild_id, args).await
        }
        CommandKind::Ban => {
            let args = moderation::BanArgs::parse(args).ok_or_else(bad_request)?;
            moderation::ban(ctx, guild_id, args).await
        }
        CommandKind::Unban => {
            let args = moderation::UnbanArgs::parse(args).ok_or_else(bad_request)?;
            moderation::unban(ctx, guild_id, args).await
        }
        CommandKind::Mute => {
            let args = moderation::MuteArgs::parse(args).ok_or_else(bad_request)?;
            moderation::mute(ctx, guild_id, args).await
        }
        CommandKind::Unmute => {
            let args = moderation::UnmuteArgs::parse(args).ok_or_else(bad_request)?;
            moderation::unmute(ctx, guild_id, args).await
        }
        CommandKind::FakePerms => {
            let args = fakeperms::FakePermsArgs::parse(args).ok_or_else(bad_request)?;
            fakeperms::run(state, &caller, args).await
        }
    }
}
