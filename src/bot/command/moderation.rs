//! Moderation commands gated by fake permissions.
//!
//! Argument parsing is kept apart from the Discord calls so it can be tested without
//! a gateway connection.

use std::{sync::Arc, time::Duration};

use dioxus_logger::tracing;
use serenity::all::{Context, EditMember, GuildId, Http, Timestamp, UserId};

use crate::{
    error::{internal::InternalError, AppError},
    util::parse::{parse_duration, parse_user_id},
};

const DEFAULT_REASON: &str = "No reason provided.";
const DEFAULT_BAN_DURATION: &str = "30d";
const DEFAULT_MUTE_DURATION: &str = "3h";
/// Audit log reason of a ban lifted when its duration runs out.
const BAN_EXPIRED_REASON: &str = "Ban expired";
/// Days of message history removed along with a ban.
const BAN_DELETE_MESSAGE_DAYS: u8 = 7;
/// Discord refuses timeouts longer than 28 days.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(28 * 86_400);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KickArgs {
    pub user_id: u64,
    pub reason: String,
}

impl KickArgs {
    /// Parses `<member> [reason...]`.
    pub fn parse(args: &[&str]) -> Option<Self> {
        let (user_id, rest) = split_target(args)?;

        Some(Self {
            user_id,
            reason: reason_from(rest),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanArgs {
    pub user_id: u64,
    pub duration: Duration,
    /// Duration as typed, for the reply.
    pub duration_label: String,
    pub reason: String,
}

impl BanArgs {
    /// Parses `<member> [duration] [reason...]`, defaulting the duration to 30 days.
    pub fn parse(args: &[&str]) -> Option<Self> {
        let (user_id, rest) = split_target(args)?;
        let (duration, duration_label, rest) = split_duration(rest, DEFAULT_BAN_DURATION)?;

        Some(Self {
            user_id,
            duration,
            duration_label,
            reason: reason_from(rest),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnbanArgs {
    pub user_id: u64,
    pub reason: String,
}

impl UnbanArgs {
    /// Parses `<user> [reason...]`.
    pub fn parse(args: &[&str]) -> Option<Self> {
        let (user_id, rest) = split_target(args)?;

        Some(Self {
            user_id,
            reason: reason_from(rest),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuteArgs {
    pub user_id: u64,
    pub duration: Duration,
    pub duration_label: String,
    pub reason: String,
}

impl MuteArgs {
    /// Parses `<member> [duration] [reason...]`, defaulting the duration to 3 hours.
    pub fn parse(args: &[&str]) -> Option<Self> {
        let (user_id, rest) = split_target(args)?;
        let (duration, duration_label, rest) = split_duration(rest, DEFAULT_MUTE_DURATION)?;

        Some(Self {
            user_id,
            duration,
            duration_label,
            reason: reason_from(rest),
        })
    }

    /// Rejects timeouts Discord would refuse.
    pub fn check_duration(&self) -> Result<(), AppError> {
        if self.duration > MAX_TIMEOUT {
            return Err(AppError::BadRequest(
                "The timeout duration must be at most 28 days!".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmuteArgs {
    pub user_id: u64,
}

impl UnmuteArgs {
    /// Parses `<member>`.
    pub fn parse(args: &[&str]) -> Option<Self> {
        let (user_id, _) = split_target(args)?;

        Some(Self { user_id })
    }
}

fn split_target<'a, 'b>(args: &'a [&'b str]) -> Option<(u64, &'a [&'b str])> {
    let (target, rest) = args.split_first()?;

    Some((parse_user_id(target)?, rest))
}

/// Takes an optional leading duration off `args`.
///
/// A first word starting with a digit is a duration and must be well-formed; any
/// other word starts the reason.
fn split_duration<'a, 'b>(
    args: &'a [&'b str],
    default: &str,
) -> Option<(Duration, String, &'a [&'b str])> {
    match args.split_first() {
        Some((first, rest)) if first.starts_with(|c: char| c.is_ascii_digit()) => {
            Some((parse_duration(first)?, first.to_string(), rest))
        }
        _ => Some((parse_duration(default)?, default.to_string(), args)),
    }
}

fn reason_from(words: &[&str]) -> String {
    if words.is_empty() {
        DEFAULT_REASON.to_string()
    } else {
        words.join(" ")
    }
}

/// Unix timestamp `duration` from `now`, as Discord expects it.
fn timestamp_after(now: i64, duration: Duration) -> Result<Timestamp, AppError> {
    let timestamp = now.saturating_add(duration.as_secs() as i64);

    Timestamp::from_unix_timestamp(timestamp).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp,
            reason: e.to_string(),
        }
        .into()
    })
}

pub async fn kick(ctx: &Context, guild_id: GuildId, args: KickArgs) -> Result<String, AppError> {
    guild_id
        .kick_with_reason(&ctx.http, UserId::new(args.user_id), &args.reason)
        .await?;

    tracing::info!(
        "Kicked user {} from guild {}: {}",
        args.user_id,
        guild_id,
        args.reason
    );

    Ok(format!(
        "🥾 | <@{}> has been kicked for *{}*",
        args.user_id, args.reason
    ))
}

/// Bans the member and schedules the ban to be lifted after `args.duration`.
pub async fn ban(ctx: &Context, guild_id: GuildId, args: BanArgs) -> Result<String, AppError> {
    let user_id = UserId::new(args.user_id);

    guild_id
        .ban_with_reason(&ctx.http, user_id, BAN_DELETE_MESSAGE_DAYS, &args.reason)
        .await?;

    tracing::info!(
        "Banned user {} from guild {} for {}: {}",
        args.user_id,
        guild_id,
        args.duration_label,
        args.reason
    );

    let http = ctx.http.clone();
    let duration = args.duration;
    tokio::spawn(async move {
        tokio::time::sleep(duration).await;
        lift_expired_ban(&http, guild_id, user_id).await;
    });

    Ok(format!(
        "🔨 | <@{}> has been banned for *{}* for {}",
        args.user_id, args.reason, args.duration_label
    ))
}

/// Lifts a ban whose duration ran out. A ban already lifted by hand is not an error.
async fn lift_expired_ban(http: &Arc<Http>, guild_id: GuildId, user_id: UserId) {
    match http
        .remove_ban(guild_id, user_id, Some(BAN_EXPIRED_REASON))
        .await
    {
        Ok(()) => tracing::info!("Ban of user {} in guild {} expired", user_id, guild_id),
        Err(serenity::Error::Http(e)) if e.status_code().map(|s| s.as_u16()) == Some(404) => {
            tracing::debug!(
                "Ban of user {} in guild {} was already lifted",
                user_id,
                guild_id
            );
        }
        Err(e) => tracing::error!(
            "Failed to lift expired ban of user {} in guild {}: {}",
            user_id,
            guild_id,
            e
        ),
    }
}

pub async fn unban(ctx: &Context, guild_id: GuildId, args: UnbanArgs) -> Result<String, AppError> {
    ctx.http
        .remove_ban(guild_id, UserId::new(args.user_id), Some(args.reason.as_str()))
        .await?;

    tracing::info!(
        "Unbanned user {} in guild {}: {}",
        args.user_id,
        guild_id,
        args.reason
    );

    Ok(format!("✅ | <@{}> has been unbanned!", args.user_id))
}

pub async fn mute(ctx: &Context, guild_id: GuildId, args: MuteArgs) -> Result<String, AppError> {
    args.check_duration()?;

    let until = timestamp_after(chrono::Utc::now().timestamp(), args.duration)?;

    guild_id
        .edit_member(
            ctx,
            UserId::new(args.user_id),
            EditMember::new()
                .disable_communication_until_datetime(until)
                .audit_log_reason(&args.reason),
        )
        .await?;

    tracing::info!(
        "Timed out user {} in guild {} for {}: {}",
        args.user_id,
        guild_id,
        args.duration_label,
        args.reason
    );

    Ok(format!(
        "🔇 | Timed out <@{}> for {}",
        args.user_id, args.duration_label
    ))
}

pub async fn unmute(ctx: &Context, guild_id: GuildId, args: UnmuteArgs) -> Result<String, AppError> {
    guild_id
        .edit_member(
            ctx,
            UserId::new(args.user_id),
            EditMember::new().enable_communication(),
        )
        .await?;

    tracing::info!("Removed timeout of user {} in guild {}", args.user_id, guild_id);

    Ok(format!("🔊 | Removed timeout for <@{}>", args.user_id))
}
