//! Builds the platform-independent `Caller` snapshot for the permission gate.

use std::collections::HashMap;

use serenity::all::{Context, GuildId, Role, RoleId, UserId};

use crate::{error::AppError, model::permission::Caller};

/// Resolves the invoking member of `guild_id`.
///
/// The guild comes from the cache when available, otherwise from the HTTP API; the
/// member lookup does the same internally.
///
/// # Returns
/// - `Ok(Caller)` - Snapshot of the member's owner status, native admin and roles
/// - `Err(AppError::DiscordErr)` - Guild or member could not be fetched
pub async fn resolve_caller(
    ctx: &Context,
    guild_id: GuildId,
    user_id: UserId,
) -> Result<Caller, AppError> {
    let cached = guild_id
        .to_guild_cached(&ctx.cache)
        .map(|guild| (guild.owner_id, guild.roles.clone()));

    let (owner_id, roles) = match cached {
        Some(guild) => guild,
        None => {
            let guild = guild_id.to_partial_guild(&ctx.http).await?;
            (guild.owner_id, guild.roles)
        }
    };

    let member = guild_id.member(ctx, user_id).await?;

    Ok(build_caller(
        user_id.get(),
        guild_id.get(),
        owner_id.get(),
        &member.roles,
        &roles,
    ))
}

/// Combines member and guild data into a `Caller`.
///
/// The `@everyone` role shares the guild's id and is held by every member, so it is
/// appended to the member's roles both for the native admin check and for the fake
/// permission lookup.
pub fn build_caller(
    user_id: u64,
    guild_id: u64,
    owner_id: u64,
    member_roles: &[RoleId],
    guild_roles: &HashMap<RoleId, Role>,
) -> Caller {
    let mut role_ids: Vec<u64> = member_roles.iter().map(|id| id.get()).collect();
    if !role_ids.contains(&guild_id) {
        role_ids.push(guild_id);
    }

    let native_administrator = user_id == owner_id
        || role_ids.iter().any(|id| {
            guild_roles
                .get(&RoleId::new(*id))
                .is_some_and(|role| role.permissions.administrator())
        });

    Caller {
        user_id,
        guild_id,
        guild_owner_id: owner_id,
        native_administrator,
        role_ids,
    }
}
