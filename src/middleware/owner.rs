use crate::{
    error::{auth::AuthError, AppError},
    model::permission::Caller,
};

/// Ensures the caller is the registered owner of the guild the command ran in.
///
/// Only the owner may manage fake permissions; native administrators do not pass
/// this check.
///
/// # Returns
/// - `Ok(())` - Caller owns the guild
/// - `Err(AppError::AuthErr(NotGuildOwner))` - Anyone else
pub fn require_guild_owner(caller: &Caller) -> Result<(), AppError> {
    if !caller.is_guild_owner() {
        return Err(AuthError::NotGuildOwner(caller.user_id).into());
    }

    Ok(())
}
