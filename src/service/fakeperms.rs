use dioxus_logger::tracing;

use crate::{
    data::role_permission::RolePermissionRepository,
    error::AppError,
    middleware::owner::require_guild_owner,
    model::permission::{Caller, PermissionChange, RolePermissions},
    state::PermissionSubsystem,
};

/// Grant, revoke and list operations over the fake permission store.
///
/// Every operation is restricted to the guild owner. Unknown permission names are
/// reported as `PermissionChange::UnknownPermission` and never reach the store. Names
/// in every reported change are trimmed and upper-cased.
pub struct FakePermsService<'a> {
    subsystem: &'a PermissionSubsystem,
}

impl<'a> FakePermsService<'a> {
    pub fn new(subsystem: &'a PermissionSubsystem) -> Self {
        Self { subsystem }
    }

    /// Sets `permission` on `role_id`.
    ///
    /// Granting a permission the role already holds leaves the bitmask unchanged and
    /// still reports `Granted`.
    ///
    /// # Returns
    /// - `Ok(PermissionChange::Granted)` - Flag set, with the stored bitmask
    /// - `Ok(PermissionChange::UnknownPermission)` - Name not in the catalog
    /// - `Err(AppError::AuthErr(NotGuildOwner))` - Caller is not the owner
    /// - `Err(AppError::DbErr)` - Store failure
    pub async fn grant(
        &self,
        caller: &Caller,
        role_id: u64,
        permission: &str,
    ) -> Result<PermissionChange, AppError> {
        require_guild_owner(caller)?;

        let permission = normalize(permission);
        let Some(flag) = self.subsystem.catalog.resolve(&permission) else {
            return Ok(PermissionChange::UnknownPermission(permission));
        };

        let record = RolePermissionRepository::new(&self.subsystem.db)
            .add_permissions(role_id, flag)
            .await?;

        tracing::info!(
            "Granted {} to role {} in guild {} (bitmask now {})",
            permission,
            role_id,
            caller.guild_id,
            record.permissions
        );

        Ok(PermissionChange::Granted {
            role_id,
            permission,
            permissions: record.permissions,
        })
    }

    /// Clears `permission` from `role_id`.
    ///
    /// Revoking a permission the role never held still reports `Revoked`.
    ///
    /// # Returns
    /// - `Ok(PermissionChange::Revoked)` - Flag cleared, with the stored bitmask
    /// - `Ok(PermissionChange::UnknownPermission)` - Name not in the catalog
    /// - `Err(AppError::AuthErr(NotGuildOwner))` - Caller is not the owner
    /// - `Err(AppError::DbErr)` - Store failure
    pub async fn revoke(
        &self,
        caller: &Caller,
        role_id: u64,
        permission: &str,
    ) -> Result<PermissionChange, AppError> {
        require_guild_owner(caller)?;

        let permission = normalize(permission);
        let Some(flag) = self.subsystem.catalog.resolve(&permission) else {
            return Ok(PermissionChange::UnknownPermission(permission));
        };

        let record = RolePermissionRepository::new(&self.subsystem.db)
            .remove_permissions(role_id, flag)
            .await?;

        tracing::info!(
            "Revoked {} from role {} in guild {} (bitmask now {})",
            permission,
            role_id,
            caller.guild_id,
            record.permissions
        );

        Ok(PermissionChange::Revoked {
            role_id,
            permission,
            permissions: record.permissions,
        })
    }

    /// Lists the catalog names set on `role_id`, in bit order.
    ///
    /// A role without a record lists as empty.
    pub async fn list(&self, caller: &Caller, role_id: u64) -> Result<RolePermissions, AppError> {
        require_guild_owner(caller)?;

        let permissions = RolePermissionRepository::new(&self.subsystem.db)
            .get_permissions(role_id)
            .await?;

        Ok(RolePermissions {
            role_id,
            permissions,
            names: self.subsystem.catalog.names_in(permissions),
        })
    }

    /// Every permission name the catalog knows, in bit order.
    pub fn catalog(&self, caller: &Caller) -> Result<Vec<String>, AppError> {
        require_guild_owner(caller)?;

        Ok(self
            .subsystem
            .catalog
            .entries()
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect())
    }
}

/// Permission names are reported the way the catalog stores them.
fn normalize(permission: &str) -> String {
    permission.trim().to_ascii_uppercase()
}
