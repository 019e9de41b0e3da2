use dioxus_logger::tracing;

use crate::{
    data::role_permission::RolePermissionRepository,
    error::{auth::AuthError, AppError},
    model::permission::{Access, Caller},
    state::PermissionSubsystem,
};

/// Authorization gate for fake-permission protected commands.
///
/// Holds no state of its own; every call to [`PermissionGuard::require`] decides from
/// the caller snapshot and the current contents of the store.
pub struct PermissionGuard<'a> {
    subsystem: Option<&'a PermissionSubsystem>,
}

impl<'a> PermissionGuard<'a> {
    /// Creates a guard over the subsystem, `None` if it never initialized.
    pub fn new(subsystem: Option<&'a PermissionSubsystem>) -> Self {
        Self { subsystem }
    }

    /// Decides whether `caller` may run a command gated by `permission`.
    ///
    /// Checks, in order:
    /// 1. Native administrator: allowed without touching the store.
    /// 2. Subsystem missing: `SubsystemUnavailable`.
    /// 3. For each of the caller's roles, the stored bitmask. A role with the fake
    ///    `ADMINISTRATOR` bit or with the required bit allows; the first such role wins.
    ///
    /// A `permission` the catalog does not know can only be passed by a role holding
    /// the fake `ADMINISTRATOR` bit.
    ///
    /// # Arguments
    /// - `caller` - Snapshot of the invoking member
    /// - `permission` - Catalog name of the required permission (any case)
    ///
    /// # Returns
    /// - `Ok(Access)` - How the caller was let through
    /// - `Err(AppError::AuthErr(SubsystemUnavailable))` - Catalog and store not loaded
    /// - `Err(AppError::AuthErr(MissingPermission))` - No role grants the permission
    /// - `Err(AppError::DbErr)` - Store query failed
    pub async fn require(&self, caller: &Caller, permission: &str) -> Result<Access, AppError> {
        if caller.native_administrator {
            tracing::debug!(
                "User {} allowed {} as native administrator",
                caller.user_id,
                permission
            );
            return Ok(Access::NativeAdministrator);
        }

        let Some(subsystem) = self.subsystem else {
            return Err(AuthError::SubsystemUnavailable.into());
        };

        let required = subsystem.catalog.resolve(permission);
        if required.is_none() {
            tracing::warn!(
                "Command requires permission '{}' which is not in the catalog; only fake administrators pass",
                permission
            );
        }
        let administrator = subsystem.catalog.administrator();

        let repo = RolePermissionRepository::new(&subsystem.db);

        for role_id in &caller.role_ids {
            let bitmask = repo.get_permissions(*role_id).await?;

            if administrator.is_some_and(|flag| flag.is_set_in(bitmask)) {
                tracing::debug!(
                    "User {} allowed {} through administrator role {}",
                    caller.user_id,
                    permission,
                    role_id
                );
                return Ok(Access::RoleAdministrator { role_id: *role_id });
            }

            if required.is_some_and(|flag| flag.is_set_in(bitmask)) {
                tracing::debug!(
                    "User {} allowed {} through role {}",
                    caller.user_id,
                    permission,
                    role_id
                );
                return Ok(Access::RoleGrant { role_id: *role_id });
            }
        }

        Err(AuthError::MissingPermission(permission.to_ascii_uppercase()).into())
    }
}
