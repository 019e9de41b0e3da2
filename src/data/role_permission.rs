//! Role permission repository: the persistence side of fake permissions.
//!
//! Maps Discord role IDs to a fake permission bitmask in the `role_permissions` table.
//! Every write is a single `INSERT .. ON CONFLICT (role_id) DO UPDATE` statement, so a
//! failed write never leaves a partial record and concurrent writers cannot race
//! between the insert and the update branch. Rows are never deleted here: revoking the
//! last permission leaves a record holding 0.

use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, SimpleExpr},
    ActiveValue, DatabaseConnection, EntityTrait,
};

use crate::{
    error::AppError,
    model::{
        permission::PermissionFlag,
        role_permission::{role_id_to_column, RolePermission},
    },
};

/// Repository providing database operations for role permission bitmasks.
pub struct RolePermissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RolePermissionRepository<'a> {
    /// Creates a new RolePermissionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the fake permission bitmask stored for a role.
    ///
    /// # Arguments
    /// - `role_id` - Discord role ID
    ///
    /// # Returns
    /// - `Ok(i64)` - Stored bitmask, or 0 if the role has no record
    /// - `Err(AppError::DbErr)` - Storage unavailable or query failed
    pub async fn get_permissions(&self, role_id: u64) -> Result<i64, AppError> {
        let entity = entity::prelude::RolePermission::find_by_id(role_id_to_column(role_id)?)
            .one(self.db)
            .await?;

        Ok(entity.map(|e| e.permissions).unwrap_or(0))
    }

    /// Stores `permissions` as the role's bitmask, replacing any previous value.
    ///
    /// Inserts a record if none exists, otherwise overwrites the bitmask in place. The
    /// value is not merged with what was stored; use `add_permissions` /
    /// `remove_permissions` to change single flags.
    ///
    /// # Arguments
    /// - `role_id` - Discord role ID
    /// - `permissions` - Complete bitmask to store
    ///
    /// # Returns
    /// - `Ok(RolePermission)` - The stored record
    /// - `Err(AppError::DbErr)` - Storage unavailable or statement failed
    pub async fn set_permissions(
        &self,
        role_id: u64,
        permissions: i64,
    ) -> Result<RolePermission, AppError> {
        let entity =
            entity::prelude::RolePermission::insert(entity::role_permission::ActiveModel {
                role_id: ActiveValue::Set(role_id_to_column(role_id)?),
                permissions: ActiveValue::Set(permissions),
            })
            .on_conflict(
                OnConflict::column(entity::role_permission::Column::RoleId)
                    .update_column(entity::role_permission::Column::Permissions)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        Ok(RolePermission::from_entity(entity))
    }

    /// Sets `flag` on the role's bitmask in a single statement.
    ///
    /// The OR happens inside the upsert, so two concurrent grants of different flags on
    /// the same role both survive.
    ///
    /// # Arguments
    /// - `role_id` - Discord role ID
    /// - `flag` - Flag to set
    ///
    /// # Returns
    /// - `Ok(RolePermission)` - The record after the update
    /// - `Err(AppError::DbErr)` - Storage unavailable or statement failed
    pub async fn add_permissions(
        &self,
        role_id: u64,
        flag: PermissionFlag,
    ) -> Result<RolePermission, AppError> {
        let update = Expr::cust_with_values("role_permissions.permissions | ?", [flag.bits()]);

        self.upsert_with(role_id, flag.bits(), update).await
    }

    /// Clears `flag` from the role's bitmask in a single statement.
    ///
    /// A role without a record gets a zero-valued record.
    ///
    /// # Arguments
    /// - `role_id` - Discord role ID
    /// - `flag` - Flag to clear
    ///
    /// # Returns
    /// - `Ok(RolePermission)` - The record after the update
    /// - `Err(AppError::DbErr)` - Storage unavailable or statement failed
    pub async fn remove_permissions(
        &self,
        role_id: u64,
        flag: PermissionFlag,
    ) -> Result<RolePermission, AppError> {
        let update = Expr::cust_with_values("role_permissions.permissions & ?", [!flag.bits()]);

        self.upsert_with(role_id, 0, update).await
    }

    /// Inserts `initial` for a new role, or applies `update` to the existing bitmask.
    async fn upsert_with(
        &self,
        role_id: u64,
        initial: i64,
        update: SimpleExpr,
    ) -> Result<RolePermission, AppError> {
        let entity =
            entity::prelude::RolePermission::insert(entity::role_permission::ActiveModel {
                role_id: ActiveValue::Set(role_id_to_column(role_id)?),
                permissions: ActiveValue::Set(initial),
            })
            .on_conflict(
                OnConflict::column(entity::role_permission::Column::RoleId)
                    .value(entity::role_permission::Column::Permissions, update)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        Ok(RolePermission::from_entity(entity))
    }
}
