//! Role permission factory for creating test permission records.
//!
//! Inserts `role_permissions` rows directly, bypassing the repository, so tests can
//! arrange stored bitmasks before exercising the code under test.

use crate::{factory::helpers::next_id, fixture};
use entity::role_permission;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating role permission records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::role_permission::RolePermissionFactory;
///
/// let record = RolePermissionFactory::new(&db)
///     .role_id(100)
///     .permissions(0x8)
///     .build()
///     .await?;
/// ```
pub struct RolePermissionFactory<'a> {
    db: &'a DatabaseConnection,
    entity: role_permission::Model,
}

impl<'a> RolePermissionFactory<'a> {
    /// Creates a new factory with a unique role id and the fixture's default bitmask.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let entity = fixture::role_permission::entity_builder()
            .role_id(next_id() as i64)
            .build();

        Self { db, entity }
    }

    /// Sets the role id.
    pub fn role_id(mut self, role_id: u64) -> Self {
        self.entity.role_id = role_id as i64;
        self
    }

    /// Sets the stored permission bitmask.
    pub fn permissions(mut self, permissions: i64) -> Self {
        self.entity.permissions = permissions;
        self
    }

    /// Builds and inserts the role permission entity.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created role permission entity
    /// - `Err(DbErr)` - Database error during insertion (e.g. duplicate role id)
    pub async fn build(self) -> Result<role_permission::Model, DbErr> {
        role_permission::ActiveModel {
            role_id: ActiveValue::Set(self.entity.role_id),
            permissions: ActiveValue::Set(self.entity.permissions),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a role permission record for `role_id` holding `permissions`.
///
/// # Example
/// ```rust,ignore
/// factory::create_role_permission(&db, 100, 0b10).await?;
/// ```
pub async fn create_role_permission(
    db: &DatabaseConnection,
    role_id: u64,
    permissions: i64,
) -> Result<role_permission::Model, DbErr> {
    RolePermissionFactory::new(db)
        .role_id(role_id)
        .permissions(permissions)
        .build()
        .await
}

/// Creates one record per `(role_id, permissions)` pair.
pub async fn create_role_permissions(
    db: &DatabaseConnection,
    records: &[(u64, i64)],
) -> Result<Vec<role_permission::Model>, DbErr> {
    let mut results = Vec::new();
    for (role_id, permissions) in records {
        results.push(create_role_permission(db, *role_id, *permissions).await?);
    }
    Ok(results)
}
