//! Fixture for role permission test data.

use entity::role_permission;

/// Default test role id.
pub const DEFAULT_ROLE_ID: i64 = 987654321;

/// Default stored bitmask.
pub const DEFAULT_PERMISSIONS: i64 = 0;

/// Creates a role permission entity model with default values, without inserting it.
pub fn entity() -> role_permission::Model {
    entity_builder().build()
}

/// Creates a customizable role permission entity builder.
///
/// # Example
/// ```rust,ignore
/// let entity = fixture::role_permission::entity_builder()
///     .role_id(100)
///     .permissions(0b11)
///     .build();
/// ```
pub fn entity_builder() -> RolePermissionEntityBuilder {
    RolePermissionEntityBuilder::default()
}

/// Builder for in-memory role permission entity models.
pub struct RolePermissionEntityBuilder {
    role_id: i64,
    permissions: i64,
}

impl Default for RolePermissionEntityBuilder {
    fn default() -> Self {
        Self {
            role_id: DEFAULT_ROLE_ID,
            permissions: DEFAULT_PERMISSIONS,
        }
    }
}

impl RolePermissionEntityBuilder {
    pub fn role_id(mut self, role_id: i64) -> Self {
        self.role_id = role_id;
        self
    }

    pub fn permissions(mut self, permissions: i64) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn build(self) -> role_permission::Model {
        role_permission::Model {
            role_id: self.role_id,
            permissions: self.permissions,
        }
    }
}
