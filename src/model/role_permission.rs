//! Role permission domain model.

use crate::error::{internal::InternalError, AppError};

/// Fake permission bitmask stored for a single Discord role.
///
/// Absence of a record is equivalent to a bitmask of 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolePermission {
    /// Discord role ID.
    pub role_id: u64,
    /// Stored permission bitmask.
    pub permissions: i64,
}

impl RolePermission {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::role_permission::Model) -> Self {
        Self {
            role_id: entity.role_id as u64,
            permissions: entity.permissions,
        }
    }
}

/// Converts a Discord snowflake into the signed value stored in `role_permissions.role_id`.
///
/// # Returns
/// - `Ok(i64)` - The id as stored
/// - `Err(AppError::InternalErr(IdOutOfRange))` - The id exceeds `i64::MAX`
pub fn role_id_to_column(role_id: u64) -> Result<i64, AppError> {
    i64::try_from(role_id).map_err(|_| InternalError::IdOutOfRange(role_id).into())
}
