//! Test factory for creating Serenity Role objects.

use serenity::all::{Permissions, Role};

/// Creates a test Serenity Role carrying the given native permission bits.
///
/// All other fields are set to reasonable defaults (not hoisted, not managed, not
/// mentionable, position 1).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `permissions` - Raw Discord permission bits
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role(role_id: u64, name: &str, permissions: u64) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 1,
        "permissions": permissions.to_string(),
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}

/// Creates a role holding Discord's native ADMINISTRATOR permission.
pub fn create_admin_role(role_id: u64, name: &str) -> Role {
    create_test_role(role_id, name, Permissions::ADMINISTRATOR.bits())
}
