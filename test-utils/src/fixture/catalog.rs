//! Fixture permission catalogs in their on-disk JSON form.

/// Three-entry catalog used throughout the permission engine tests.
pub const SCENARIO: &str = r#"{"KICK_MEMBERS": 1, "BAN_MEMBERS": 2, "ADMINISTRATOR": 4}"#;

/// Catalog mirroring the moderation commands' requirements.
pub const MODERATION: &str = r#"{
    "KICK_MEMBERS": 2,
    "BAN_MEMBERS": 4,
    "ADMINISTRATOR": 8,
    "MANAGE_ROLES": 268435456,
    "MODERATE_MEMBERS": 1099511627776
}"#;

