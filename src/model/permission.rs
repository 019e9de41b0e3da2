//! Fake permission domain models.
//!
//! Provides the bit flag type the catalog hands out, the caller snapshot the gate
//! decides on, and the outcomes reported by the management commands.

/// A single capability bit within a role's fake permission bitmask.
///
/// Always a positive power of two; construct through [`PermissionFlag::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PermissionFlag(i64);

impl PermissionFlag {
    /// Wraps `bits` if it is a positive power of two.
    ///
    /// # Returns
    /// - `Some(PermissionFlag)` - `bits` has exactly one bit set and is positive
    /// - `None` - `bits` is zero, negative, or has several bits set
    pub fn new(bits: i64) -> Option<Self> {
        (bits > 0 && bits.count_ones() == 1).then_some(Self(bits))
    }

    pub fn bits(self) -> i64 {
        self.0
    }

    /// Whether this flag is set in `bitmask`.
    pub fn is_set_in(self, bitmask: i64) -> bool {
        bitmask & self.0 != 0
    }
}

/// Snapshot of the member invoking a command, independent of the Discord library.
///
/// Built by the bot layer once per invocation and consumed by the permission gate and
/// the guild owner check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Discord ID of the invoking user.
    pub user_id: u64,
    /// Guild the command was invoked in.
    pub guild_id: u64,
    /// Discord ID of the guild's registered owner.
    pub guild_owner_id: u64,
    /// Whether Discord itself grants the caller ADMINISTRATOR (owner or admin role).
    pub native_administrator: bool,
    /// Every role the caller holds, including the guild's `@everyone` role.
    pub role_ids: Vec<u64>,
}

impl Caller {
    pub fn is_guild_owner(&self) -> bool {
        self.user_id == self.guild_owner_id
    }
}

/// Why the permission gate let a caller through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Discord grants the caller ADMINISTRATOR; the store was not consulted.
    NativeAdministrator,
    /// One of the caller's roles carries the fake `ADMINISTRATOR` bit.
    RoleAdministrator { role_id: u64 },
    /// One of the caller's roles carries the required bit.
    RoleGrant { role_id: u64 },
}

/// Result of a grant or revoke management command.
///
/// An unknown permission name is a normal negative result rather than an error, so it
/// is a variant here instead of an `AppError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionChange {
    /// The flag is now set on the role. `permissions` is the stored bitmask afterwards.
    Granted {
        role_id: u64,
        permission: String,
        permissions: i64,
    },
    /// The flag is now cleared on the role. `permissions` is the stored bitmask afterwards.
    Revoked {
        role_id: u64,
        permission: String,
        permissions: i64,
    },
    /// The catalog has no permission with this name; nothing was stored.
    UnknownPermission(String),
}

/// Fake permissions currently held by a role, resolved to catalog names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePermissions {
    pub role_id: u64,
    /// Raw stored bitmask (0 when the role has no record).
    pub permissions: i64,
    /// Catalog names whose flag is set in `permissions`, in bit order.
    pub names: Vec<String>,
}

impl RolePermissions {
    /// True when the role holds no permission known to the catalog.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
