//! Shared bot state.
//!
//! `BotState` is built once in `main` and handed to the serenity event handler. The
//! fake permission subsystem is optional: if the database could not be reached at
//! startup the bot still runs, native administrators keep working and every gated
//! command is answered with `SubsystemUnavailable`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{error::auth::AuthError, model::catalog::PermissionCatalog};

/// Catalog and store of the fake permission subsystem.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// catalog sits behind an `Arc`.
#[derive(Clone)]
pub struct PermissionSubsystem {
    /// Connection pool for the `role_permissions` table.
    pub db: DatabaseConnection,
    /// Immutable permission name to bit mapping loaded at startup.
    pub catalog: Arc<PermissionCatalog>,
}

impl PermissionSubsystem {
    pub fn new(db: DatabaseConnection, catalog: PermissionCatalog) -> Self {
        Self {
            db,
            catalog: Arc::new(catalog),
        }
    }
}

#[derive(Clone)]
pub struct BotState {
    /// Prefix that marks a message as a command, e.g. `!`.
    pub prefix: String,
    /// `None` when the subsystem failed to initialize.
    pub permissions: Option<PermissionSubsystem>,
}

impl BotState {
    pub fn new(prefix: String, permissions: Option<PermissionSubsystem>) -> Self {
        Self {
            prefix,
            permissions,
        }
    }

    /// The fake permission subsystem, or `SubsystemUnavailable` if it never came up.
    pub fn permissions(&self) -> Result<&PermissionSubsystem, AuthError> {
        self.permissions
            .as_ref()
            .ok_or(AuthError::SubsystemUnavailable)
    }
}
