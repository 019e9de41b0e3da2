//! Factory methods for creating test data.
//!
//! Factories insert rows into the test database with sensible defaults, reducing
//! boilerplate in tests. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let record = factory::role_permission::RolePermissionFactory::new(db)
//!     .role_id(100)
//!     .permissions(0b11)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod role_permission;

pub use role_permission::{create_role_permission, create_role_permissions};
