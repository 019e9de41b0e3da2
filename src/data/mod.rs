//! Database repository layer.
//!
//! Repositories own every query against the storage medium. They use SeaORM entity
//! models internally and return domain models, so the permission gate and the
//! management service never touch the database directly.

pub mod role_permission;
