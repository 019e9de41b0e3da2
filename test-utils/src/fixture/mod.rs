//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of pure logic and as default values for factories.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let record = fixture::role_permission::entity();
//! let catalog = fixture::catalog::SCENARIO;
//! ```

pub mod catalog;
pub mod role_permission;

pub use role_permission::{
    entity as role_permission_entity, entity_builder as role_permission_entity_builder,
};
