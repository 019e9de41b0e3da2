//! Domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer. Entity models
//! are converted into these types at the repository boundary so storage details (signed
//! 64-bit columns) never leak into authorization logic.

pub mod catalog;
pub mod permission;
pub mod role_permission;
