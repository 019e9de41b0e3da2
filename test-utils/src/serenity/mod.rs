//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's API would return, so code that inspects roles can be tested without a
//! gateway connection.
//!
//! ```rust,ignore
//! use test_utils::serenity::role::{create_test_role, create_admin_role};
//!
//! let admin = create_admin_role(111111111, "Admin");
//! let member = create_test_role(222222222, "Member", 0);
//! ```

pub mod role;

pub use role::{create_admin_role, create_test_role};
