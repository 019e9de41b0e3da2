//! Service layer for fake permission management.
//!
//! Services sit between the command handlers and the repositories: they enforce who
//! may run an operation, resolve names through the catalog and turn stored bitmasks
//! into domain results.

pub mod fakeperms;
