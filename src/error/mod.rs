//! Error types and reply handling.
//!
//! This module provides the bot's error hierarchy and the conversion that turns any
//! error into the text sent back to the invoking user. The `AppError` enum serves as
//! the top-level error type that wraps domain-specific errors; it is only rendered at
//! the command-dispatch boundary.

pub mod auth;
pub mod config;
pub mod internal;

use dioxus_logger::tracing;
use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion so repositories and services can use `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or catalog loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authorization failure: missing permission, not the owner, subsystem down.
    ///
    /// Rendered through `AuthError::to_reply()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Unexpected internal state, logged with detail and answered generically.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM (connectivity or query failure).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Malformed command invocation.
    ///
    /// # Fields
    /// - Message describing what was invalid, usually including the usage line
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the reply sent to the invoking user.
    ///
    /// Authorization errors and usage errors are answered specifically. Everything else
    /// is logged with full details while the user only sees a generic failure, to avoid
    /// leaking implementation details. Denials are logged at debug level since they are
    /// expected outcomes.
    ///
    /// # Returns
    /// - `String` - Plain-text reply
    pub fn to_reply(&self) -> String {
        match self {
            Self::AuthErr(err) => {
                match err {
                    AuthError::SubsystemUnavailable => tracing::warn!("{}", err),
                    _ => tracing::debug!("{}", err),
                }
                err.to_reply()
            }
            Self::BadRequest(msg) => format!("❗ | {}", msg),
            err => {
                tracing::error!("{}", err);
                "❗ | Something went wrong while running that command.".to_string()
            }
        }
    }
}
