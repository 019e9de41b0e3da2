use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A Discord snowflake does not fit the signed 64-bit storage column.
    ///
    /// Discord snowflakes stay below 2^63 so this indicates a malformed id reached the
    /// data layer.
    #[error("Discord ID {0} does not fit into a signed 64-bit column")]
    IdOutOfRange(u64),

    /// Failure to convert Unix timestamp to Discord timestamp
    ///
    /// Occurs when a valid Unix timestamp cannot be converted to Discord's
    /// timestamp format, typically due to timestamp being out of range.
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidDiscordTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The reason for conversion failure
        reason: String,
    },
}
