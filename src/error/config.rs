use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined. Check the `.env.example`
    /// file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// The permission catalog resource could not be read.
    #[error("Failed to read permission catalog '{}': {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The permission catalog resource is not a JSON object of name to integer.
    #[error("Failed to parse permission catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// A catalog entry's value is not a positive power of two.
    #[error("Permission '{name}' has value {value}, expected a positive power of two")]
    InvalidPermissionFlag { name: String, value: i64 },

    /// Two catalog entries share the same bit.
    #[error("Permissions '{name}' and '{existing}' share the bit {value}")]
    DuplicatePermissionFlag {
        name: String,
        existing: String,
        value: i64,
    },

    /// Two catalog names collide once case is ignored.
    #[error("Permission '{0}' is declared more than once")]
    DuplicatePermissionName(String),
}
