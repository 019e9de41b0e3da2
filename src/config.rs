use crate::error::{config::ConfigError, AppError};

const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_PERMISSION_CATALOG_PATH: &str = "config/permissions.json";

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    /// Prefix marking a message as a command.
    pub command_prefix: String,
    /// Location of the fake permission catalog JSON resource.
    pub permission_catalog_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            database_url: required("DATABASE_URL")?,
            command_prefix: optional("COMMAND_PREFIX", DEFAULT_COMMAND_PREFIX),
            permission_catalog_path: optional(
                "PERMISSION_CATALOG_PATH",
                DEFAULT_PERMISSION_CATALOG_PATH,
            ),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads `name`, treating an unset or blank variable as `default`.
fn optional(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
