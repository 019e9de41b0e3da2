use thiserror::Error;

/// Authorization failures raised by the permission gate and the owner check.
///
/// Every variant is recoverable at the command boundary: the command body is skipped
/// and the invoker is told why.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The fake permission subsystem (catalog + store) was never initialized.
    ///
    /// Kept distinct from `MissingPermission` so operators can tell a subsystem that
    /// failed to load apart from a legitimate denial.
    #[error("The permissions subsystem is not available")]
    SubsystemUnavailable,

    /// The caller holds neither native administrator, a role with the fake
    /// `ADMINISTRATOR` bit, nor a role with the required bit.
    #[error("Missing permission: {0}")]
    MissingPermission(String),

    /// Caller attempted a guild-owner-only command.
    ///
    /// # Fields
    /// - Discord ID of the caller
    #[error("User {0} is not the guild owner")]
    NotGuildOwner(u64),

    /// A guild command was invoked outside of a guild (e.g. in a DM).
    #[error("Command can only be used inside a server")]
    NotInGuild,
}

impl AuthError {
    /// Plain-text reply shown to the invoker.
    pub fn to_reply(&self) -> String {
        match self {
            Self::SubsystemUnavailable => {
                "⚠️ | Fake permissions are not available right now, ask the server owner to check the bot's setup.".to_string()
            }
            Self::MissingPermission(name) => {
                format!(
                    "⛔ | You do not have permission to {}",
                    name.to_ascii_lowercase()
                )
            }
            Self::NotGuildOwner(_) => "⛔ | Only the server owner can run this command!".to_string(),
            Self::NotInGuild => "❗ | This command can only be used inside a server.".to_string(),
        }
    }
}
