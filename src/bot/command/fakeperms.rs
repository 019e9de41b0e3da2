use crate::{
    error::AppError,
    model::permission::{Caller, PermissionChange, RolePermissions},
    service::fakeperms::FakePermsService,
    state::BotState,
    util::parse::parse_role_id,
};

/// Parsed `fakeperms` subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakePermsArgs {
    Grant { role_id: u64, permission: String },
    Revoke { role_id: u64, permission: String },
    List { role_id: u64 },
    Catalog,
}

impl FakePermsArgs {
    /// Parses `grant|revoke <role> <permission>`, `list <role>` or `catalog`.
    pub fn parse(args: &[&str]) -> Option<Self> {
        let (subcommand, rest) = args.split_first()?;

        match (subcommand.to_ascii_lowercase().as_str(), rest) {
            ("grant", [role, permission]) => Some(Self::Grant {
                role_id: parse_role_id(role)?,
                permission: permission.to_string(),
            }),
            ("revoke", [role, permission]) => Some(Self::Revoke {
                role_id: parse_role_id(role)?,
                permission: permission.to_string(),
            }),
            ("list", [role]) => Some(Self::List {
                role_id: parse_role_id(role)?,
            }),
            ("catalog", []) => Some(Self::Catalog),
            _ => None,
        }
    }
}

/// Runs a parsed subcommand and renders the reply.
pub async fn run(state: &BotState, caller: &Caller, args: FakePermsArgs) -> Result<String, AppError> {
    let service = FakePermsService::new(state.permissions()?);

    let reply = match args {
        FakePermsArgs::Grant {
            role_id,
            permission,
        } => format_change(
            &state.prefix,
            &service.grant(caller, role_id, &permission).await?,
        ),
        FakePermsArgs::Revoke {
            role_id,
            permission,
        } => format_change(
            &state.prefix,
            &service.revoke(caller, role_id, &permission).await?,
        ),
        FakePermsArgs::List { role_id } => format_list(&service.list(caller, role_id).await?),
        FakePermsArgs::Catalog => format_catalog(&service.catalog(caller)?),
    };

    Ok(reply)
}

fn format_change(prefix: &str, change: &PermissionChange) -> String {
    match change {
        PermissionChange::Granted {
            role_id,
            permission,
            ..
        } => format!("✅ | Granted `{}` to <@&{}>", permission, role_id),
        PermissionChange::Revoked {
            role_id,
            permission,
            ..
        } => format!("✅ | Revoked `{}` from <@&{}>", permission, role_id),
        PermissionChange::UnknownPermission(name) => format!(
            "❗ | Permission `{}` does not exist, see `{}fakeperms catalog`",
            name, prefix
        ),
    }
}

fn format_list(role: &RolePermissions) -> String {
    if role.is_empty() {
        return format!("ℹ️ | <@&{}> has no fake permissions", role.role_id);
    }

    format!(
        "🔑 | <@&{}> has {}",
        role.role_id,
        code_list(&role.names)
    )
}

fn format_catalog(names: &[String]) -> String {
    if names.is_empty() {
        return "⚠️ | The permission catalog is empty, every fake permission check will deny"
            .to_string();
    }

    format!("📜 | Available permissions: {}", code_list(names))
}

fn code_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("`{}`", name))
        .collect::<Vec<_>>()
        .join(", ")
}
