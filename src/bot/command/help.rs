use super::{CommandAccess, COMMANDS};

/// Renders the command list shown by `help`.
pub fn render(prefix: &str) -> String {
    let mut lines = vec!["📖 | Commands:".to_string()];

    for spec in COMMANDS {
        let mut line = format!("`{}{}", prefix, spec.name);
        if !spec.usage.is_empty() {
            line.push(' ');
            line.push_str(spec.usage);
        }
        line.push('`');

        line.push_str(&format!(" - {}", spec.description));

        match spec.access {
            CommandAccess::Everyone => {}
            CommandAccess::GuildOwner => line.push_str(" (server owner)"),
            CommandAccess::Permission(name) => {
                line.push_str(&format!(" (requires {})", name.to_ascii_uppercase()))
            }
        }

        if !spec.aliases.is_empty() {
            line.push_str(&format!(" [aliases: {}]", spec.aliases.join(", ")));
        }

        lines.push(line);
    }

    lines.join("\n")
}
