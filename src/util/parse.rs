//! Parsers for command arguments typed by users.

use std::time::Duration;

/// Parses a duration such as `30d`, `12h`, `15m` or `45s`.
///
/// The grammar is a positive integer followed by exactly one unit character.
///
/// # Returns
/// - `Some(Duration)` - Well-formed, non-zero duration
/// - `None` - Anything else, including overflow and a zero amount
pub fn parse_duration(input: &str) -> Option<Duration> {
    let input = input.trim();
    let unit = input.chars().last()?;
    let amount = &input[..input.len() - unit.len_utf8()];

    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let multiplier = match unit {
        'd' => 86_400,
        'h' => 3_600,
        'm' => 60,
        's' => 1,
        _ => return None,
    };

    let seconds = amount.parse::<u64>().ok()?.checked_mul(multiplier)?;
    if seconds == 0 {
        return None;
    }

    Some(Duration::from_secs(seconds))
}

/// Parses a user reference: `<@id>`, `<@!id>` or a raw id.
pub fn parse_user_id(input: &str) -> Option<u64> {
    let input = input.trim();
    let id = match input.strip_prefix("<@").and_then(|s| s.strip_suffix('>')) {
        Some(inner) => inner.strip_prefix('!').unwrap_or(inner),
        None => input,
    };

    parse_snowflake(id)
}

/// Parses a role reference: `<@&id>` or a raw id.
pub fn parse_role_id(input: &str) -> Option<u64> {
    let input = input.trim();
    let id = input
        .strip_prefix("<@&")
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(input);

    parse_snowflake(id)
}

/// Discord snowflakes are non-zero and fit in 63 bits.
fn parse_snowflake(id: &str) -> Option<u64> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    id.parse::<u64>()
        .ok()
        .filter(|id| *id != 0 && *id <= i64::MAX as u64)
}
