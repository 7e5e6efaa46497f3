//! Parsing of the `/leoMM [COUNTRY]` report command.

const COMMAND_WORD: &str = "/leo";

/// A validated report request: target month plus optional country filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub month: u32,
    pub country: Option<String>,
}

/// Parses a raw message into a report request.
///
/// The command word is `/leo` (case-insensitive) followed immediately by one
/// or two digits naming a month in 1..=12. Any remaining tokens form the
/// country filter, joined with single spaces and upper-cased. Anything else
/// yields `None` rather than an error, so the caller can fall through to
/// other handlers.
pub fn parse_command(input: &str) -> Option<CommandRequest> {
    let mut tokens = input.split_whitespace();
    let word = tokens.next()?.to_lowercase();
    let digits = word.strip_prefix(COMMAND_WORD)?;
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let month: u32 = digits.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }

    let rest: Vec<&str> = tokens.collect();
    let country = if rest.is_empty() {
        None
    } else {
        Some(rest.join(" ").to_uppercase())
    };

    Some(CommandRequest { month, country })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_country_is_none_not_empty() {
        let parsed = parse_command("/leo07").expect("valid command");
        assert_eq!(parsed.country, None);

        let parsed = parse_command("/leo07   ").expect("valid command");
        assert_eq!(parsed.country, None);
    }

    #[test]
    fn keeps_month_and_country_together() {
        let parsed = parse_command("/leo7 sri lanka").expect("valid command");
        assert_eq!(parsed.month, 7);
        assert_eq!(parsed.country.as_deref(), Some("SRI LANKA"));
    }
}
