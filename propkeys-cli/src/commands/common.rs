use anyhow::Context;
use propkeys::{tables::Entry, PropertyKeyTable};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Table selected by the global options.
pub fn open_table(opts: &GlobalOptions) -> PropertyKeyTable {
    PropertyKeyTable::with_config(opts.table_config())
}

/// Parse a code string supporting hex (0x...) and decimal.
pub fn parse_code(s: &str) -> anyhow::Result<u16> {
    let trimmed = s.trim();
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        u16::from_str_radix(hex, 16).with_context(|| format!("invalid hex code: {s}"))
    } else {
        trimmed
            .parse::<u16>()
            .with_context(|| format!("invalid code: {s}"))
    }
}

/// Returns true if `query` looks like a code rather than a name.
pub fn is_code(query: &str) -> bool {
    let trimmed = query.trim();
    trimmed.starts_with("0x")
        || trimmed.starts_with("0X")
        || (!trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()))
}

/// One key as printed by the commands.
#[derive(Debug, Serialize)]
pub struct KeyRow {
    pub code: u16,
    pub name: &'static str,
    pub short_name: String,
}

impl From<Entry> for KeyRow {
    fn from(entry: Entry) -> Self {
        KeyRow {
            code: entry.code,
            short_name: entry.short_name(),
            name: entry.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_code() {
        assert_eq!(parse_code("116").unwrap(), 116);
        assert_eq!(parse_code(" 0x74 ").unwrap(), 116);
        assert_eq!(parse_code("0XB5").unwrap(), 181);
        assert!(parse_code("70000").is_err());
        assert!(parse_code("0xZZ").is_err());
        assert!(parse_code("opacity").is_err());
    }

    #[test]
    fn test_is_code() {
        assert!(is_code("12"));
        assert!(is_code("0x0c"));
        assert!(!is_code("kPropertyOpacity"));
        assert!(!is_code("opacity"));
        assert!(!is_code(""));
    }
}
