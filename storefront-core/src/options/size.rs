//! Size/extension codec
//!
//! Seating-capacity option values encode a base size plus an optional
//! extension clause, e.g. `"Seats 4 + Extension for 2"`. The codec is a
//! pure inverse pair: `parse_size_value(make_size_value(base, ext))`
//! recovers both parts for any base starting with "seats".

use serde::{Deserialize, Serialize};

/// Extension tier of a size value
///
/// Declaration order is the display order (no extension first).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum SizeExtension {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "4")]
    Four,
}

impl SizeExtension {
    /// All tiers in display order
    pub const ALL: [SizeExtension; 3] = [Self::None, Self::Two, Self::Four];

    /// Extra seats this tier adds, if any
    pub fn seat_count(self) -> Option<u8> {
        match self {
            Self::None => None,
            Self::Two => Some(2),
            Self::Four => Some(4),
        }
    }
}

/// Decoded size value
///
/// `base == None` means the value is not a size value at all. `base` set
/// with `ext == None` means the base parsed but the extension clause did
/// not; callers treat these as existing-but-uncategorized and render them
/// flat rather than dropping them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedSize {
    pub base: Option<String>,
    pub ext: Option<SizeExtension>,
}

const SEPARATOR: &str = " + ";
const BASE_PREFIX: &str = "seats";
const EXTENSION_MARKER: &str = "extension for";

/// Decode a compound size option value.
///
/// The first `" + "`-separated segment is the trimmed base and must
/// case-insensitively start with `"seats"`; the remainder, when present,
/// must carry an `extension for N` clause with N exactly 2 or 4.
pub fn parse_size_value(value: &str) -> ParsedSize {
    let (base_part, ext_part) = match value.split_once(SEPARATOR) {
        Some((base, rest)) => (base, Some(rest)),
        None => (value, None),
    };

    let base = base_part.trim();
    if base.is_empty() || !base.to_lowercase().starts_with(BASE_PREFIX) {
        return ParsedSize::default();
    }
    let base = Some(base.to_string());

    let Some(ext_part) = ext_part else {
        return ParsedSize {
            base,
            ext: Some(SizeExtension::None),
        };
    };

    let ext = match parse_extension_clause(ext_part) {
        Some(2) => Some(SizeExtension::Two),
        Some(4) => Some(SizeExtension::Four),
        _ => None,
    };

    ParsedSize { base, ext }
}

/// Encode a base size and extension tier back into the option value form.
pub fn make_size_value(base: &str, ext: SizeExtension) -> String {
    match ext.seat_count() {
        None => base.to_string(),
        Some(seats) => format!("{base} + Extension for {seats}"),
    }
}

/// Extract the seat count from an `extension for N` clause,
/// case-insensitively, anywhere in the segment.
fn parse_extension_clause(clause: &str) -> Option<u32> {
    let lower = clause.to_lowercase();
    let start = lower.find(EXTENSION_MARKER)? + EXTENSION_MARKER.len();
    let rest = lower[start..].trim_start();
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
