/// Comparison form for option names and values: trimmed and lowercased.
///
/// All option matching in this crate (palette lookup, presentation keys,
/// visibility predicates) compares in this form while preserving the raw
/// strings for display and cart payloads.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
