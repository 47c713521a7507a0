//! Identifier normalization for the messaging network.

/// Domain suffix the client expects on individual recipient identifiers.
pub const PHONE_SUFFIX: &str = "@c.us";

/// Normalize a raw phone number into the wire identifier the client
/// requires: every non-digit character is stripped and the domain suffix
/// appended. Total and idempotent; empty input yields the suffix alone.
pub fn normalize_phone(raw: &str) -> String {
    let mut normalized: String = raw.chars().filter(char::is_ascii_digit).collect();
    normalized.push_str(PHONE_SUFFIX);
    normalized
}
