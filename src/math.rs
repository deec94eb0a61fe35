//! Hex string helpers and RGB distance math.
//! Channels are plain u8 triples; distances are f64.

use crate::constants;

/// Strip a single leading `#`, if any.
pub(crate) fn strip_hash(hex: &str) -> &str {
    hex.strip_prefix('#').unwrap_or(hex)
}

/// True iff `s` is an optional `#` followed by exactly six hex digits.
///
/// This is the only gate in front of the distance math: every code path that
/// computes a distance from user input checks this first.
pub fn is_valid_hex(s: &str) -> bool {
    let digits = strip_hash(s);
    digits.len() == 6 && digits.bytes().all(|c| c.is_ascii_hexdigit())
}

/// Normalize a six digit hex color to `#RRGGBB` uppercase.
///
/// Returns `None` for anything [`is_valid_hex`] rejects.
pub fn normalize_hex(hex: &str) -> Option<String> {
    if !is_valid_hex(hex) {
        return None;
    }
    Some(format!("#{}", strip_hash(hex).to_ascii_uppercase()))
}

/// Clamp raw hex field text to the longest input the search accepts.
///
/// Anything past `#RRGGBB` is dropped before the query reaches the ranker.
pub fn sanitize_hex_input(raw: &str) -> String {
    raw.trim()
        .chars()
        .take(constants::MAX_HEX_INPUT_LEN)
        .collect()
}

/// Euclidean distance between two RGB triples.
pub(crate) fn rgb_distance((r1, g1, b1): (u8, u8, u8), (r2, g2, b2): (u8, u8, u8)) -> f64 {
    let r = r1 as f64 - r2 as f64;
    let g = g1 as f64 - g2 as f64;
    let b = b1 as f64 - b2 as f64;
    (r * r + g * g + b * b).sqrt()
}
