//! Rgb type and the color distance used for floss matching.
//!
//! Stores 0–255 channels. Distance is plain Euclidean RGB with no perceptual
//! correction.

use serde::{Deserialize, Serialize};

use crate::math;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `RRGGBB` with or without a leading `#`.
    ///
    /// Shorthand and alpha forms are not floss colors and are rejected.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if !math::is_valid_hex(hex) {
            return None;
        }
        let digits = math::strip_hash(hex);
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Create from f64 channels in 0.0–1.0, rounding to the nearest step.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    /// Format as `#RRGGBB`, uppercase.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_tuple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Euclidean distance in RGB space, in [0, ~441.67].
    pub fn distance(&self, other: &Rgb) -> f64 {
        math::rgb_distance(self.to_tuple(), other.to_tuple())
    }
}

/// Parse a hex color into its channels.
///
/// The input is expected to have passed [`math::is_valid_hex`]; anything else
/// yields `None`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    Rgb::from_hex(hex)
}

/// Euclidean RGB distance between two hex colors.
///
/// Both sides must be valid six digit hex. A malformed side makes the result
/// `NaN`, so validate first.
pub fn distance(hex_a: &str, hex_b: &str) -> f64 {
    match (hex_to_rgb(hex_a), hex_to_rgb(hex_b)) {
        (Some(a), Some(b)) => a.distance(&b),
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::{distance, hex_to_rgb, Rgb};

    #[test]
    fn parses_channels_with_and_without_hash() {
        assert_eq!(hex_to_rgb("#C72B3B"), Some(Rgb::new(0xC7, 0x2B, 0x3B)));
        assert_eq!(hex_to_rgb("c72b3b"), Some(Rgb::new(0xC7, 0x2B, 0x3B)));
    }

    #[test]
    fn rejects_shorthand_and_alpha_forms() {
        assert_eq!(hex_to_rgb("#FFF"), None);
        assert_eq!(hex_to_rgb("#FF0000FF"), None);
        assert_eq!(hex_to_rgb("zzzzzz"), None);
    }

    #[test]
    fn formats_uppercase_with_hash() {
        assert_eq!(Rgb::new(0xab, 0x01, 0xff).to_hex(), "#AB01FF");
    }

    #[test]
    fn unit_channels_round_and_clamp() {
        assert_eq!(Rgb::from_unit(1.0, 0.5, -0.2), Rgb::new(255, 128, 0));
    }

    #[test]
    fn distance_is_zero_for_the_same_color() {
        for hex in ["#000000", "#FFFFFF", "c72b3b", "#7BB547"] {
            assert_eq!(distance(hex, hex), 0.0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [("#FF0000", "#00FF00"), ("#C72B3B", "e31d42"), ("#000000", "#123456")];
        for (a, b) in pairs {
            assert_eq!(distance(a, b), distance(b, a));
        }
    }

    #[test]
    fn distance_matches_the_euclidean_formula() {
        // (3, 4, 0) apart
        assert_eq!(distance("#000000", "#030400"), 5.0);
    }

    #[test]
    fn given_malformed_side_when_measured_then_distance_is_nan() {
        assert!(distance("#FF00", "#FF0000").is_nan());
        assert!(distance("#FF0000", "red").is_nan());
    }
}
