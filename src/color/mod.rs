use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text color picked for backgrounds brighter than mid luminance.
pub const DARK_TEXT: &str = "#1e293b";
/// Text color picked for everything else.
pub const LIGHT_TEXT: &str = "#f1f5f9";

/// WCAG AA threshold for normal-size text.
pub const WCAG_AA_CONTRAST: f64 = 4.5;

const SRGB_LINEAR_THRESHOLD: f64 = 0.03928;
const TEXT_LUMINANCE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color {0:?}; expected #RRGGBB")]
    InvalidHex(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// WCAG relative luminance in `[0, 1]`.
    pub fn luminance(self) -> f64 {
        let r = srgb_to_linear(self.r);
        let g = srgb_to_linear(self.g);
        let b = srgb_to_linear(self.b);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Adds `delta` to every channel, clamping each to `0..=255`.
    pub fn adjusted(self, delta: i32) -> Self {
        let shift = |channel: u8| i32::from(channel).saturating_add(delta).clamp(0, 255) as u8;
        Self::new(shift(self.r), shift(self.g), shift(self.b))
    }
}

fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= SRGB_LINEAR_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Parses `#RRGGBB` or `RRGGBB` (any case). Anything else yields `None`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }

    let red = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let green = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb::new(red, green, blue))
}

/// Relative luminance of `hex`, or `0.0` when it does not parse.
pub fn luminance(hex: &str) -> f64 {
    hex_to_rgb(hex).map_or(0.0, Rgb::luminance)
}

pub fn contrast_ratio(fg: &str, bg: &str) -> f64 {
    let lum_fg = luminance(fg);
    let lum_bg = luminance(bg);
    let lighter = lum_fg.max(lum_bg);
    let darker = lum_fg.min(lum_bg);
    (lighter + 0.05) / (darker + 0.05)
}

pub fn meets_aa(fg: &str, bg: &str) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AA_CONTRAST
}

/// Picks [`DARK_TEXT`] or [`LIGHT_TEXT`] from a flat luminance cut-off.
///
/// This does not consult [`meets_aa`]; some mid-luminance backgrounds end up
/// with a pairing below the AA ratio.
pub fn contrast_text_color(bg: &str) -> &'static str {
    if luminance(bg) > TEXT_LUMINANCE_THRESHOLD {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

/// Lightens (positive `delta`) or darkens every channel of `hex`.
///
/// Input that does not parse is returned unchanged.
pub fn adjust_color(hex: &str, delta: i32) -> String {
    match hex_to_rgb(hex) {
        Some(rgb) => rgb.adjusted(delta).to_hex(),
        None => hex.to_string(),
    }
}

/// A validated color, always stored as lowercase `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb.to_hex())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgb(&self) -> Rgb {
        // The inner string is validated on construction.
        hex_to_rgb(&self.0).unwrap_or(Rgb::new(0, 0, 0))
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(value)
            .map(Self::from_rgb)
            .ok_or_else(|| ColorError::InvalidHex(value.to_string()))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn hex_to_rgb_accepts_hash_or_plain_six_digit_hex() {
        assert_eq!(hex_to_rgb("#12ab34"), Some(Rgb::new(0x12, 0xab, 0x34)));
        assert_eq!(hex_to_rgb("12AB34"), Some(Rgb::new(0x12, 0xab, 0x34)));
    }

    #[test]
    fn hex_to_rgb_rejects_invalid_values() {
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#zzzzzz"), None);
        assert_eq!(hex_to_rgb(""), None);
        assert_eq!(hex_to_rgb("##12ab34"), None);
        assert_eq!(hex_to_rgb("#12ab34ff"), None);
        assert_eq!(hex_to_rgb(" #12ab34"), None);
        assert_eq!(hex_to_rgb("+1+2+3"), None);
    }

    #[test]
    fn hex_to_rgb_does_not_panic_on_multibyte_input() {
        assert_eq!(hex_to_rgb("#ééé"), None);
        assert_eq!(hex_to_rgb("ab€cd"), None);
    }

    #[test]
    fn luminance_spans_black_to_white() {
        assert!(approx_eq(luminance("#ffffff"), 1.0));
        assert!(approx_eq(luminance("#000000"), 0.0));
    }

    #[test]
    fn luminance_of_unparseable_input_is_zero() {
        assert_eq!(luminance("not a color"), 0.0);
    }

    #[test]
    fn contrast_ratio_black_on_white_is_21() {
        let ratio = contrast_ratio("#000000", "#ffffff");
        assert!((ratio - 21.0).abs() < 1e-9, "got {ratio}");
    }

    #[test]
    fn contrast_ratio_same_color_is_one() {
        assert!(approx_eq(contrast_ratio("#808080", "#808080"), 1.0));
    }

    #[test]
    fn meets_aa_uses_four_and_a_half_threshold() {
        assert!(meets_aa("#000000", "#ffffff"));
        assert!(!meets_aa("#777777", "#888888"));
        // #767676 on white is the well-known 4.54:1 boundary gray.
        assert!(meets_aa("#767676", "#ffffff"));
    }

    #[test]
    fn contrast_text_color_switches_on_mid_luminance() {
        assert_eq!(contrast_text_color("#000000"), LIGHT_TEXT);
        assert_eq!(contrast_text_color("#ffffff"), DARK_TEXT);
        assert_eq!(contrast_text_color("garbage"), LIGHT_TEXT);
    }

    #[test]
    fn adjust_color_clamps_at_both_ends() {
        assert_eq!(adjust_color("#000000", -50), "#000000");
        assert_eq!(adjust_color("#ffffff", 50), "#ffffff");
        assert_eq!(adjust_color("#f0f0f0", 50), "#ffffff");
        assert_eq!(adjust_color("#101010", -50), "#000000");
        assert_eq!(adjust_color("#808080", i32::MAX), "#ffffff");
        assert_eq!(adjust_color("#808080", i32::MIN), "#000000");
    }

    #[test]
    fn adjust_color_moves_each_channel_independently() {
        assert_eq!(adjust_color("#1e293b", 60), "#5a6577");
        assert_eq!(adjust_color("#f1f5f9", -60), "#b5b9bd");
        assert_eq!(adjust_color("#F1F5F9", 0), "#f1f5f9");
    }

    #[test]
    fn adjust_color_returns_unparseable_input_unchanged() {
        assert_eq!(adjust_color("nope", 20), "nope");
    }

    #[test]
    fn hex_color_normalizes_case_and_prefix() {
        let color: HexColor = "AABBCC".parse().unwrap();
        assert_eq!(color.as_str(), "#aabbcc");
        assert_eq!(color.rgb(), Rgb::new(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn hex_color_rejects_invalid_input() {
        let err = "#12345".parse::<HexColor>().unwrap_err();
        assert_eq!(err, ColorError::InvalidHex("#12345".to_string()));
    }

    #[test]
    fn hex_color_serde_uses_plain_string() {
        let color: HexColor = serde_json::from_str("\"#F97316\"").unwrap();
        assert_eq!(color.as_str(), "#f97316");
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#f97316\"");
        assert!(serde_json::from_str::<HexColor>("\"orange\"").is_err());
        assert!(serde_json::from_str::<HexColor>("42").is_err());
    }

    proptest! {
        #[test]
        fn contrast_ratio_is_symmetric(a in any::<(u8, u8, u8)>(), b in any::<(u8, u8, u8)>()) {
            let a = Rgb::new(a.0, a.1, a.2).to_hex();
            let b = Rgb::new(b.0, b.1, b.2).to_hex();
            prop_assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
        }

        #[test]
        fn contrast_ratio_is_at_least_one(a in any::<(u8, u8, u8)>(), b in any::<(u8, u8, u8)>()) {
            let a = Rgb::new(a.0, a.1, a.2).to_hex();
            let b = Rgb::new(b.0, b.1, b.2).to_hex();
            prop_assert!(contrast_ratio(&a, &b) >= 1.0);
        }

        #[test]
        fn hex_round_trips_up_to_case(hex in "#?[0-9a-fA-F]{6}") {
            let rgb = hex_to_rgb(&hex).unwrap();
            let expected = format!("#{}", hex.trim_start_matches('#').to_ascii_lowercase());
            prop_assert_eq!(rgb.to_hex(), expected);
        }

        #[test]
        fn luminance_stays_in_unit_range(rgb in any::<(u8, u8, u8)>()) {
            let lum = Rgb::new(rgb.0, rgb.1, rgb.2).luminance();
            prop_assert!((0.0..=1.0 + 1e-12).contains(&lum));
        }

        #[test]
        fn adjust_color_never_produces_invalid_hex(
            rgb in any::<(u8, u8, u8)>(),
            delta in any::<i32>(),
        ) {
            let adjusted = adjust_color(&Rgb::new(rgb.0, rgb.1, rgb.2).to_hex(), delta);
            prop_assert!(hex_to_rgb(&adjusted).is_some());
            prop_assert_eq!(adjusted.len(), 7);
        }
    }
}
