pub mod catalog;
pub mod palette;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{HexColor, Rgb};

pub use catalog::{AVAILABLE_ACCENTS, AVAILABLE_FONTS, AVAILABLE_THEMES};
pub use palette::{
    is_dark, resolve_theme_colors, BackgroundColors, ResolvedTheme, TextColors, ThemeColors,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Expands to a lowercase-tagged enum with `ALL`, `as_str`, `Display` and `FromStr`.
macro_rules! tagged_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $tag:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $tag)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let normalized = value.trim().to_ascii_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str() == normalized)
                    .ok_or_else(|| UnknownVariant {
                        kind: $kind,
                        value: value.to_string(),
                    })
            }
        }
    };
}

tagged_enum! {
    /// Base palette selection. Every variant except `Custom` is a fixed preset.
    ThemeName, "theme" {
        Light => "light",
        Dark => "dark",
        Neon => "neon",
        Wowtruck => "wowtruck",
        Orange => "orange",
        Ocean => "ocean",
        Forest => "forest",
        Sunset => "sunset",
        Midnight => "midnight",
        Corporate => "corporate",
        Custom => "custom",
    }
}

tagged_enum! {
    AccentColor, "accent" {
        Orange => "orange",
        Blue => "blue",
        Green => "green",
        Purple => "purple",
        Red => "red",
        Pink => "pink",
        Cyan => "cyan",
        Amber => "amber",
        Emerald => "emerald",
        Rose => "rose",
    }
}

tagged_enum! {
    FontFamily, "font" {
        Inter => "inter",
        Roboto => "roboto",
        Poppins => "poppins",
        Nunito => "nunito",
        Jetbrains => "jetbrains",
        Noto => "noto",
        System => "system",
    }
}

tagged_enum! {
    FontSize, "font size" {
        Small => "small",
        Medium => "medium",
        Large => "large",
        Xlarge => "xlarge",
    }
}

impl ThemeName {
    pub const fn is_custom(self) -> bool {
        matches!(self, ThemeName::Custom)
    }
}

impl AccentColor {
    pub const fn hex(self) -> &'static str {
        match self {
            AccentColor::Orange => "#f97316",
            AccentColor::Blue => "#3b82f6",
            AccentColor::Green => "#22c55e",
            AccentColor::Purple => "#a855f7",
            AccentColor::Red => "#ef4444",
            AccentColor::Pink => "#ec4899",
            AccentColor::Cyan => "#06b6d4",
            AccentColor::Amber => "#f59e0b",
            AccentColor::Emerald => "#10b981",
            AccentColor::Rose => "#f43f5e",
        }
    }
}

impl FontFamily {
    /// CSS `font-family` stack.
    pub const fn css_value(self) -> &'static str {
        match self {
            FontFamily::Inter => "'Inter', sans-serif",
            FontFamily::Roboto => "'Roboto', sans-serif",
            FontFamily::Poppins => "'Poppins', sans-serif",
            FontFamily::Nunito => "'Nunito', sans-serif",
            FontFamily::Jetbrains => "'JetBrains Mono', monospace",
            FontFamily::Noto => "'Noto Sans Devanagari', 'Noto Sans', sans-serif",
            FontFamily::System => "system-ui, -apple-system, sans-serif",
        }
    }
}

impl FontSize {
    pub const fn css_value(self) -> &'static str {
        match self {
            FontSize::Small => "14px",
            FontSize::Medium => "16px",
            FontSize::Large => "18px",
            FontSize::Xlarge => "20px",
        }
    }
}

/// The four user-picked inputs of the custom theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColors {
    pub background: HexColor,
    pub surface: HexColor,
    pub card: HexColor,
    pub accent: HexColor,
}

impl Default for CustomColors {
    fn default() -> Self {
        Self {
            background: HexColor::from_rgb(Rgb::new(0x1e, 0x29, 0x3b)),
            surface: HexColor::from_rgb(Rgb::new(0x33, 0x41, 0x55)),
            card: HexColor::from_rgb(Rgb::new(0x47, 0x55, 0x69)),
            accent: HexColor::from_rgb(Rgb::new(0xf9, 0x73, 0x16)),
        }
    }
}

/// Partial update for [`CustomColors`]; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColorsPatch {
    #[serde(default)]
    pub background: Option<HexColor>,
    #[serde(default)]
    pub surface: Option<HexColor>,
    #[serde(default)]
    pub card: Option<HexColor>,
    #[serde(default)]
    pub accent: Option<HexColor>,
}

impl CustomColorsPatch {
    pub fn is_empty(&self) -> bool {
        self.background.is_none()
            && self.surface.is_none()
            && self.card.is_none()
            && self.accent.is_none()
    }

    pub fn merged_into(self, current: &CustomColors) -> CustomColors {
        CustomColors {
            background: self.background.unwrap_or_else(|| current.background.clone()),
            surface: self.surface.unwrap_or_else(|| current.surface.clone()),
            card: self.card.unwrap_or_else(|| current.card.clone()),
            accent: self.accent.unwrap_or_else(|| current.accent.clone()),
        }
    }
}

/// User theme preferences. This is the only state that gets persisted.
///
/// Missing keys fall back to [`ThemeConfig::default`] when deserializing;
/// present but mistyped keys fail the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    pub theme: ThemeName,
    pub accent: AccentColor,
    pub font: FontFamily,
    pub font_size: FontSize,
    pub custom_colors: CustomColors,
    pub high_contrast: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::Wowtruck,
            accent: AccentColor::Orange,
            font: FontFamily::Inter,
            font_size: FontSize::Medium,
            custom_colors: CustomColors::default(),
            high_contrast: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_name_parses_case_insensitively() {
        assert_eq!("Midnight".parse::<ThemeName>(), Ok(ThemeName::Midnight));
        assert_eq!(" custom ".parse::<ThemeName>(), Ok(ThemeName::Custom));
        let err = "sepia".parse::<ThemeName>().unwrap_err();
        assert_eq!(err.kind, "theme");
        assert_eq!(err.to_string(), "unknown theme \"sepia\"");
    }

    #[test]
    fn variant_tables_have_expected_sizes() {
        assert_eq!(ThemeName::ALL.len(), 11);
        assert_eq!(AccentColor::ALL.len(), 10);
        assert_eq!(FontFamily::ALL.len(), 7);
        assert_eq!(FontSize::ALL.len(), 4);
    }

    #[test]
    fn default_config_matches_documented_values() {
        let config = ThemeConfig::default();
        assert_eq!(config.theme, ThemeName::Wowtruck);
        assert_eq!(config.accent, AccentColor::Orange);
        assert_eq!(config.font, FontFamily::Inter);
        assert_eq!(config.font_size, FontSize::Medium);
        assert_eq!(config.custom_colors.background.as_str(), "#1e293b");
        assert_eq!(config.custom_colors.surface.as_str(), "#334155");
        assert_eq!(config.custom_colors.card.as_str(), "#475569");
        assert_eq!(config.custom_colors.accent.as_str(), "#f97316");
        assert!(!config.high_contrast);
    }

    #[test]
    fn config_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(ThemeConfig::default()).unwrap();
        assert_eq!(value["theme"], "wowtruck");
        assert_eq!(value["fontSize"], "medium");
        assert_eq!(value["highContrast"], false);
        assert_eq!(value["customColors"]["background"], "#1e293b");
    }

    #[test]
    fn config_fills_missing_keys_from_default() {
        let config: ThemeConfig =
            serde_json::from_str(r#"{"theme": "ocean", "fontSize": "large"}"#).unwrap();
        assert_eq!(config.theme, ThemeName::Ocean);
        assert_eq!(config.font_size, FontSize::Large);
        assert_eq!(config.accent, AccentColor::Orange);
        assert_eq!(config.custom_colors, CustomColors::default());
    }

    #[test]
    fn config_rejects_mistyped_fields() {
        assert!(serde_json::from_str::<ThemeConfig>(r#"{"theme": "sepia"}"#).is_err());
        assert!(serde_json::from_str::<ThemeConfig>(r#"{"highContrast": "yes"}"#).is_err());
        assert!(serde_json::from_str::<ThemeConfig>(
            r##"{"customColors": {"background": "#12", "surface": "#000000", "card": "#000000", "accent": "#000000"}}"##
        )
        .is_err());
        assert!(serde_json::from_str::<ThemeConfig>("42").is_err());
    }

    #[test]
    fn patch_merges_only_given_fields() {
        let patch = CustomColorsPatch {
            background: Some("#000000".parse().unwrap()),
            ..CustomColorsPatch::default()
        };
        assert!(!patch.is_empty());
        let merged = patch.merged_into(&CustomColors::default());
        assert_eq!(merged.background.as_str(), "#000000");
        assert_eq!(merged.surface.as_str(), "#334155");
        assert_eq!(merged.accent.as_str(), "#f97316");
    }

    #[test]
    fn font_css_values_cover_every_variant() {
        for font in FontFamily::ALL {
            assert!(!font.css_value().is_empty());
        }
        assert_eq!(FontSize::Xlarge.css_value(), "20px");
    }
}
