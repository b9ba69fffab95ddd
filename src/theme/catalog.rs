//! Picker metadata for the settings screen.

use serde::Serialize;

use super::{AccentColor, FontFamily, ThemeName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOption {
    pub id: ThemeName,
    pub name: &'static str,
    pub name_hindi: &'static str,
    /// Swatch shown in the picker; a CSS gradient for the custom entry.
    pub preview: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccentOption {
    pub id: AccentColor,
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontOption {
    pub id: FontFamily,
    pub name: &'static str,
    pub sample: &'static str,
}

pub const AVAILABLE_THEMES: [ThemeOption; 11] = [
    theme(ThemeName::Light, "Light", "लाइट", "#f8fafc"),
    theme(ThemeName::Dark, "Dark", "डार्क", "#0f172a"),
    theme(ThemeName::Neon, "Neon", "नियॉन", "#00ff88"),
    theme(ThemeName::Wowtruck, "WowTruck", "वाउट्रक", "#ff6b35"),
    theme(ThemeName::Orange, "Orange", "नारंगी", "#fb923c"),
    theme(ThemeName::Ocean, "Ocean", "समुद्र", "#0c4a6e"),
    theme(ThemeName::Forest, "Forest", "जंगल", "#14532d"),
    theme(ThemeName::Sunset, "Sunset", "सूर्यास्त", "#7c2d12"),
    theme(ThemeName::Midnight, "Midnight", "मध्यरात्रि", "#020617"),
    theme(ThemeName::Corporate, "Corporate", "कॉर्पोरेट", "#1e3a5f"),
    theme(
        ThemeName::Custom,
        "Custom",
        "कस्टम",
        "linear-gradient(45deg, #f97316, #8b5cf6)",
    ),
];

pub const AVAILABLE_ACCENTS: [AccentOption; 10] = [
    accent(AccentColor::Orange, "Orange"),
    accent(AccentColor::Blue, "Blue"),
    accent(AccentColor::Green, "Green"),
    accent(AccentColor::Purple, "Purple"),
    accent(AccentColor::Red, "Red"),
    accent(AccentColor::Pink, "Pink"),
    accent(AccentColor::Cyan, "Cyan"),
    accent(AccentColor::Amber, "Amber"),
    accent(AccentColor::Emerald, "Emerald"),
    accent(AccentColor::Rose, "Rose"),
];

pub const AVAILABLE_FONTS: [FontOption; 7] = [
    font(FontFamily::Inter, "Inter", "Modern & Clean"),
    font(FontFamily::Roboto, "Roboto", "Google Standard"),
    font(FontFamily::Poppins, "Poppins", "Friendly & Round"),
    font(FontFamily::Nunito, "Nunito", "Soft & Readable"),
    font(FontFamily::Jetbrains, "JetBrains Mono", "Code Style"),
    font(FontFamily::Noto, "Noto Sans", "हिंदी Support"),
    font(FontFamily::System, "System", "Native Look"),
];

const fn theme(
    id: ThemeName,
    name: &'static str,
    name_hindi: &'static str,
    preview: &'static str,
) -> ThemeOption {
    ThemeOption {
        id,
        name,
        name_hindi,
        preview,
    }
}

const fn accent(id: AccentColor, name: &'static str) -> AccentOption {
    AccentOption {
        id,
        name,
        color: id.hex(),
    }
}

const fn font(id: FontFamily, name: &'static str, sample: &'static str) -> FontOption {
    FontOption { id, name, sample }
}
