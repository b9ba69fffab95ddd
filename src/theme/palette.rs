use serde::Serialize;

use super::{CustomColors, ThemeConfig, ThemeName};
use crate::color::{adjust_color, contrast_ratio, contrast_text_color, luminance, LIGHT_TEXT};

const HOVER_LIFT: i32 = 20;
const BORDER_LIFT: i32 = 30;
const SECONDARY_TEXT_SHIFT: i32 = 60;
const MUTED_TEXT_SHIFT: i32 = 40;
const DARK_LUMINANCE_CUTOFF: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackgroundColors {
    pub primary: String,
    pub secondary: String,
    pub card: String,
    pub hover: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub muted: String,
    pub inverse: String,
}

/// Fully populated palette. Never persisted, always derived from a config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub bg: BackgroundColors,
    pub text: TextColors,
    pub border: String,
    pub accent: String,
}

/// Compile-time palette of one preset; the accent comes from a separate table.
struct PresetPalette {
    bg: [&'static str; 4],
    text: [&'static str; 4],
    border: &'static str,
}

impl PresetPalette {
    fn to_colors(&self, accent: &str) -> ThemeColors {
        let [bg_primary, bg_secondary, bg_card, bg_hover] = self.bg;
        let [text_primary, text_secondary, text_muted, text_inverse] = self.text;
        ThemeColors {
            bg: BackgroundColors {
                primary: bg_primary.to_string(),
                secondary: bg_secondary.to_string(),
                card: bg_card.to_string(),
                hover: bg_hover.to_string(),
            },
            text: TextColors {
                primary: text_primary.to_string(),
                secondary: text_secondary.to_string(),
                muted: text_muted.to_string(),
                inverse: text_inverse.to_string(),
            },
            border: self.border.to_string(),
            accent: accent.to_string(),
        }
    }
}

const LIGHT: PresetPalette = PresetPalette {
    bg: ["#f8fafc", "#f1f5f9", "#ffffff", "#e2e8f0"],
    text: ["#1e293b", "#64748b", "#94a3b8", "#ffffff"],
    border: "#e2e8f0",
};

const DARK: PresetPalette = PresetPalette {
    bg: ["#0f172a", "#1e293b", "#334155", "#475569"],
    text: ["#f1f5f9", "#94a3b8", "#64748b", "#0f172a"],
    border: "#334155",
};

// #00ff88 at 25% alpha composited over the neon background.
const NEON: PresetPalette = PresetPalette {
    bg: ["#0a0a0a", "#141414", "#1a1a2e", "#252540"],
    text: ["#00ff88", "#00cc6a", "#009950", "#0a0a0a"],
    border: "#07472a",
};

const WOWTRUCK: PresetPalette = PresetPalette {
    bg: ["#0f0f1a", "#1a1a2e", "#252547", "#2f2f5a"],
    text: ["#ffffff", "#a78bfa", "#7c3aed", "#0f0f1a"],
    border: "#3f3f6f",
};

const ORANGE: PresetPalette = PresetPalette {
    bg: ["#1c1917", "#292524", "#44403c", "#57534e"],
    text: ["#fafaf9", "#d6d3d1", "#a8a29e", "#1c1917"],
    border: "#57534e",
};

const OCEAN: PresetPalette = PresetPalette {
    bg: ["#0c4a6e", "#075985", "#0369a1", "#0284c7"],
    text: ["#e0f2fe", "#bae6fd", "#7dd3fc", "#0c4a6e"],
    border: "#0284c7",
};

const FOREST: PresetPalette = PresetPalette {
    bg: ["#14532d", "#166534", "#15803d", "#16a34a"],
    text: ["#dcfce7", "#bbf7d0", "#86efac", "#14532d"],
    border: "#22c55e",
};

const SUNSET: PresetPalette = PresetPalette {
    bg: ["#7c2d12", "#9a3412", "#c2410c", "#ea580c"],
    text: ["#ffedd5", "#fed7aa", "#fdba74", "#7c2d12"],
    border: "#f97316",
};

const MIDNIGHT: PresetPalette = PresetPalette {
    bg: ["#020617", "#0f172a", "#1e293b", "#334155"],
    text: ["#e2e8f0", "#cbd5e1", "#94a3b8", "#020617"],
    border: "#1e293b",
};

const CORPORATE: PresetPalette = PresetPalette {
    bg: ["#1e3a5f", "#234b73", "#2c5a87", "#35699b"],
    text: ["#f0f9ff", "#e0f2fe", "#bae6fd", "#1e3a5f"],
    border: "#3b82f6",
};

fn preset_palette(theme: ThemeName) -> Option<&'static PresetPalette> {
    match theme {
        ThemeName::Light => Some(&LIGHT),
        ThemeName::Dark => Some(&DARK),
        ThemeName::Neon => Some(&NEON),
        ThemeName::Wowtruck => Some(&WOWTRUCK),
        ThemeName::Orange => Some(&ORANGE),
        ThemeName::Ocean => Some(&OCEAN),
        ThemeName::Forest => Some(&FOREST),
        ThemeName::Sunset => Some(&SUNSET),
        ThemeName::Midnight => Some(&MIDNIGHT),
        ThemeName::Corporate => Some(&CORPORATE),
        ThemeName::Custom => None,
    }
}

/// Resolve the palette for `config`: table lookup for presets, derivation for custom.
pub fn resolve_theme_colors(config: &ThemeConfig) -> ThemeColors {
    match preset_palette(config.theme) {
        Some(preset) => preset.to_colors(config.accent.hex()),
        None => derive_custom_colors(&config.custom_colors),
    }
}

fn derive_custom_colors(custom: &CustomColors) -> ThemeColors {
    let background = custom.background.as_str();
    let surface = custom.surface.as_str();
    let card = custom.card.as_str();

    let text_primary = contrast_text_color(background);
    // Secondary and muted text walk away from the primary text toward the background.
    let direction = if text_primary == LIGHT_TEXT { -1 } else { 1 };
    let text_secondary = adjust_color(text_primary, direction * SECONDARY_TEXT_SHIFT);
    let text_muted = adjust_color(&text_secondary, direction * MUTED_TEXT_SHIFT);

    ThemeColors {
        bg: BackgroundColors {
            primary: background.to_string(),
            secondary: surface.to_string(),
            card: card.to_string(),
            hover: adjust_color(card, HOVER_LIFT),
        },
        text: TextColors {
            primary: text_primary.to_string(),
            secondary: text_secondary,
            muted: text_muted,
            inverse: background.to_string(),
        },
        border: adjust_color(surface, BORDER_LIFT),
        accent: custom.accent.as_str().to_string(),
    }
}

pub fn is_dark(colors: &ThemeColors) -> bool {
    luminance(&colors.bg.primary) < DARK_LUMINANCE_CUTOFF
}

/// One committed theme state: the config plus everything derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    pub config: ThemeConfig,
    pub colors: ThemeColors,
    pub is_dark: bool,
}

impl ResolvedTheme {
    pub fn resolve(config: ThemeConfig) -> Self {
        let colors = resolve_theme_colors(&config);
        let is_dark = is_dark(&colors);
        Self {
            config,
            colors,
            is_dark,
        }
    }

    /// WCAG contrast of primary text against the primary background.
    pub fn primary_text_contrast(&self) -> f64 {
        contrast_ratio(&self.colors.text.primary, &self.colors.bg.primary)
    }
}
