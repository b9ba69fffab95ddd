//! Render-surface side effects of a committed theme.
//!
//! Every sink receives the complete state on each commit and re-asserts all
//! of it, so the order or repetition of commits never leaves a mix of old and
//! new values behind.

mod root;
mod stylesheet;

pub use root::RootElement;
pub use stylesheet::{render_root_css, StylesheetSink};

use crate::theme::{FontFamily, FontSize, ResolvedTheme, ThemeName};

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const LIGHT_MODE_CLASS: &str = "light-mode";
pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";

/// Names of the custom properties every sink publishes, without the `--` prefix.
pub const STYLE_VARIABLES: [&str; 9] = [
    "bg-primary",
    "bg-secondary",
    "bg-card",
    "bg-hover",
    "text-primary",
    "text-secondary",
    "text-muted",
    "border-color",
    "accent-color",
];

/// Everything a sink needs to mirror one committed theme.
#[derive(Debug, Clone, Copy)]
pub struct SurfacePalette<'a> {
    pub theme: ThemeName,
    pub is_dark: bool,
    pub font: FontFamily,
    pub font_size: FontSize,
    pub high_contrast: bool,
    resolved: &'a ResolvedTheme,
}

impl<'a> SurfacePalette<'a> {
    pub fn from_resolved(resolved: &'a ResolvedTheme) -> Self {
        Self {
            theme: resolved.config.theme,
            is_dark: resolved.is_dark,
            font: resolved.config.font,
            font_size: resolved.config.font_size,
            high_contrast: resolved.config.high_contrast,
            resolved,
        }
    }

    pub fn mode_class(&self) -> &'static str {
        if self.is_dark {
            DARK_MODE_CLASS
        } else {
            LIGHT_MODE_CLASS
        }
    }

    /// `(name, value)` pairs in [`STYLE_VARIABLES`] order.
    pub fn variables(&self) -> [(&'static str, &'a str); 9] {
        let colors = &self.resolved.colors;
        [
            (STYLE_VARIABLES[0], colors.bg.primary.as_str()),
            (STYLE_VARIABLES[1], colors.bg.secondary.as_str()),
            (STYLE_VARIABLES[2], colors.bg.card.as_str()),
            (STYLE_VARIABLES[3], colors.bg.hover.as_str()),
            (STYLE_VARIABLES[4], colors.text.primary.as_str()),
            (STYLE_VARIABLES[5], colors.text.secondary.as_str()),
            (STYLE_VARIABLES[6], colors.text.muted.as_str()),
            (STYLE_VARIABLES[7], colors.border.as_str()),
            (STYLE_VARIABLES[8], colors.accent.as_str()),
        ]
    }
}

/// Host-specific target for theme side effects.
pub trait StyleSink {
    fn apply_palette(&mut self, palette: &SurfacePalette<'_>);
}

impl<T: StyleSink + ?Sized> StyleSink for &mut T {
    fn apply_palette(&mut self, palette: &SurfacePalette<'_>) {
        (**self).apply_palette(palette);
    }
}

impl<T: StyleSink + ?Sized> StyleSink for Box<T> {
    fn apply_palette(&mut self, palette: &SurfacePalette<'_>) {
        (**self).apply_palette(palette);
    }
}

/// Sink that discards everything; for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl StyleSink for NullSink {
    fn apply_palette(&mut self, _palette: &SurfacePalette<'_>) {}
}
