//! Read-only views over a committed theme for UI code.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::theme::{ResolvedTheme, ThemeColors};

/// Utility-class names with the palette baked in as arbitrary values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeClasses {
    pub bg_primary: String,
    pub bg_secondary: String,
    pub bg_card: String,
    pub bg_hover: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub text_muted: String,
    pub border: String,
    pub accent: String,
    pub bg_accent: String,
    pub is_dark: bool,
}

impl ThemeClasses {
    pub fn from_resolved(resolved: &ResolvedTheme) -> Self {
        let colors = &resolved.colors;
        Self {
            bg_primary: format!("bg-[{}]", colors.bg.primary),
            bg_secondary: format!("bg-[{}]", colors.bg.secondary),
            bg_card: format!("bg-[{}]", colors.bg.card),
            bg_hover: format!("hover:bg-[{}]", colors.bg.hover),
            text_primary: format!("text-[{}]", colors.text.primary),
            text_secondary: format!("text-[{}]", colors.text.secondary),
            text_muted: format!("text-[{}]", colors.text.muted),
            border: format!("border-[{}]", colors.border),
            accent: format!("text-[{}]", colors.accent),
            bg_accent: format!("bg-[{}]", colors.accent),
            is_dark: resolved.is_dark,
        }
    }
}

/// Flat property → color map, keyed the way inline styles are.
pub type InlineStyle = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeStyles {
    pub colors: ThemeColors,
    pub is_dark: bool,
    pub container: InlineStyle,
    pub card: InlineStyle,
    pub input: InlineStyle,
}

impl ThemeStyles {
    pub fn from_resolved(resolved: &ResolvedTheme) -> Self {
        let colors = &resolved.colors;
        Self {
            colors: colors.clone(),
            is_dark: resolved.is_dark,
            container: inline_style(&colors.bg.primary, None, &colors.text.primary),
            card: inline_style(
                &colors.bg.card,
                Some(colors.border.as_str()),
                &colors.text.primary,
            ),
            input: inline_style(
                &colors.bg.secondary,
                Some(colors.border.as_str()),
                &colors.text.primary,
            ),
        }
    }
}

fn inline_style(background: &str, border: Option<&str>, color: &str) -> InlineStyle {
    let mut style = InlineStyle::new();
    style.insert("backgroundColor", background.to_string());
    if let Some(border) = border {
        style.insert("borderColor", border.to_string());
    }
    style.insert("color", color.to_string());
    style
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextColorView {
    pub primary: String,
    pub secondary: String,
    pub muted: String,
}

impl TextColorView {
    pub fn from_resolved(resolved: &ResolvedTheme) -> Self {
        let text = &resolved.colors.text;
        Self {
            primary: text.primary.clone(),
            secondary: text.secondary.clone(),
            muted: text.muted.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackgroundColorView {
    pub primary: String,
    pub secondary: String,
    pub card: String,
}

impl BackgroundColorView {
    pub fn from_resolved(resolved: &ResolvedTheme) -> Self {
        let bg = &resolved.colors.bg;
        Self {
            primary: bg.primary.clone(),
            secondary: bg.secondary.clone(),
            card: bg.card.clone(),
        }
    }
}
