use std::collections::{BTreeMap, BTreeSet};

use super::{
    StyleSink, SurfacePalette, DARK_MODE_CLASS, HIGH_CONTRAST_CLASS, LIGHT_MODE_CLASS,
    THEME_ATTRIBUTE,
};
use crate::theme::ThemeName;

/// In-memory model of the document root: attributes, class list and inline style.
///
/// Classes and properties that the theme does not own are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootElement {
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    style: BTreeMap<String, String>,
}

impl RootElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn toggle_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Inline style property, e.g. `--bg-primary` or `font-size`.
    pub fn style_property(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }

    pub fn set_style_property(&mut self, name: &str, value: &str) {
        self.style.insert(name.to_string(), value.to_string());
    }
}

impl StyleSink for RootElement {
    fn apply_palette(&mut self, palette: &SurfacePalette<'_>) {
        self.set_attribute(THEME_ATTRIBUTE, palette.theme.as_str());
        for theme in ThemeName::ALL {
            self.remove_class(theme.as_str());
        }
        self.add_class(palette.theme.as_str());

        self.remove_class(DARK_MODE_CLASS);
        self.remove_class(LIGHT_MODE_CLASS);
        self.add_class(palette.mode_class());

        for (name, value) in palette.variables() {
            self.set_style_property(&format!("--{name}"), value);
        }

        self.set_style_property("font-family", palette.font.css_value());
        self.set_style_property("font-size", palette.font_size.css_value());

        self.toggle_class(HIGH_CONTRAST_CLASS, palette.high_contrast);
    }
}
