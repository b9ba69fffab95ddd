use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use super::{StyleSink, SurfacePalette, HIGH_CONTRAST_CLASS, THEME_ATTRIBUTE};

/// Render the root rule block for `palette`.
pub fn render_root_css(palette: &SurfacePalette<'_>) -> String {
    let theme = palette.theme.as_str();
    let mode_class = palette.mode_class();

    let mut variables = String::new();
    for (name, value) in palette.variables() {
        let _ = writeln!(variables, "  --{name}: {value};");
    }

    let mut css = format!(
        "\
:root[{THEME_ATTRIBUTE}=\"{theme}\"],
:root.{theme}.{mode_class} {{
{variables}  font-family: {font_family};
  font-size: {font_size};
  background: var(--bg-primary);
  color: var(--text-primary);
  border-color: var(--border-color);
}}
",
        font_family = palette.font.css_value(),
        font_size = palette.font_size.css_value(),
    );
    if palette.high_contrast {
        css.push_str(&format!(
            "\
:root.{HIGH_CONTRAST_CLASS} {{
  outline-color: var(--accent-color);
}}
"
        ));
    }
    css
}

/// Keeps the latest root stylesheet and optionally mirrors it to a file.
#[derive(Debug, Clone, Default)]
pub struct StylesheetSink {
    path: Option<PathBuf>,
    css: String,
}

impl StylesheetSink {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            css: String::new(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    fn write_through(&self) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!(?err, ?path, "failed to create stylesheet directory");
                return;
            }
        }
        if let Err(err) = fs::write(path, &self.css) {
            tracing::warn!(?err, ?path, "failed to write stylesheet");
        }
    }
}

impl StyleSink for StylesheetSink {
    fn apply_palette(&mut self, palette: &SurfacePalette<'_>) {
        self.css = render_root_css(palette);
        self.write_through();
    }
}
