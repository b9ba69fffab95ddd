mod command;

use std::io::Write;
use std::path::Path;

use serde::Serialize;

pub use command::{custom_patch, Cli, Command, CustomAssignment, CustomField};

use crate::accessors::{ThemeClasses, ThemeStyles};
use crate::color::{contrast_ratio, meets_aa, WCAG_AA_CONTRAST};
use crate::config::{config_env_dirs, load_app_config_with};
use crate::error::AppResult;
use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use crate::store::{ThemeStore, DEFAULT_STORAGE_KEY};
use crate::surface::{render_root_css, StyleSink, StylesheetSink, SurfacePalette};
use crate::theme::catalog::{AccentOption, FontOption, ThemeOption};
use crate::theme::{AVAILABLE_ACCENTS, AVAILABLE_FONTS, AVAILABLE_THEMES};

/// Composition root: owns the theme store and runs commands against it.
pub struct App<S, K> {
    store: ThemeStore<S, K>,
}

/// Storage chosen at startup: the config directory, or memory when there is none.
pub type DynStorage = Box<dyn KeyValueStorage>;

impl App<DynStorage, StylesheetSink> {
    /// Store backed by the user config directory, honoring `config.json`.
    pub fn with_default_paths() -> Self {
        let (xdg_config_home, home) = config_env_dirs();
        Self::with_config_dirs(xdg_config_home.as_deref(), home.as_deref())
    }

    /// Same as [`App::with_default_paths`] with explicit config directories.
    /// Without a usable config root the theme lives in memory for this run.
    pub fn with_config_dirs(xdg_config_home: Option<&Path>, home: Option<&Path>) -> Self {
        let app_config = load_app_config_with(xdg_config_home, home);
        let storage: DynStorage = match FileStorage::with_config_dirs(xdg_config_home, home) {
            Ok(storage) => {
                tracing::debug!(root = ?storage.root(), "using file storage");
                Box::new(storage)
            }
            Err(err) => {
                tracing::warn!(?err, "theme storage unavailable; keeping theme in memory");
                Box::new(MemoryStorage::new())
            }
        };
        let sink = match app_config.stylesheet_path {
            Some(path) => StylesheetSink::with_path(path),
            None => StylesheetSink::in_memory(),
        };
        let key = app_config
            .storage_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .unwrap_or(DEFAULT_STORAGE_KEY);
        Self::new(ThemeStore::open_with_key(storage, sink, key))
    }
}

#[derive(Serialize)]
struct Catalog {
    themes: &'static [ThemeOption],
    accents: &'static [AccentOption],
    fonts: &'static [FontOption],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContrastReport {
    ratio: f64,
    meets_aa: bool,
    threshold: f64,
}

impl<S: KeyValueStorage, K: StyleSink> App<S, K> {
    pub fn new(store: ThemeStore<S, K>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ThemeStore<S, K> {
        &self.store
    }

    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> AppResult<()> {
        tracing::debug!(?command, "execute command");
        match &command {
            Command::SetTheme { theme } => self.store.set_theme(*theme),
            Command::SetAccent { accent } => self.store.set_accent(*accent),
            Command::SetFont { font } => self.store.set_font(*font),
            Command::SetFontSize { size } => self.store.set_font_size(*size),
            Command::SetCustomColors { assignments } => {
                self.store.set_custom_colors(custom_patch(assignments))
            }
            Command::SetHighContrast { enabled } => self.store.set_high_contrast(*enabled),
            _ => {}
        }

        let resolved = self.store.resolved();
        match &command {
            Command::Classes => write_json(out, &ThemeClasses::from_resolved(resolved))?,
            Command::Styles => write_json(out, &ThemeStyles::from_resolved(resolved))?,
            Command::Css => {
                let css = render_root_css(&SurfacePalette::from_resolved(resolved));
                out.write_all(css.as_bytes())?;
            }
            Command::List => write_json(
                out,
                &Catalog {
                    themes: &AVAILABLE_THEMES,
                    accents: &AVAILABLE_ACCENTS,
                    fonts: &AVAILABLE_FONTS,
                },
            )?,
            Command::Contrast { fg, bg } => write_json(
                out,
                &ContrastReport {
                    ratio: contrast_ratio(fg.as_str(), bg.as_str()),
                    meets_aa: meets_aa(fg.as_str(), bg.as_str()),
                    threshold: WCAG_AA_CONTRAST,
                },
            )?,
            _ if command.is_mutation() => writeln!(
                out,
                "theme={} accent={} font={} font-size={} high-contrast={} dark={}",
                resolved.config.theme,
                resolved.colors.accent,
                resolved.config.font,
                resolved.config.font_size,
                resolved.config.high_contrast,
                resolved.is_dark
            )?,
            _ => write_json(out, resolved)?,
        }
        Ok(())
    }
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::surface::RootElement;
    use crate::theme::ThemeName;

    fn memory_app() -> App<MemoryStorage, RootElement> {
        App::new(ThemeStore::open(MemoryStorage::new(), RootElement::new()))
    }

    fn run<S: KeyValueStorage, K: StyleSink>(app: &mut App<S, K>, args: &[&str]) -> String {
        let mut out = Vec::new();
        let command = Cli::try_parse_from(std::iter::once("tintkit").chain(args.iter().copied()))
            .unwrap()
            .into_command();
        app.execute(command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn fixture_root() -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("tintkit-app-{pid}-{nanos}"));
        path
    }

    fn with_temp_root<F: FnOnce(&Path)>(f: F) {
        let root = fixture_root();
        std::fs::create_dir_all(&root).unwrap();
        f(&root);
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn show_prints_resolved_theme_json() {
        let mut app = memory_app();
        let output = run(&mut app, &["show"]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["config"]["theme"], "wowtruck");
        assert_eq!(value["colors"]["bg"]["primary"], "#0f0f1a");
        assert_eq!(value["isDark"], true);
    }

    #[test]
    fn setters_report_new_state() {
        let mut app = memory_app();
        let output = run(&mut app, &["theme", "light"]);
        assert!(output.starts_with("theme=light accent=#f97316"));
        assert!(output.contains("dark=false"));
        assert_eq!(app.store().config().theme, ThemeName::Light);
        assert_eq!(app.store().sink().attribute("data-theme"), Some("light"));
    }

    #[test]
    fn custom_command_switches_to_custom_theme() {
        let mut app = memory_app();
        run(&mut app, &["custom", "background=#000000"]);
        assert_eq!(app.store().config().theme, ThemeName::Custom);
        assert_eq!(app.store().colors().text.primary, "#f1f5f9");
    }

    #[test]
    fn css_and_classes_reflect_current_theme() {
        let mut app = memory_app();
        run(&mut app, &["theme", "ocean"]);
        let css = run(&mut app, &["css"]);
        assert!(css.contains("--bg-primary: #0c4a6e;"));
        let classes: serde_json::Value =
            serde_json::from_str(&run(&mut app, &["classes"])).unwrap();
        assert_eq!(classes["bgPrimary"], "bg-[#0c4a6e]");
    }

    #[test]
    fn list_prints_catalog() {
        let mut app = memory_app();
        let value: serde_json::Value = serde_json::from_str(&run(&mut app, &["list"])).unwrap();
        assert_eq!(value["themes"].as_array().unwrap().len(), 11);
        assert_eq!(value["accents"][1]["color"], "#3b82f6");
        assert_eq!(value["fonts"][4]["name"], "JetBrains Mono");
    }

    #[test]
    fn contrast_reports_ratio_and_verdict() {
        let mut app = memory_app();
        let value: serde_json::Value =
            serde_json::from_str(&run(&mut app, &["contrast", "#000000", "#ffffff"])).unwrap();
        assert_eq!(value["meetsAa"], true);
        assert!((value["ratio"].as_f64().unwrap() - 21.0).abs() < 1e-9);
    }

    #[test]
    fn missing_config_root_falls_back_to_memory() {
        let mut app = App::with_config_dirs(None, None);
        let output = run(&mut app, &["theme", "forest"]);
        assert!(output.starts_with("theme=forest"));
        assert_eq!(app.store().config().theme, ThemeName::Forest);
        assert!(app.store().sink().css().contains("--bg-primary"));
    }

    #[test]
    fn config_root_persists_between_runs() {
        with_temp_root(|root| {
            let mut first = App::with_config_dirs(Some(root), None);
            run(&mut first, &["theme", "midnight"]);
            assert!(root.join("tintkit").join("tintkit-theme-v2.json").exists());

            let second = App::with_config_dirs(Some(root), None);
            assert_eq!(second.store().config().theme, ThemeName::Midnight);
        });
    }
}
