use std::fmt;

use serde::de::Error as _;
use serde_json::Value;

use crate::color::meets_aa;
use crate::storage::KeyValueStorage;
use crate::surface::{StyleSink, SurfacePalette};
use crate::theme::{
    AccentColor, CustomColorsPatch, FontFamily, FontSize, ResolvedTheme, ThemeColors, ThemeConfig,
    ThemeName,
};

/// Storage key the theme config is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "tintkit-theme-v2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ResolvedTheme)>;

/// Owns the current [`ThemeConfig`] and keeps storage, the render surface and
/// subscribers in step with it.
///
/// Every setter builds the next config, commits it and then runs the side
/// effects: persist the full config, re-apply the full surface state, notify
/// subscribers.
pub struct ThemeStore<S, K> {
    resolved: ResolvedTheme,
    storage: S,
    sink: K,
    storage_key: String,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: KeyValueStorage, K: StyleSink> ThemeStore<S, K> {
    pub fn open(storage: S, sink: K) -> Self {
        Self::open_with_key(storage, sink, DEFAULT_STORAGE_KEY)
    }

    /// Loads the persisted config under `key`, or the default when it is
    /// missing or unreadable, and applies it once.
    pub fn open_with_key(mut storage: S, sink: K, key: &str) -> Self {
        let config = load_persisted_config(&mut storage, key);
        tracing::info!(theme = %config.theme, accent = %config.accent, "loaded theme config");

        let mut store = Self {
            resolved: ResolvedTheme::resolve(config),
            storage,
            sink,
            storage_key: key.to_string(),
            listeners: Vec::new(),
            next_subscription: 0,
        };
        store.run_side_effects();
        store
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.resolved.config
    }

    pub fn colors(&self) -> &ThemeColors {
        &self.resolved.colors
    }

    pub fn is_dark(&self) -> bool {
        self.resolved.is_dark
    }

    pub fn resolved(&self) -> &ResolvedTheme {
        &self.resolved
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn into_parts(self) -> (S, K) {
        (self.storage, self.sink)
    }

    pub fn set_theme(&mut self, theme: ThemeName) {
        self.update(|config| config.theme = theme);
    }

    pub fn set_accent(&mut self, accent: AccentColor) {
        self.update(|config| config.accent = accent);
    }

    pub fn set_font(&mut self, font: FontFamily) {
        self.update(|config| config.font = font);
    }

    pub fn set_font_size(&mut self, font_size: FontSize) {
        self.update(|config| config.font_size = font_size);
    }

    /// Merges `patch` into the custom colors and switches to the custom theme.
    pub fn set_custom_colors(&mut self, patch: CustomColorsPatch) {
        self.update(|config| {
            config.custom_colors = patch.merged_into(&config.custom_colors);
            config.theme = ThemeName::Custom;
        });
    }

    pub fn set_high_contrast(&mut self, enabled: bool) {
        self.update(|config| config.high_contrast = enabled);
    }

    /// Registers `listener` to run after every commit.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&ResolvedTheme) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn update(&mut self, mutate: impl FnOnce(&mut ThemeConfig)) {
        let mut next = self.resolved.config.clone();
        mutate(&mut next);
        self.commit(next);
    }

    fn commit(&mut self, config: ThemeConfig) {
        tracing::debug!(
            from = %self.resolved.config.theme,
            to = %config.theme,
            "commit theme config"
        );
        self.resolved = ResolvedTheme::resolve(config);
        self.run_side_effects();
    }

    fn run_side_effects(&mut self) {
        self.persist();
        self.sink.apply_palette(&SurfacePalette::from_resolved(&self.resolved));
        self.warn_on_low_contrast();
        for (_, listener) in &mut self.listeners {
            listener(&self.resolved);
        }
    }

    fn persist(&mut self) {
        let serialized = match serde_json::to_string(&self.resolved.config) {
            Ok(serialized) => serialized,
            Err(err) => {
                tracing::warn!(?err, "failed to serialize theme config; skipping persistence");
                return;
            }
        };
        if let Err(err) = self.storage.set(&self.storage_key, &serialized) {
            tracing::warn!(
                ?err,
                key = self.storage_key.as_str(),
                "failed to persist theme config; keeping in-memory state"
            );
        }
    }

    fn warn_on_low_contrast(&self) {
        let resolved = &self.resolved;
        if !resolved.config.theme.is_custom() {
            return;
        }
        let colors = &resolved.colors;
        if !meets_aa(&colors.text.primary, &colors.bg.primary) {
            tracing::warn!(
                text = colors.text.primary.as_str(),
                background = colors.bg.primary.as_str(),
                ratio = resolved.primary_text_contrast(),
                "custom palette text is below WCAG AA contrast"
            );
        }
    }
}

impl<S, K> fmt::Debug for ThemeStore<S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("resolved", &self.resolved)
            .field("storage_key", &self.storage_key)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

/// Reads `key` from storage. Missing or malformed entries yield the default
/// config; a malformed entry is also removed.
pub fn load_persisted_config<S: KeyValueStorage>(storage: &mut S, key: &str) -> ThemeConfig {
    let serialized = match storage.get(key) {
        Ok(Some(serialized)) => serialized,
        Ok(None) => return ThemeConfig::default(),
        Err(err) => {
            tracing::warn!(?err, key, "failed to read theme config; using defaults");
            return ThemeConfig::default();
        }
    };

    match parse_config(&serialized) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(?err, key, "failed to parse theme config; resetting to defaults");
            if let Err(err) = storage.remove(key) {
                tracing::warn!(?err, key, "failed to clear malformed theme config");
            }
            ThemeConfig::default()
        }
    }
}

/// Only a JSON object is a config; serde would also accept a sequence.
fn parse_config(serialized: &str) -> serde_json::Result<ThemeConfig> {
    match serde_json::from_str::<Value>(serialized)? {
        value @ Value::Object(_) => serde_json::from_value(value),
        other => Err(serde_json::Error::custom(format!(
            "expected a JSON object, found {other}"
        ))),
    }
}
