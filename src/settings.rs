//! Persisted user settings: UI language and color theme.
//!
//! Both are stored as small string blobs (`lang`, `theme`) alongside the
//! catalog. Missing or unrecognized stored values fall back to the defaults
//! (Arabic, light) rather than erroring — a freshly wiped database behaves
//! exactly like a first launch.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::warn;

use crate::storage::{Storage, KEY_LANG, KEY_THEME};

// ─── Language ─────────────────────────────────────────────────────────────────

/// Supported UI languages. Arabic is the default and the only RTL one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ar,
    En,
    Fr,
    De,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::Ar, Language::En, Language::Fr, Language::De];

    /// Two-letter language code as persisted and as used in `lang` attributes.
    pub fn code(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
            Language::Fr => "fr",
            Language::De => "de",
        }
    }

    /// Parse a stored code. `None` for anything unrecognized.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "ar" => Some(Language::Ar),
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            "de" => Some(Language::De),
            _ => None,
        }
    }

    /// Text direction for the language (`rtl` or `ltr`).
    pub fn dir(self) -> &'static str {
        match self {
            Language::Ar => "rtl",
            _ => "ltr",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Ar
    }
}

// ─── Theme ────────────────────────────────────────────────────────────────────

/// Color theme. Light is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

// ─── SettingsStore ────────────────────────────────────────────────────────────

/// Language + theme, cached in memory and written through to storage.
///
/// Write failures (disk full, storage gone) are logged and swallowed: the
/// in-memory value still changes, so the running session keeps working and
/// only persistence across restarts is lost.
pub struct SettingsStore {
    storage: Arc<Storage>,
    language: RwLock<Language>,
    theme: RwLock<Theme>,
}

impl SettingsStore {
    /// Load persisted settings, falling back to defaults for missing or
    /// unrecognized stored codes.
    pub async fn open(storage: Arc<Storage>) -> Self {
        let language = match storage.get(KEY_LANG).await {
            Ok(Some(code)) => Language::parse(&code).unwrap_or_else(|| {
                warn!(%code, "unrecognized stored language code — using default");
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(e) => {
                warn!("failed to read stored language: {e:#} — using default");
                Language::default()
            }
        };
        let theme = match storage.get(KEY_THEME).await {
            Ok(Some(name)) => Theme::parse(&name).unwrap_or_else(|| {
                warn!(%name, "unrecognized stored theme — using default");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("failed to read stored theme: {e:#} — using default");
                Theme::default()
            }
        };
        Self {
            storage,
            language: RwLock::new(language),
            theme: RwLock::new(theme),
        }
    }

    pub async fn language(&self) -> Language {
        *self.language.read().await
    }

    pub async fn set_language(&self, lang: Language) {
        *self.language.write().await = lang;
        if let Err(e) = self.storage.set(KEY_LANG, lang.code()).await {
            warn!("failed to persist language: {e:#}");
        }
    }

    pub async fn theme(&self) -> Theme {
        *self.theme.read().await
    }

    pub async fn set_theme(&self, theme: Theme) {
        *self.theme.write().await = theme;
        if let Err(e) = self.storage.set(KEY_THEME, theme.name()).await {
            warn!("failed to persist theme: {e:#}");
        }
    }

    /// Flip light↔dark and persist. Returns the new theme.
    pub async fn toggle_theme(&self) -> Theme {
        let next = self.theme().await.toggled();
        self.set_theme(next).await;
        next
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    async fn make_settings() -> (tempfile::TempDir, Arc<Storage>, SettingsStore) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(Storage::new(dir.path()).await.unwrap());
        let settings = SettingsStore::open(storage.clone()).await;
        (dir, storage, settings)
    }

    #[tokio::test]
    async fn test_defaults_on_fresh_database() {
        let (_dir, _storage, s) = make_settings().await;
        assert_eq!(s.language().await, Language::Ar);
        assert_eq!(s.theme().await, Theme::Light);
    }

    #[tokio::test]
    async fn test_settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(Storage::new(dir.path()).await.unwrap());
        {
            let s = SettingsStore::open(storage.clone()).await;
            s.set_language(Language::De).await;
            s.set_theme(Theme::Dark).await;
        }
        let s = SettingsStore::open(storage).await;
        assert_eq!(s.language().await, Language::De);
        assert_eq!(s.theme().await, Theme::Dark);
    }

    #[tokio::test]
    async fn test_unknown_stored_codes_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(Storage::new(dir.path()).await.unwrap());
        storage.set(KEY_LANG, "klingon").await.unwrap();
        storage.set(KEY_THEME, "solarized").await.unwrap();
        let s = SettingsStore::open(storage).await;
        assert_eq!(s.language().await, Language::Ar);
        assert_eq!(s.theme().await, Theme::Light);
    }

    #[tokio::test]
    async fn test_toggle_theme() {
        let (_dir, _storage, s) = make_settings().await;
        assert_eq!(s.toggle_theme().await, Theme::Dark);
        assert_eq!(s.toggle_theme().await, Theme::Light);
    }

    #[test]
    fn test_language_dir() {
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::Fr.dir(), "ltr");
        assert_eq!(Language::De.dir(), "ltr");
    }
}
