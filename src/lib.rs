//! Deira — application-state engine for the Deira environmental-awareness app.
//!
//! This crate is the data/state layer a UI shell drives: the DIY project
//! catalog (persisted, crowd-editable), catalog filtering, per-session step
//! progress, the impact estimator, persisted language/theme settings, the
//! navigation enum, and the "Jimmy" AI advice service. There is no inbound
//! network surface and no CLI; everything is reached through [`AppContext`].

pub mod advice;
pub mod catalog;
pub mod config;
pub mod i18n;
pub mod impact;
pub mod logging;
pub mod nav;
pub mod progress;
pub mod settings;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{Mutex, RwLock};
use tracing::info;

use advice::{AdviceClient, AdviceSession, AdviceUpdate};
use catalog::CatalogStore;
use config::AppConfig;
use nav::Section;
use progress::ProgressTracker;
use settings::{Language, SettingsStore, Theme};
use storage::Storage;

/// Shared application state: one root context owning every store, passed by
/// handle to whatever renders it. All mutation goes through the setters
/// below — there are no ambient globals.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub storage: Arc<Storage>,
    pub settings: Arc<SettingsStore>,
    pub catalog: Arc<CatalogStore>,
    /// Session-scoped step progress; deliberately not persisted.
    pub progress: Arc<RwLock<ProgressTracker>>,
    /// The currently visible section.
    pub section: Arc<RwLock<Section>>,
    advice: Arc<Mutex<AdviceSession>>,
}

impl AppContext {
    /// Open storage, load persisted settings, and seed the catalog for the
    /// persisted language.
    pub async fn init(config: AppConfig) -> Result<Self> {
        let config = Arc::new(config);
        let storage = Arc::new(Storage::new(&config.data_dir).await?);
        let settings = Arc::new(SettingsStore::open(storage.clone()).await);
        let lang = settings.language().await;
        let catalog = Arc::new(CatalogStore::open(storage.clone(), lang).await);

        let advice_client = Arc::new(AdviceClient::new(&config)?);
        let (advice_session, _rx) = AdviceSession::new(advice_client, lang);

        info!(
            data_dir = %config.data_dir.display(),
            lang = lang.code(),
            "deira state engine ready"
        );

        Ok(Self {
            config,
            storage,
            settings,
            catalog,
            progress: Arc::new(RwLock::new(ProgressTracker::new())),
            section: Arc::new(RwLock::new(Section::default())),
            advice: Arc::new(Mutex::new(advice_session)),
        })
    }

    /// Jump to a section. No transition rules — every section is reachable
    /// from every other.
    pub async fn navigate(&self, section: Section) {
        *self.section.write().await = section;
    }

    pub async fn current_section(&self) -> Section {
        *self.section.read().await
    }

    /// Switch UI language: persists the choice and resets the advice panel
    /// to the new language's intro line. Does not reseed an already-loaded
    /// catalog — user edits stay as they are.
    pub async fn set_language(&self, lang: Language) {
        self.settings.set_language(lang).await;
        self.advice.lock().await.reset(lang);
    }

    /// Flip light↔dark. Returns the new theme.
    pub async fn toggle_theme(&self) -> Theme {
        self.settings.toggle_theme().await
    }

    /// Follow the advice panel state (intro / loading / answer).
    pub async fn advice_updates(&self) -> tokio::sync::watch::Receiver<AdviceUpdate> {
        self.advice.lock().await.subscribe()
    }

    /// Ask Jimmy. Cancels any outstanding query first; the answer (or the
    /// fallback line) arrives on the watch channel.
    pub async fn ask_advice(&self, topic: &str) {
        let lang = self.settings.language().await;
        self.advice.lock().await.ask(topic, lang);
    }
}
