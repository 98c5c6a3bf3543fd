//! Catalog persistence and mutation.
//!
//! The whole catalog lives in one JSON blob (`custom_projects`); every
//! mutation re-serializes the full list. Reads fail soft: a missing or
//! unparseable blob falls back to the language-specific starter catalog so
//! a corrupted database never takes the hub down.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::settings::Language;
use crate::storage::{Storage, KEY_CATALOG};

use super::defaults::default_catalog;
use super::model::{new_id, Category, Difficulty, DiyProject, NewProject, DEFAULT_IMAGE_URL};

pub struct CatalogStore {
    storage: Arc<Storage>,
    projects: RwLock<Vec<DiyProject>>,
}

impl CatalogStore {
    /// Seed the in-memory catalog: the stored blob when present and
    /// parseable, the starter catalog for `lang` otherwise.
    pub async fn open(storage: Arc<Storage>, lang: Language) -> Self {
        let projects = Self::load(&storage, lang).await;
        Self {
            storage,
            projects: RwLock::new(projects),
        }
    }

    /// Read the persisted catalog, falling back to the starter catalog on
    /// absence, storage failure, or malformed JSON.
    pub async fn load(storage: &Storage, lang: Language) -> Vec<DiyProject> {
        match storage.get(KEY_CATALOG).await {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<DiyProject>>(&blob) {
                Ok(projects) => projects,
                Err(e) => {
                    warn!("stored catalog is unreadable: {e} — falling back to defaults");
                    default_catalog(lang)
                }
            },
            Ok(None) => default_catalog(lang),
            Err(e) => {
                warn!("failed to read stored catalog: {e:#} — falling back to defaults");
                default_catalog(lang)
            }
        }
    }

    /// Serialize the full catalog back to storage. Write failures (quota,
    /// I/O) are logged and swallowed — the in-memory catalog stays valid and
    /// the caller is never crashed over a persistence problem.
    pub async fn save(storage: &Storage, projects: &[DiyProject]) {
        let blob = match serde_json::to_string(projects) {
            Ok(blob) => blob,
            Err(e) => {
                warn!("failed to serialize catalog: {e}");
                return;
            }
        };
        if let Err(e) = storage.set(KEY_CATALOG, &blob).await {
            warn!("failed to persist catalog: {e:#}");
        }
    }

    /// Snapshot of the catalog in insertion order.
    pub async fn list(&self) -> Vec<DiyProject> {
        self.projects.read().await.clone()
    }

    /// Append a new project with a freshly generated id and persist.
    ///
    /// Blank title or description rejects the submission before anything is
    /// written; blank step entries are dropped; a missing image URL gets the
    /// stock placeholder. No duplicate-title detection.
    pub async fn add(&self, new: NewProject) -> Result<DiyProject> {
        if new.title.trim().is_empty() || new.description.trim().is_empty() {
            anyhow::bail!("title and description are required");
        }
        let project = DiyProject {
            id: new_id(),
            title: new.title,
            description: new.description,
            category: new.category.unwrap_or(Category::Cardboard),
            difficulty: new.difficulty.unwrap_or(Difficulty::Easy),
            steps: new
                .steps
                .into_iter()
                .filter(|s| !s.trim().is_empty())
                .collect(),
            image_url: new
                .image_url
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
        };
        let mut projects = self.projects.write().await;
        projects.push(project.clone());
        Self::save(&self.storage, &projects).await;
        debug!(id = %project.id, title = %project.title, "project added");
        Ok(project)
    }

    /// Delete by id and persist. Removing an unknown id is a no-op and
    /// returns false.
    pub async fn remove(&self, id: &str) -> bool {
        let mut projects = self.projects.write().await;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return false;
        }
        Self::save(&self.storage, &projects).await;
        debug!(%id, "project removed");
        true
    }

    /// Drop the stored override and reseed the starter catalog for `lang`.
    pub async fn reset(&self, lang: Language) -> Vec<DiyProject> {
        if let Err(e) = self.storage.remove(KEY_CATALOG).await {
            warn!("failed to clear stored catalog: {e:#}");
        }
        let defaults = default_catalog(lang);
        *self.projects.write().await = defaults.clone();
        defaults
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    async fn make_store() -> (tempfile::TempDir, Arc<Storage>, CatalogStore) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(Storage::new(dir.path()).await.unwrap());
        let store = CatalogStore::open(storage.clone(), Language::En).await;
        (dir, storage, store)
    }

    fn new_project(title: &str) -> NewProject {
        NewProject {
            title: title.into(),
            description: "A test project".into(),
            category: Some(Category::Wood),
            difficulty: Some(Difficulty::Medium),
            steps: vec!["Measure".into(), "".into(), "Cut".into()],
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_fresh_store_seeds_defaults() {
        let (_dir, _storage, store) = make_store().await;
        let projects = store.list().await;
        assert_eq!(projects, default_catalog(Language::En));
    }

    #[tokio::test]
    async fn test_load_save_round_trip_is_idempotent() {
        let (_dir, storage, store) = make_store().await;
        store.add(new_project("Birdhouse")).await.unwrap();

        let loaded = CatalogStore::load(&storage, Language::En).await;
        CatalogStore::save(&storage, &loaded).await;
        let reloaded = CatalogStore::load(&storage, Language::En).await;
        assert_eq!(loaded, reloaded);
    }

    #[tokio::test]
    async fn test_add_assigns_id_and_cleans_input() {
        let (_dir, _storage, store) = make_store().await;
        let project = store.add(new_project("Birdhouse")).await.unwrap();
        assert!(!project.id.is_empty());
        // Blank step entries are dropped
        assert_eq!(project.steps, vec!["Measure".to_string(), "Cut".to_string()]);
        // Missing image URL gets the placeholder
        assert_eq!(project.image_url, DEFAULT_IMAGE_URL);
        assert!(store.list().await.contains(&project));
    }

    #[tokio::test]
    async fn test_add_rejects_blank_required_fields() {
        let (_dir, _storage, store) = make_store().await;
        let before = store.list().await;

        let mut blank_title = new_project("  ");
        blank_title.description = "desc".into();
        assert!(store.add(blank_title).await.is_err());

        let mut blank_desc = new_project("Title");
        blank_desc.description = "   ".into();
        assert!(store.add(blank_desc).await.is_err());

        // Nothing was written
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_add_then_remove_restores_collection() {
        let (_dir, _storage, store) = make_store().await;
        let before = store.list().await;
        let project = store.add(new_project("Ephemeral")).await.unwrap();
        assert!(store.remove(&project.id).await);
        // New items are appended, so removal restores the original order too.
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_remove_unknown_id_is_noop() {
        let (_dir, _storage, store) = make_store().await;
        let before = store.list().await;
        assert!(!store.remove("no-such-id").await);
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_malformed_blob_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(Storage::new(dir.path()).await.unwrap());
        storage.set(KEY_CATALOG, "{not json[").await.unwrap();
        let store = CatalogStore::open(storage, Language::Fr).await;
        assert_eq!(store.list().await, default_catalog(Language::Fr));
    }

    #[tokio::test]
    async fn test_edits_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(Storage::new(dir.path()).await.unwrap());
        let added = {
            let store = CatalogStore::open(storage.clone(), Language::En).await;
            store.add(new_project("Keeper")).await.unwrap()
        };
        let store = CatalogStore::open(storage, Language::En).await;
        assert!(store.list().await.iter().any(|p| p.id == added.id));
    }

    #[tokio::test]
    async fn test_reset_reseeds_defaults() {
        let (_dir, storage, store) = make_store().await;
        store.add(new_project("Custom")).await.unwrap();
        let projects = store.reset(Language::De).await;
        assert_eq!(projects, default_catalog(Language::De));
        // The stored override is gone, so a reopen seeds defaults again.
        let reopened = CatalogStore::open(storage, Language::De).await;
        assert_eq!(reopened.list().await, default_catalog(Language::De));
    }
}
