//! Pure catalog filtering.
//!
//! The DIY hub always shows one concrete material tab, so the category
//! predicate has no wildcard; difficulty has an "all" sentinel; free-text
//! search is a case-insensitive substring match on title or description.
//! All three predicates are ANDed and input order is preserved.

use super::model::{Category, Difficulty, DiyProject};

/// Difficulty predicate: exact level, or the "all" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Level(Difficulty),
}

impl DifficultyFilter {
    fn matches(self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Level(level) => level == difficulty,
        }
    }
}

/// One fully-specified hub query: active material tab + difficulty chip +
/// search box contents.
#[derive(Debug, Clone)]
pub struct CatalogFilter {
    pub category: Category,
    pub difficulty: DifficultyFilter,
    pub search: String,
}

impl CatalogFilter {
    /// The hub's initial state: cardboard tab, all difficulties, empty search.
    pub fn for_category(category: Category) -> Self {
        Self {
            category,
            difficulty: DifficultyFilter::All,
            search: String::new(),
        }
    }

    fn matches(&self, project: &DiyProject) -> bool {
        if project.category != self.category {
            return false;
        }
        if !self.difficulty.matches(project.difficulty) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        project.title.to_lowercase().contains(&needle)
            || project.description.to_lowercase().contains(&needle)
    }
}

/// Eagerly filter a catalog snapshot, preserving input order.
pub fn filter(projects: &[DiyProject], query: &CatalogFilter) -> Vec<DiyProject> {
    projects
        .iter()
        .filter(|p| query.matches(p))
        .cloned()
        .collect()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
