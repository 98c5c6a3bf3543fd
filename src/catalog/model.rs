//! Catalog data model types.

use serde::{Deserialize, Serialize};

/// Generate a new opaque project id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Placeholder image used when a project is created without one.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1591123120675-6f7f1aae0e5b?auto=format&fit=crop&q=80&w=400";

/// Recyclable material a project is built from. Doubles as the impact
/// estimator's material input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cardboard,
    Paper,
    Wood,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Cardboard, Category::Paper, Category::Wood];

    pub fn name(self) -> &'static str {
        match self {
            Category::Cardboard => "cardboard",
            Category::Paper => "paper",
            Category::Wood => "wood",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// One DIY tutorial in the catalog.
///
/// Serialized camelCase — the persisted `custom_projects` blob keeps the
/// field names the web client originally wrote, so an existing database
/// carries over unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiyProject {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    /// Ordered instructions; position defines the step number shown to users.
    /// Must be non-empty for progress tracking to be meaningful.
    pub steps: Vec<String>,
    /// Unvalidated URL — reachability and format are the renderer's problem.
    pub image_url: String,
}

/// Parameters for creating a project through the admin surface.
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    pub steps: Vec<String>,
    pub image_url: Option<String>,
}
