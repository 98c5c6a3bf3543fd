//! The DIY project catalog: data model, persistence, and querying.

pub mod defaults;
pub mod model;
pub mod query;
pub mod store;

pub use model::{Category, Difficulty, DiyProject, NewProject};
pub use query::{filter, CatalogFilter, DifficultyFilter};
pub use store::CatalogStore;
