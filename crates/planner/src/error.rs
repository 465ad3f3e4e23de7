use thiserror::Error;

use mealwheel_catalog::{Category, MealType};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A draw was requested from a category with no catalog items at all.
    /// The exclusion set never causes this; it falls back to the full pool.
    #[error("no {category} items in the catalog to draw from")]
    EmptyPool { category: Category },

    #[error("{name:?} is not a {category} item")]
    UnknownItem { name: String, category: Category },

    #[error("day {index} is outside the {len}-day plan")]
    DayOutOfRange { index: usize, len: usize },

    #[error("{meal} has {len} side slots, none at index {index}")]
    SideOutOfRange {
        meal: MealType,
        index: usize,
        len: usize,
    },
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot version {0} is newer than this build understands")]
    UnsupportedVersion(u32),
}
