//! The dish catalog: every name a plan slot can hold, tagged with the
//! selection pool it belongs to.
//!
//! Three meal types, each with a statically paired side category, a built-in
//! starter set, and management operations (add, remove, filter, counts).
//! The plan engine treats a [`Catalog`] as read-only; removing an item never
//! repairs plan slots that still reference it.

pub mod category;
pub mod collection;
pub mod defaults;
pub mod error;
pub mod item;

pub use category::{Category, MealType};
pub use collection::Catalog;
pub use error::CatalogError;
pub use item::Item;
