use thiserror::Error;

use crate::category::Category;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("item name must not be empty")]
    EmptyName,

    #[error("{name:?} already exists in {category}")]
    DuplicateItem { name: String, category: Category },

    #[error("{name:?} not found in {category}")]
    UnknownItem { name: String, category: Category },
}
