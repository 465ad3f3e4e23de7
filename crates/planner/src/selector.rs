//! Random slot selection: one category, one exclusion set, one name out.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::IndexedRandom;

use mealwheel_catalog::{Catalog, Category};

use crate::error::PlanError;

/// Draw one item name from a category's pool, uniformly at random.
///
/// Names in `excluded` are avoided, but exclusion is advisory: when it would
/// leave nothing to pick, the draw falls back to the whole pool so a
/// selection always exists. Only a category with no items at all fails, with
/// [`PlanError::EmptyPool`].
pub fn select_item<R>(
    catalog: &Catalog,
    category: Category,
    excluded: &HashSet<&str>,
    rng: &mut R,
) -> Result<String, PlanError>
where
    R: Rng + ?Sized,
{
    let pool = catalog.names_in(category);
    if pool.is_empty() {
        return Err(PlanError::EmptyPool { category });
    }

    let available: Vec<&str> = pool
        .iter()
        .copied()
        .filter(|name| !excluded.contains(name))
        .collect();
    let candidates = if available.is_empty() { &pool } else { &available };

    match candidates.choose(rng) {
        Some(name) => Ok((*name).to_string()),
        None => Err(PlanError::EmptyPool { category }),
    }
}
