use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::defaults;
use crate::error::CatalogError;
use crate::item::Item;

/// The full set of dishes available for planning.
///
/// Serializes as a bare item array, the same shape the meal database has
/// always been stored in. Names are unique within a category; the same name
/// may appear in several categories (e.g. "Garlic Bread" as both a lunch and
/// a dinner side).
///
/// The catalog is read-only from the plan engine's point of view; it only
/// changes through the management operations here, and removing an item does
/// not touch plan content that already references it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Catalog { items }
    }

    /// The built-in starter catalog, used whenever no saved catalog exists.
    pub fn default_set() -> Self {
        Catalog {
            items: defaults::default_items(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in one category, in insertion order.
    pub fn items_in(&self, category: Category) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |i| i.category == category)
    }

    /// The names forming a category's selection pool, in insertion order.
    pub fn names_in(&self, category: Category) -> Vec<&str> {
        self.items_in(category).map(|i| i.name.as_str()).collect()
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.items_in(category).count()
    }

    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.items_in(category).any(|i| i.name == name)
    }

    /// Items for display: optionally filtered to one category, sorted by name.
    pub fn items_sorted(&self, filter: Option<Category>) -> Vec<&Item> {
        let mut out: Vec<&Item> = match filter {
            Some(category) => self.items_in(category).collect(),
            None => self.items.iter().collect(),
        };
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    /// Add a dish to a category. The name is trimmed; empty names and
    /// duplicates within the category are rejected.
    pub fn add(&mut self, name: &str, category: Category) -> Result<(), CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if self.contains(category, name) {
            return Err(CatalogError::DuplicateItem {
                name: name.to_string(),
                category,
            });
        }
        self.items.push(Item::new(name, category));
        Ok(())
    }

    /// Remove a dish from a category.
    pub fn remove(&mut self, name: &str, category: Category) -> Result<(), CatalogError> {
        let pos = self
            .items
            .iter()
            .position(|i| i.category == category && i.name == name)
            .ok_or_else(|| CatalogError::UnknownItem {
                name: name.to_string(),
                category,
            })?;
        self.items.remove(pos);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_category_counts() {
        let catalog = Catalog::default_set();
        assert_eq!(catalog.count_in(Category::Breakfast), 56);
        assert_eq!(catalog.count_in(Category::Lunch), 57);
        assert_eq!(catalog.count_in(Category::Dinner), 57);
        assert_eq!(catalog.count_in(Category::BreakfastSide), 50);
        assert_eq!(catalog.count_in(Category::LunchSide), 50);
        assert_eq!(catalog.count_in(Category::DinnerSide), 50);
        assert_eq!(catalog.len(), 320);
    }

    #[test]
    fn default_set_names_unique_within_category() {
        let catalog = Catalog::default_set();
        for item in catalog.items() {
            let occurrences = catalog
                .items_in(item.category)
                .filter(|i| i.name == item.name)
                .count();
            assert_eq!(occurrences, 1, "{} duplicated in {}", item.name, item.category);
        }
    }

    #[test]
    fn add_trims_and_validates() {
        let mut catalog = Catalog::default();
        catalog.add("  Porridge  ", Category::Breakfast).unwrap();
        assert!(catalog.contains(Category::Breakfast, "Porridge"));

        assert_eq!(catalog.add("   ", Category::Breakfast), Err(CatalogError::EmptyName));
        assert_eq!(
            catalog.add("Porridge", Category::Breakfast),
            Err(CatalogError::DuplicateItem {
                name: "Porridge".to_string(),
                category: Category::Breakfast,
            })
        );
        // Same name in a different category is fine.
        catalog.add("Porridge", Category::BreakfastSide).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn remove_unknown_is_an_error() {
        let mut catalog = Catalog::default();
        catalog.add("Ramen", Category::Lunch).unwrap();

        assert_eq!(
            catalog.remove("Ramen", Category::Dinner),
            Err(CatalogError::UnknownItem {
                name: "Ramen".to_string(),
                category: Category::Dinner,
            })
        );
        catalog.remove("Ramen", Category::Lunch).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn items_sorted_filters_and_orders() {
        let mut catalog = Catalog::default();
        catalog.add("Waffles", Category::Breakfast).unwrap();
        catalog.add("Bagel", Category::Breakfast).unwrap();
        catalog.add("Ramen", Category::Lunch).unwrap();

        let breakfast = catalog.items_sorted(Some(Category::Breakfast));
        let names: Vec<&str> = breakfast.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Bagel", "Waffles"]);

        let all = catalog.items_sorted(None);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Bagel");
    }

    #[test]
    fn serializes_as_bare_array() {
        let mut catalog = Catalog::default();
        catalog.add("Tacos", Category::Dinner).unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"[{"name":"Tacos","category":"Dinner"}]"#);

        // The legacy {name, type} spelling loads into the same shape.
        let legacy = r#"[{"name":"Tacos","type":"Dinner"}]"#;
        let parsed: Catalog = serde_json::from_str(legacy).unwrap();
        assert_eq!(parsed, catalog);
    }
}
