use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A single catalog entry: a dish name tagged with the pool it belongs to.
///
/// `category` also deserializes from the legacy field name `type`, so item
/// lists written by earlier versions load without a separate migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(alias = "type")]
    pub category: Category,
}

impl Item {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Item {
            name: name.into(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_type_field_deserializes() {
        let item: Item = serde_json::from_str(r#"{"name":"Oatmeal","type":"Breakfast"}"#).unwrap();
        assert_eq!(item, Item::new("Oatmeal", Category::Breakfast));
    }

    #[test]
    fn current_category_field_round_trips() {
        let item = Item::new("Hash Browns", Category::BreakfastSide);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"name":"Hash Browns","category":"Breakfast Side"}"#);
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
