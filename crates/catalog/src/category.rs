use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// The three meal types a plan day is built from.
///
/// Each meal type owns exactly one main category and one side category; the
/// association is static (see [`Category::side_of`]), so related pools are
/// never derived by string manipulation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantArray,
)]
#[strum(ascii_case_insensitive)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    /// Every meal type, in the order a plan day is generated and rendered.
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    /// Number of meal types per plan day, used to size the history window.
    pub const PER_DAY: usize = MealType::ALL.len();

    pub fn main_category(self) -> Category {
        Category::main_of(self)
    }

    pub fn side_category(self) -> Category {
        Category::side_of(self)
    }
}

/// A selection pool. Items belong to exactly one category; draws are always
/// scoped to a single category.
///
/// The serialized names match the catalog's historical on-disk strings
/// (`"Breakfast"`, `"Breakfast Side"`, ...) so existing data loads as-is.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantArray,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    #[serde(rename = "Breakfast Side")]
    #[strum(serialize = "Breakfast Side")]
    BreakfastSide,
    #[serde(rename = "Lunch Side")]
    #[strum(serialize = "Lunch Side")]
    LunchSide,
    #[serde(rename = "Dinner Side")]
    #[strum(serialize = "Dinner Side")]
    DinnerSide,
}

impl Category {
    /// The main-dish category of a meal type.
    pub fn main_of(meal: MealType) -> Category {
        match meal {
            MealType::Breakfast => Category::Breakfast,
            MealType::Lunch => Category::Lunch,
            MealType::Dinner => Category::Dinner,
        }
    }

    /// The side-dish category statically paired with a meal type.
    pub fn side_of(meal: MealType) -> Category {
        match meal {
            MealType::Breakfast => Category::BreakfastSide,
            MealType::Lunch => Category::LunchSide,
            MealType::Dinner => Category::DinnerSide,
        }
    }

    /// The meal type this category belongs to.
    pub fn meal_type(self) -> MealType {
        match self {
            Category::Breakfast | Category::BreakfastSide => MealType::Breakfast,
            Category::Lunch | Category::LunchSide => MealType::Lunch,
            Category::Dinner | Category::DinnerSide => MealType::Dinner,
        }
    }

    pub fn is_side(self) -> bool {
        matches!(
            self,
            Category::BreakfastSide | Category::LunchSide | Category::DinnerSide
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn side_pairing_is_static() {
        assert_eq!(Category::side_of(MealType::Breakfast), Category::BreakfastSide);
        assert_eq!(Category::side_of(MealType::Lunch), Category::LunchSide);
        assert_eq!(Category::side_of(MealType::Dinner), Category::DinnerSide);

        for meal in MealType::ALL {
            assert_eq!(Category::main_of(meal).meal_type(), meal);
            assert_eq!(Category::side_of(meal).meal_type(), meal);
            assert!(!Category::main_of(meal).is_side());
            assert!(Category::side_of(meal).is_side());
        }
    }

    #[test]
    fn all_matches_the_variant_order() {
        assert_eq!(MealType::ALL.as_slice(), <MealType as VariantArray>::VARIANTS);
    }

    #[test]
    fn category_display_matches_historical_strings() {
        assert_eq!(Category::Dinner.to_string(), "Dinner");
        assert_eq!(Category::BreakfastSide.to_string(), "Breakfast Side");
        assert_eq!(Category::from_str("Lunch Side").unwrap(), Category::LunchSide);
        assert_eq!(Category::from_str("dinner").unwrap(), Category::Dinner);
    }

    #[test]
    fn category_serde_round_trip() {
        let json = serde_json::to_string(&Category::LunchSide).unwrap();
        assert_eq!(json, "\"Lunch Side\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::LunchSide);
    }

    #[test]
    fn per_day_counts_meal_types() {
        assert_eq!(MealType::PER_DAY, 3);
    }
}
