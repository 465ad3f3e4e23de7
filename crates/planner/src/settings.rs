use serde::{Deserialize, Serialize};

use mealwheel_catalog::MealType;

/// Which meal types the planner generates and renders.
///
/// Disabling a meal type suppresses fresh draws and its rendering; it never
/// deletes content already stored in the plan. Every field is always present
/// (all enabled by default), so there is no "missing means enabled" lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MealTypeSettings {
    breakfast: bool,
    lunch: bool,
    dinner: bool,
}

impl Default for MealTypeSettings {
    fn default() -> Self {
        MealTypeSettings {
            breakfast: true,
            lunch: true,
            dinner: true,
        }
    }
}

impl MealTypeSettings {
    pub fn is_enabled(&self, meal: MealType) -> bool {
        match meal {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
        }
    }

    pub fn set_enabled(&mut self, meal: MealType, enabled: bool) {
        match meal {
            MealType::Breakfast => self.breakfast = enabled,
            MealType::Lunch => self.lunch = enabled,
            MealType::Dinner => self.dinner = enabled,
        }
    }
}
