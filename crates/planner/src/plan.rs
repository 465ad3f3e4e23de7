//! The plan state model: fully populated per-slot structs.
//!
//! Every slot always carries its content and both control flags; every meal
//! always carries its aggregate flags and its side list. Nothing is optional
//! after construction, so flag reads never default-chain through possibly
//! missing fields.

use serde::{Deserialize, Serialize};

use mealwheel_catalog::MealType;

use crate::ledger::HistoryLedger;
use crate::settings::MealTypeSettings;

/// One assignable position: a main dish or a single side dish.
///
/// `content` is either empty (nothing assigned) or an item name. The name is
/// normally present in the catalog under the slot's category, but a catalog
/// edit can leave a stale reference behind; that is tolerated and surfaced by
/// the rendering layer, never auto-repaired here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotState {
    pub content: String,
    /// Preserve `content` verbatim across regeneration.
    pub locked: bool,
    /// Force `content` empty across regeneration. Beats `locked` when both
    /// are set on the same slot.
    pub skipped: bool,
}

impl SlotState {
    pub fn with_content(content: impl Into<String>) -> Self {
        SlotState {
            content: content.into(),
            ..SlotState::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// All slots of one meal type on one day: the main dish plus any side dishes,
/// and the meal-wide aggregate controls.
///
/// The aggregate flags override every slot-level flag underneath them;
/// `meal_skipped` beats `meal_locked`. Side slots are stored as one list of
/// [`SlotState`], so a side's content and flags can never disagree in length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSlots {
    pub main: SlotState,
    pub sides: Vec<SlotState>,
    pub meal_locked: bool,
    pub meal_skipped: bool,
}

impl Default for MealSlots {
    /// The blank shape: empty main, one pre-allocated empty side slot, all
    /// flags off.
    fn default() -> Self {
        MealSlots {
            main: SlotState::default(),
            sides: vec![SlotState::default()],
            meal_locked: false,
            meal_skipped: false,
        }
    }
}

impl MealSlots {
    /// Append one empty, unlocked, unskipped side slot.
    pub fn add_side(&mut self) {
        self.sides.push(SlotState::default());
    }
}

/// One calendar day of the plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDay {
    /// Human-readable date label, e.g. `"Thursday Dec 18"`.
    pub display_date: String,
    pub breakfast: MealSlots,
    pub lunch: MealSlots,
    pub dinner: MealSlots,
}

impl PlanDay {
    pub fn blank(display_date: impl Into<String>) -> Self {
        PlanDay {
            display_date: display_date.into(),
            ..PlanDay::default()
        }
    }

    pub fn meal(&self, meal: MealType) -> &MealSlots {
        match meal {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
        }
    }

    pub fn meal_mut(&mut self, meal: MealType) -> &mut MealSlots {
        match meal {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
        }
    }
}

/// The whole mutable planning state: the day array, the rolling history and
/// the per-meal-type settings. This is the unit of persistence; the engine
/// takes it by `&mut` and the application snapshots it after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanState {
    #[serde(default)]
    pub days: Vec<PlanDay>,
    #[serde(default, rename = "history")]
    pub ledger: HistoryLedger,
    #[serde(default)]
    pub settings: MealTypeSettings,
}
