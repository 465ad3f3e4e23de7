//! On-disk encoding for plan and catalog documents.
//!
//! The plan snapshot carries an explicit `version` field so future shape
//! changes can migrate old files instead of discarding them. Documents
//! written before versioning (no `version` key) are recognized by their
//! layout and upgraded on load; saving always writes the current shape.

use std::collections::HashMap;

use mealwheel_catalog::{Catalog, MealType};
use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::ledger::HistoryLedger;
use crate::plan::{PlanDay, PlanState, SlotState};
use crate::settings::MealTypeSettings;

/// Shape revision written by [`encode_plan`].
pub const SNAPSHOT_VERSION: u32 = 2;

#[derive(Debug, Deserialize)]
struct VersionedSnapshot {
    #[allow(dead_code)]
    version: u32,
    #[serde(flatten)]
    state: PlanState,
}

#[derive(Serialize)]
struct VersionedSnapshotRef<'a> {
    version: u32,
    #[serde(flatten)]
    state: &'a PlanState,
}

/// Pre-versioning plan document. Earlier builds stored meal content as flat
/// day-level category keys and kept main-slot flags under two generations of
/// names (`locked`/`skipped`, later `mainLocked`/`mainSkipped`). Every field
/// is optional; whatever is missing falls back to a blank slot.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LegacyDocument {
    #[serde(rename = "currentPlan")]
    current_plan: Vec<LegacyDay>,
    #[serde(rename = "mealHistory")]
    meal_history: Vec<String>,
    #[serde(rename = "mealSettings")]
    meal_settings: MealTypeSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LegacyDay {
    #[serde(rename = "displayDate")]
    display_date: String,
    #[serde(rename = "Breakfast")]
    breakfast: Option<String>,
    #[serde(rename = "Lunch")]
    lunch: Option<String>,
    #[serde(rename = "Dinner")]
    dinner: Option<String>,
    locked: HashMap<String, bool>,
    skipped: HashMap<String, bool>,
    #[serde(rename = "mainLocked")]
    main_locked: HashMap<String, bool>,
    #[serde(rename = "mainSkipped")]
    main_skipped: HashMap<String, bool>,
    sides: HashMap<String, Vec<String>>,
    #[serde(rename = "sidesLocked")]
    sides_locked: HashMap<String, Vec<bool>>,
    #[serde(rename = "sidesSkipped")]
    sides_skipped: HashMap<String, Vec<bool>>,
    #[serde(rename = "mealLocked")]
    meal_locked: HashMap<String, bool>,
    #[serde(rename = "mealSkipped")]
    meal_skipped: HashMap<String, bool>,
}

impl LegacyDay {
    fn main_content(&self, meal: MealType) -> Option<&String> {
        match meal {
            MealType::Breakfast => self.breakfast.as_ref(),
            MealType::Lunch => self.lunch.as_ref(),
            MealType::Dinner => self.dinner.as_ref(),
        }
    }
}

/// Parse a plan document, migrating pre-versioning layouts to the current
/// shape. A `version` key newer than [`SNAPSHOT_VERSION`] is refused rather
/// than misread.
pub fn decode_plan(raw: &str) -> Result<PlanState, SnapshotError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if value.get("version").is_some() {
        let snapshot: VersionedSnapshot = serde_json::from_value(value)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(snapshot.version));
        }
        return Ok(snapshot.state);
    }
    let legacy: LegacyDocument = serde_json::from_value(value)?;
    Ok(migrate_document(legacy))
}

/// Serialize a plan state in the current versioned shape.
pub fn encode_plan(state: &PlanState) -> Result<String, SnapshotError> {
    let snapshot = VersionedSnapshotRef {
        version: SNAPSHOT_VERSION,
        state,
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Parse a catalog document (a bare item array).
pub fn decode_catalog(raw: &str) -> Result<Catalog, SnapshotError> {
    Ok(serde_json::from_str(raw)?)
}

/// Serialize a catalog as a bare item array.
pub fn encode_catalog(catalog: &Catalog) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

fn migrate_document(legacy: LegacyDocument) -> PlanState {
    PlanState {
        days: legacy.current_plan.iter().map(migrate_day).collect(),
        ledger: HistoryLedger::from_names(legacy.meal_history),
        settings: legacy.meal_settings,
    }
}

fn migrate_day(legacy: &LegacyDay) -> PlanDay {
    let mut day = PlanDay::blank(legacy.display_date.clone());
    for meal in MealType::ALL {
        let key = meal.to_string();
        let slots = day.meal_mut(meal);

        slots.main = SlotState {
            content: legacy.main_content(meal).cloned().unwrap_or_default(),
            // The newer flag names win where both generations are present.
            locked: flag(&legacy.main_locked, &legacy.locked, &key),
            skipped: flag(&legacy.main_skipped, &legacy.skipped, &key),
        };

        // A recorded side list replaces the blank placeholder slot, even
        // when the list is empty; flag lists shorter than the names are
        // padded with false.
        if let Some(names) = legacy.sides.get(&key) {
            let locked = legacy.sides_locked.get(&key);
            let skipped = legacy.sides_skipped.get(&key);
            slots.sides = names
                .iter()
                .enumerate()
                .map(|(index, name)| SlotState {
                    content: name.clone(),
                    locked: indexed_flag(locked, index),
                    skipped: indexed_flag(skipped, index),
                })
                .collect();
        }

        slots.meal_locked = legacy.meal_locked.get(&key).copied().unwrap_or(false);
        slots.meal_skipped = legacy.meal_skipped.get(&key).copied().unwrap_or(false);
    }
    day
}

fn flag(preferred: &HashMap<String, bool>, fallback: &HashMap<String, bool>, key: &str) -> bool {
    preferred
        .get(key)
        .or_else(|| fallback.get(key))
        .copied()
        .unwrap_or(false)
}

fn indexed_flag(flags: Option<&Vec<bool>>, index: usize) -> bool {
    flags
        .and_then(|values| values.get(index))
        .copied()
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_plan_carries_the_version() {
        let state = PlanState::default();
        let raw = encode_plan(&state).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 2);
        assert!(value["days"].is_array());
        assert!(value["history"].is_array());
    }

    #[test]
    fn newer_version_is_refused() {
        let raw = r#"{"version": 3, "days": [], "history": [], "settings": {}}"#;
        match decode_plan(raw) {
            Err(SnapshotError::UnsupportedVersion(3)) => {}
            other => panic!("expected UnsupportedVersion, got {other:?}"),
        }
    }

    #[test]
    fn garbage_is_a_json_error() {
        assert!(matches!(decode_plan("not json"), Err(SnapshotError::Json(_))));
    }

    #[test]
    fn catalog_round_trips_as_a_bare_array() {
        let catalog = Catalog::default_set();
        let raw = encode_catalog(&catalog).unwrap();
        assert!(raw.trim_start().starts_with('['));
        let back = decode_catalog(&raw).unwrap();
        assert_eq!(back.len(), catalog.len());
    }
}
