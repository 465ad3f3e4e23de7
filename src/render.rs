//! Terminal rendering for the plan, the catalog and the settings.
//!
//! Rendering is pure string building so it can be tested without a terminal.
//! Disabled meal types are left out of the plan view entirely; their stored
//! content stays in the state and reappears when re-enabled.

use strum::VariantArray;

use mealwheel_catalog::{Catalog, Category, MealType};
use mealwheel_planner::{MealTypeSettings, PlanState, SlotState};

/// Render the whole plan, one block per day. Empty slots show a dash; a
/// name the catalog no longer holds is marked `(missing)`, never repaired.
pub fn render_plan(state: &PlanState, catalog: &Catalog) -> String {
    if state.days.is_empty() {
        return "No plan yet. Run `mealwheel generate` to create one.\n".to_string();
    }

    let mut out = String::new();
    for (index, day) in state.days.iter().enumerate() {
        out.push_str(&format!("Day {}: {}\n", index + 1, day.display_date));
        for meal in MealType::ALL {
            if !state.settings.is_enabled(meal) {
                continue;
            }
            let slots = day.meal(meal);
            out.push_str(&format!("  {meal}"));
            if slots.meal_locked {
                out.push_str(" [meal locked]");
            }
            if slots.meal_skipped {
                out.push_str(" [meal skipped]");
            }
            out.push_str(&format!(
                ": {}\n",
                slot_line(&slots.main, meal.main_category(), catalog)
            ));
            for (n, side) in slots.sides.iter().enumerate() {
                out.push_str(&format!(
                    "    side {}: {}\n",
                    n + 1,
                    slot_line(side, meal.side_category(), catalog)
                ));
            }
        }
        out.push('\n');
    }
    out
}

fn slot_line(slot: &SlotState, category: Category, catalog: &Catalog) -> String {
    let mut line = if slot.content.is_empty() {
        "-".to_string()
    } else if catalog.contains(category, &slot.content) {
        slot.content.clone()
    } else {
        format!("{} (missing)", slot.content)
    };
    if slot.locked {
        line.push_str(" [locked]");
    }
    if slot.skipped {
        line.push_str(" [skipped]");
    }
    line
}

/// List the catalog grouped by category, names sorted. With a filter only
/// that category appears.
pub fn render_catalog(catalog: &Catalog, filter: Option<Category>) -> String {
    let mut out = String::new();
    for &category in Category::VARIANTS {
        if filter.is_some_and(|wanted| wanted != category) {
            continue;
        }
        let items = catalog.items_sorted(Some(category));
        out.push_str(&format!("{category} ({})\n", items.len()));
        for item in items {
            out.push_str(&format!("  {}\n", item.name));
        }
    }
    out
}

/// Per-category dish counts plus the total.
pub fn render_stats(catalog: &Catalog) -> String {
    let mut out = String::new();
    for &category in Category::VARIANTS {
        out.push_str(&format!(
            "{:<16}{:>5}\n",
            category.to_string(),
            catalog.count_in(category)
        ));
    }
    out.push_str(&format!("{:<16}{:>5}\n", "total", catalog.len()));
    out
}

/// One line per meal type: enabled or disabled.
pub fn render_settings(settings: &MealTypeSettings) -> String {
    let mut out = String::new();
    for meal in MealType::ALL {
        let status = if settings.is_enabled(meal) {
            "enabled"
        } else {
            "disabled"
        };
        out.push_str(&format!("{meal}: {status}\n"));
    }
    out
}
