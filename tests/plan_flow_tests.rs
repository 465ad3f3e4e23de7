use temp_dir::TempDir;

use mealwheel::PlannerApp;
use mealwheel::config::{Config, ObservabilityConfig, PlanSettings, StorageConfig};
use mealwheel_catalog::MealType;
use mealwheel_planner::SlotRef;

fn test_config(dir: &TempDir) -> Config {
    Config {
        plan: PlanSettings {
            days: 10,
            window_days: 15,
        },
        storage: StorageConfig {
            data_dir: Some(dir.path().to_string_lossy().into_owned()),
        },
        observability: ObservabilityConfig::default(),
    }
}

#[test]
fn test_open_starts_blank_without_files() {
    let dir = TempDir::new().unwrap();
    let app = PlannerApp::open(&test_config(&dir)).unwrap();

    assert!(app.state().days.is_empty());
    assert!(app.state().ledger.is_empty());
    assert_eq!(app.catalog().len(), 320);
}

#[test]
fn test_generate_persists_and_reopens() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    let mut app = PlannerApp::open(&config).unwrap();
    app.generate(Some(7)).unwrap();
    assert_eq!(app.state().days.len(), 10);
    assert!(!app.state().days[0].breakfast.main.is_empty());
    let saved = app.state().clone();

    let reopened = PlannerApp::open(&config).unwrap();
    assert_eq!(*reopened.state(), saved);
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();

    let mut app_a = PlannerApp::open(&test_config(&dir_a)).unwrap();
    let mut app_b = PlannerApp::open(&test_config(&dir_b)).unwrap();
    app_a.generate(Some(42)).unwrap();
    app_b.generate(Some(42)).unwrap();

    assert_eq!(app_a.state().days, app_b.state().days);
    assert_eq!(app_a.state().ledger, app_b.state().ledger);
}

#[test]
fn test_lock_survives_regeneration() {
    let dir = TempDir::new().unwrap();
    let mut app = PlannerApp::open(&test_config(&dir)).unwrap();
    app.generate(Some(1)).unwrap();

    let kept = app.state().days[9].dinner.main.content.clone();
    app.toggle_slot_lock(9, MealType::Dinner, SlotRef::Main).unwrap();
    app.generate(Some(2)).unwrap();

    assert_eq!(app.state().days[9].dinner.main.content, kept);
    assert!(app.state().days[9].dinner.main.locked);
}

#[test]
fn test_override_refuses_locked_slots() {
    let dir = TempDir::new().unwrap();
    let mut app = PlannerApp::open(&test_config(&dir)).unwrap();
    app.generate(Some(3)).unwrap();

    app.toggle_slot_lock(0, MealType::Lunch, SlotRef::Main).unwrap();
    let err = app.set_main(0, MealType::Lunch, "Ramen").unwrap_err();
    assert!(err.to_string().contains("locked"), "{err}");

    // Unlocking makes the same override fine.
    app.toggle_slot_lock(0, MealType::Lunch, SlotRef::Main).unwrap();
    app.set_main(0, MealType::Lunch, "Ramen").unwrap();
    assert_eq!(app.state().days[0].lunch.main.content, "Ramen");

    // A meal-wide lock guards the side slots too.
    app.toggle_meal_lock(1, MealType::Dinner).unwrap();
    let err = app
        .set_side(1, MealType::Dinner, 0, "Garlic Bread")
        .unwrap_err();
    assert!(err.to_string().contains("locked"), "{err}");
}

#[test]
fn test_day_messages_use_one_based_numbers() {
    let dir = TempDir::new().unwrap();
    let mut app = PlannerApp::open(&test_config(&dir)).unwrap();
    app.generate(Some(4)).unwrap();

    let err = app.set_main(99, MealType::Lunch, "Ramen").unwrap_err();
    assert!(
        err.to_string().contains("day 100 is outside the current 10-day plan"),
        "{err}"
    );
}

#[test]
fn test_slot_operations_need_a_plan_first() {
    let dir = TempDir::new().unwrap();
    let mut app = PlannerApp::open(&test_config(&dir)).unwrap();

    let err = app
        .toggle_slot_lock(0, MealType::Lunch, SlotRef::Main)
        .unwrap_err();
    assert!(err.to_string().contains("no plan yet"), "{err}");
}

#[test]
fn test_catalog_changes_persist() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    let mut app = PlannerApp::open(&config).unwrap();
    app.catalog_add("Midnight Ramen", mealwheel_catalog::Category::Lunch)
        .unwrap();
    drop(app);

    let mut app = PlannerApp::open(&config).unwrap();
    assert!(
        app.catalog()
            .contains(mealwheel_catalog::Category::Lunch, "Midnight Ramen")
    );

    app.catalog_remove("Midnight Ramen", mealwheel_catalog::Category::Lunch)
        .unwrap();
    drop(app);

    let app = PlannerApp::open(&config).unwrap();
    assert!(
        !app.catalog()
            .contains(mealwheel_catalog::Category::Lunch, "Midnight Ramen")
    );
}

#[test]
fn test_disabled_meal_type_is_skipped_and_persisted() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    let mut app = PlannerApp::open(&config).unwrap();
    app.set_meal_enabled(MealType::Breakfast, false).unwrap();
    app.generate(Some(5)).unwrap();

    for day in &app.state().days {
        assert!(day.breakfast.main.is_empty());
        assert!(day.breakfast.sides[0].is_empty());
        assert!(!day.lunch.main.is_empty());
    }

    let reopened = PlannerApp::open(&config).unwrap();
    assert!(!reopened.state().settings.is_enabled(MealType::Breakfast));
}

#[test]
fn test_added_side_slot_fills_on_regeneration() {
    let dir = TempDir::new().unwrap();
    let mut app = PlannerApp::open(&test_config(&dir)).unwrap();
    app.generate(Some(6)).unwrap();

    app.add_side(2, MealType::Dinner).unwrap();
    assert_eq!(app.state().days[2].dinner.sides.len(), 2);

    app.generate(Some(7)).unwrap();
    let sides = &app.state().days[2].dinner.sides;
    assert_eq!(sides.len(), 2);
    assert!(!sides[0].is_empty() && !sides[1].is_empty());
}

#[test]
fn test_initialize_clears_days_but_keeps_history() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    let mut app = PlannerApp::open(&config).unwrap();
    app.generate(Some(8)).unwrap();
    assert_eq!(app.state().ledger.len(), 45);

    app.initialize().unwrap();
    assert_eq!(app.state().days.len(), 10);
    assert!(app.state().days.iter().all(|d| d.lunch.main.is_empty()));
    assert_eq!(app.state().ledger.len(), 45);

    let reopened = PlannerApp::open(&config).unwrap();
    assert_eq!(reopened.state().ledger.len(), 45);
    assert!(reopened.state().days[0].lunch.main.is_empty());
}

#[test]
fn test_meal_skip_toggle_persists() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    let mut app = PlannerApp::open(&config).unwrap();
    app.generate(Some(9)).unwrap();
    app.toggle_meal_skip(0, MealType::Breakfast).unwrap();

    assert!(app.state().days[0].breakfast.meal_skipped);
    assert!(app.state().days[0].breakfast.main.is_empty());

    let reopened = PlannerApp::open(&config).unwrap();
    assert!(reopened.state().days[0].breakfast.meal_skipped);
}
