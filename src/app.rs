//! Application state: the catalog, the plan and the store, wired together.
//!
//! Every mutating operation runs the engine against the in-memory state and
//! then persists the affected document before returning, so the files on
//! disk always reflect the last completed operation. Day and side indices
//! here are zero-based; the CLI translates from the one-based numbers it
//! shows and accepts.

use anyhow::{Result, anyhow, bail};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use mealwheel_catalog::{Catalog, Category, MealType};
use mealwheel_planner::{PlanConfig, PlanEngine, PlanState, SlotRef};

use crate::config::Config;
use crate::store::SnapshotStore;

pub struct PlannerApp {
    catalog: Catalog,
    state: PlanState,
    plan_config: PlanConfig,
    store: SnapshotStore,
}

impl PlannerApp {
    /// Load the catalog and plan from the configured data directory. A
    /// missing plan document starts empty; nothing is written until the
    /// first mutation.
    pub fn open(config: &Config) -> Result<Self> {
        let store = SnapshotStore::new(config.data_dir());
        let catalog = store.load_catalog();
        let state = store.load_plan()?.unwrap_or_default();
        Ok(PlannerApp {
            catalog,
            state,
            plan_config: config.plan_config(),
            store,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &PlanState {
        &self.state
    }

    pub fn plan_config(&self) -> PlanConfig {
        self.plan_config
    }

    /// Replace the day array with a blank plan starting tomorrow. History
    /// and settings stay.
    pub fn initialize(&mut self) -> Result<()> {
        let engine = PlanEngine::new(&self.catalog, self.plan_config);
        engine.initialize(&mut self.state, today());
        tracing::info!(days = self.state.days.len(), "plan reset to blank");
        self.persist_plan()
    }

    /// Regenerate the whole plan. With a seed the draws are reproducible;
    /// without one they come from the thread rng.
    pub fn generate(&mut self, seed: Option<u64>) -> Result<()> {
        let engine = PlanEngine::new(&self.catalog, self.plan_config);
        match seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                engine.generate(&mut self.state, today(), &mut rng)?;
            }
            None => {
                let mut rng = rand::rng();
                engine.generate(&mut self.state, today(), &mut rng)?;
            }
        }
        tracing::info!(
            days = self.state.days.len(),
            history = self.state.ledger.len(),
            "plan generated"
        );
        self.persist_plan()
    }

    pub fn toggle_meal_lock(&mut self, day: usize, meal: MealType) -> Result<()> {
        self.check_day(day)?;
        let engine = PlanEngine::new(&self.catalog, self.plan_config);
        engine.toggle_meal_lock(&mut self.state, day, meal)?;
        self.persist_plan()
    }

    pub fn toggle_meal_skip(&mut self, day: usize, meal: MealType) -> Result<()> {
        self.check_day(day)?;
        let engine = PlanEngine::new(&self.catalog, self.plan_config);
        engine.toggle_meal_skip(&mut self.state, day, meal, &mut rand::rng())?;
        self.persist_plan()
    }

    pub fn toggle_slot_lock(&mut self, day: usize, meal: MealType, slot: SlotRef) -> Result<()> {
        self.check_day(day)?;
        let engine = PlanEngine::new(&self.catalog, self.plan_config);
        engine.toggle_slot_lock(&mut self.state, day, meal, slot)?;
        self.persist_plan()
    }

    pub fn toggle_slot_skip(&mut self, day: usize, meal: MealType, slot: SlotRef) -> Result<()> {
        self.check_day(day)?;
        let engine = PlanEngine::new(&self.catalog, self.plan_config);
        engine.toggle_slot_skip(&mut self.state, day, meal, slot, &mut rand::rng())?;
        self.persist_plan()
    }

    /// Put a chosen dish in a main slot, or clear it with an empty name.
    /// Locked slots are refused here; the engine itself has no such rule.
    pub fn set_main(&mut self, day: usize, meal: MealType, name: &str) -> Result<()> {
        self.check_day(day)?;
        self.check_unlocked(day, meal, SlotRef::Main)?;
        let engine = PlanEngine::new(&self.catalog, self.plan_config);
        engine.set_main(&mut self.state, day, meal, name)?;
        self.persist_plan()
    }

    pub fn set_side(&mut self, day: usize, meal: MealType, index: usize, name: &str) -> Result<()> {
        self.check_day(day)?;
        self.check_unlocked(day, meal, SlotRef::Side(index))?;
        let engine = PlanEngine::new(&self.catalog, self.plan_config);
        engine.set_side(&mut self.state, day, meal, index, name)?;
        self.persist_plan()
    }

    pub fn add_side(&mut self, day: usize, meal: MealType) -> Result<()> {
        self.check_day(day)?;
        let engine = PlanEngine::new(&self.catalog, self.plan_config);
        engine.add_side_slot(&mut self.state, day, meal)?;
        self.persist_plan()
    }

    pub fn catalog_add(&mut self, name: &str, category: Category) -> Result<()> {
        self.catalog.add(name, category)?;
        tracing::info!(name, %category, "catalog item added");
        self.persist_catalog()
    }

    pub fn catalog_remove(&mut self, name: &str, category: Category) -> Result<()> {
        self.catalog.remove(name, category)?;
        tracing::info!(name, %category, "catalog item removed");
        self.persist_catalog()
    }

    /// Turn planning of a meal type on or off. Stored plan content is left
    /// in place either way.
    pub fn set_meal_enabled(&mut self, meal: MealType, enabled: bool) -> Result<()> {
        self.state.settings.set_enabled(meal, enabled);
        tracing::info!(%meal, enabled, "meal type setting changed");
        self.persist_plan()
    }

    fn persist_plan(&self) -> Result<()> {
        self.store.save_plan(&self.state)
    }

    fn persist_catalog(&self) -> Result<()> {
        self.store.save_catalog(&self.catalog)
    }

    /// Day bounds with a message in the one-based numbering the plan is
    /// shown in.
    fn check_day(&self, day: usize) -> Result<()> {
        let len = self.state.days.len();
        if len == 0 {
            bail!("no plan yet; run `mealwheel generate` first");
        }
        if day >= len {
            bail!("day {} is outside the current {}-day plan", day + 1, len);
        }
        Ok(())
    }

    fn check_unlocked(&self, day: usize, meal: MealType, slot: SlotRef) -> Result<()> {
        let slots = self
            .state
            .days
            .get(day)
            .ok_or_else(|| anyhow!("day {} is outside the plan", day + 1))?
            .meal(meal);
        let locked = slots.meal_locked
            || match slot {
                SlotRef::Main => slots.main.locked,
                SlotRef::Side(index) => slots.sides.get(index).is_some_and(|s| s.locked),
            };
        if locked {
            bail!("{meal} on day {} is locked; unlock it before overriding", day + 1);
        }
        Ok(())
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
