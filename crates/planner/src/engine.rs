//! The plan engine: every operation that reads or rewrites planning state.
//!
//! The engine owns no state of its own. It borrows the catalog, carries the
//! plan dimensions, and takes a [`PlanState`] by `&mut` per operation, so it
//! can be driven from any front end and tested without storage. Randomness
//! always comes in from the caller; tests pass a seeded rng.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use mealwheel_catalog::{Catalog, Category, MealType};

use crate::error::PlanError;
use crate::ledger::HistoryLedger;
use crate::plan::{MealSlots, PlanDay, PlanState, SlotState};
use crate::selector;

/// Plan dimensions: how many days a plan covers and how many days of history
/// the repeat-avoidance window spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanConfig {
    pub days: usize,
    pub window_days: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        PlanConfig {
            days: 10,
            window_days: 15,
        }
    }
}

impl PlanConfig {
    /// Maximum ledger length after a regeneration: one name per meal type per
    /// day of the window.
    pub fn window(&self) -> usize {
        self.window_days * MealType::PER_DAY
    }
}

/// Which slot of a meal an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRef {
    Main,
    Side(usize),
}

pub struct PlanEngine<'a> {
    catalog: &'a Catalog,
    config: PlanConfig,
}

impl<'a> PlanEngine<'a> {
    pub fn new(catalog: &'a Catalog, config: PlanConfig) -> Self {
        PlanEngine { catalog, config }
    }

    pub fn config(&self) -> PlanConfig {
        self.config
    }

    /// A fresh day array: consecutive dates starting tomorrow, every slot
    /// empty, every flag off, one side slot per meal type.
    pub fn blank_plan(&self, today: NaiveDate) -> Vec<PlanDay> {
        (1..=self.config.days)
            .map(|offset| PlanDay::blank(display_date(today + Duration::days(offset as i64))))
            .collect()
    }

    /// Replace the day array with the blank plan, discarding all content and
    /// flags. The ledger and the settings are left alone.
    pub fn initialize(&self, state: &mut PlanState, today: NaiveDate) {
        state.days = self.blank_plan(today);
    }

    /// Regenerate the whole plan.
    ///
    /// Walks days in order, meal types in `Breakfast → Lunch → Dinner` order,
    /// the main slot and then each side slot by index. Every slot decision
    /// follows the precedence order (highest first): meal skip, meal lock,
    /// slot skip, slot lock, category disabled, free draw. Draws exclude a
    /// working copy of the ledger that already contains this pass's earlier
    /// picks, so one pass never hands out the same name twice while
    /// alternatives remain.
    ///
    /// Flags and side-slot counts carry forward from the prior plan by day
    /// index; days past the prior plan's length start blank. The new day
    /// array and the truncated working ledger are committed together at the
    /// end, so a failed draw ([`PlanError::EmptyPool`]) leaves the state
    /// exactly as it was.
    pub fn generate<R>(
        &self,
        state: &mut PlanState,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<(), PlanError>
    where
        R: Rng + ?Sized,
    {
        let mut working = state.ledger.clone();
        let mut days = Vec::with_capacity(self.config.days);

        for index in 0..self.config.days {
            let mut day =
                PlanDay::blank(display_date(today + Duration::days(index as i64 + 1)));
            let prior = state.days.get(index);
            for meal in MealType::ALL {
                *day.meal_mut(meal) = self.regenerate_meal(
                    prior.map(|d| d.meal(meal)),
                    meal,
                    state.settings.is_enabled(meal),
                    &mut working,
                    rng,
                )?;
            }
            days.push(day);
        }

        working.truncate_to_window(self.config.window());
        state.days = days;
        state.ledger = working;
        Ok(())
    }

    fn regenerate_meal<R>(
        &self,
        prior: Option<&MealSlots>,
        meal: MealType,
        enabled: bool,
        working: &mut HistoryLedger,
        rng: &mut R,
    ) -> Result<MealSlots, PlanError>
    where
        R: Rng + ?Sized,
    {
        let blank = MealSlots::default();
        let prior = prior.unwrap_or(&blank);

        let main = self.regenerate_slot(
            &prior.main,
            prior,
            meal.main_category(),
            enabled,
            working,
            rng,
        )?;
        let mut sides = Vec::with_capacity(prior.sides.len());
        for side in &prior.sides {
            sides.push(self.regenerate_slot(
                side,
                prior,
                meal.side_category(),
                enabled,
                working,
                rng,
            )?);
        }

        Ok(MealSlots {
            main,
            sides,
            meal_locked: prior.meal_locked,
            meal_skipped: prior.meal_skipped,
        })
    }

    /// Decide one slot's content for a regeneration pass.
    ///
    /// Preserved content is appended to the working ledger (when non-empty)
    /// so it still counts against later draws; skipped and disabled slots
    /// contribute nothing.
    fn regenerate_slot<R>(
        &self,
        prior: &SlotState,
        meal: &MealSlots,
        category: Category,
        enabled: bool,
        working: &mut HistoryLedger,
        rng: &mut R,
    ) -> Result<SlotState, PlanError>
    where
        R: Rng + ?Sized,
    {
        let content = if meal.meal_skipped || (!meal.meal_locked && prior.skipped) {
            String::new()
        } else if meal.meal_locked || prior.locked {
            if !prior.content.is_empty() {
                working.push(prior.content.clone());
            }
            prior.content.clone()
        } else if !enabled {
            String::new()
        } else {
            let name = {
                let excluded = working.exclusion_set();
                selector::select_item(self.catalog, category, &excluded, rng)?
            };
            working.push(name.clone());
            name
        };

        Ok(SlotState {
            content,
            locked: prior.locked,
            skipped: prior.skipped,
        })
    }

    /// Flip a meal's aggregate lock. Content is untouched; the flag only
    /// matters at the next regeneration.
    pub fn toggle_meal_lock(
        &self,
        state: &mut PlanState,
        day: usize,
        meal: MealType,
    ) -> Result<(), PlanError> {
        let slots = Self::day_mut(state, day)?.meal_mut(meal);
        slots.meal_locked = !slots.meal_locked;
        Ok(())
    }

    /// Flip a meal's aggregate skip.
    ///
    /// Turning it on clears the main and every side immediately. Turning it
    /// off redraws the whole meal right away (slot-level flags
    /// notwithstanding) against the persisted ledger, appending nothing: only
    /// full regenerations grow history. All draws happen before anything is
    /// assigned, so a failed draw leaves the plan untouched.
    pub fn toggle_meal_skip<R>(
        &self,
        state: &mut PlanState,
        day: usize,
        meal: MealType,
        rng: &mut R,
    ) -> Result<(), PlanError>
    where
        R: Rng + ?Sized,
    {
        let (turning_on, side_count) = {
            let slots = Self::day_ref(state, day)?.meal(meal);
            (!slots.meal_skipped, slots.sides.len())
        };

        if turning_on {
            let slots = Self::day_mut(state, day)?.meal_mut(meal);
            slots.meal_skipped = true;
            slots.main.content.clear();
            for side in &mut slots.sides {
                side.content.clear();
            }
            return Ok(());
        }

        let (main, sides) = self.redraw_meal(state, meal, side_count, rng)?;
        let slots = Self::day_mut(state, day)?.meal_mut(meal);
        slots.meal_skipped = false;
        slots.main.content = main;
        for (side, content) in slots.sides.iter_mut().zip(sides) {
            side.content = content;
        }
        Ok(())
    }

    /// Flip one slot's lock. No content change.
    pub fn toggle_slot_lock(
        &self,
        state: &mut PlanState,
        day: usize,
        meal: MealType,
        slot: SlotRef,
    ) -> Result<(), PlanError> {
        let slots = Self::day_mut(state, day)?.meal_mut(meal);
        let slot = Self::slot_mut(slots, meal, slot)?;
        slot.locked = !slot.locked;
        Ok(())
    }

    /// Flip one slot's skip: on clears the slot, off redraws it against the
    /// persisted ledger without appending, like the meal-wide toggle.
    pub fn toggle_slot_skip<R>(
        &self,
        state: &mut PlanState,
        day: usize,
        meal: MealType,
        slot: SlotRef,
        rng: &mut R,
    ) -> Result<(), PlanError>
    where
        R: Rng + ?Sized,
    {
        let turning_on = {
            let slots = Self::day_ref(state, day)?.meal(meal);
            !Self::slot_ref(slots, meal, slot)?.skipped
        };

        if turning_on {
            let slots = Self::day_mut(state, day)?.meal_mut(meal);
            let slot = Self::slot_mut(slots, meal, slot)?;
            slot.skipped = true;
            slot.content.clear();
            return Ok(());
        }

        let content = if state.settings.is_enabled(meal) {
            let category = match slot {
                SlotRef::Main => meal.main_category(),
                SlotRef::Side(_) => meal.side_category(),
            };
            let excluded = state.ledger.exclusion_set();
            selector::select_item(self.catalog, category, &excluded, rng)?
        } else {
            String::new()
        };
        let slots = Self::day_mut(state, day)?.meal_mut(meal);
        let slot = Self::slot_mut(slots, meal, slot)?;
        slot.skipped = false;
        slot.content = content;
        Ok(())
    }

    /// Set a main slot to a chosen catalog name, or to empty.
    ///
    /// Overrides ignore every flag and never touch the ledger. Keeping a
    /// locked slot untouchable is the front end's job; the operation itself
    /// has no precondition.
    pub fn set_main(
        &self,
        state: &mut PlanState,
        day: usize,
        meal: MealType,
        name: &str,
    ) -> Result<(), PlanError> {
        let day_slots = Self::day_mut(state, day)?;
        let content = self.validated_content(meal.main_category(), name)?;
        day_slots.meal_mut(meal).main.content = content;
        Ok(())
    }

    /// Set one side slot to a chosen catalog name, or to empty. Same rules as
    /// [`set_main`](PlanEngine::set_main).
    pub fn set_side(
        &self,
        state: &mut PlanState,
        day: usize,
        meal: MealType,
        index: usize,
        name: &str,
    ) -> Result<(), PlanError> {
        let slots = Self::day_mut(state, day)?.meal_mut(meal);
        let side = Self::slot_mut(slots, meal, SlotRef::Side(index))?;
        let content = self.validated_content(meal.side_category(), name)?;
        side.content = content;
        Ok(())
    }

    /// Append one empty, unlocked, unskipped side slot to a meal.
    pub fn add_side_slot(
        &self,
        state: &mut PlanState,
        day: usize,
        meal: MealType,
    ) -> Result<(), PlanError> {
        Self::day_mut(state, day)?.meal_mut(meal).add_side();
        Ok(())
    }

    /// Draw a full meal (main plus `side_count` sides) against the persisted
    /// ledger. A disabled meal type draws nothing and comes back empty.
    fn redraw_meal<R>(
        &self,
        state: &PlanState,
        meal: MealType,
        side_count: usize,
        rng: &mut R,
    ) -> Result<(String, Vec<String>), PlanError>
    where
        R: Rng + ?Sized,
    {
        if !state.settings.is_enabled(meal) {
            return Ok((String::new(), vec![String::new(); side_count]));
        }

        let excluded = state.ledger.exclusion_set();
        let main = selector::select_item(self.catalog, meal.main_category(), &excluded, rng)?;
        let mut sides = Vec::with_capacity(side_count);
        for _ in 0..side_count {
            sides.push(selector::select_item(
                self.catalog,
                meal.side_category(),
                &excluded,
                rng,
            )?);
        }
        Ok((main, sides))
    }

    /// An override is either empty (clears the slot) or a name the catalog
    /// holds under the slot's category.
    fn validated_content(&self, category: Category, name: &str) -> Result<String, PlanError> {
        if name.is_empty() {
            return Ok(String::new());
        }
        if !self.catalog.contains(category, name) {
            return Err(PlanError::UnknownItem {
                name: name.to_string(),
                category,
            });
        }
        Ok(name.to_string())
    }

    fn day_ref(state: &PlanState, index: usize) -> Result<&PlanDay, PlanError> {
        state.days.get(index).ok_or(PlanError::DayOutOfRange {
            index,
            len: state.days.len(),
        })
    }

    fn day_mut(state: &mut PlanState, index: usize) -> Result<&mut PlanDay, PlanError> {
        let len = state.days.len();
        state
            .days
            .get_mut(index)
            .ok_or(PlanError::DayOutOfRange { index, len })
    }

    fn slot_ref<'s>(
        slots: &'s MealSlots,
        meal: MealType,
        slot: SlotRef,
    ) -> Result<&'s SlotState, PlanError> {
        match slot {
            SlotRef::Main => Ok(&slots.main),
            SlotRef::Side(index) => slots.sides.get(index).ok_or(PlanError::SideOutOfRange {
                meal,
                index,
                len: slots.sides.len(),
            }),
        }
    }

    fn slot_mut<'s>(
        slots: &'s mut MealSlots,
        meal: MealType,
        slot: SlotRef,
    ) -> Result<&'s mut SlotState, PlanError> {
        let len = slots.sides.len();
        match slot {
            SlotRef::Main => Ok(&mut slots.main),
            SlotRef::Side(index) => slots
                .sides
                .get_mut(index)
                .ok_or(PlanError::SideOutOfRange { meal, index, len }),
        }
    }
}

/// Format a plan date the way it has always been shown, e.g.
/// `"Thursday Dec 18"`.
fn display_date(date: NaiveDate) -> String {
    date.format("%A %b %-d").to_string()
}
