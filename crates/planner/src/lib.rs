//! Plan generation for a rolling ten-day meal schedule.
//!
//! The engine fills breakfast, lunch, and dinner slots for each day from a
//! [`mealwheel_catalog::Catalog`], drawing names at random while a history
//! ledger keeps recent picks out of the pool. Slot and meal level lock and
//! skip flags let a plan be regenerated around the parts worth keeping, and
//! the snapshot module gives the whole state a versioned on-disk form.

pub mod engine;
pub mod error;
pub mod ledger;
pub mod plan;
pub mod selector;
pub mod settings;
pub mod snapshot;

pub use engine::{PlanConfig, PlanEngine, SlotRef};
pub use error::{PlanError, SnapshotError};
pub use ledger::HistoryLedger;
pub use plan::{MealSlots, PlanDay, PlanState, SlotState};
pub use settings::MealTypeSettings;
