pub mod app;
pub mod config;
pub mod observability;
pub mod render;
pub mod store;

pub use app::PlannerApp;
