pub mod catalog;
pub mod cli;
pub mod clock;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{Result, SmokeError};
pub use models::{Plan, PlanInputs, PlanOutcome, Warning};
pub use planner::compute_plan;
