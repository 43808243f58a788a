mod inputs;
mod meat;
mod plan;
mod wrap;

pub use inputs::PlanInputs;
pub use meat::{FinishCue, MeatProfile, MeatType, RestBounds, SpritzDefaults, TempRate};
pub use plan::{AffiliateMode, Plan, PlanOutcome, SpritzWindow, Warning, WarningKind};
pub use wrap::{WrapInfo, WrapStrategy};
