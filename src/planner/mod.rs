pub mod constants;
pub mod duration;
pub mod engine;
pub mod schedule;
pub mod warnings;

pub use constants::*;
pub use duration::{
    apply_technique, base_hours, estimate_duration, lookup_rate, spritz_count, DurationEstimate,
};
pub use engine::{classify_affiliate_mode, compute_plan};
pub use schedule::{
    derive_schedule, minutes_to_duration, parse_serve_time, spritz_window, wrap_factor, Schedule,
};
pub use warnings::{collect_warnings, RuleContext};
