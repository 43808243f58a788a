use crate::models::{MeatProfile, MeatType, PlanInputs, WrapInfo};
use crate::planner::constants::*;

/// How long the cook will take and how that number was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationEstimate {
    pub rate: f64,
    pub used_fallback_rate: bool,
    pub base_hours: f64,
    /// After technique, wrap, and spritz adjustments.
    pub adjusted_hours: f64,
    pub spritz_count: u32,
    /// Adjusted hours plus the variability buffer, in minutes.
    pub total_cook_minutes: f64,
}

/// Cook rate for `temp`, falling back to [`FALLBACK_RATE`] when the profile
/// has no entry. The flag is true when the fallback was used.
pub fn lookup_rate(profile: &MeatProfile, temp: u16) -> (f64, bool) {
    match profile.rate_at(temp) {
        Some(rate) => (rate, false),
        None => (FALLBACK_RATE, true),
    }
}

pub fn base_hours(weight: f64, rate: f64) -> f64 {
    weight * rate
}

/// Apply shape modifiers. Only spatchcocked poultry changes anything.
pub fn apply_technique(hours: f64, meat: MeatType, is_spatchcock: bool) -> f64 {
    if is_spatchcock && meat.supports_spatchcock() {
        hours * SPATCHCOCK_FACTOR
    } else {
        hours
    }
}

/// Spritzes that fit between `spritz_start` and the end of the cook.
///
/// `spritz_interval` must be positive.
pub fn spritz_count(adjusted_hours: f64, spritz_start: f64, spritz_interval: f64) -> u32 {
    let window = adjusted_hours * 60.0 - spritz_start;
    if window > 0.0 {
        (window / spritz_interval).floor() as u32
    } else {
        0
    }
}

/// Full duration model: rate, technique, wrap, spritz overhead, buffer.
pub fn estimate_duration(
    inputs: &PlanInputs,
    profile: &MeatProfile,
    wrap: &WrapInfo,
) -> DurationEstimate {
    let (rate, used_fallback_rate) = lookup_rate(profile, inputs.temp);
    if used_fallback_rate {
        tracing::debug!(
            meat = %inputs.meat_type,
            temp = inputs.temp,
            "no rate for set temperature, using fallback"
        );
    }

    let base = base_hours(inputs.weight, rate);
    let shaped = apply_technique(base, inputs.meat_type, inputs.is_spatchcock);
    let mut adjusted = shaped * wrap.multiplier;

    let mut count = 0;
    if inputs.spritz_enabled {
        count = spritz_count(adjusted, inputs.spritz_start, inputs.spritz_interval);
        adjusted += count as f64 * SPRITZ_PENALTY_MINUTES / 60.0;
    }

    let total_cook_minutes = adjusted * VARIABILITY_BUFFER * 60.0;

    tracing::debug!(
        rate,
        base_hours = base,
        adjusted_hours = adjusted,
        spritz_count = count,
        total_cook_minutes,
        "estimated cook duration"
    );

    DurationEstimate {
        rate,
        used_fallback_rate,
        base_hours: base,
        adjusted_hours: adjusted,
        spritz_count: count,
        total_cook_minutes,
    }
}
