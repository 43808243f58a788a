use chrono::{Duration, NaiveDateTime};

use crate::catalog::{meat_profile, wrap_info};
use crate::error::{Result, SmokeError};
use crate::models::{AffiliateMode, Plan, PlanInputs, PlanOutcome};
use crate::planner::constants::INSTANT_WINDOW_HOURS;
use crate::planner::duration::estimate_duration;
use crate::planner::schedule::{derive_schedule, parse_serve_time, spritz_window, wrap_factor};
use crate::planner::warnings::{collect_warnings, RuleContext};

/// Compute the cook plan for `inputs`.
///
/// `Ok(None)` means there is not enough input to plan yet: the serve time is
/// missing or unparsable, or the weight is zero. That is not an error.
///
/// `Err` is returned only when spritzing is enabled with a non-positive
/// interval, which leaves the spritz count undefined. Other out-of-range
/// numbers flow through the arithmetic unchanged; range checks belong to
/// [`PlanInputs::validate`].
///
/// `now` only feeds the affiliate-mode hint and the timing warning.
pub fn compute_plan(inputs: &PlanInputs, now: NaiveDateTime) -> Result<Option<PlanOutcome>> {
    let serve = match parse_serve_time(&inputs.serve_time) {
        Ok(serve) => serve,
        Err(e) => {
            tracing::debug!(error = %e, "no plan: serve time unusable");
            return Ok(None);
        }
    };
    if inputs.weight == 0.0 || !inputs.weight.is_finite() {
        tracing::debug!(weight = inputs.weight, "no plan: weight missing");
        return Ok(None);
    }
    if inputs.spritz_enabled && inputs.spritz_interval <= 0.0 {
        return Err(SmokeError::InvalidInput(format!(
            "spritz interval must be positive, got {}",
            inputs.spritz_interval
        )));
    }

    let profile = meat_profile(inputs.meat_type);
    let wrap = wrap_info(inputs.wrap_strategy);
    let estimate = estimate_duration(inputs, profile, wrap);

    let factor = wrap_factor(
        profile.stall_factor,
        inputs.wrap_strategy.is_wrapped(),
        inputs.wrap_temp,
    );
    let Some(schedule) = derive_schedule(serve, inputs, estimate.total_cook_minutes, factor)
    else {
        tracing::debug!("no plan: schedule outside representable time range");
        return Ok(None);
    };

    let spritz = spritz_window(inputs, &schedule, estimate.spritz_count, profile.spritz.liquid);

    let warnings = collect_warnings(&RuleContext {
        inputs,
        profile,
        estimate: &estimate,
        schedule: &schedule,
        now,
    });

    let plan = Plan {
        meat: inputs.meat_type,
        is_poultry: inputs.meat_type.is_poultry(),
        finish_cue: profile.finish_cue,
        start_prep: schedule.start_prep,
        start_cook: schedule.start_cook,
        wrap_time: schedule.wrap_time,
        finish_cook: schedule.finish_cook,
        serve: schedule.serve,
        spritz_window: spritz,
        rate: estimate.rate,
        used_fallback_rate: estimate.used_fallback_rate,
        base_hours: estimate.base_hours,
        adjusted_hours: estimate.adjusted_hours,
        spritz_count: estimate.spritz_count,
        total_cook_minutes: estimate.total_cook_minutes,
        total_cook_hours: round_one_decimal(estimate.total_cook_minutes / 60.0),
        affiliate_mode: classify_affiliate_mode(serve, now),
    };

    tracing::debug!(
        start_prep = %plan.start_prep,
        start_cook = %plan.start_cook,
        finish_cook = %plan.finish_cook,
        warnings = warnings.len(),
        "plan computed"
    );

    Ok(Some(PlanOutcome { plan, warnings }))
}

/// Serving within a day is an instant cook; anything further out is planning.
pub fn classify_affiliate_mode(serve: NaiveDateTime, now: NaiveDateTime) -> AffiliateMode {
    if serve - now < Duration::hours(INSTANT_WINDOW_HOURS) {
        AffiliateMode::Instant
    } else {
        AffiliateMode::Planning
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MeatType;
    use chrono::NaiveDate;

    fn at(day: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_affiliate_mode_boundary() {
        assert_eq!(classify_affiliate_mode(at(2, 18), at(2, 6)), AffiliateMode::Instant);
        assert_eq!(classify_affiliate_mode(at(2, 18), at(1, 18)), AffiliateMode::Planning);
        assert_eq!(classify_affiliate_mode(at(3, 18), at(1, 18)), AffiliateMode::Planning);
    }

    #[test]
    fn test_zero_weight_is_no_plan() {
        let mut inputs = PlanInputs::for_meat(MeatType::Ribs);
        inputs.serve_time = "2024-01-01T18:00".to_string();
        inputs.weight = 0.0;
        assert!(compute_plan(&inputs, at(1, 0)).unwrap().is_none());
    }

    #[test]
    fn test_non_positive_spritz_interval_is_rejected() {
        let mut inputs = PlanInputs::for_meat(MeatType::Ribs);
        inputs.serve_time = "2024-01-01T18:00".to_string();
        inputs.spritz_enabled = true;
        inputs.spritz_interval = 0.0;
        assert!(compute_plan(&inputs, at(1, 0)).is_err());

        inputs.spritz_enabled = false;
        assert!(compute_plan(&inputs, at(1, 0)).unwrap().is_some());
    }

    #[test]
    fn test_total_cook_hours_rounded() {
        assert_eq!(round_one_decimal(9.614), 9.6);
        assert_eq!(round_one_decimal(9.65), 9.7);
    }
}
