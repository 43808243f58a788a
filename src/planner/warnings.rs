use chrono::NaiveDateTime;

use crate::models::{MeatProfile, MeatType, PlanInputs, Warning, WarningKind, WrapStrategy};
use crate::planner::constants::*;
use crate::planner::duration::DurationEstimate;
use crate::planner::schedule::Schedule;

/// Everything a rule may look at.
pub struct RuleContext<'a> {
    pub inputs: &'a PlanInputs,
    pub profile: &'a MeatProfile,
    pub estimate: &'a DurationEstimate,
    pub schedule: &'a Schedule,
    pub now: NaiveDateTime,
}

type Rule = fn(&RuleContext) -> Option<Warning>;

const RULES: [Rule; 7] = [
    rest_exceeds_hold,
    rest_below_minimum,
    large_turkey_low_temp,
    poultry_skin_unwrapped,
    brisket_fat_side_spritz,
    fallback_rate_used,
    prep_already_passed,
];

/// Run every rule. Rules are independent and any number may fire.
pub fn collect_warnings(ctx: &RuleContext) -> Vec<Warning> {
    RULES.iter().filter_map(|rule| rule(ctx)).collect()
}

fn format_hours(minutes: f64) -> String {
    let hours = minutes / 60.0;
    if hours.fract() == 0.0 {
        format!("{:.0}", hours)
    } else {
        format!("{:.1}", hours)
    }
}

/// Holding longer than the profile allows lets the meat drift toward the danger zone.
pub fn rest_exceeds_hold(ctx: &RuleContext) -> Option<Warning> {
    let max_hold = ctx.profile.rest.max_hold;
    (ctx.inputs.rest_time > max_hold).then(|| {
        Warning::new(
            WarningKind::Quality,
            format!(
                "Rest of {:.0} min is longer than the {} hour max safe hold for {}. \
                 Keep it in a warm cooler or oven above 140°F.",
                ctx.inputs.rest_time,
                format_hours(max_hold),
                ctx.profile.label
            ),
        )
    })
}

pub fn rest_below_minimum(ctx: &RuleContext) -> Option<Warning> {
    let min = ctx.profile.rest.min;
    (ctx.inputs.rest_time < min).then(|| {
        Warning::new(
            WarningKind::Quality,
            format!(
                "Rest of {:.0} min is under the {:.0} min minimum; juices won't redistribute.",
                ctx.inputs.rest_time, min
            ),
        )
    })
}

pub fn large_turkey_low_temp(ctx: &RuleContext) -> Option<Warning> {
    let inputs = ctx.inputs;
    let fires = inputs.meat_type == MeatType::Turkey
        && inputs.weight > TURKEY_SAFE_WEIGHT_LB
        && inputs.temp < POULTRY_CRISP_TEMP
        && !inputs.is_spatchcock;
    fires.then(|| {
        Warning::new(
            WarningKind::Safety,
            format!(
                "A whole {:.0} lb turkey at {}°F spends too long between 40°F and 140°F. \
                 Spatchcock it or run the pit at {}°F or hotter.",
                inputs.weight, inputs.temp, POULTRY_CRISP_TEMP
            ),
        )
    })
}

pub fn poultry_skin_unwrapped(ctx: &RuleContext) -> Option<Warning> {
    let inputs = ctx.inputs;
    let fires = inputs.meat_type.is_poultry()
        && inputs.wrap_strategy == WrapStrategy::Unwrapped
        && inputs.temp < POULTRY_CRISP_TEMP;
    fires.then(|| {
        Warning::new(
            WarningKind::Quality,
            format!(
                "Skin won't render or crisp below {}°F. Expect rubbery skin, \
                 or finish hot for the last 30 minutes.",
                POULTRY_CRISP_TEMP
            ),
        )
    })
}

pub fn brisket_fat_side_spritz(ctx: &RuleContext) -> Option<Warning> {
    let inputs = ctx.inputs;
    let fires =
        inputs.meat_type == MeatType::Brisket && inputs.fat_side_up && inputs.spritz_enabled;
    fires.then(|| {
        Warning::new(
            WarningKind::Info,
            "Fat side up already bastes the flat as it renders; spritzing may be redundant.",
        )
    })
}

pub fn fallback_rate_used(ctx: &RuleContext) -> Option<Warning> {
    ctx.estimate.used_fallback_rate.then(|| {
        let temps: Vec<String> = ctx
            .profile
            .supported_temps()
            .iter()
            .map(|t| format!("{}°F", t))
            .collect();
        Warning::new(
            WarningKind::Info,
            format!(
                "No cook-rate data for {} at {}°F; assuming {} h/lb. Known temps: {}.",
                ctx.profile.label,
                ctx.inputs.temp,
                FALLBACK_RATE,
                temps.join(", ")
            ),
        )
    })
}

pub fn prep_already_passed(ctx: &RuleContext) -> Option<Warning> {
    (ctx.schedule.start_prep < ctx.now).then(|| {
        Warning::new(
            WarningKind::Timing,
            format!(
                "Prep should have started at {}. Push serve time back or run the pit hotter.",
                ctx.schedule.start_prep.format("%a %H:%M")
            ),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{meat_profile, wrap_info};
    use crate::planner::duration::estimate_duration;
    use crate::planner::schedule::derive_schedule;
    use chrono::NaiveDate;

    fn run(inputs: &PlanInputs, now: NaiveDateTime) -> Vec<Warning> {
        let profile = meat_profile(inputs.meat_type);
        let estimate = estimate_duration(inputs, profile, wrap_info(inputs.wrap_strategy));
        let serve = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let schedule =
            derive_schedule(serve, inputs, estimate.total_cook_minutes, profile.stall_factor)
                .unwrap();
        collect_warnings(&RuleContext {
            inputs,
            profile,
            estimate: &estimate,
            schedule: &schedule,
            now,
        })
    }

    fn long_ago() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_defaults_are_quiet() {
        for meat in MeatType::ALL {
            let inputs = PlanInputs::for_meat(meat);
            let warnings = run(&inputs, long_ago());
            assert!(
                warnings.iter().all(|w| w.kind != WarningKind::Safety),
                "{meat}: {warnings:?}"
            );
        }
    }

    #[test]
    fn test_rest_over_max_hold_names_hours() {
        let mut inputs = PlanInputs::for_meat(MeatType::Brisket);
        inputs.rest_time = 300.0;
        let warnings = run(&inputs, long_ago());
        let hold = warnings
            .iter()
            .find(|w| w.kind == WarningKind::Quality)
            .unwrap();
        assert!(hold.message.contains("4 hour"), "{}", hold.message);
    }

    #[test]
    fn test_fat_side_up_tip() {
        let mut inputs = PlanInputs::for_meat(MeatType::Brisket);
        inputs.fat_side_up = true;
        inputs.spritz_enabled = true;
        assert!(run(&inputs, long_ago()).iter().any(|w| w.kind == WarningKind::Info));

        inputs.spritz_enabled = false;
        assert!(run(&inputs, long_ago()).iter().all(|w| w.kind != WarningKind::Info));
    }

    #[test]
    fn test_prep_in_past_is_timing() {
        let inputs = PlanInputs::for_meat(MeatType::Ribs);
        let late = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(17, 0, 0)
            .unwrap();
        assert!(run(&inputs, late).iter().any(|w| w.kind == WarningKind::Timing));
        assert!(run(&inputs, long_ago()).iter().all(|w| w.kind != WarningKind::Timing));
    }

    #[test]
    fn test_fallback_rate_is_reported() {
        let mut inputs = PlanInputs::for_meat(MeatType::Ribs);
        inputs.temp = 325;
        let warnings = run(&inputs, long_ago());
        assert!(warnings
            .iter()
            .any(|w| w.kind == WarningKind::Info && w.message.contains("225°F")));
    }
}
