use std::io;

use serde::Serialize;

use crate::catalog::{meat_profile, wrap_info};
use crate::error::Result;
use crate::models::{
    AffiliateMode, FinishCue, MeatType, Plan, PlanInputs, PlanOutcome, WarningKind,
    WrapStrategy,
};

const TIME_FORMAT: &str = "%a %b %e %H:%M";

/// Display a computed plan as a timeline with a summary and warnings.
pub fn display_plan(outcome: &PlanOutcome, inputs: &PlanInputs) {
    let plan = &outcome.plan;
    let profile = meat_profile(plan.meat);
    let wrap = wrap_info(inputs.wrap_strategy);

    println!();
    println!(
        "=== {}: {:.1} lb @ {}°F ===",
        profile.label, inputs.weight, inputs.temp
    );
    println!();

    let milestones = plan.milestones();
    let width = milestones.iter().map(|(l, _)| l.len()).max().unwrap_or(10);
    for (label, at) in &milestones {
        println!("  {:<width$}  {}", label, at.format(TIME_FORMAT), width = width);
    }

    if let Some(spritz) = &plan.spritz_window {
        println!();
        println!(
            "  Spritz {} x{} from {} to {}",
            spritz.liquid,
            spritz.count,
            spritz.start.format("%H:%M"),
            spritz.end.format("%H:%M")
        );
    }

    println!();
    println!("--- Summary ---");
    println!(
        "Cook time: {:.1} h ({:.2} h/lb{})",
        plan.total_cook_hours,
        plan.rate,
        if plan.used_fallback_rate { ", fallback" } else { "" }
    );
    println!("Wrap: {} (x{:.2})", wrap.label, wrap.multiplier);
    if inputs.wrap_strategy.is_wrapped() {
        println!("Wrap at: {}°F internal", inputs.wrap_temp);
    }
    match plan.finish_cue {
        FinishCue::Temperature => println!("Done at: {}°F internal", inputs.target_temp),
        FinishCue::ProbeTender => println!(
            "Done at: probe tender (around {}°F internal)",
            inputs.target_temp
        ),
    }
    println!("Rest: {:.0} min", inputs.rest_time);
    println!(
        "Lead time: {}",
        match plan.affiliate_mode {
            AffiliateMode::Instant => "cooking today",
            AffiliateMode::Planning => "planning ahead",
        }
    );

    if !outcome.warnings.is_empty() {
        println!();
        println!("--- Warnings ---");
        for kind in [
            WarningKind::Safety,
            WarningKind::Timing,
            WarningKind::Quality,
            WarningKind::Info,
        ] {
            for warning in outcome.warnings.iter().filter(|w| w.kind == kind) {
                println!("[{}] {}", kind.label(), warning.message);
            }
        }
    }
    println!();
}

/// Explain why there is nothing to show yet.
pub fn display_no_plan(inputs: &PlanInputs) {
    println!();
    if !inputs.has_serve_time() {
        println!("No plan yet: set a serve time (e.g. --serve 2024-07-04T17:00).");
    } else if inputs.weight == 0.0 {
        println!("No plan yet: set a weight.");
    } else {
        println!(
            "No plan: could not read serve time '{}'. Use YYYY-MM-DDTHH:MM.",
            inputs.serve_time
        );
    }
    println!();
}

/// Display every meat profile and wrap strategy.
pub fn display_catalog() {
    println!();
    println!("=== Meats ===");
    println!();

    for meat in MeatType::ALL {
        let p = meat_profile(meat);
        let rates: Vec<String> = p
            .temp_profiles
            .iter()
            .map(|t| format!("{}°F {:.2}h/lb", t.temp, t.rate))
            .collect();
        println!("  {} ({})", p.label, meat.key());
        println!(
            "    default {:.0} lb, target {}°F, rest {:.0} min (min {:.0}, max hold {:.0})",
            p.default_weight, p.default_target_temp, p.rest.default, p.rest.min, p.rest.max_hold
        );
        println!("    rates: {}", rates.join(", "));
        if p.spritz.recommended {
            println!(
                "    spritz: {} every {:.0} min after {:.0} min",
                p.spritz.liquid, p.spritz.interval, p.spritz.start_after
            );
        }
    }

    println!();
    println!("=== Wraps ===");
    println!();
    for strategy in WrapStrategy::ALL {
        let w = wrap_info(strategy);
        println!(
            "  {:<14} x{:.2}  {} - {}",
            strategy.key(),
            w.multiplier,
            w.label,
            w.desc
        );
    }
    println!();
}

#[derive(Debug, Serialize)]
struct TimelineRow<'a> {
    milestone: &'a str,
    time: String,
}

/// Write the milestone table as CSV (`milestone,time`).
pub fn write_timeline_csv<W: io::Write>(writer: W, plan: &Plan) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (milestone, at) in plan.milestones() {
        wtr.serialize(TimelineRow {
            milestone,
            time: at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        })?;
    }
    if let Some(spritz) = &plan.spritz_window {
        wtr.serialize(TimelineRow {
            milestone: "First spritz",
            time: spritz.start.format("%Y-%m-%dT%H:%M:%S").to_string(),
        })?;
        wtr.serialize(TimelineRow {
            milestone: "Last spritz",
            time: spritz.end.format("%Y-%m-%dT%H:%M:%S").to_string(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::compute_plan;
    use chrono::NaiveDate;

    #[test]
    fn test_timeline_csv() {
        let mut inputs = PlanInputs::for_meat(MeatType::Ribs);
        inputs.serve_time = "2024-01-01T18:00".to_string();
        inputs.spritz_enabled = false;
        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let outcome = compute_plan(&inputs, now).unwrap().unwrap();

        let mut buf = Vec::new();
        write_timeline_csv(&mut buf, &outcome.plan).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "milestone,time");
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[5], "Serve,2024-01-01T18:00:00");
    }
}
