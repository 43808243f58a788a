use chrono::{DateTime, Duration, NaiveDateTime};

use crate::error::{Result, SmokeError};
use crate::models::{PlanInputs, SpritzWindow};
use crate::planner::constants::*;

const SERVE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a serve time as local wall-clock time.
///
/// RFC 3339 input with an offset keeps its wall-clock reading; the offset is dropped.
pub fn parse_serve_time(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(SmokeError::InvalidServeTime("serve time is empty".to_string()));
    }

    for fmt in SERVE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(dt);
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .map_err(|_| {
            SmokeError::InvalidServeTime(format!(
                "'{}' is not a date-time like 2024-01-01T18:00",
                raw
            ))
        })
}

/// Fractional minutes as a duration, to the millisecond.
///
/// `None` for non-finite input or anything outside chrono's range.
pub fn minutes_to_duration(minutes: f64) -> Option<Duration> {
    let millis = (minutes * 60_000.0).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    Duration::try_milliseconds(millis as i64)
}

/// The five milestones, derived backward from serve time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub start_prep: NaiveDateTime,
    pub start_cook: NaiveDateTime,
    pub wrap_time: NaiveDateTime,
    pub finish_cook: NaiveDateTime,
    pub serve: NaiveDateTime,
}

/// Fraction of the cook at which to wrap.
///
/// Starts at the stall point; a wrap temp above the baseline moves it later.
pub fn wrap_factor(stall_factor: f64, wrapped: bool, wrap_temp: u16) -> f64 {
    if wrapped && wrap_temp > WRAP_TEMP_BASELINE {
        stall_factor + f64::from(wrap_temp - WRAP_TEMP_BASELINE) * WRAP_FACTOR_PER_DEGREE
    } else {
        stall_factor
    }
}

/// Walk back from `serve`: rest, then cook, then prep.
///
/// Returns `None` if any offset or timestamp leaves chrono's representable range.
pub fn derive_schedule(
    serve: NaiveDateTime,
    inputs: &PlanInputs,
    total_cook_minutes: f64,
    wrap_factor: f64,
) -> Option<Schedule> {
    let finish_cook = serve.checked_sub_signed(minutes_to_duration(inputs.rest_time)?)?;
    let start_cook = finish_cook.checked_sub_signed(minutes_to_duration(total_cook_minutes)?)?;
    let start_prep = start_cook.checked_sub_signed(minutes_to_duration(inputs.prep_time)?)?;
    let wrap_time =
        start_cook.checked_add_signed(minutes_to_duration(total_cook_minutes * wrap_factor)?)?;

    Some(Schedule {
        start_prep,
        start_cook,
        wrap_time,
        finish_cook,
        serve,
    })
}

/// Spritzing runs from `spritz_start` after the meat goes on until the wrap,
/// or until an hour before the pull when the meat stays unwrapped.
pub fn spritz_window(
    inputs: &PlanInputs,
    schedule: &Schedule,
    count: u32,
    liquid: &str,
) -> Option<SpritzWindow> {
    if !inputs.spritz_enabled || count == 0 {
        return None;
    }

    let start = schedule
        .start_cook
        .checked_add_signed(minutes_to_duration(inputs.spritz_start)?)?;
    let end = if inputs.wrap_strategy.is_wrapped() {
        schedule.wrap_time
    } else {
        schedule
            .finish_cook
            .checked_sub_signed(minutes_to_duration(SPRITZ_NO_WRAP_CUTOFF_MINUTES)?)?
    };

    Some(SpritzWindow {
        start,
        end,
        count,
        liquid: liquid.to_string(),
    })
}
