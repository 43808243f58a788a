/// Hours per pound used when the set temperature has no entry for the meat.
pub const FALLBACK_RATE: f64 = 1.0;

/// Butterflied poultry cooks in 75% of the time.
pub const SPATCHCOCK_FACTOR: f64 = 0.75;

/// Heat-recovery cost of opening the lid for one spritz, in minutes.
pub const SPRITZ_PENALTY_MINUTES: f64 = 15.0;

/// Safety margin for pellet-grill temperature swings (+15%).
pub const VARIABILITY_BUFFER: f64 = 1.15;

/// Wrap temperatures above this push the wrap later in the cook, °F.
pub const WRAP_TEMP_BASELINE: u16 = 160;

/// Added to the wrap fraction per °F above [`WRAP_TEMP_BASELINE`].
pub const WRAP_FACTOR_PER_DEGREE: f64 = 0.005;

/// Without a wrap, spritzing stops this many minutes before the pull.
pub const SPRITZ_NO_WRAP_CUTOFF_MINUTES: f64 = 60.0;

/// Serving sooner than this counts as a same-day cook.
pub const INSTANT_WINDOW_HOURS: i64 = 24;

/// Default prep buffer for a new plan, in minutes.
pub const DEFAULT_PREP_MINUTES: f64 = 45.0;

// ─────────────────────────────────────────────────────────────────────────────
// Warning thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Whole turkeys above this weight are risky at low pit temps, lb.
pub const TURKEY_SAFE_WEIGHT_LB: f64 = 14.0;

/// Pit temperature below which poultry skin will not render, °F.
pub const POULTRY_CRISP_TEMP: u16 = 275;
