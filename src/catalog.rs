//! Reference data for every supported meat and wrap strategy.
//!
//! Rates are hours per pound at the given pit temperature. Tuning these is a
//! data change only; the engine reads them through [`meat_profile`] and
//! [`wrap_info`].

use crate::models::{
    FinishCue, MeatProfile, MeatType, RestBounds, SpritzDefaults, TempRate, WrapInfo,
    WrapStrategy,
};

// ─────────────────────────────────────────────────────────────────────────────
// Meat profiles
// ─────────────────────────────────────────────────────────────────────────────

static BRISKET: MeatProfile = MeatProfile {
    meat: MeatType::Brisket,
    label: "Brisket (whole packer)",
    default_weight: 12.0,
    temp_profiles: &[
        TempRate { temp: 225, rate: 1.5 },
        TempRate { temp: 250, rate: 1.25 },
        TempRate { temp: 275, rate: 1.0 },
    ],
    rest: RestBounds {
        default: 60.0,
        min: 30.0,
        max_hold: 240.0,
    },
    stall_factor: 0.60,
    default_target_temp: 203,
    default_smoker_temp: 250,
    default_wrap: WrapStrategy::ButcherPaper,
    default_wrap_temp: 165,
    spritz: SpritzDefaults {
        recommended: true,
        start_after: 120.0,
        interval: 60.0,
        liquid: "Apple cider vinegar + water",
    },
    finish_cue: FinishCue::ProbeTender,
};

static PORK_BUTT: MeatProfile = MeatProfile {
    meat: MeatType::PorkButt,
    label: "Pork Butt (shoulder)",
    default_weight: 8.0,
    temp_profiles: &[
        TempRate { temp: 225, rate: 1.5 },
        TempRate { temp: 250, rate: 1.1 },
        TempRate { temp: 275, rate: 0.9 },
    ],
    rest: RestBounds {
        default: 45.0,
        min: 30.0,
        max_hold: 240.0,
    },
    stall_factor: 0.55,
    default_target_temp: 203,
    default_smoker_temp: 250,
    default_wrap: WrapStrategy::FoilPan,
    default_wrap_temp: 165,
    spritz: SpritzDefaults {
        recommended: true,
        start_after: 90.0,
        interval: 60.0,
        liquid: "Apple juice",
    },
    finish_cue: FinishCue::ProbeTender,
};

static RIBS: MeatProfile = MeatProfile {
    meat: MeatType::Ribs,
    label: "Spare Ribs",
    default_weight: 3.0,
    temp_profiles: &[
        TempRate { temp: 225, rate: 1.8 },
        TempRate { temp: 250, rate: 1.5 },
        TempRate { temp: 275, rate: 1.2 },
    ],
    rest: RestBounds {
        default: 15.0,
        min: 10.0,
        max_hold: 60.0,
    },
    stall_factor: 0.50,
    default_target_temp: 198,
    default_smoker_temp: 250,
    default_wrap: WrapStrategy::Foil,
    default_wrap_temp: 165,
    spritz: SpritzDefaults {
        recommended: true,
        start_after: 60.0,
        interval: 45.0,
        liquid: "Apple juice + apple cider vinegar",
    },
    finish_cue: FinishCue::ProbeTender,
};

static TURKEY: MeatProfile = MeatProfile {
    meat: MeatType::Turkey,
    label: "Whole Turkey",
    default_weight: 12.0,
    temp_profiles: &[
        TempRate { temp: 225, rate: 0.5 },
        TempRate { temp: 250, rate: 0.4 },
        TempRate { temp: 275, rate: 0.33 },
        TempRate { temp: 300, rate: 0.25 },
        TempRate { temp: 325, rate: 0.2 },
    ],
    rest: RestBounds {
        default: 30.0,
        min: 20.0,
        max_hold: 90.0,
    },
    stall_factor: 0.70,
    default_target_temp: 165,
    default_smoker_temp: 275,
    default_wrap: WrapStrategy::Unwrapped,
    default_wrap_temp: 160,
    spritz: SpritzDefaults {
        recommended: false,
        start_after: 60.0,
        interval: 45.0,
        liquid: "Melted butter",
    },
    finish_cue: FinishCue::Temperature,
};

static CHICKEN: MeatProfile = MeatProfile {
    meat: MeatType::Chicken,
    label: "Whole Chicken",
    default_weight: 5.0,
    temp_profiles: &[
        TempRate { temp: 225, rate: 0.75 },
        TempRate { temp: 250, rate: 0.65 },
        TempRate { temp: 275, rate: 0.55 },
        TempRate { temp: 300, rate: 0.45 },
        TempRate { temp: 325, rate: 0.4 },
    ],
    rest: RestBounds {
        default: 15.0,
        min: 10.0,
        max_hold: 60.0,
    },
    stall_factor: 0.65,
    default_target_temp: 165,
    default_smoker_temp: 300,
    default_wrap: WrapStrategy::Unwrapped,
    default_wrap_temp: 160,
    spritz: SpritzDefaults {
        recommended: false,
        start_after: 45.0,
        interval: 30.0,
        liquid: "Melted butter",
    },
    finish_cue: FinishCue::Temperature,
};

/// Profile for a meat type.
pub fn meat_profile(meat: MeatType) -> &'static MeatProfile {
    match meat {
        MeatType::Brisket => &BRISKET,
        MeatType::PorkButt => &PORK_BUTT,
        MeatType::Ribs => &RIBS,
        MeatType::Turkey => &TURKEY,
        MeatType::Chicken => &CHICKEN,
    }
}

/// Set temperatures with a known rate for `meat`.
pub fn supported_temps(meat: MeatType) -> Vec<u16> {
    meat_profile(meat).supported_temps()
}

// ─────────────────────────────────────────────────────────────────────────────
// Wrap strategies
// ─────────────────────────────────────────────────────────────────────────────

static UNWRAPPED: WrapInfo = WrapInfo {
    strategy: WrapStrategy::Unwrapped,
    label: "No wrap",
    multiplier: 1.25,
    desc: "Best bark, but you ride out the whole stall",
};

static BUTCHER_PAPER: WrapInfo = WrapInfo {
    strategy: WrapStrategy::ButcherPaper,
    label: "Butcher paper",
    multiplier: 1.0,
    desc: "Breathes enough to keep the bark while pushing through the stall",
};

static FOIL: WrapInfo = WrapInfo {
    strategy: WrapStrategy::Foil,
    label: "Foil (Texas crutch)",
    multiplier: 0.9,
    desc: "Fastest finish; braises in its own juice, softens bark",
};

static FOIL_PAN: WrapInfo = WrapInfo {
    strategy: WrapStrategy::FoilPan,
    label: "Covered foil pan",
    multiplier: 0.95,
    desc: "Braises in the pan and catches every drop for pulled meat",
};

pub fn wrap_info(strategy: WrapStrategy) -> &'static WrapInfo {
    match strategy {
        WrapStrategy::Unwrapped => &UNWRAPPED,
        WrapStrategy::ButcherPaper => &BUTCHER_PAPER,
        WrapStrategy::Foil => &FOIL,
        WrapStrategy::FoilPan => &FOIL_PAN,
    }
}
