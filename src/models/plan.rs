use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{FinishCue, MeatType};

/// When and how long to keep spritzing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpritzWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Applications that fit in the window.
    pub count: u32,
    /// What goes in the bottle.
    pub liquid: String,
}

/// A derived cook schedule. Timestamps are ordered
/// `start_prep <= start_cook <= wrap_time <= finish_cook <= serve`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub meat: MeatType,
    pub is_poultry: bool,
    pub finish_cue: FinishCue,

    pub start_prep: NaiveDateTime,
    pub start_cook: NaiveDateTime,
    /// Nominal stall point when no wrap is used.
    pub wrap_time: NaiveDateTime,
    pub finish_cook: NaiveDateTime,
    pub serve: NaiveDateTime,

    pub spritz_window: Option<SpritzWindow>,

    /// Hours per pound actually used.
    pub rate: f64,
    /// True when the set temperature had no entry for this meat.
    pub used_fallback_rate: bool,
    pub base_hours: f64,
    /// After technique, wrap, and spritz adjustments, before the buffer.
    pub adjusted_hours: f64,
    pub spritz_count: u32,
    pub total_cook_minutes: f64,
    /// One decimal place.
    pub total_cook_hours: f64,

    pub affiliate_mode: AffiliateMode,
}

impl Plan {
    /// The timeline in chronological order.
    pub fn milestones(&self) -> Vec<(&'static str, NaiveDateTime)> {
        let wrap_label = if self.is_poultry {
            "Check skin / stall"
        } else {
            "Wrap"
        };
        vec![
            ("Start prep", self.start_prep),
            ("Meat on", self.start_cook),
            (wrap_label, self.wrap_time),
            ("Pull & rest", self.finish_cook),
            ("Serve", self.serve),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningKind {
    Safety,
    Quality,
    Info,
    Timing,
}

impl WarningKind {
    pub fn label(self) -> &'static str {
        match self {
            WarningKind::Safety => "SAFETY",
            WarningKind::Quality => "QUALITY",
            WarningKind::Info => "TIP",
            WarningKind::Timing => "TIMING",
        }
    }
}

/// Advisory note attached to a plan. Never blocks plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    #[serde(rename = "type")]
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Which kind of gear recommendations fit the lead time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffiliateMode {
    /// Serving within a day: only same-day essentials make sense.
    Instant,
    Planning,
}

/// Everything one engine run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub plan: Plan,
    pub warnings: Vec<Warning>,
}

impl PlanOutcome {
    pub fn has_kind(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }
}
