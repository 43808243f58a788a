use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::meat::{closest_key, normalize_key};
use crate::error::SmokeError;

/// What (if anything) goes around the meat once the bark has set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapStrategy {
    #[serde(rename = "none")]
    Unwrapped,
    ButcherPaper,
    Foil,
    FoilPan,
}

impl WrapStrategy {
    pub const ALL: [WrapStrategy; 4] = [
        WrapStrategy::Unwrapped,
        WrapStrategy::ButcherPaper,
        WrapStrategy::Foil,
        WrapStrategy::FoilPan,
    ];

    pub fn key(self) -> &'static str {
        match self {
            WrapStrategy::Unwrapped => "none",
            WrapStrategy::ButcherPaper => "butcher_paper",
            WrapStrategy::Foil => "foil",
            WrapStrategy::FoilPan => "foil_pan",
        }
    }

    pub fn is_wrapped(self) -> bool {
        !matches!(self, WrapStrategy::Unwrapped)
    }
}

impl fmt::Display for WrapStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for WrapStrategy {
    type Err = SmokeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_key(s);
        let wrap = match normalized.as_str() {
            "none" | "naked" | "unwrapped" | "no_wrap" => WrapStrategy::Unwrapped,
            "butcher_paper" | "paper" | "pink_paper" => WrapStrategy::ButcherPaper,
            "foil" | "texas_crutch" => WrapStrategy::Foil,
            "foil_pan" | "pan" | "boat" => WrapStrategy::FoilPan,
            _ => {
                let keys: Vec<&str> = WrapStrategy::ALL.iter().map(|w| w.key()).collect();
                return Err(SmokeError::UnknownWrap {
                    name: s.to_string(),
                    suggestion: closest_key(&normalized, &keys).to_string(),
                });
            }
        };
        Ok(wrap)
    }
}

/// Catalog record for a wrap strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct WrapInfo {
    pub strategy: WrapStrategy,
    pub label: &'static str,
    /// Scales the whole adjusted cook duration.
    pub multiplier: f64,
    pub desc: &'static str,
}
