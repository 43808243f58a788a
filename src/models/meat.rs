use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::SmokeError;

/// The cuts the planner knows how to schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeatType {
    Brisket,
    PorkButt,
    Ribs,
    Turkey,
    Chicken,
}

impl MeatType {
    pub const ALL: [MeatType; 5] = [
        MeatType::Brisket,
        MeatType::PorkButt,
        MeatType::Ribs,
        MeatType::Turkey,
        MeatType::Chicken,
    ];

    /// Stable key used in settings files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            MeatType::Brisket => "brisket",
            MeatType::PorkButt => "pork_butt",
            MeatType::Ribs => "ribs",
            MeatType::Turkey => "turkey",
            MeatType::Chicken => "chicken",
        }
    }

    pub fn is_poultry(self) -> bool {
        match self {
            MeatType::Turkey | MeatType::Chicken => true,
            MeatType::Brisket | MeatType::PorkButt | MeatType::Ribs => false,
        }
    }

    /// Spatchcocking only makes sense for birds.
    pub fn supports_spatchcock(self) -> bool {
        self.is_poultry()
    }

    /// Fat-side orientation is only tracked for brisket.
    pub fn supports_fat_side(self) -> bool {
        matches!(self, MeatType::Brisket)
    }
}

impl fmt::Display for MeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MeatType {
    type Err = SmokeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_key(s);
        let meat = match normalized.as_str() {
            "brisket" | "beef_brisket" | "packer" => MeatType::Brisket,
            "pork_butt" | "butt" | "pork_shoulder" | "boston_butt" | "pulled_pork" => {
                MeatType::PorkButt
            }
            "ribs" | "spare_ribs" | "spareribs" | "baby_back_ribs" | "rack" => MeatType::Ribs,
            "turkey" | "whole_turkey" => MeatType::Turkey,
            "chicken" | "whole_chicken" | "bird" => MeatType::Chicken,
            _ => {
                let keys: Vec<&str> = MeatType::ALL.iter().map(|m| m.key()).collect();
                return Err(SmokeError::UnknownMeat {
                    name: s.to_string(),
                    suggestion: closest_key(&normalized, &keys).to_string(),
                });
            }
        };
        Ok(meat)
    }
}

/// Lowercase and fold spaces/dashes into underscores.
pub(crate) fn normalize_key(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

/// Best Jaro-Winkler match among `candidates`.
pub(crate) fn closest_key<'a>(input: &str, candidates: &[&'a str]) -> &'a str {
    candidates
        .iter()
        .map(|c| (*c, jaro_winkler(input, c)))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
        .unwrap_or("")
}

/// Hours of cook time per pound at one set temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempRate {
    pub temp: u16,
    pub rate: f64,
}

/// Rest window in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestBounds {
    pub default: f64,
    pub min: f64,
    pub max_hold: f64,
}

/// Default basting policy for a cut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpritzDefaults {
    pub recommended: bool,
    /// Minutes after the meat goes on.
    pub start_after: f64,
    /// Minutes between applications.
    pub interval: f64,
    pub liquid: &'static str,
}

/// How doneness is judged at the end of the cook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishCue {
    /// Pull at the target internal temperature.
    Temperature,
    /// Pull when the probe slides in with no resistance.
    ProbeTender,
}

/// Static cook characteristics for one meat type.
#[derive(Debug, Clone, PartialEq)]
pub struct MeatProfile {
    pub meat: MeatType,
    pub label: &'static str,
    pub default_weight: f64,
    pub temp_profiles: &'static [TempRate],
    pub rest: RestBounds,
    /// Fraction of the cook at which the stall nominally sets in.
    pub stall_factor: f64,
    pub default_target_temp: u16,
    pub default_smoker_temp: u16,
    pub default_wrap: super::WrapStrategy,
    pub default_wrap_temp: u16,
    pub spritz: SpritzDefaults,
    pub finish_cue: FinishCue,
}

impl MeatProfile {
    /// Cook rate at `temp`, if the profile defines one.
    pub fn rate_at(&self, temp: u16) -> Option<f64> {
        self.temp_profiles
            .iter()
            .find(|t| t.temp == temp)
            .map(|t| t.rate)
    }

    pub fn supports_temp(&self, temp: u16) -> bool {
        self.rate_at(temp).is_some()
    }

    pub fn supported_temps(&self) -> Vec<u16> {
        self.temp_profiles.iter().map(|t| t.temp).collect()
    }
}
