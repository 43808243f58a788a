use serde::{Deserialize, Serialize};

use crate::catalog::meat_profile;
use crate::error::{Result, SmokeError};
use crate::models::{MeatType, WrapStrategy};
use crate::planner::constants::DEFAULT_PREP_MINUTES;

/// The user's cook configuration. This is what gets persisted between runs.
///
/// Minutes are kept as `f64` so out-of-range values propagate through the
/// engine arithmetically instead of being rejected there; see [`PlanInputs::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanInputs {
    pub meat_type: MeatType,

    /// Pounds.
    pub weight: f64,

    /// Smoker set temperature, °F.
    pub temp: u16,

    /// Minutes between pulling the meat and serving.
    pub rest_time: f64,

    /// Target serving moment, `YYYY-MM-DDTHH:MM`. Empty means "not chosen yet".
    #[serde(default)]
    pub serve_time: String,

    /// Minutes of trimming/seasoning/preheat before the meat goes on.
    pub prep_time: f64,

    pub wrap_strategy: WrapStrategy,

    /// Internal temperature at which the wrap goes on, °F.
    pub wrap_temp: u16,

    /// Internal finish temperature, °F.
    pub target_temp: u16,

    pub spritz_enabled: bool,

    /// Minutes after the meat goes on before the first spritz.
    pub spritz_start: f64,

    /// Minutes between spritzes.
    pub spritz_interval: f64,

    #[serde(default)]
    pub is_spatchcock: bool,

    #[serde(default)]
    pub fat_side_up: bool,
}

impl PlanInputs {
    /// Fresh configuration seeded entirely from the profile of `meat`.
    pub fn for_meat(meat: MeatType) -> Self {
        let profile = meat_profile(meat);
        Self {
            meat_type: meat,
            weight: profile.default_weight,
            temp: profile.default_smoker_temp,
            rest_time: profile.rest.default,
            serve_time: String::new(),
            prep_time: DEFAULT_PREP_MINUTES,
            wrap_strategy: profile.default_wrap,
            wrap_temp: profile.default_wrap_temp,
            target_temp: profile.default_target_temp,
            spritz_enabled: profile.spritz.recommended,
            spritz_start: profile.spritz.start_after,
            spritz_interval: profile.spritz.interval,
            is_spatchcock: false,
            fat_side_up: false,
        }
    }

    /// Switch to a different meat, resetting every meat-specific field to
    /// that meat's defaults. Serve time and prep time carry over.
    ///
    /// The set temperature is kept when the new profile supports it.
    pub fn select_meat(&mut self, meat: MeatType) {
        let profile = meat_profile(meat);

        self.meat_type = meat;
        self.weight = profile.default_weight;
        self.rest_time = profile.rest.default;
        self.wrap_strategy = profile.default_wrap;
        self.wrap_temp = profile.default_wrap_temp;
        self.target_temp = profile.default_target_temp;
        self.spritz_enabled = profile.spritz.recommended;
        self.spritz_start = profile.spritz.start_after;
        self.spritz_interval = profile.spritz.interval;

        if !profile.supports_temp(self.temp) {
            self.temp = profile.default_smoker_temp;
        }
        if !meat.supports_spatchcock() {
            self.is_spatchcock = false;
        }
        if !meat.supports_fat_side() {
            self.fat_side_up = false;
        }
    }

    pub fn has_serve_time(&self) -> bool {
        !self.serve_time.trim().is_empty()
    }

    /// Physical-range checks applied at the edge, before the engine runs.
    ///
    /// A zero weight passes: it means "not entered yet" and yields no plan.
    pub fn validate(&self) -> Result<()> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(SmokeError::InvalidInput(format!(
                "weight cannot be negative, got {}",
                self.weight
            )));
        }
        if self.rest_time < 0.0 {
            return Err(SmokeError::InvalidInput(
                "rest time cannot be negative".to_string(),
            ));
        }
        if self.prep_time < 0.0 {
            return Err(SmokeError::InvalidInput(
                "prep time cannot be negative".to_string(),
            ));
        }
        if self.spritz_enabled {
            if self.spritz_interval <= 0.0 {
                return Err(SmokeError::InvalidInput(
                    "spritz interval must be greater than zero".to_string(),
                ));
            }
            if self.spritz_start < 0.0 {
                return Err(SmokeError::InvalidInput(
                    "spritz start cannot be negative".to_string(),
                ));
            }
        }
        if self.wrap_strategy.is_wrapped() && self.wrap_temp >= self.target_temp {
            return Err(SmokeError::InvalidInput(format!(
                "wrap temp ({}°F) must be below target temp ({}°F)",
                self.wrap_temp, self.target_temp
            )));
        }
        Ok(())
    }
}

impl Default for PlanInputs {
    fn default() -> Self {
        Self::for_meat(MeatType::Brisket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_meat_resets_profile_fields() {
        let mut inputs = PlanInputs::for_meat(MeatType::Brisket);
        inputs.weight = 17.5;
        inputs.rest_time = 200.0;
        inputs.target_temp = 190;
        inputs.spritz_start = 5.0;
        inputs.spritz_interval = 5.0;
        inputs.serve_time = "2024-07-04T17:00".to_string();
        inputs.prep_time = 90.0;
        inputs.fat_side_up = true;

        inputs.select_meat(MeatType::PorkButt);
        let profile = meat_profile(MeatType::PorkButt);

        assert_eq!(inputs.meat_type, MeatType::PorkButt);
        assert_eq!(inputs.weight, profile.default_weight);
        assert_eq!(inputs.rest_time, profile.rest.default);
        assert_eq!(inputs.target_temp, profile.default_target_temp);
        assert_eq!(inputs.spritz_start, profile.spritz.start_after);
        assert_eq!(inputs.spritz_interval, profile.spritz.interval);
        assert_eq!(inputs.wrap_strategy, profile.default_wrap);
        assert!(!inputs.fat_side_up);

        // Not meat-specific
        assert_eq!(inputs.serve_time, "2024-07-04T17:00");
        assert_eq!(inputs.prep_time, 90.0);
    }

    #[test]
    fn test_select_meat_replaces_unsupported_temp() {
        let mut inputs = PlanInputs::for_meat(MeatType::Chicken);
        inputs.temp = 325;
        inputs.is_spatchcock = true;

        inputs.select_meat(MeatType::Ribs);
        assert_eq!(inputs.temp, meat_profile(MeatType::Ribs).default_smoker_temp);
        assert!(!inputs.is_spatchcock);

        inputs.temp = 225;
        inputs.select_meat(MeatType::Turkey);
        assert_eq!(inputs.temp, 225);
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let mut inputs = PlanInputs::for_meat(MeatType::Ribs);
        assert!(inputs.validate().is_ok());

        inputs.weight = -2.0;
        assert!(inputs.validate().is_err());

        let mut inputs = PlanInputs::for_meat(MeatType::Ribs);
        inputs.spritz_enabled = true;
        inputs.spritz_interval = 0.0;
        assert!(inputs.validate().is_err());

        let mut inputs = PlanInputs::for_meat(MeatType::Brisket);
        inputs.wrap_temp = 210;
        assert!(inputs.validate().is_err());

        inputs.wrap_strategy = WrapStrategy::Unwrapped;
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_zero_weight_is_not_a_validation_error() {
        let mut inputs = PlanInputs::for_meat(MeatType::Chicken);
        inputs.serve_time = "2024-01-01T18:00".to_string();
        inputs.weight = 0.0;
        assert!(inputs.validate().is_ok());

        let now = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(crate::planner::compute_plan(&inputs, now).unwrap().is_none());
    }

    #[test]
    fn test_missing_technique_flags_default_to_false() {
        let json = r#"{
            "meat_type": "turkey", "weight": 12.0, "temp": 275, "rest_time": 30.0,
            "serve_time": "", "prep_time": 45.0, "wrap_strategy": "none",
            "wrap_temp": 160, "target_temp": 165, "spritz_enabled": false,
            "spritz_start": 60.0, "spritz_interval": 45.0
        }"#;
        let inputs: PlanInputs = serde_json::from_str(json).unwrap();
        assert!(!inputs.is_spatchcock);
        assert!(!inputs.fat_side_up);
        assert!(!inputs.has_serve_time());
    }
}
