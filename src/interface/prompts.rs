use dialoguer::{Confirm, Input, Select};

use crate::catalog::{meat_profile, supported_temps, wrap_info};
use crate::error::{Result, SmokeError};
use crate::models::{MeatType, PlanInputs, WrapStrategy};
use crate::planner::parse_serve_time;

/// Prompt for the meat type, defaulting to the current one.
pub fn prompt_meat(current: MeatType) -> Result<MeatType> {
    let labels: Vec<&str> = MeatType::ALL
        .iter()
        .map(|m| meat_profile(*m).label)
        .collect();
    let default = MeatType::ALL.iter().position(|m| *m == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("What are you smoking?")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(MeatType::ALL[selection])
}

/// Prompt for a positive number (pounds, minutes).
pub fn prompt_number(prompt: &str, current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(format!("{}", current))
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| SmokeError::InvalidInput(format!("'{}' is not a number", input)))?;

    if value < 0.0 {
        return Err(SmokeError::InvalidInput(format!(
            "{} cannot be negative",
            prompt
        )));
    }
    Ok(value)
}

/// Prompt for a temperature in °F.
pub fn prompt_degrees(prompt: &str, current: u16) -> Result<u16> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(current.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| SmokeError::InvalidInput(format!("'{}' is not a temperature", input)))
}

/// Prompt for the smoker set temperature among those the meat has data for.
pub fn prompt_smoker_temp(meat: MeatType, current: u16) -> Result<u16> {
    let temps = supported_temps(meat);
    let options: Vec<String> = temps.iter().map(|t| format!("{}°F", t)).collect();
    let default = temps.iter().position(|t| *t == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Smoker set temperature")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(temps[selection])
}

/// Prompt for the serve time, re-asking until it parses.
pub fn prompt_serve_time(current: &str) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt("Serve at (YYYY-MM-DDTHH:MM)");
    if !current.trim().is_empty() {
        input = input.default(current.to_string());
    }

    let value = input
        .validate_with(|s: &String| -> std::result::Result<(), String> {
            parse_serve_time(s).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;

    Ok(value.trim().to_string())
}

pub fn prompt_wrap(current: WrapStrategy) -> Result<WrapStrategy> {
    let options: Vec<String> = WrapStrategy::ALL
        .iter()
        .map(|w| {
            let info = wrap_info(*w);
            format!("{} - {}", info.label, info.desc)
        })
        .collect();
    let default = WrapStrategy::ALL
        .iter()
        .position(|w| *w == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Wrap strategy")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(WrapStrategy::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk through every field, starting from the current values.
///
/// Choosing a different meat resets its defaults before the remaining questions.
pub fn collect_plan_inputs(inputs: &mut PlanInputs) -> Result<()> {
    let meat = prompt_meat(inputs.meat_type)?;
    if meat != inputs.meat_type {
        inputs.select_meat(meat);
    }

    inputs.weight = prompt_number("Weight (lb)", inputs.weight)?;
    inputs.temp = prompt_smoker_temp(meat, inputs.temp)?;
    inputs.serve_time = prompt_serve_time(&inputs.serve_time)?;
    inputs.rest_time = prompt_number("Rest (minutes)", inputs.rest_time)?;
    inputs.prep_time = prompt_number("Prep before meat goes on (minutes)", inputs.prep_time)?;

    inputs.wrap_strategy = prompt_wrap(inputs.wrap_strategy)?;
    if inputs.wrap_strategy.is_wrapped() {
        inputs.wrap_temp = prompt_degrees("Wrap at internal temp (°F)", inputs.wrap_temp)?;
    }
    inputs.target_temp = prompt_degrees("Finish internal temp (°F)", inputs.target_temp)?;

    inputs.spritz_enabled = prompt_yes_no("Spritz during the cook?", inputs.spritz_enabled)?;
    if inputs.spritz_enabled {
        inputs.spritz_start =
            prompt_number("First spritz after (minutes)", inputs.spritz_start)?;
        inputs.spritz_interval =
            prompt_number("Spritz every (minutes)", inputs.spritz_interval)?;
    }

    if meat.supports_spatchcock() {
        inputs.is_spatchcock = prompt_yes_no("Spatchcocked?", inputs.is_spatchcock)?;
    }
    if meat.supports_fat_side() {
        inputs.fat_side_up = prompt_yes_no("Fat side up?", inputs.fat_side_up)?;
    }

    Ok(())
}
