use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{MeatType, PlanInputs, WrapStrategy};

/// Smoke Timeline: work backward from dinner time to when the pellet grill needs lighting.
#[derive(Parser, Debug)]
#[command(name = "smoke_timeline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the saved settings JSON file.
    #[arg(short, long, default_value = "smoke_settings.json", global = true)]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a cook timeline from the saved settings plus any overrides.
    Plan(PlanArgs),

    /// List meat profiles and wrap strategies.
    Meats,

    /// Reset saved settings to a meat's defaults.
    Reset {
        /// Meat to reset to (defaults to the saved one).
        #[arg(long)]
        meat: Option<MeatType>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

/// Per-field overrides for the saved settings.
#[derive(Args, Debug, Default, Clone)]
pub struct PlanArgs {
    /// Meat type (brisket, pork_butt, ribs, turkey, chicken). Resets that meat's defaults.
    #[arg(long)]
    pub meat: Option<MeatType>,

    /// Weight in pounds.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Smoker set temperature in °F.
    #[arg(long)]
    pub temp: Option<u16>,

    /// Serve time, e.g. 2024-07-04T17:00.
    #[arg(long)]
    pub serve: Option<String>,

    /// Rest time in minutes.
    #[arg(long)]
    pub rest: Option<f64>,

    /// Prep time in minutes before the meat goes on.
    #[arg(long)]
    pub prep: Option<f64>,

    /// Wrap strategy (none, butcher_paper, foil, foil_pan).
    #[arg(long)]
    pub wrap: Option<WrapStrategy>,

    /// Internal temperature to wrap at, °F.
    #[arg(long)]
    pub wrap_temp: Option<u16>,

    /// Internal finish temperature, °F.
    #[arg(long)]
    pub target: Option<u16>,

    /// Turn spritzing on.
    #[arg(long, conflicts_with = "no_spritz")]
    pub spritz: bool,

    /// Turn spritzing off.
    #[arg(long)]
    pub no_spritz: bool,

    /// Minutes after the meat goes on before the first spritz.
    #[arg(long)]
    pub spritz_start: Option<f64>,

    /// Minutes between spritzes.
    #[arg(long)]
    pub spritz_interval: Option<f64>,

    /// Bird is spatchcocked (poultry only).
    #[arg(long)]
    pub spatchcock: Option<bool>,

    /// Brisket goes on fat side up.
    #[arg(long)]
    pub fat_side_up: Option<bool>,

    /// Walk through every field with prompts.
    #[arg(short, long)]
    pub interactive: bool,

    /// Pretend the current time is this (YYYY-MM-DDTHH:MM).
    #[arg(long)]
    pub now: Option<String>,

    /// Also write the timeline to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Print the plan as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl PlanArgs {
    /// Apply overrides. A meat change goes first so explicit values win over its defaults.
    pub fn apply(&self, inputs: &mut PlanInputs) {
        if let Some(meat) = self.meat {
            if meat != inputs.meat_type {
                inputs.select_meat(meat);
            }
        }
        if let Some(weight) = self.weight {
            inputs.weight = weight;
        }
        if let Some(temp) = self.temp {
            inputs.temp = temp;
        }
        if let Some(serve) = &self.serve {
            inputs.serve_time = serve.clone();
        }
        if let Some(rest) = self.rest {
            inputs.rest_time = rest;
        }
        if let Some(prep) = self.prep {
            inputs.prep_time = prep;
        }
        if let Some(wrap) = self.wrap {
            inputs.wrap_strategy = wrap;
        }
        if let Some(wrap_temp) = self.wrap_temp {
            inputs.wrap_temp = wrap_temp;
        }
        if let Some(target) = self.target {
            inputs.target_temp = target;
        }
        if self.spritz {
            inputs.spritz_enabled = true;
        }
        if self.no_spritz {
            inputs.spritz_enabled = false;
        }
        if let Some(start) = self.spritz_start {
            inputs.spritz_start = start;
        }
        if let Some(interval) = self.spritz_interval {
            inputs.spritz_interval = interval;
        }
        if let Some(spatchcock) = self.spatchcock {
            inputs.is_spatchcock = spatchcock;
        }
        if let Some(fat_side_up) = self.fat_side_up {
            inputs.fat_side_up = fat_side_up;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_overrides() {
        let cli = Cli::parse_from([
            "smoke_timeline",
            "plan",
            "--meat",
            "pork butt",
            "--weight",
            "9.5",
            "--wrap",
            "foil",
            "--no-spritz",
        ]);
        let Some(Command::Plan(args)) = cli.command else {
            panic!("expected plan command");
        };

        let mut inputs = PlanInputs::for_meat(MeatType::Brisket);
        args.apply(&mut inputs);
        assert_eq!(inputs.meat_type, MeatType::PorkButt);
        assert_eq!(inputs.weight, 9.5);
        assert_eq!(inputs.wrap_strategy, WrapStrategy::Foil);
        assert!(!inputs.spritz_enabled);
    }

    #[test]
    fn test_reselecting_same_meat_keeps_edits() {
        let args = PlanArgs {
            meat: Some(MeatType::Ribs),
            ..Default::default()
        };
        let mut inputs = PlanInputs::for_meat(MeatType::Ribs);
        inputs.weight = 6.0;
        args.apply(&mut inputs);
        assert_eq!(inputs.weight, 6.0);
    }

    #[test]
    fn test_default_command_is_plan() {
        let cli = Cli::parse_from(["smoke_timeline"]);
        assert!(cli.command.is_none());
        assert!(matches!(Command::default(), Command::Plan(_)));
        assert_eq!(cli.file, "smoke_settings.json");
    }
}
