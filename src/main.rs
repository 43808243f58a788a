use std::fs::File;

use clap::Parser;

use smoke_timeline_rs::cli::{Cli, Command, PlanArgs};
use smoke_timeline_rs::clock::{Clock, FixedClock, SystemClock};
use smoke_timeline_rs::error::Result;
use smoke_timeline_rs::interface::{
    collect_plan_inputs, display_catalog, display_no_plan, display_plan, write_timeline_csv,
};
use smoke_timeline_rs::models::MeatType;
use smoke_timeline_rs::planner::parse_serve_time;
use smoke_timeline_rs::state::{JsonSettingsStore, PlanSession};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(&cli.file, &args),
        Command::Meats => {
            display_catalog();
            Ok(())
        }
        Command::Reset { meat } => cmd_reset(&cli.file, meat),
    }
}

/// Build and show a plan from saved settings plus overrides.
fn cmd_plan(file_path: &str, args: &PlanArgs) -> Result<()> {
    let now = match &args.now {
        Some(raw) => parse_serve_time(raw)?,
        None => SystemClock.now(),
    };

    let store = JsonSettingsStore::new(file_path);
    let mut session = PlanSession::open(store, FixedClock(now));

    let mut inputs = session.inputs().clone();
    args.apply(&mut inputs);
    if args.interactive {
        collect_plan_inputs(&mut inputs)?;
    }
    inputs.validate()?;

    session.update(move |current| *current = inputs)?;

    let Some(outcome) = session.outcome() else {
        display_no_plan(session.inputs());
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        display_plan(outcome, session.inputs());
    }

    if let Some(path) = &args.csv {
        let file = File::create(path)?;
        write_timeline_csv(file, &outcome.plan)?;
        println!("Timeline written to {}", path.display());
    }

    Ok(())
}

/// Reset saved settings to a meat's defaults.
fn cmd_reset(file_path: &str, meat: Option<MeatType>) -> Result<()> {
    let mut session = PlanSession::open(JsonSettingsStore::new(file_path), SystemClock);
    let meat = meat.unwrap_or(session.inputs().meat_type);
    session.reset(meat)?;

    println!(
        "Settings in {} reset to {} defaults.",
        session.store().path().display(),
        meat
    );
    Ok(())
}
