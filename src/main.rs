use bmi::config::Config;
use bmi::engine::{self, HeightInput, ResultView, WeightInput};
use bmi::form::{FormAction, FormState};
use bmi::units::{HeightUnit, WeightUnit};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bmi")]
#[command(about = "Body Mass Index calculator", long_about = None)]
struct Cli {
    /// Config file with default units and validation policy
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log conversions and validation decisions
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a BMI from height and weight
    Calc {
        /// Height in meters, or feet when --height-unit is "ft"
        height: String,

        /// Inches (only read when --height-unit is "ft")
        #[arg(short, long, default_value = "")]
        inches: String,

        /// Weight in the selected weight unit
        #[arg(short, long)]
        weight: String,

        /// Height unit: "m" or "ft" (default from config)
        #[arg(long)]
        height_unit: Option<HeightUnit>,

        /// Weight unit: "kg" or "lbs" (default from config)
        #[arg(long)]
        weight_unit: Option<WeightUnit>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a height to meters
    ConvertHeight {
        /// Height in meters, or feet when --unit is "ft"
        height: String,

        /// Inches (only read when --unit is "ft")
        #[arg(short, long, default_value = "")]
        inches: String,

        /// Height unit: "m" or "ft" (default from config)
        #[arg(short, long)]
        unit: Option<HeightUnit>,
    },

    /// Convert a weight to kilograms
    ConvertWeight {
        /// Weight in the selected unit
        weight: String,

        /// Weight unit: "kg" or "lbs" (default from config)
        #[arg(short, long)]
        unit: Option<WeightUnit>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let outcome = match cli.command {
        Commands::Calc {
            height,
            inches,
            weight,
            height_unit,
            weight_unit,
            json,
        } => calculate(&config, height, inches, weight, height_unit, weight_unit, json),
        Commands::ConvertHeight {
            height,
            inches,
            unit,
        } => convert_height(&config, &height, &inches, unit),
        Commands::ConvertWeight { weight, unit } => convert_weight(&config, &weight, unit),
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Config::load_from_file(path)?),
        None => Ok(Config::empty()),
    }
}

/// Drive the form the way a user would: fill in the fields, press calculate.
/// Returns whether a BMI came out; a rejection prints the form's error line.
fn calculate(
    config: &Config,
    height: String,
    inches: String,
    weight: String,
    height_unit: Option<HeightUnit>,
    weight_unit: Option<WeightUnit>,
    json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut actions = Vec::new();
    if let Some(unit) = height_unit {
        actions.push(FormAction::SetHeightUnit(unit));
    }
    if let Some(unit) = weight_unit {
        actions.push(FormAction::SetWeightUnit(unit));
    }

    let state = FormState::new(config).apply_all(actions);
    let height_actions = match state.height_unit {
        HeightUnit::Meters => vec![FormAction::SetHeightMeters(height)],
        HeightUnit::FeetInches => vec![
            FormAction::SetHeightFeet(height),
            FormAction::SetHeightInches(inches),
        ],
    };

    let state = state
        .apply_all(height_actions)
        .apply_all([FormAction::SetWeight(weight), FormAction::Calculate]);

    let result = state
        .result
        .as_ref()
        .ok_or("Calculation did not run")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ResultView::from(result))?);
    } else if result.is_ok() {
        println!("{}", engine::display_result(result));
    } else {
        eprintln!("{}", engine::display_result(result));
    }

    Ok(result.is_ok())
}

fn convert_height(
    config: &Config,
    height: &str,
    inches: &str,
    unit: Option<HeightUnit>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let input = match unit.unwrap_or(config.defaults.height_unit) {
        HeightUnit::Meters => HeightInput::metric(height),
        HeightUnit::FeetInches => HeightInput::imperial(height, inches),
    };

    let meters = engine::convert_height_to_meters(&input)
        .ok_or_else(|| format!("'{}' is not a valid height", height))?;
    println!("{} m", meters);
    Ok(true)
}

fn convert_weight(
    config: &Config,
    weight: &str,
    unit: Option<WeightUnit>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let input = WeightInput::new(weight, unit.unwrap_or(config.defaults.weight_unit));

    let kg = engine::convert_weight_to_kg(&input)
        .ok_or_else(|| format!("'{}' is not a valid weight", weight))?;
    println!("{} kg", kg);
    Ok(true)
}
