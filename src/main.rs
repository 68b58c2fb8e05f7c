use gastrace::{run_2d, Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Run without a window and print the session report to stdout.
    #[arg(long)]
    headless: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.headless {
        // In windowed mode bevy's LogPlugin owns the logging stack
        env_logger::init();
        run_headless(scenario);
    } else {
        run_2d(scenario);
    }

    Ok(())
}

/// Drive the core to completion with a fixed 60 Hz frame delta and print
/// the tracked-particle report.
fn run_headless(mut scenario: Scenario) {
    const DT: f64 = 1.0 / 60.0;

    let Scenario {
        boundary,
        gas,
        stepper,
        stats,
        ..
    } = &mut scenario;

    while !stepper.finished() {
        stepper.step(gas, boundary, stats, DT);
    }

    println!("{}", stats.report());
}
