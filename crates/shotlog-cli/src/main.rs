use std::{error::Error, fs, path::Path};

use clap::{Parser, Subcommand};
use shotlog_pipeline::{analyze_group, analyze_velocities, GroupAnalysisInput, VelocityInput};

/// Shooting-log analysis CLI: group dispersion and velocity statistics.
#[derive(Debug, Parser)]
#[command(author, version, about = "Group dispersion and velocity statistics")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute dispersion metrics for a shot group.
    Group {
        /// Path to JSON file containing a GroupAnalysisInput.
        #[arg(long)]
        input: String,
    },
    /// Compute summary statistics for a chronograph string.
    Velocity {
        /// Path to JSON file containing a VelocityInput.
        #[arg(long)]
        input: String,
    },
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let data = fs::read_to_string(path)?;
    let value = serde_json::from_str(&data)?;
    Ok(value)
}

fn run_group(input_path: &str) -> Result<String, Box<dyn Error>> {
    let input: GroupAnalysisInput = load_json_file(Path::new(input_path))?;
    let report = analyze_group(&input)?;
    Ok(serde_json::to_string_pretty(&report)?)
}

fn run_velocity(input_path: &str) -> Result<String, Box<dyn Error>> {
    let input: VelocityInput = load_json_file(Path::new(input_path))?;
    let stats = analyze_velocities(&input)?;
    Ok(serde_json::to_string_pretty(&stats)?)
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let json = match args.command {
        Command::Group { input } => run_group(&input)?,
        Command::Velocity { input } => run_velocity(&input)?,
    };
    println!("{}", json);
    Ok(())
}
