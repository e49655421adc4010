//! Command-line wrapper around [`rover_runner::run`].
//!
//! Reads an instruction set from a file or stdin and prints each rover's resting
//! position. When a run fails, the rovers that finished are still printed before
//! the error is reported.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: log filter used when neither `--debug` nor `--verbose` is given

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rover_runner::{Mission, run};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Instruction sets replayed by `--demo`.
const DEMO_INSTRUCTIONS: &[(&str, &str)] = &[
    ("single rover", "5 5\n0 0 N\nMMMMMRMMMMM"),
    (
        "two rovers",
        "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM",
    ),
    (
        "second rover leaves the surface",
        "5 5\n0 0 N\nMMMMMRMMMMM\n5 5 N\nMMMMM",
    ),
];

/// Rover runner - replays rover instructions across a bounded plateau
#[derive(Parser, Debug)]
#[command(name = "rover-runner")]
#[command(version, about, long_about = None)]
struct Args {
    /// Instruction file to run (`-` or omitted reads stdin)
    input: Option<PathBuf>,

    /// Run the built-in example instruction sets instead of reading input
    #[arg(long, conflicts_with = "input")]
    demo: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Terminal filter: --debug > --verbose > RUST_LOG env > default "warn"
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else if args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();

    if args.demo {
        for (name, instructions) in DEMO_INSTRUCTIONS {
            info!(example = *name, "running demo");
            let mission = run(instructions);
            print_mission(&mission, args.format)?;
            if let Some(error) = &mission.error {
                eprintln!("{name}: {error}");
            }
        }
        return Ok(());
    }

    let instructions = read_input(args.input.as_ref())?;
    let mission = run(&instructions);
    info!(
        resting = mission.rovers.len(),
        complete = mission.is_complete(),
        "run finished"
    );
    print_mission(&mission, args.format)?;

    mission
        .into_result()
        .map(|_| ())
        .context("failed while running instructions")
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("cannot read instructions from {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read instructions from stdin")?;
            Ok(buf)
        }
    }
}

fn print_mission(mission: &Mission, format: Format) -> Result<()> {
    match format {
        Format::Text => {
            let output = mission.output();
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Format::Json => {
            let json = serde_json::to_string(&mission.report())
                .context("cannot serialize run report")?;
            println!("{json}");
        }
    }
    Ok(())
}
