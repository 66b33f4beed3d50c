use anglemap::{map_angles, output_path, DirectionMode};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Remap wrapped camera angles onto a continuous 0-360 scale"
)]
struct Cli {
    /// Camera pose file (tab-delimited, comma fallback).
    camera: PathBuf,
    /// Actuator command file (comma-delimited).
    actuator: PathBuf,
    /// The recording used the offset camera mounting.
    #[arg(long)]
    offset: bool,
    /// Direction mode selector: 1 = anticlockwise, 2 = clockwise, 3 = mixed.
    /// Selector 4 is reserved and rejected. Omitted: detect from the
    /// actuator sequence.
    #[arg(short, long, value_name = "MODE")]
    mode: Option<i64>,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Serialize)]
struct Summary {
    mode_used: i64,
    output_path: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("anglemap=info".parse()?))
            .with_target(false)
            .init();
    }

    let mode = cli.mode.map(DirectionMode::from_selector).transpose()?;
    let mode_used = map_angles(&cli.camera, &cli.actuator, cli.offset, mode)?;

    let summary = Summary {
        mode_used: mode_used.selector(),
        output_path: output_path(&cli.camera),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
