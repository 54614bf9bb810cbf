use std::path::PathBuf;

use clap::Parser;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "homescreen-layout")]
#[command(about = "Compute the home screen empty state layout for a JSON scene")]
pub struct Args {
    /// Path to a scene JSON file (reads from stdin if not provided)
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Proposed width, overriding the scene
    #[arg(short, long)]
    pub width: Option<f32>,

    /// Bounds height, overriding the scene (defaults to the fitted height)
    #[arg(long)]
    pub height: Option<f32>,

    /// Spacing between children, overriding the scene config
    #[arg(long)]
    pub spacing: Option<f32>,

    /// Minimum fitted height, overriding the scene config
    #[arg(long)]
    pub min_height: Option<f32>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
