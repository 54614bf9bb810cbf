//! Command-line driver for the home screen layout engine.
//!
//! Reads a JSON scene, lays it out, and prints the placements as JSON.

mod cli;
mod logging;
mod report;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use homescreen_layout::Scene;

use crate::cli::Args;
use crate::logging::setup_logging;
use crate::report::{build_report, render, Overrides};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let scene = load_scene(args.scene.as_deref())?;
    let report = build_report(&scene, Overrides::from(&args))?;
    println!("{}", render(&report, args.compact)?);
    Ok(())
}

fn load_scene(path: Option<&Path>) -> Result<Scene> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene '{}'", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read scene from stdin")?;
            buf
        }
    };
    tracing::debug!(bytes = json.len(), "loaded scene");
    Scene::from_json(&json).context("failed to parse scene")
}
