//! # Quadsim Runtime
//!
//! Entry point for the episode-driver binary. Builds the selected task,
//! drives it with an agent for the requested number of episodes, and writes
//! per-episode reward and per-timestep trajectory logs.

mod agent;
mod app;
mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = cli::Args::parse();
    app::run(&args)
}
