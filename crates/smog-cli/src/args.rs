//! Command-line argument definitions for the Smog CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the stepping loop, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Smog layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input graph file (TOML)
    #[arg(help = "Path to the input graph file")]
    pub input: String,

    /// Path to the output layout file (TOML)
    #[arg(short, long, default_value = "layout.toml")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Time step passed to every simulation step, overrides the configuration
    #[arg(long)]
    pub time_step: Option<f64>,

    /// Maximum number of steps, overrides the configuration
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
