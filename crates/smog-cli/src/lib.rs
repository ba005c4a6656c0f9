//! CLI logic for the Smog layout tool.
//!
//! Reads a graph from a TOML file, runs the force-directed engine until it
//! reports that no further steps are needed (or the iteration cap is hit),
//! and writes the final node positions as TOML.

pub mod config;
pub mod error;
pub mod error_adapter;
pub mod graph_file;

mod args;

pub use args::Args;

use std::fs;

use log::{info, warn};

use smog::{ForceLayout, GraphLayout};

use config::{AppConfig, RunConfig};
use error::CliError;
use graph_file::{GraphFile, LayoutOutput, NodePosition};

/// Run the Smog CLI application
///
/// This function loads the configuration, lays out the input graph and
/// writes the resulting positions to the output file.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed graph files
/// - Graphs the engine rejects
pub fn run(args: &Args) -> Result<LayoutOutput, CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing graph"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(time_step) = args.time_step {
        app_config.run_mut().set_time_step(time_step);
    }
    if let Some(max_iterations) = args.max_iterations {
        app_config.run_mut().set_max_iterations(max_iterations);
    }
    app_config.validate()?;

    let source = fs::read_to_string(&args.input)?;
    let graph = GraphFile::parse(&source)?;

    let output = lay_out(graph, &app_config)?;
    fs::write(&args.output, output.to_toml()?)?;

    info!(
        output_file = args.output,
        iterations = output.iterations(),
        converged = output.converged();
        "Layout exported successfully"
    );

    Ok(output)
}

/// Lays out a parsed graph according to `config`.
pub fn lay_out(graph: GraphFile, config: &AppConfig) -> Result<LayoutOutput, CliError> {
    let (nodes, edges) = graph.into_parts();

    let mut layout = ForceLayout::from_config(config.layout());
    layout.init(nodes, edges)?;

    let (iterations, converged) = drive(&mut layout, config.run());

    let positions = layout
        .positions()
        .map(|(id, position)| NodePosition::new(*id, position))
        .collect();

    Ok(LayoutOutput::new(
        iterations,
        converged,
        layout.kinetic_energy(),
        positions,
    ))
}

/// Steps `layout` until it reports no further steps are needed or the
/// iteration cap is reached, then terminates it.
///
/// Returns the number of steps taken and whether the layout converged.
pub fn drive<N, E, L>(layout: &mut L, run: &RunConfig) -> (usize, bool)
where
    L: GraphLayout<N, E>,
{
    let mut iterations = 0;
    let mut converged = false;

    while iterations < run.max_iterations() {
        iterations += 1;
        if !layout.step(run.time_step()) {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(
            iterations,
            time_step = run.time_step();
            "Iteration cap reached before the layout settled"
        );
    }

    layout.terminate();
    (iterations, converged)
}
