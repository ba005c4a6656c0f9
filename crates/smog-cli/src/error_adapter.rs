//! Error adapter for converting [`CliError`] to miette diagnostics.
//!
//! This module provides the bridge between the CLI's standard error types
//! and miette's rich diagnostic formatting.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use smog::SmogError;

use crate::error::{CliError, ConfigError};

/// Adapter for a single CLI error.
///
/// Wraps a [`CliError`] and implements [`MietteDiagnostic`] so that every
/// failure carries a stable code and, where one applies, a help message.
pub struct ErrorAdapter<'a> {
    err: &'a CliError,
}

impl<'a> ErrorAdapter<'a> {
    /// Create a new error adapter.
    pub fn new(err: &'a CliError) -> Self {
        Self { err }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for ErrorAdapter<'_> {}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            CliError::Io(_) => "smog::io",
            CliError::Config(_) => "smog::config",
            CliError::Graph(_) => "smog::graph",
            CliError::Layout(_) => "smog::layout",
            CliError::Output(_) => "smog::output",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.err {
            CliError::Config(ConfigError::MissingFile(_)) => {
                "check the path passed with --config"
            }
            CliError::Graph(_) => {
                "a graph file needs a `nodes` list and optional [[edges]] tables with `source` and `target`"
            }
            CliError::Layout(SmogError::UnknownNode { .. }) => {
                "every edge endpoint must appear in `nodes`"
            }
            CliError::Layout(SmogError::DuplicateNode { .. }) => {
                "node names must be unique"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}
