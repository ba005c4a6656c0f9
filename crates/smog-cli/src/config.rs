//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;

use smog::config::LayoutConfig;

use crate::error::ConfigError;

/// Top-level CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Engine parameters.
    #[serde(default)]
    layout: LayoutConfig,

    /// Stepping loop parameters.
    #[serde(default)]
    run: RunConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`].
    pub fn new(layout: LayoutConfig, run: RunConfig) -> Self {
        Self { layout, run }
    }

    /// Returns the engine configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the stepping loop configuration.
    pub fn run(&self) -> &RunConfig {
        &self.run
    }

    /// Returns a mutable reference to the stepping loop configuration.
    pub fn run_mut(&mut self) -> &mut RunConfig {
        &mut self.run
    }

    /// Rejects values the engine cannot step with.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.run.time_step.is_nan() || self.run.time_step < 0.0 {
            return Err(ConfigError::Validation(format!(
                "time_step must be a non-negative number, got {}",
                self.run.time_step
            )));
        }
        if self.layout.damping().is_nan() || self.layout.damping() < 0.0 {
            return Err(ConfigError::Validation(format!(
                "damping must be a non-negative number, got {}",
                self.layout.damping()
            )));
        }
        Ok(())
    }
}

/// Parameters of the driving loop.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Time step passed to every call of `step`.
    time_step: f64,

    /// Steps after which the driver gives up waiting for convergence.
    max_iterations: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0,
            max_iterations: 1000,
        }
    }
}

impl RunConfig {
    /// Creates a new [`RunConfig`].
    pub fn new(time_step: f64, max_iterations: usize) -> Self {
        Self {
            time_step,
            max_iterations,
        }
    }

    /// Returns the time step.
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Returns the iteration cap.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Overrides the time step.
    pub fn set_time_step(&mut self, time_step: f64) {
        self.time_step = time_step;
    }

    /// Overrides the iteration cap.
    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        self.max_iterations = max_iterations;
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (smog/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or fails validation
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("smog/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "smog", "smog") {
        let system_config: PathBuf = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|err| ConfigError::Parse(err.to_string()))?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [layout]
            threshold = 0.05
            damping = 0.8
            seed = 3

            [layout.forces]
            repulsion_constant = 0.1

            [run]
            time_step = 0.5
            max_iterations = 200
            "#,
        )
        .unwrap();

        assert_approx_eq!(f64, config.layout().threshold(), 0.05);
        assert_approx_eq!(f64, config.layout().damping(), 0.8);
        assert_eq!(config.layout().seed(), Some(3));
        assert_approx_eq!(f64, config.layout().forces().repulsion_constant(), 0.1);
        assert_approx_eq!(f64, config.run().time_step(), 0.5);
        assert_eq!(config.run().max_iterations(), 200);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_approx_eq!(f64, config.run().time_step(), 1.0);
        assert_eq!(config.run().max_iterations(), 1000);
        assert_approx_eq!(f64, config.layout().threshold(), 0.1);
    }

    #[test]
    fn test_negative_time_step_is_rejected() {
        let err = parse_config("[run]\ntime_step = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = parse_config("[run\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempdir().unwrap();
        let err = load_config(Some(dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(_)));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[run]\nmax_iterations = 5\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.run().max_iterations(), 5);
    }
}
