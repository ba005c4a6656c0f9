//! Configuration types for the force-based layout.
//!
//! All types implement [`serde::Deserialize`] so they can be embedded in a
//! caller's configuration file. Missing fields fall back to their defaults.
//!
//! # Example
//!
//! ```
//! # use smog::config::LayoutConfig;
//! let config = LayoutConfig::default();
//! assert_eq!(config.threshold(), 0.1);
//! assert_eq!(config.damping(), 0.9);
//! assert!(config.forces().repulsion());
//! ```

use serde::Deserialize;

/// Parameters of a [`ForceLayout`](crate::ForceLayout), fixed at construction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Kinetic energy at or below which the simulation is settled.
    threshold: f64,

    /// Global velocity damping applied every step.
    damping: f64,

    /// Clockwise bounds (1 to 4 values), enforced when they form a valid rectangle.
    bounds: Option<Vec<f64>>,

    /// Seed of the layout's random source. Unseeded layouts draw from the OS.
    seed: Option<u64>,

    /// Which forces [`ForceLayout::from_config`](crate::ForceLayout::from_config) registers.
    forces: ForcesConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            damping: 0.9,
            bounds: None,
            seed: None,
            forces: ForcesConfig::default(),
        }
    }
}

impl LayoutConfig {
    /// Sets the convergence threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the global damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Sets the clockwise bounds.
    pub fn with_bounds(mut self, bounds: Vec<f64>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the force selection.
    pub fn with_forces(mut self, forces: ForcesConfig) -> Self {
        self.forces = forces;
        self
    }

    /// Returns the convergence threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the global damping factor.
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Returns the configured clockwise bounds, if any.
    pub fn bounds(&self) -> Option<&[f64]> {
        self.bounds.as_deref()
    }

    /// Returns the random seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the force selection.
    pub fn forces(&self) -> &ForcesConfig {
        &self.forces
    }
}

/// Selection of the built-in forces and their constants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForcesConfig {
    /// Register the pairwise [`Repulsion`](crate::force::Repulsion).
    repulsion: bool,

    /// Coulomb constant of the repulsion (`ke·q1·q2`).
    repulsion_constant: f64,

    /// Register the [`SpringForce`](crate::force::SpringForce).
    spring: bool,
}

impl Default for ForcesConfig {
    fn default() -> Self {
        Self {
            repulsion: true,
            repulsion_constant: crate::force::Repulsion::DEFAULT_CONSTANT,
            spring: true,
        }
    }
}

impl ForcesConfig {
    /// Creates a force selection.
    pub fn new(repulsion: bool, repulsion_constant: f64, spring: bool) -> Self {
        Self {
            repulsion,
            repulsion_constant,
            spring,
        }
    }

    /// Whether repulsion is registered.
    pub fn repulsion(&self) -> bool {
        self.repulsion
    }

    /// Repulsion constant.
    pub fn repulsion_constant(&self) -> f64 {
        self.repulsion_constant
    }

    /// Whether the spring force is registered.
    pub fn spring(&self) -> bool {
        self.spring
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::default();
        assert_approx_eq!(f64, config.threshold(), 0.1);
        assert_approx_eq!(f64, config.damping(), 0.9);
        assert!(config.bounds().is_none());
        assert!(config.seed().is_none());
        assert!(config.forces().spring());
        assert_approx_eq!(f64, config.forces().repulsion_constant(), 0.05);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: LayoutConfig = toml::from_str(
            r#"
            threshold = 0.01
            seed = 42
            bounds = [10.0, 10.0, -10.0, -10.0]

            [forces]
            spring = false
            "#,
        )
        .expect("valid layout config");

        assert_approx_eq!(f64, config.threshold(), 0.01);
        assert_approx_eq!(f64, config.damping(), 0.9);
        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.bounds(), Some(&[10.0, 10.0, -10.0, -10.0][..]));
        assert!(config.forces().repulsion());
        assert!(!config.forces().spring());
    }

    #[test]
    fn test_deserialize_rejects_unknown_field() {
        let result: Result<LayoutConfig, _> = toml::from_str("gravity = 1.0");
        assert!(result.is_err());
    }
}
