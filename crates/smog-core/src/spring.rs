//! Elastic constraints between particles
//!
//! A [`Spring`] links two particles by their index in the owning layout's
//! particle list. Endpoints are fixed for the lifetime of the spring and may
//! be shared with other springs.

/// A spring between two particles carrying a caller payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring<E> {
    source: usize,
    target: usize,
    strength: f64,
    length: f64,
    // Stored for callers; no force reads it.
    damping: f64,
    payload: E,
}

impl<E> Spring<E> {
    /// Creates a spring of unit strength and unit rest length.
    ///
    /// # Arguments
    ///
    /// * `source` - Index of the first particle.
    /// * `target` - Index of the second particle.
    /// * `payload` - The caller's edge this spring stands for.
    pub fn new(source: usize, target: usize, payload: E) -> Self {
        Self::with_parameters(source, target, 1.0, 1.0, 1.0, payload)
    }

    /// Creates a spring of unit rest length and the given strength.
    pub fn with_strength(source: usize, target: usize, strength: f64, payload: E) -> Self {
        Self::with_parameters(source, target, strength, 1.0, 1.0, payload)
    }

    /// Creates a spring of the given strength and rest length.
    ///
    /// The damping factor is derived from the rest length as `length / 10`.
    pub fn with_strength_and_length(
        source: usize,
        target: usize,
        strength: f64,
        length: f64,
        payload: E,
    ) -> Self {
        Self::with_parameters(source, target, strength, length, length / 10.0, payload)
    }

    /// Creates a spring with every parameter given explicitly.
    pub fn with_parameters(
        source: usize,
        target: usize,
        strength: f64,
        length: f64,
        damping: f64,
        payload: E,
    ) -> Self {
        Self {
            source,
            target,
            strength,
            length,
            damping,
            payload,
        }
    }

    /// Index of the first endpoint particle
    pub fn source(&self) -> usize {
        self.source
    }

    /// Index of the second endpoint particle
    pub fn target(&self) -> usize {
        self.target
    }

    /// Hooke's law constant
    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Rest length
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Damping factor of the spring
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Returns the caller's edge attached to this spring
    pub fn payload(&self) -> &E {
        &self.payload
    }

    /// Returns the endpoint opposite to `particle`, or `None` if the spring is
    /// not attached to it.
    pub fn other_end(&self, particle: usize) -> Option<usize> {
        if particle == self.source {
            Some(self.target)
        } else if particle == self.target {
            Some(self.source)
        } else {
            None
        }
    }

    /// Whether both ends are attached to the same particle
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_parameters() {
        let spring = Spring::new(0, 1, ());
        assert_approx_eq!(f64, spring.strength(), 1.0);
        assert_approx_eq!(f64, spring.length(), 1.0);
        assert_approx_eq!(f64, spring.damping(), 1.0);
    }

    #[test]
    fn test_with_strength_keeps_unit_length() {
        let spring = Spring::with_strength(0, 1, 3.0, ());
        assert_approx_eq!(f64, spring.strength(), 3.0);
        assert_approx_eq!(f64, spring.length(), 1.0);
        assert_approx_eq!(f64, spring.damping(), 1.0);
    }

    #[test]
    fn test_damping_derived_from_length() {
        let spring = Spring::with_strength_and_length(0, 1, 2.0, 5.0, ());
        assert_approx_eq!(f64, spring.damping(), 0.5);
    }

    #[test]
    fn test_explicit_parameters() {
        let spring = Spring::with_parameters(2, 3, 0.5, 4.0, 0.25, "edge");
        assert_eq!(spring.source(), 2);
        assert_eq!(spring.target(), 3);
        assert_approx_eq!(f64, spring.damping(), 0.25);
        assert_eq!(*spring.payload(), "edge");
    }

    #[test]
    fn test_other_end() {
        let spring = Spring::new(4, 7, ());
        assert_eq!(spring.other_end(4), Some(7));
        assert_eq!(spring.other_end(7), Some(4));
        assert_eq!(spring.other_end(5), None);
        assert!(!spring.is_self_loop());
        assert!(Spring::new(1, 1, ()).is_self_loop());
    }
}
