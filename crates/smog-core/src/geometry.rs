//! Two-dimensional vector arithmetic.

use std::ops::{Add, AddAssign, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A two-dimensional vector with `f64` components.
///
/// Used interchangeably as a position, a velocity or a force.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    x: f64,
    y: f64,
}

impl Vector {
    /// Creates a new vector with the specified components
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the zero vector
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the x component of the vector
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y component of the vector
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks if both components are exactly zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Multiplies both components by the given factor
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Euclidean length of the vector
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared euclidean length, avoids the square root
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(3.0, -4.0);

        assert_eq!(a + b, Vector::new(4.0, -2.0));
        assert_eq!(a - b, Vector::new(-2.0, 6.0));
        assert_eq!(-a, Vector::new(-1.0, -2.0));
        assert_eq!(a.scale(2.0), Vector::new(2.0, 4.0));
    }

    #[test]
    fn test_vector_add_assign() {
        let mut v = Vector::zero();
        v += Vector::new(0.5, 0.25);
        v += Vector::new(0.5, 0.25);
        assert_eq!(v, Vector::new(1.0, 0.5));
    }

    #[test]
    fn test_vector_length() {
        let v = Vector::new(3.0, 4.0);
        assert_approx_eq!(f64, v.length(), 5.0);
        assert_approx_eq!(f64, v.length_squared(), 25.0);
    }

    #[test]
    fn test_vector_length_is_root_of_squares() {
        for (x, y) in [(0.1, 0.2), (1e-3, 7.5), (-2.25, 0.3), (1e150, 3e150)] {
            let v = Vector::new(x, y);
            assert_eq!(v.length().to_bits(), (x * x + y * y).sqrt().to_bits());
        }
    }

    #[test]
    fn test_vector_is_zero() {
        assert!(Vector::zero().is_zero());
        assert!(!Vector::new(0.0, 1e-12).is_zero());
    }
}
