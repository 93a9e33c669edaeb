//=========================================================================
// Math Primitives
//=========================================================================
//
// Minimal vector type carried in message payloads.
//
// The host owns the real transform math; the core only needs to copy
// positions around and add a camera offset.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::ops::{Add, Mul, Sub};

//=== Vector3 =============================================================

/// Three-component `f32` vector in host world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// The origin.
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Creates a vector from its components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(Vector3::default(), Vector3::ZERO);
    }

    #[test]
    fn add_and_sub_are_componentwise() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, -2.0, 10.0);

        assert_eq!(a + b, Vector3::new(1.5, 0.0, 13.0));
        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn scalar_multiplication() {
        let v = Vector3::new(1.0, 0.0, -2.0) * 3.0;
        assert_eq!(v, Vector3::new(3.0, 0.0, -6.0));
    }

    #[test]
    fn from_tuple() {
        let v: Vector3 = (4.0, 5.0, 6.0).into();
        assert_eq!(v, Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Vector3::new(1.0, 2.5, -3.0).to_string(), "(1.00, 2.50, -3.00)");
    }
}
