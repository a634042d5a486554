//! Integer geometric primitives.
//!
//! Provides the affine point/vector algebra used throughout the canvas API:
//! a [`Point`] is a location on the pixel grid, a [`Vector`] is a
//! displacement between locations. The two are deliberately distinct types
//! with no implicit conversion; the difference of two points is a vector,
//! and a point offset by a vector is another point.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A 2D location with signed integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A 2D displacement with signed integer components.
///
/// Same representation as [`Point`] but semantically an offset, not a
/// location. Supports addition, subtraction, negation, and scalar
/// multiplication/division (truncating).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Vector {
    /// X component.
    pub x: i32,
    /// Y component.
    pub y: i32,
}

impl Vector {
    /// Zero displacement.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new vector.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// Vector algebra.

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        self + -rhs
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<i32> for Vector {
    type Output = Vector;

    fn mul(self, s: i32) -> Vector {
        Vector::new(self.x * s, self.y * s)
    }
}

impl Mul<Vector> for i32 {
    type Output = Vector;

    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}

impl Div<i32> for Vector {
    type Output = Vector;

    /// Truncating integer division of both components.
    fn div(self, s: i32) -> Vector {
        Vector::new(self.x / s, self.y / s)
    }
}

// Point/vector affine algebra.

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, v: Vector) -> Point {
        Point::new(self.x + v.x, self.y + v.y)
    }
}

impl Add<Point> for Vector {
    type Output = Point;

    fn add(self, p: Point) -> Point {
        p + self
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, v: Vector) {
        self.x += v.x;
        self.y += v.y;
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, v: Vector) -> Point {
        self + -v
    }
}

impl SubAssign<Vector> for Point {
    fn sub_assign(&mut self, v: Vector) {
        self.x -= v.x;
        self.y -= v.y;
    }
}

impl Sub for Point {
    type Output = Vector;

    /// The displacement from `rhs` to `self`.
    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_difference_is_vector() {
        let p0 = Point::new(10, 20);
        let p1 = Point::new(3, 5);
        assert_eq!(p0 - p1, Vector::new(7, 15));
    }

    #[test]
    fn test_point_vector_round_trip() {
        let p = Point::new(-4, 9);
        let v = Vector::new(6, -2);
        assert_eq!((p + v) - v, p);
        assert_eq!(v + p, p + v);
    }

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector::new(1, 2);
        let b = Vector::new(3, -4);
        assert_eq!(a + b, Vector::new(4, -2));
        assert_eq!(a - b, Vector::new(-2, 6));
        assert_eq!(-a, Vector::new(-1, -2));
        assert_eq!(a + -a, Vector::ZERO);
    }

    #[test]
    fn test_vector_assign_ops() {
        let mut v = Vector::new(1, 1);
        v += Vector::new(2, 3);
        assert_eq!(v, Vector::new(3, 4));
        v -= Vector::new(1, 1);
        assert_eq!(v, Vector::new(2, 3));

        let mut p = Point::new(0, 0);
        p += Vector::new(5, 5);
        p -= Vector::new(1, 2);
        assert_eq!(p, Point::new(4, 3));
    }

    #[test]
    fn test_scalar_multiplication() {
        let v = Vector::new(2, -3);
        assert_eq!(v * 3, Vector::new(6, -9));
        assert_eq!(3 * v, v * 3);
    }

    #[test]
    fn test_scalar_division_truncates() {
        assert_eq!(Vector::new(7, -7) / 2, Vector::new(3, -3));
        assert_eq!(Vector::new(9, 4) / 3, Vector::new(3, 1));
    }

    #[test]
    fn test_lexicographic_ordering() {
        assert!(Point::new(1, 9) < Point::new(2, 0));
        assert!(Point::new(1, 1) < Point::new(1, 2));
        assert!(Vector::new(0, 5) < Vector::new(1, 0));
    }

    #[test]
    fn test_defaults_are_zero() {
        assert_eq!(Point::default(), Point::ORIGIN);
        assert_eq!(Vector::default(), Vector::ZERO);
    }
}
