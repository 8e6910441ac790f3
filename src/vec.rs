//! 2D vector type used for positions, displacements and rest offsets.

use crate::float::Float;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// 2D vector in screen space (x to the right, y downward).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F { self.dot(self) }

    /// Length (magnitude).
    pub fn length(self) -> F { self.length_sq().sqrt() }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    /// Unit vector in the same direction. A zero vector stays zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == F::zero() {
            Self::zero()
        } else {
            self.scale(F::one() / len)
        }
    }

    /// Rescale to `max` if longer than `max`, otherwise unchanged.
    pub fn clamp_length(self, max: F) -> Self {
        if self.length() > max {
            self.normalize().scale(max)
        } else {
            self
        }
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F { (self - other).length() }

    /// Squared distance between two points.
    pub fn distance_sq(self, other: Self) -> F { (self - other).length_sq() }

    /// Average of a set of points, `None` for an empty set.
    pub fn centroid<I: IntoIterator<Item = Self>>(points: I) -> Option<Self> {
        let mut sum = Self::zero();
        let mut count = 0usize;
        for p in points {
            sum += p;
            count += 1;
        }
        if count == 0 {
            None
        } else {
            Some(sum.scale(F::one() / F::from_usize(count)))
        }
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f32, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_zero_vector() {
        let v = Vec2::<f32>::zero();
        assert_eq!(v.normalize(), Vec2::zero());
    }

    #[test]
    fn clamp_length_only_shrinks() {
        let long = Vec2::new(30.0f32, 40.0).clamp_length(5.0);
        assert!((long.length() - 5.0).abs() < 1e-5);
        assert!((long.x - 3.0).abs() < 1e-5);

        let short = Vec2::new(1.0f32, 1.0);
        assert_eq!(short.clamp_length(5.0), short);
    }

    #[test]
    fn centroid_of_square() {
        let pts = [
            Vec2::new(0.0f32, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(2.0, 2.0),
        ];
        let c = Vec2::centroid(pts.iter().copied()).unwrap();
        assert_eq!(c, Vec2::new(1.0, 1.0));
        assert!(Vec2::<f32>::centroid(core::iter::empty()).is_none());
    }

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(3.0f32, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }
}
