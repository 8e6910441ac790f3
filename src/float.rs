//! Floating-point abstraction so the simulator runs on `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar operations the solvers need.
///
/// Implemented for `f32` and `f64`. Roots and absolute values go through
/// `libm` so the crate builds without `std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// 0.0
    fn zero() -> Self;
    /// 1.0
    fn one() -> Self;
    /// 0.5
    fn half() -> Self;
    /// 2.0
    fn two() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Smaller of two values.
    fn min(self, other: Self) -> Self;
    /// Larger of two values.
    fn max(self, other: Self) -> Self;
    /// Whether the value is neither NaN nor infinite.
    fn is_finite(self) -> bool;
    /// Convert from f32 (constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Convert a count or grid coordinate.
    fn from_usize(v: usize) -> Self;

    /// Clamp self to [min, max].
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Whether `min <= self <= max`.
    fn within(self, min: Self, max: Self) -> bool {
        self >= min && self <= max
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn from_f32(v: f32) -> Self { v }
    fn from_usize(v: usize) -> Self { v as f32 }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn from_usize(v: usize) -> Self { v as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_and_within() {
        assert_eq!(Float::clamp(1.5f32, 0.0, 1.0), 1.0);
        assert_eq!(Float::clamp(-3.0f64, 0.0, 1.0), 0.0);
        assert!(0.5f32.within(0.0, 1.0));
        assert!(!1.01f32.within(0.0, 1.0));
    }

    #[test]
    fn non_finite_detected() {
        assert!(!Float::is_finite(f32::NAN));
        assert!(!Float::is_finite(f64::INFINITY));
        assert!(Float::is_finite(3.0f32));
    }
}
