// src/numerics/types/traits.rs
// FloatingPoint trait shared by every vector and matrix type.

use core::fmt::Debug;

/// FloatingPoint is the scalar contract for the numerics types.
///
/// Beyond the arithmetic operators it exposes the handful of transcendental
/// functions the geometry needs (`sqrt` for lengths, `sin`/`cos`/`tan` for
/// rotations and projections), so the types stay generic over `f32` and `f64`.
pub trait FloatingPoint:
Copy + PartialOrd + Debug
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn two() -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn to_radians(self) -> Self;
    fn is_finite(self) -> bool;

    /// Lossy conversion used for literal constants.
    fn from_f64(value: f64) -> Self;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn two() -> Self { 2.0 }
    fn sqrt(self) -> Self { f32::sqrt(self) }
    fn sin(self) -> Self { f32::sin(self) }
    fn cos(self) -> Self { f32::cos(self) }
    fn tan(self) -> Self { f32::tan(self) }
    fn to_radians(self) -> Self { f32::to_radians(self) }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn from_f64(value: f64) -> Self { value as f32 }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn two() -> Self { 2.0 }
    fn sqrt(self) -> Self { f64::sqrt(self) }
    fn sin(self) -> Self { f64::sin(self) }
    fn cos(self) -> Self { f64::cos(self) }
    fn tan(self) -> Self { f64::tan(self) }
    fn to_radians(self) -> Self { f64::to_radians(self) }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn from_f64(value: f64) -> Self { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hypot<T: FloatingPoint>(a: T, b: T) -> T {
        (a * a + b * b).sqrt()
    }

    #[test]
    fn test_generic_math_for_both_precisions() {
        assert_eq!(hypot(3.0_f32, 4.0_f32), 5.0);
        assert_eq!(hypot(3.0_f64, 4.0_f64), 5.0);
    }

    #[test]
    fn test_constants_and_conversion() {
        assert_eq!(<f32 as FloatingPoint>::two(), 2.0);
        assert_eq!(<f64 as FloatingPoint>::from_f64(0.25), 0.25);
        assert_eq!(<f32 as FloatingPoint>::from_f64(0.5), 0.5_f32);
        assert!((FloatingPoint::to_radians(180.0_f64) - core::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_is_finite() {
        assert!(FloatingPoint::is_finite(1.0e30_f32));
        assert!(!FloatingPoint::is_finite(f32::INFINITY));
        assert!(!FloatingPoint::is_finite(<f32 as FloatingPoint>::from_f64(1.0e39)));
        assert!(!FloatingPoint::is_finite(f64::NAN));
    }
}
