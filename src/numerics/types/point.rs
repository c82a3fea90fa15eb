// src/numerics/types/point.rs
// Point3 is an alias for Vector3.

use super::vector::Vector3;

/// Point3 is an alias to Vector3 to represent points in space.
///
/// The alias keeps generic template parameterization. Nothing in the type
/// separates points from directions; that only happens once a value is
/// lifted to a Vector4 with `w = 1` or `w = 0`.
pub type Point3<T> = Vector3<T>;
pub type Point3Float<T = f32> = Vector3<T>;
