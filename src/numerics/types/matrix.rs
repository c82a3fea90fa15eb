// src/numerics/types/matrix.rs
// Matrix3x3 stored as three Vector3 columns.

use core::ops::{Add, Mul, Sub};
use serde::{Serialize, Deserialize};

use crate::numerics::types::traits::FloatingPoint;
use crate::numerics::types::vector::Vector3;

/// 3x3 matrix in column-major layout: `x`, `y` and `z` are columns 0, 1 and 2.
///
/// Matrices act on column vectors, so `a.multiply(b)` applied to `v` is the
/// same as applying `b` first and then `a`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix3x3<T: FloatingPoint = f32> {
    pub x: Vector3<T>,
    pub y: Vector3<T>,
    pub z: Vector3<T>,
}

/// Determinant of a 3x3 block given in row-major order, expanded along the
/// first row.
#[allow(clippy::too_many_arguments)]
pub(crate) fn det3x3<T: FloatingPoint>(
    a: T, b: T, c: T,
    d: T, e: T, f: T,
    g: T, h: T, i: T,
) -> T {
    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

impl<T: FloatingPoint> Matrix3x3<T> {
    /// Construct a matrix from its three columns.
    pub fn new(x: Vector3<T>, y: Vector3<T>, z: Vector3<T>) -> Self {
        Self { x, y, z }
    }

    /// Construct a new matrix from 3 columns
    pub fn from_columns(c0: [T; 3], c1: [T; 3], c2: [T; 3]) -> Self {
        Self::new(c0.into(), c1.into(), c2.into())
    }

    /// Construct a new matrix from 3 rows
    pub fn from_rows(r0: [T; 3], r1: [T; 3], r2: [T; 3]) -> Self {
        Self::from_columns(
            [r0[0], r1[0], r2[0]],
            [r0[1], r1[1], r2[1]],
            [r0[2], r1[2], r2[2]],
        )
    }

    /// Get a column by index. Panics if `idx > 2`.
    pub fn column(&self, idx: usize) -> Vector3<T> {
        [self.x, self.y, self.z][idx]
    }

    /// Get a row by index. Panics if `idx > 2`.
    pub fn row(&self, idx: usize) -> Vector3<T> {
        self.transpose().column(idx)
    }

    /// Zero matrix
    pub fn zero() -> Self {
        Self::new(Vector3::zero(), Vector3::zero(), Vector3::zero())
    }

    /// Identity matrix
    pub fn identity() -> Self {
        Self::new(Vector3::unit_x(), Vector3::unit_y(), Vector3::unit_z())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x.add(other.x), self.y.add(other.y), self.z.add(other.z))
    }

    pub fn subtract(self, other: Self) -> Self {
        Self::new(
            self.x.subtract(other.x),
            self.y.subtract(other.y),
            self.z.subtract(other.z),
        )
    }

    /// Matrix product `self * other`.
    pub fn multiply(self, other: Self) -> Self {
        let rows = self.transpose();
        let product_column = |c: Vector3<T>| {
            Vector3::new(rows.x.dot(c), rows.y.dot(c), rows.z.dot(c))
        };
        Self::new(
            product_column(other.x),
            product_column(other.y),
            product_column(other.z),
        )
    }

    /// Multiply every entry by `scalar`.
    pub fn scale_by(self, scalar: T) -> Self {
        Self::new(self.x.scale(scalar), self.y.scale(scalar), self.z.scale(scalar))
    }

    /// Matrix-vector product: component `i` is row `i` dotted with `v`.
    pub fn linear_transform(self, v: Vector3<T>) -> Vector3<T> {
        let rows = self.transpose();
        Vector3::new(rows.x.dot(v), rows.y.dot(v), rows.z.dot(v))
    }

    /// Zero exactly when the columns are linearly dependent.
    pub fn determinant(self) -> T {
        det3x3(
            self.x.x, self.y.x, self.z.x,
            self.x.y, self.y.y, self.z.y,
            self.x.z, self.y.z, self.z.z,
        )
    }

    pub fn transpose(self) -> Self {
        Self::new(
            Vector3::new(self.x.x, self.y.x, self.z.x),
            Vector3::new(self.x.y, self.y.y, self.z.y),
            Vector3::new(self.x.z, self.y.z, self.z.z),
        )
    }

    /// Right-handed rotation about the X axis.
    pub fn rotation_x(angle_radians: T) -> Self {
        let (s, c) = (angle_radians.sin(), angle_radians.cos());
        Self::new(
            Vector3::unit_x(),
            Vector3::new(T::zero(), c, s),
            Vector3::new(T::zero(), -s, c),
        )
    }

    /// Right-handed rotation about the Y axis.
    pub fn rotation_y(angle_radians: T) -> Self {
        let (s, c) = (angle_radians.sin(), angle_radians.cos());
        Self::new(
            Vector3::new(c, T::zero(), -s),
            Vector3::unit_y(),
            Vector3::new(s, T::zero(), c),
        )
    }

    /// Right-handed rotation about the Z axis.
    pub fn rotation_z(angle_radians: T) -> Self {
        let (s, c) = (angle_radians.sin(), angle_radians.cos());
        Self::new(
            Vector3::new(c, s, T::zero()),
            Vector3::new(-s, c, T::zero()),
            Vector3::unit_z(),
        )
    }

    /// Diagonal matrix that scales each axis by the matching component.
    pub fn scaling_matrix(factors: Vector3<T>) -> Self {
        Self::new(
            Vector3::new(factors.x, T::zero(), T::zero()),
            Vector3::new(T::zero(), factors.y, T::zero()),
            Vector3::new(T::zero(), T::zero(), factors.z),
        )
    }
}

// Columns are serialized in order, each as a 3-tuple.
impl<T> Serialize for Matrix3x3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Matrix3x3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(Vector3<T>, Vector3<T>, Vector3<T>)>::deserialize(deserializer)?;
        Ok(Matrix3x3 { x, y, z })
    }
}

impl<T: FloatingPoint> Add for Matrix3x3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Matrix3x3::add(self, other)
    }
}

impl<T: FloatingPoint> Sub for Matrix3x3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.subtract(other)
    }
}

impl<T: FloatingPoint> Mul<T> for Matrix3x3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        self.scale_by(scalar)
    }
}

impl<T: FloatingPoint> Mul<Vector3<T>> for Matrix3x3<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        self.linear_transform(rhs)
    }
}

impl<T: FloatingPoint> Mul<Matrix3x3<T>> for Matrix3x3<T> {
    type Output = Matrix3x3<T>;

    fn mul(self, rhs: Matrix3x3<T>) -> Matrix3x3<T> {
        self.multiply(rhs)
    }
}
