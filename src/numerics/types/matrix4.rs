// src/numerics/types/matrix4.rs
// Matrix4x4 stored as four Vector4 columns; affine and projective transforms.

use core::ops::{Add, Mul, Sub};
use serde::{Serialize, Deserialize};

use crate::numerics::projection::PerspectiveConfig;
use crate::numerics::types::matrix::{det3x3, Matrix3x3};
use crate::numerics::types::traits::FloatingPoint;
use crate::numerics::types::vector::Vector3;
use crate::numerics::types::vector4::Vector4;

/// 4x4 matrix in column-major layout.
///
/// `x`, `y` and `z` hold the linear part and `t` is the translation column.
/// Same column-vector convention as [`Matrix3x3`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4x4<T: FloatingPoint = f32> {
    pub x: Vector4<T>,
    pub y: Vector4<T>,
    pub z: Vector4<T>,
    pub t: Vector4<T>,
}

impl<T: FloatingPoint> Matrix4x4<T> {
    /// Construct a matrix from its four columns.
    pub fn new(x: Vector4<T>, y: Vector4<T>, z: Vector4<T>, t: Vector4<T>) -> Self {
        Self { x, y, z, t }
    }

    pub fn from_rows(r0: [T; 4], r1: [T; 4], r2: [T; 4], r3: [T; 4]) -> Self {
        Self::new(r0.into(), r1.into(), r2.into(), r3.into()).transpose()
    }

    /// Embed a linear 3x3 block, leaving translation at zero and `w` at 1.
    pub fn from_matrix3x3(m: Matrix3x3<T>) -> Self {
        Self::new(
            Vector4::direction(m.x),
            Vector4::direction(m.y),
            Vector4::direction(m.z),
            Vector4::new(T::zero(), T::zero(), T::zero(), T::one()),
        )
    }

    /// Get a column by index. Panics if `idx > 3`.
    pub fn column(&self, idx: usize) -> Vector4<T> {
        [self.x, self.y, self.z, self.t][idx]
    }

    /// Get a row by index. Panics if `idx > 3`.
    pub fn row(&self, idx: usize) -> Vector4<T> {
        self.transpose().column(idx)
    }

    pub fn zero() -> Self {
        Self::new(Vector4::zero(), Vector4::zero(), Vector4::zero(), Vector4::zero())
    }

    pub fn identity() -> Self {
        Self::scaling_matrix(Vector3::one())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self::new(
            self.x.add(other.x),
            self.y.add(other.y),
            self.z.add(other.z),
            self.t.add(other.t),
        )
    }

    pub fn subtract(self, other: Self) -> Self {
        Self::new(
            self.x.subtract(other.x),
            self.y.subtract(other.y),
            self.z.subtract(other.z),
            self.t.subtract(other.t),
        )
    }

    /// Matrix product `self * other`.
    ///
    /// Each result column is the combination of `self`'s columns weighted by
    /// the matching column of `other`.
    pub fn multiply(self, other: Self) -> Self {
        let combine = |c: Vector4<T>| {
            self.x
                .scale(c.x)
                .add(self.y.scale(c.y))
                .add(self.z.scale(c.z))
                .add(self.t.scale(c.w))
        };
        Self::new(combine(other.x), combine(other.y), combine(other.z), combine(other.t))
    }

    /// Multiply every entry by `scalar`.
    pub fn scale_by(self, scalar: T) -> Self {
        Self::new(
            self.x.scale(scalar),
            self.y.scale(scalar),
            self.z.scale(scalar),
            self.t.scale(scalar),
        )
    }

    /// Matrix-vector product on a homogeneous vector.
    pub fn linear_transform(self, v: Vector4<T>) -> Vector4<T> {
        let rows = self.transpose();
        let row_dot = |r: Vector4<T>| r.x * v.x + r.y * v.y + r.z * v.z + r.w * v.w;
        Vector4::new(row_dot(rows.x), row_dot(rows.y), row_dot(rows.z), row_dot(rows.t))
    }

    /// Transform a position (`w = 1`), so translation applies.
    pub fn transform_point(self, p: Vector3<T>) -> Vector3<T> {
        self.linear_transform(Vector4::point(p)).truncate()
    }

    /// Transform a direction (`w = 0`), so translation is ignored.
    pub fn transform_direction(self, d: Vector3<T>) -> Vector3<T> {
        self.linear_transform(Vector4::direction(d)).truncate()
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(self) -> T {
        let (a, b, c, d) = (self.x, self.y, self.z, self.t);

        let minor_x = det3x3(b.y, c.y, d.y, b.z, c.z, d.z, b.w, c.w, d.w);
        let minor_y = det3x3(a.y, c.y, d.y, a.z, c.z, d.z, a.w, c.w, d.w);
        let minor_z = det3x3(a.y, b.y, d.y, a.z, b.z, d.z, a.w, b.w, d.w);
        let minor_t = det3x3(a.y, b.y, c.y, a.z, b.z, c.z, a.w, b.w, c.w);

        a.x * minor_x - b.x * minor_y + c.x * minor_z - d.x * minor_t
    }

    pub fn transpose(self) -> Self {
        let (a, b, c, d) = (self.x, self.y, self.z, self.t);
        Self::new(
            Vector4::new(a.x, b.x, c.x, d.x),
            Vector4::new(a.y, b.y, c.y, d.y),
            Vector4::new(a.z, b.z, c.z, d.z),
            Vector4::new(a.w, b.w, c.w, d.w),
        )
    }

    /// Right-handed rotation about the X axis.
    pub fn rotation_x(angle_radians: T) -> Self {
        Self::from_matrix3x3(Matrix3x3::rotation_x(angle_radians))
    }

    /// Right-handed rotation about the Y axis.
    pub fn rotation_y(angle_radians: T) -> Self {
        Self::from_matrix3x3(Matrix3x3::rotation_y(angle_radians))
    }

    /// Right-handed rotation about the Z axis.
    pub fn rotation_z(angle_radians: T) -> Self {
        Self::from_matrix3x3(Matrix3x3::rotation_z(angle_radians))
    }

    /// Diagonal scale with 1 in the homogeneous corner.
    pub fn scaling_matrix(factors: Vector3<T>) -> Self {
        Self::from_matrix3x3(Matrix3x3::scaling_matrix(factors))
    }

    /// Identity with `offset` in the translation column.
    pub fn translation(offset: Vector3<T>) -> Self {
        Self {
            t: Vector4::point(offset),
            ..Self::identity()
        }
    }

    /// Right-handed perspective projection mapping view depth to [0, 1].
    ///
    /// The camera looks down -Z; points on the near plane land on depth 0 and
    /// points on the far plane on depth 1 after the divide by `w`.
    pub fn perspective(config: &PerspectiveConfig<T>) -> Self {
        let f = T::one() / (config.fov_y_radians / T::two()).tan();
        let depth = config.near - config.far;
        let zero = T::zero();

        Self::new(
            Vector4::new(f / config.aspect, zero, zero, zero),
            Vector4::new(zero, f, zero, zero),
            Vector4::new(zero, zero, config.far / depth, -T::one()),
            Vector4::new(zero, zero, config.near * config.far / depth, zero),
        )
    }

    /// Right-handed orthographic projection mapping view depth to [0, 1].
    pub fn orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        let zero = T::zero();

        Self::new(
            Vector4::new(T::two() / width, zero, zero, zero),
            Vector4::new(zero, T::two() / height, zero, zero),
            Vector4::new(zero, zero, -T::one() / depth, zero),
            Vector4::new(
                -(right + left) / width,
                -(top + bottom) / height,
                -near / depth,
                T::one(),
            ),
        )
    }
}

impl<T> Serialize for Matrix4x4<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z, &self.t).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Matrix4x4<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z, t) =
            <(Vector4<T>, Vector4<T>, Vector4<T>, Vector4<T>)>::deserialize(deserializer)?;
        Ok(Matrix4x4 { x, y, z, t })
    }
}

impl<T: FloatingPoint> Add for Matrix4x4<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Matrix4x4::add(self, other)
    }
}

impl<T: FloatingPoint> Sub for Matrix4x4<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.subtract(other)
    }
}

impl<T: FloatingPoint> Mul<T> for Matrix4x4<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        self.scale_by(scalar)
    }
}

impl<T: FloatingPoint> Mul<Vector4<T>> for Matrix4x4<T> {
    type Output = Vector4<T>;

    fn mul(self, rhs: Vector4<T>) -> Vector4<T> {
        self.linear_transform(rhs)
    }
}

impl<T: FloatingPoint> Mul<Matrix4x4<T>> for Matrix4x4<T> {
    type Output = Matrix4x4<T>;

    fn mul(self, rhs: Matrix4x4<T>) -> Matrix4x4<T> {
        self.multiply(rhs)
    }
}
