//! Property tests for linea
//!
//! These tests verify the algebraic laws of the vector and matrix types.

use linea::{Matrix3x3, Matrix4x4, Vector3};
use proptest::prelude::*;

// Small integers keep sums and products exactly representable, so the laws
// that hold over the reals also hold bit-for-bit.
fn exact_component() -> impl Strategy<Value = f64> {
    (-1000i32..=1000).prop_map(f64::from)
}

fn exact_vector() -> impl Strategy<Value = Vector3<f64>> {
    (exact_component(), exact_component(), exact_component())
        .prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn real_component() -> impl Strategy<Value = f64> {
    -100.0f64..100.0
}

fn real_vector() -> impl Strategy<Value = Vector3<f64>> {
    (real_component(), real_component(), real_component())
        .prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn matrix3() -> impl Strategy<Value = Matrix3x3<f64>> {
    (exact_vector(), exact_vector(), exact_vector())
        .prop_map(|(x, y, z)| Matrix3x3::new(x, y, z))
}

// Entries in [-10, 10] keep even 4x4 determinants of products exact.
fn small_vector() -> impl Strategy<Value = Vector3<f64>> {
    (-10i32..=10, -10i32..=10, -10i32..=10)
        .prop_map(|(x, y, z)| Vector3::new(f64::from(x), f64::from(y), f64::from(z)))
}

fn matrix4() -> impl Strategy<Value = Matrix4x4<f64>> {
    let linear = (small_vector(), small_vector(), small_vector())
        .prop_map(|(x, y, z)| Matrix3x3::new(x, y, z));
    (linear, small_vector(), small_vector()).prop_map(|(linear, bottom, shift)| {
        let mut m = Matrix4x4::from_matrix3x3(linear);
        m.x.w = bottom.x;
        m.y.w = bottom.y;
        m.z.w = bottom.z;
        m.t = shift.extend(1.0);
        m
    })
}

fn close(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance * (1.0 + a.abs().max(b.abs()))
}

// ============================================================
// Vector3 property tests
// ============================================================

proptest! {
    #[test]
    fn vector_add_commutative(a in exact_vector(), b in exact_vector()) {
        prop_assert_eq!(a.add(b), b.add(a));
    }

    #[test]
    fn vector_add_associative(a in exact_vector(), b in exact_vector(), c in exact_vector()) {
        prop_assert_eq!(a.add(b).add(c), a.add(b.add(c)));
    }

    #[test]
    fn vector_subtract_self_is_zero(v in real_vector()) {
        prop_assert_eq!(v.subtract(v), Vector3::zero());
    }

    #[test]
    fn vector_normalize_has_unit_length(v in real_vector()) {
        prop_assume!(v.length() > 1e-3);
        prop_assert!(close(v.normalize().length(), 1.0, 1e-6));
    }

    #[test]
    fn cross_is_anticommutative(a in exact_vector(), b in exact_vector()) {
        prop_assert_eq!(a.cross(b), b.cross(a).scale(-1.0));
    }

    #[test]
    fn cross_is_orthogonal_to_inputs(a in real_vector(), b in real_vector()) {
        let c = a.cross(b);
        let scale = a.length() * b.length() * c.length();
        prop_assert!(a.dot(c).abs() <= 1e-9 * (1.0 + scale));
        prop_assert!(b.dot(c).abs() <= 1e-9 * (1.0 + scale));
    }

    #[test]
    fn dot_normalized_within_unit_range(a in real_vector(), b in real_vector()) {
        prop_assume!(a.length() > 1e-3 && b.length() > 1e-3);
        let cosine = a.dot_normalized(b);
        prop_assert!((-1.0 - 1e-12..=1.0 + 1e-12).contains(&cosine));
    }

    #[test]
    fn distance_is_symmetric(a in exact_vector(), b in exact_vector()) {
        prop_assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn reflect_preserves_length(v in real_vector(), n in real_vector()) {
        prop_assume!(n.length() > 1e-3);
        let normal = n.normalize();
        prop_assert!(close(v.reflect(normal).length(), v.length(), 1e-9));
    }
}

// ============================================================
// Matrix property tests
// ============================================================

proptest! {
    #[test]
    fn matrix3_identity_is_neutral(m in matrix3()) {
        prop_assert_eq!(Matrix3x3::identity().multiply(m), m);
        prop_assert_eq!(m.multiply(Matrix3x3::identity()), m);
    }

    #[test]
    fn matrix4_identity_is_neutral(m in matrix4()) {
        prop_assert_eq!(Matrix4x4::identity().multiply(m), m);
        prop_assert_eq!(m.multiply(Matrix4x4::identity()), m);
    }

    #[test]
    fn matrix3_double_transpose(m in matrix3()) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn matrix4_double_transpose(m in matrix4()) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn matrix3_determinant_of_transpose(m in matrix3()) {
        prop_assert_eq!(m.transpose().determinant(), m.determinant());
    }

    #[test]
    fn matrix4_determinant_is_multiplicative(a in matrix4(), b in matrix4()) {
        prop_assert_eq!(a.multiply(b).determinant(), a.determinant() * b.determinant());
    }

    #[test]
    fn matrix4_determinant_of_transpose(m in matrix4()) {
        prop_assert_eq!(m.transpose().determinant(), m.determinant());
    }

    #[test]
    fn matrix3_product_matches_composition(a in matrix3(), b in matrix3(), v in exact_vector()) {
        prop_assert_eq!(
            a.multiply(b).linear_transform(v),
            a.linear_transform(b.linear_transform(v))
        );
    }

    #[test]
    fn rotation_undone_by_inverse_angle(angle in -6.3f64..6.3, v in real_vector()) {
        let round_trip = Matrix4x4::rotation_x(-angle)
            .multiply(Matrix4x4::rotation_x(angle))
            .transform_point(v);
        prop_assert!(close(round_trip.x, v.x, 1e-9));
        prop_assert!(close(round_trip.y, v.y, 1e-9));
        prop_assert!(close(round_trip.z, v.z, 1e-9));
    }

    #[test]
    fn translation_ignores_directions(offset in real_vector(), d in real_vector()) {
        prop_assert_eq!(Matrix4x4::translation(offset).transform_direction(d), d);
    }
}
