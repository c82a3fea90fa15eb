pub mod numerics;

pub use numerics::error::NumericsError;
pub use numerics::projection::{parse_parameters, PerspectiveConfig};
pub use numerics::types::matrix::Matrix3x3;
pub use numerics::types::matrix4::Matrix4x4;
pub use numerics::types::point::{Point3, Point3Float};
pub use numerics::types::traits::FloatingPoint;
pub use numerics::types::vector::Vector3;
pub use numerics::types::vector4::Vector4;
