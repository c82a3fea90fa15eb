// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod error;
pub mod projection;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod vector;
    pub mod vector4;
    pub mod matrix;
    pub mod matrix4;
    pub mod point;
    pub mod traits;
}
