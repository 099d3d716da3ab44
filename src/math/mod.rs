//! Small 2D linear-algebra types used throughout the crate.
//!
//! Provides `Vec2` and `Mat2` with the closed-form operations the solvers
//! need (determinant, 2x2 inverse, quadratic forms). These types are
//! intentionally small and dependency-free to keep the crate portable and
//! easy to test.
pub mod matrix;
pub mod vector;

pub use matrix::{Mat2, SingularMatrixError};
pub use vector::Vec2;
