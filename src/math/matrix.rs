use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::vector::Vec2;

/// Determinants smaller than this are treated as singular.
pub const DET_EPSILON: f64 = 1e-12;

/// A 2x2 matrix in row-major order:
///
/// ```text
/// | a  b |
/// | c  d |
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mat2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Mat2 {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Mat2 { a, b, c, d }
    }

    pub fn identity() -> Self {
        Mat2::new(1.0, 0.0, 0.0, 1.0)
    }

    pub fn det(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Closed-form 2x2 inverse.
    ///
    /// Fails when the determinant is within epsilon of zero (a degenerate,
    /// zero-variance scatter); callers must route that case to a fallback
    /// rather than divide through a near-zero number.
    pub fn inverse(&self) -> Result<Mat2, SingularMatrixError> {
        let det = self.det();
        if det.abs() < DET_EPSILON {
            return Err(SingularMatrixError { det });
        }
        Ok(Mat2::new(
            self.d / det,
            -self.b / det,
            -self.c / det,
            self.a / det,
        ))
    }

    pub fn mul_vec(&self, v: &Vec2) -> Vec2 {
        Vec2::new(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y)
    }

    /// Quadratic form `v^T M v`, the core of the Mahalanobis distance.
    pub fn quadratic_form(&self, v: &Vec2) -> f64 {
        v.x * (self.a * v.x + self.b * v.y) + v.y * (self.c * v.x + self.d * v.y)
    }

    /// Element-wise average of a non-empty set of matrices (the
    /// shared-covariance comparison swaps this in for every class).
    pub fn average(mats: &[Mat2]) -> Mat2 {
        let mut acc = Mat2::new(0.0, 0.0, 0.0, 0.0);
        for m in mats {
            acc.a += m.a;
            acc.b += m.b;
            acc.c += m.c;
            acc.d += m.d;
        }
        let n = mats.len() as f64;
        Mat2::new(acc.a / n, acc.b / n, acc.c / n, acc.d / n)
    }
}

#[derive(Debug, Clone)]
pub struct SingularMatrixError {
    det: f64,
}

impl fmt::Display for SingularMatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "matrix is singular (determinant {:e} within epsilon of zero)",
            self.det
        )
    }
}

impl Error for SingularMatrixError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_roundtrip() {
        let m = Mat2::new(2.2, 1.4, 1.4, 1.6);
        let inv = m.inverse().unwrap();
        let id_a = m.a * inv.a + m.b * inv.c;
        let id_b = m.a * inv.b + m.b * inv.d;
        let id_c = m.c * inv.a + m.d * inv.c;
        let id_d = m.c * inv.b + m.d * inv.d;
        assert!((id_a - 1.0).abs() < 1e-12);
        assert!(id_b.abs() < 1e-12);
        assert!(id_c.abs() < 1e-12);
        assert!((id_d - 1.0).abs() < 1e-12);
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let m = Mat2::new(1.0, 2.0, 2.0, 4.0);
        assert!(m.inverse().is_err());
    }

    #[test]
    fn average_is_elementwise() {
        let avg = Mat2::average(&[Mat2::identity(), Mat2::new(2.2, 1.4, 1.4, 1.6)]);
        assert_eq!(avg, Mat2::new(1.6, 0.7, 0.7, 1.3));
    }

    #[test]
    fn quadratic_form_identity_is_squared_length() {
        let d = Vec2::new(3.0, 4.0);
        assert_eq!(Mat2::identity().quadratic_form(&d), 25.0);
    }
}
