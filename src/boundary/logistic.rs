//! Regularization-parametrized boundary for the logistic scene.
//!
//! The boundary coefficients are a smooth function of the inverse
//! regularization strength `C` rather than a learned fit: higher `C` means
//! less regularization and steeper coefficients, lower `C` shrinks them
//! toward zero. The line always passes through a fixed pivot point.

use itertools_num::linspace;

use crate::boundary::linear::LinearBoundary;
use crate::math::Vec2;

/// Base (unregularized) direction of the logistic boundary.
const BASE_W1: f64 = 2.0;
const BASE_W2: f64 = -1.0;

/// Pivot the boundary rotates around as `C` varies (the domain midpoint).
const PIVOT: Vec2 = Vec2 { x: 5.0, y: 5.0 };

/// Boundary for inverse regularization strength `C`.
///
/// `scale = 1 - 1/(1+C)` ranges from 0 (C = 0, fully shrunk) toward 1 for
/// large `C`; `w1, w2` are the base direction scaled by it, and `w0` is
/// solved so the line passes through the pivot.
pub fn boundary_for_c(c: f64) -> LinearBoundary {
    let scale = 1.0 - 1.0 / (1.0 + c);
    let w1 = BASE_W1 * scale;
    let w2 = BASE_W2 * scale;
    LinearBoundary::new(-(w1 * PIVOT.x + w2 * PIVOT.y), w1, w2)
}

/// The logistic sigmoid `1 / (1 + e^-t)`.
pub fn sigmoid(t: f64) -> f64 {
    1.0 / (1.0 + (-t).exp())
}

/// Sample the sigmoid over `t` in `[-6, 6]` at 0.1 steps, for the side
/// chart next to the scatter diagram.
pub fn sigmoid_curve() -> Vec<(f64, f64)> {
    linspace(-6.0, 6.0, 121).map(|t| (t, sigmoid(t))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_c_halves_the_base_direction() {
        let b = boundary_for_c(1.0);
        assert!((b.w1 - 1.0).abs() < 1e-12);
        assert!((b.w2 + 0.5).abs() < 1e-12);
        assert!((b.w0 + 2.5).abs() < 1e-12);
    }

    #[test]
    fn boundary_always_passes_through_the_pivot() {
        for &c in &[0.01, 0.1, 1.0, 10.0, 100.0] {
            let b = boundary_for_c(c);
            assert!(b.score(PIVOT.x, PIVOT.y).abs() < 1e-12, "C = {}", c);
        }
    }

    #[test]
    fn zero_c_shrinks_coefficients_to_zero() {
        let b = boundary_for_c(0.0);
        assert_eq!((b.w0, b.w1, b.w2), (0.0, 0.0, 0.0));
    }

    #[test]
    fn sigmoid_curve_spans_minus_six_to_six() {
        let curve = sigmoid_curve();
        assert_eq!(curve.len(), 121);
        assert_eq!(curve[0].0, -6.0);
        assert_eq!(curve[120].0, 6.0);
        assert!((curve[60].1 - 0.5).abs() < 1e-12);
    }
}
