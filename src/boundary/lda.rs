//! Linear Discriminant Analysis fit from sampled points.
//!
//! Computes class means and the pooled within-class scatter over all
//! points, inverts the 2x2 scatter in closed form, and derives a boundary
//! through the midpoint of the class means, perpendicular to the
//! discriminant direction `w = Sw^{-1}(mean1 - mean0)`.

use crate::boundary::linear::LinearBoundary;
use crate::data::Point;
use crate::error::GenerateError;
use crate::math::{Mat2, Vec2};

/// Everything the LDA scene hands to the renderer: the boundary line, the
/// unit projection direction, and the statistics it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LdaSolution {
    pub boundary: LinearBoundary,
    pub direction: Vec2,
    pub mean0: Vec2,
    pub mean1: Vec2,
    pub scatter: Mat2,
}

/// Fit a two-class LDA boundary from labeled points.
///
/// The scatter matrix is the *unnormalized* sum of squared deviations from
/// each class's own mean, combined across both classes. A singular scatter
/// (degenerate, zero-variance input) is reported as an error; it cannot
/// occur for the shipped cluster constants.
pub fn fit_lda(points: &[Point]) -> Result<LdaSolution, GenerateError> {
    let (mean0, n0) = class_mean(points, 0);
    let (mean1, n1) = class_mean(points, 1);
    if n0 == 0 || n1 == 0 {
        return Err(GenerateError::EmptyCluster(if n0 == 0 { 0 } else { 1 }));
    }

    let mut scatter = Mat2::new(0.0, 0.0, 0.0, 0.0);
    for p in points {
        let mean = if p.class == 0 { mean0 } else { mean1 };
        let dx = p.x - mean.x;
        let dy = p.y - mean.y;
        scatter.a += dx * dx;
        scatter.b += dx * dy;
        scatter.c += dy * dx;
        scatter.d += dy * dy;
    }

    let inv = scatter
        .inverse()
        .map_err(|_| GenerateError::SingularMatrix)?;
    let direction = inv.mul_vec(&(mean1 - mean0)).normalized();

    // Boundary through the midpoint of the class means, perpendicular to
    // the discriminant direction:
    //   w.x * (x - mid.x) + w.y * (y - mid.y) = 0
    let mid = mean0.midpoint(&mean1);
    let boundary = LinearBoundary::new(-direction.dot(&mid), direction.x, direction.y);

    Ok(LdaSolution {
        boundary,
        direction,
        mean0,
        mean1,
        scatter,
    })
}

fn class_mean(points: &[Point], class: usize) -> (Vec2, usize) {
    let mut sum = Vec2::new(0.0, 0.0);
    let mut n = 0;
    for p in points.iter().filter(|p| p.class == class) {
        sum.x += p.x;
        sum.y += p.y;
        n += 1;
    }
    if n > 0 {
        sum.x /= n as f64;
        sum.y /= n as f64;
    }
    (sum, n)
}
