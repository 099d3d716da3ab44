//! Empirical summary statistics over draws and point sets.
//!
//! Used by the scene builders for debug summaries and by the tests that
//! check the Gaussian draw statistics and cluster shapes against their
//! generating parameters.

use ndarray::{Array2, Axis};
use statrs::statistics::Statistics;

use crate::math::Mat2;

/// Sample mean of a sequence of draws.
pub fn mean(values: &[f64]) -> f64 {
    values.mean()
}

/// Unbiased sample variance (n - 1 denominator).
pub fn variance(values: &[f64]) -> f64 {
    values.variance()
}

/// Component-wise mean of a 2D point set.
pub fn mean_point(points: &[(f64, f64)]) -> (f64, f64) {
    let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
    (xs.mean(), ys.mean())
}

/// Empirical 2x2 covariance of a point set (n - 1 denominator).
///
/// Panics if fewer than two points are given.
pub fn empirical_covariance(points: &[(f64, f64)]) -> Mat2 {
    assert!(points.len() >= 2, "covariance needs at least two points");

    let n = points.len();
    let mut data = Array2::<f64>::zeros((n, 2));
    for (i, &(x, y)) in points.iter().enumerate() {
        data[(i, 0)] = x;
        data[(i, 1)] = y;
    }
    // mean_axis over a non-empty axis cannot fail
    let means = data.mean_axis(Axis(0)).unwrap();

    let mut cov = Mat2::new(0.0, 0.0, 0.0, 0.0);
    for i in 0..n {
        let dx = data[(i, 0)] - means[0];
        let dy = data[(i, 1)] - means[1];
        cov.a += dx * dx;
        cov.b += dx * dy;
        cov.c += dy * dx;
        cov.d += dy * dy;
    }
    let denom = (n - 1) as f64;
    Mat2::new(cov.a / denom, cov.b / denom, cov.c / denom, cov.d / denom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{sample_clusters, ClusterShape, ClusterSpec, Domain};
    use crate::math::Vec2;
    use crate::rng::Lcg;

    #[test]
    fn mean_and_variance_of_a_known_sample() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&values) - 5.0).abs() < 1e-12);
        // Sum of squared deviations is 32, n - 1 = 7.
        assert!((variance(&values) - 32.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn sheared_cluster_covariance_roughly_matches_its_shape() {
        // x = a*u + b*v, y = c*u + d*v with unit normals gives
        // cov = [[a^2 + b^2, a*c + b*d], [a*c + b*d, c^2 + d^2]].
        let (a, b, c, d) = (1.2, 0.4, 0.4, 1.2);
        let spec = ClusterSpec::new(
            Vec2::new(50.0, 50.0), // far from the clamp range
            ClusterShape::Sheared { a, b, c, d },
            4000,
            0,
        );
        let wide = Domain::new(0.0, 100.0, 0.0, 100.0);
        let mut rng = Lcg::new(77);
        let points = sample_clusters(&mut rng, &[spec], &wide).unwrap();
        let coords: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
        let cov = empirical_covariance(&coords);

        assert!((cov.a - (a * a + b * b)).abs() < 0.15);
        assert!((cov.b - (a * c + b * d)).abs() < 0.15);
        assert!((cov.d - (c * c + d * d)).abs() < 0.15);
    }
}
