//! Quadratic discriminant scoring with per-class covariance.
//!
//! Each class is a fixed mean/covariance pair; a point is scored per class
//! by its Mahalanobis distance plus the log-determinant of that class's
//! covariance, and the lowest score wins. With a shared covariance swapped
//! in for every class the same machinery draws the LDA comparison variant.

use serde::{Deserialize, Serialize};

use crate::boundary::classifier_trait::Classifier;
use crate::error::GenerateError;
use crate::math::{Mat2, Vec2};

/// Per-class Gaussian statistics. These are illustrative constants in the
/// preset scenes, not estimates from the sampled points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassStats {
    pub mean: Vec2,
    pub cov: Mat2,
}

/// A classifier comparing quadratic discriminant scores across classes.
#[derive(Debug, Clone)]
pub struct QuadraticDiscriminant {
    classes: Vec<ScoredClass>,
}

#[derive(Debug, Clone, Copy)]
struct ScoredClass {
    mean: Vec2,
    inv_cov: Mat2,
    log_det: f64,
}

impl QuadraticDiscriminant {
    /// Build a discriminant from per-class statistics.
    ///
    /// Every covariance must be positive-definite: a singular one has no
    /// inverse, and a negative determinant has no log-determinant, so both
    /// are configuration errors rather than NaN scores.
    pub fn new(classes: &[ClassStats]) -> Result<Self, GenerateError> {
        let mut scored = Vec::with_capacity(classes.len());
        for stats in classes {
            let inv_cov = stats
                .cov
                .inverse()
                .map_err(|_| GenerateError::SingularMatrix)?;
            let det = stats.cov.det();
            if det < 0.0 {
                return Err(GenerateError::IndefiniteCovariance);
            }
            scored.push(ScoredClass {
                mean: stats.mean,
                inv_cov,
                log_det: det.ln(),
            });
        }
        Ok(QuadraticDiscriminant { classes: scored })
    }

    /// Same class means but one covariance (element-wise average) shared by
    /// every class, for visual A/B comparison against the quadratic fit.
    pub fn with_shared_covariance(classes: &[ClassStats]) -> Result<Self, GenerateError> {
        let shared = shared_covariance(classes);
        let stats: Vec<ClassStats> = classes
            .iter()
            .map(|c| ClassStats {
                mean: c.mean,
                cov: shared,
            })
            .collect();
        QuadraticDiscriminant::new(&stats)
    }

    /// Discriminant score for one class: `d^T cov^{-1} d + ln det(cov)`.
    pub fn score(&self, class: usize, x: f64, y: f64) -> f64 {
        let c = &self.classes[class];
        let d = Vec2::new(x - c.mean.x, y - c.mean.y);
        c.inv_cov.quadratic_form(&d) + c.log_det
    }
}

impl Classifier for QuadraticDiscriminant {
    /// Lower score wins; ties go to the lower class index.
    fn classify(&self, x: f64, y: f64) -> usize {
        let mut best = 0;
        let mut best_score = self.score(0, x, y);
        for k in 1..self.classes.len() {
            let s = self.score(k, x, y);
            if s < best_score {
                best = k;
                best_score = s;
            }
        }
        best
    }

    fn name(&self) -> &str {
        "quadratic discriminant"
    }
}

/// Element-wise average of the class covariances.
pub fn shared_covariance(classes: &[ClassStats]) -> Mat2 {
    let covs: Vec<Mat2> = classes.iter().map(|c| c.cov).collect();
    Mat2::average(&covs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_classes() -> [ClassStats; 2] {
        [
            ClassStats {
                mean: Vec2::new(3.5, 4.0),
                cov: Mat2::identity(),
            },
            ClassStats {
                mean: Vec2::new(6.5, 6.5),
                cov: Mat2::new(2.2, 1.4, 1.4, 1.6),
            },
        ]
    }

    #[test]
    fn points_near_a_mean_take_its_class() {
        let qda = QuadraticDiscriminant::new(&two_classes()).unwrap();
        assert_eq!(qda.classify(3.5, 4.0), 0);
        assert_eq!(qda.classify(6.5, 6.5), 1);
    }

    #[test]
    fn score_includes_log_determinant() {
        let qda = QuadraticDiscriminant::new(&two_classes()).unwrap();
        // At class 1's own mean the Mahalanobis term is zero, leaving only
        // ln det(cov) = ln(2.2*1.6 - 1.4*1.4).
        let expected = (2.2f64 * 1.6 - 1.4 * 1.4).ln();
        assert!((qda.score(1, 6.5, 6.5) - expected).abs() < 1e-12);
    }

    #[test]
    fn shared_covariance_averages_elementwise() {
        let shared = shared_covariance(&two_classes());
        assert!((shared.a - 1.6).abs() < 1e-12);
        assert!((shared.b - 0.7).abs() < 1e-12);
        assert!((shared.c - 0.7).abs() < 1e-12);
        assert!((shared.d - 1.3).abs() < 1e-12);
    }

    #[test]
    fn singular_covariance_is_rejected() {
        let bad = [ClassStats {
            mean: Vec2::new(0.0, 0.0),
            cov: Mat2::new(1.0, 2.0, 2.0, 4.0),
        }];
        assert!(matches!(
            QuadraticDiscriminant::new(&bad),
            Err(GenerateError::SingularMatrix)
        ));
    }

    #[test]
    fn indefinite_covariance_is_rejected() {
        // det = 1 - 4 = -3: invertible, but ln(det) would be NaN and every
        // score with it.
        let bad = [ClassStats {
            mean: Vec2::new(0.0, 0.0),
            cov: Mat2::new(1.0, 2.0, 2.0, 1.0),
        }];
        assert!(matches!(
            QuadraticDiscriminant::new(&bad),
            Err(GenerateError::IndefiniteCovariance)
        ));
    }
}
