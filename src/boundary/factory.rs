use anyhow::Result;

use crate::boundary::classifier_trait::Classifier;
use crate::boundary::epochs::EpochTrack;
use crate::boundary::lda::fit_lda;
use crate::boundary::linear::LinearBoundary;
use crate::boundary::quadratic::QuadraticDiscriminant;
use crate::boundary::softmax::SoftmaxModel;
use crate::boundary::table::BoundaryTable;
use crate::boundary::BoundaryRepr;
use crate::config::SolverSpec;
use crate::data::{Domain, Point};
use crate::error::GenerateError;
use crate::math::Vec2;

/// A fully solved boundary: the drawable representation, the classify
/// function, and the model-specific extras (comparison classifier, LDA
/// projection direction).
pub struct Solution {
    pub repr: BoundaryRepr,
    pub classifier: Box<dyn Classifier>,
    pub comparison: Option<Box<dyn Classifier>>,
    pub direction: Option<Vec2>,
}

impl std::fmt::Debug for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solution")
            .field("repr", &self.repr)
            .field("comparison", &self.comparison.is_some())
            .field("direction", &self.direction)
            .finish()
    }
}

impl Solution {
    fn line(boundary: LinearBoundary) -> Solution {
        Solution {
            repr: BoundaryRepr::Line(boundary),
            classifier: Box::new(boundary),
            comparison: None,
            direction: None,
        }
    }
}

/// Solve a `SolverSpec` against the sampled points and plotting domain.
/// Solvers are pure: the same spec, points and domain always produce the
/// same solution.
pub fn solve(spec: &SolverSpec, points: &[Point], domain: &Domain) -> Result<Solution> {
    match spec {
        SolverSpec::Linear { boundary } => Ok(Solution::line(*boundary)),

        SolverSpec::FitLda => {
            let sol = fit_lda(points)?;
            Ok(Solution {
                repr: BoundaryRepr::Line(sol.boundary),
                classifier: Box::new(sol.boundary),
                comparison: None,
                direction: Some(sol.direction),
            })
        }

        SolverSpec::Quadratic {
            classes,
            shared_comparison,
        } => {
            let discriminant = QuadraticDiscriminant::new(classes)?;
            let comparison: Option<Box<dyn Classifier>> = if *shared_comparison {
                Some(Box::new(QuadraticDiscriminant::with_shared_covariance(
                    classes,
                )?))
            } else {
                None
            };
            Ok(Solution {
                repr: BoundaryRepr::Discriminant,
                classifier: Box::new(discriminant),
                comparison,
                direction: None,
            })
        }

        SolverSpec::Softmax { weights, center } => {
            let model = SoftmaxModel::new(weights.clone(), Vec2::new(center.0, center.1));
            let segments = model.boundary_segments(domain);
            Ok(Solution {
                repr: BoundaryRepr::Segments(segments),
                classifier: Box::new(model),
                comparison: None,
                direction: None,
            })
        }

        SolverSpec::Table {
            entries,
            fallback,
            key,
        } => {
            let table = BoundaryTable::new(entries.clone(), fallback);
            Ok(Solution::line(table.get(key)))
        }

        SolverSpec::Epoch { snapshots, epoch } => {
            if snapshots.is_empty() {
                return Err(GenerateError::DegenerateBoundary.into());
            }
            let track = EpochTrack::new(snapshots.clone());
            Ok(Solution::line(track.at(*epoch)))
        }
    }
}

/// Build just the boxed classifier from a `SolverSpec`.
/// Currently this is a thin wrapper over `solve`.
pub fn build_classifier(
    spec: &SolverSpec,
    points: &[Point],
    domain: &Domain,
) -> Result<Box<dyn Classifier>> {
    Ok(solve(spec, points, domain)?.classifier)
}
