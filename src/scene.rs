//! One-shot scene generation: PRNG -> cluster sampler -> boundary solver.
//!
//! A `Scene` is the complete renderer hand-off for one model diagram:
//! points, a boundary representation, a classify function and the canvas
//! configuration. Scenes are value objects; generation is a single
//! non-interruptible pass and nothing is mutated afterward. Changing a
//! hyperparameter means generating a fresh scene from a new `SceneSpec`.

use anyhow::{Context, Result};

pub use crate::boundary::BoundaryRepr;

use crate::boundary::epochs::EpochTrack;
use crate::boundary::factory::solve;
use crate::boundary::linear::LinearBoundary;
use crate::boundary::logistic::boundary_for_c;
use crate::boundary::quadratic::ClassStats;
use crate::boundary::table::BoundaryTable;
use crate::boundary::Classifier;
use crate::config::{DiagramConfig, ModelKind, SolverSpec};
use crate::data::{sample_clusters, ClusterShape, ClusterSpec, Point};
use crate::math::{Mat2, Vec2};
use crate::rng::Lcg;
use crate::stats;

/// Declarative recipe for one diagram: the PRNG seed, sampling margin,
/// cluster layout and the solver that produces the boundary. The six
/// preset constructors below build these; `generate` runs them.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSpec {
    pub kind: ModelKind,
    pub seed: u32,
    /// Margin subtracted from every domain edge before clamping samples.
    pub margin: f64,
    pub clusters: Vec<ClusterSpec>,
    pub solver: SolverSpec,
}

/// A fully generated diagram scene.
pub struct Scene {
    pub kind: ModelKind,
    pub config: DiagramConfig,
    pub points: Vec<Point>,
    pub repr: BoundaryRepr,
    pub classifier: Box<dyn Classifier>,
    /// Alternate classifier for A/B comparison (the QDA scene carries its
    /// shared-covariance LDA variant here).
    pub comparison: Option<Box<dyn Classifier>>,
    /// Unit projection direction, where the model has one (LDA).
    pub direction: Option<Vec2>,
}

/// Run a `SceneSpec` end to end: seed the PRNG, sample the clusters into
/// the shrunken domain, then solve the boundary against the samples.
pub fn generate(spec: &SceneSpec) -> Result<Scene> {
    let config = DiagramConfig::default();
    let mut rng = Lcg::new(spec.seed);
    let points = sample_clusters(&mut rng, &spec.clusters, &config.domain.shrink(spec.margin))
        .with_context(|| format!("sampling {} clusters", spec.kind))?;

    let solution = solve(&spec.solver, &points, &config.domain)
        .with_context(|| format!("solving {} boundary", spec.kind))?;

    let scene = Scene {
        kind: spec.kind,
        config,
        points,
        repr: solution.repr,
        classifier: solution.classifier,
        comparison: solution.comparison,
        direction: solution.direction,
    };
    scene.log_summary();
    Ok(scene)
}

impl Scene {
    /// Build the preset scene for `kind` with its default hyperparameters
    /// (logistic C = 1, ridge alpha = "1", perceptron epoch 9).
    pub fn build(kind: ModelKind) -> Result<Scene> {
        match kind {
            ModelKind::Lda => lda(),
            ModelKind::Qda => qda(),
            ModelKind::Logistic => logistic(1.0),
            ModelKind::Multinomial => multinomial(),
            ModelKind::Perceptron => perceptron(9),
            ModelKind::Ridge => ridge("1"),
        }
    }

    /// Evaluate the classifier over an `nx` by `ny` grid of the domain for
    /// region rendering. Returned row-major, y varying slowest, grid nodes
    /// evenly spaced across the domain including both borders.
    pub fn classify_grid(&self, nx: usize, ny: usize) -> Vec<usize> {
        assert!(nx >= 2 && ny >= 2, "grid needs at least 2 nodes per axis");
        let d = &self.config.domain;
        let mut grid = Vec::with_capacity(nx * ny);
        for j in 0..ny {
            let y = d.y_min + (d.y_max - d.y_min) * j as f64 / (ny - 1) as f64;
            for i in 0..nx {
                let x = d.x_min + (d.x_max - d.x_min) * i as f64 / (nx - 1) as f64;
                grid.push(self.classifier.classify(x, y));
            }
        }
        grid
    }

    fn log_summary(&self) {
        for class in 0..=self.points.iter().map(|p| p.class).max().unwrap_or(0) {
            let coords: Vec<(f64, f64)> = self
                .points
                .iter()
                .filter(|p| p.class == class)
                .map(|p| (p.x, p.y))
                .collect();
            if coords.is_empty() {
                continue;
            }
            let (mx, my) = stats::mean_point(&coords);
            log::debug!(
                "{}: class {} has {} points, empirical mean ({:.2}, {:.2})",
                self.classifier.name(),
                class,
                coords.len(),
                mx,
                my
            );
        }
    }
}

/// Spec for the logistic regression scene (seed 42): two overlapping
/// clusters and a boundary parametrized by the inverse regularization
/// strength `C`.
pub fn logistic_spec(c: f64) -> SceneSpec {
    SceneSpec {
        kind: ModelKind::Logistic,
        seed: 42,
        margin: 0.2,
        clusters: vec![
            ClusterSpec::new(
                Vec2::new(3.0, 6.0),
                ClusterShape::Diagonal { sx: 1.3, sy: 1.5 },
                25,
                0,
            ),
            ClusterSpec::new(
                Vec2::new(7.0, 4.0),
                ClusterShape::Diagonal { sx: 1.3, sy: 1.5 },
                25,
                1,
            ),
        ],
        solver: SolverSpec::Linear {
            boundary: boundary_for_c(c),
        },
    }
}

pub fn logistic(c: f64) -> Result<Scene> {
    generate(&logistic_spec(c))
}

/// Spec for the multinomial scene (seed 55): three clusters and pairwise
/// softmax boundary segments. The per-class weight rows (bias, w1, w2)
/// score coordinates centered at the domain midpoint: class 0 favours low
/// x / high y, class 1 high x / high y, class 2 mid x / low y.
pub fn multinomial_spec() -> SceneSpec {
    let shape = ClusterShape::Diagonal { sx: 1.1, sy: 1.1 };
    SceneSpec {
        kind: ModelKind::Multinomial,
        seed: 55,
        margin: 0.2,
        clusters: vec![
            ClusterSpec::new(Vec2::new(2.5, 7.0), shape, 20, 0),
            ClusterSpec::new(Vec2::new(7.5, 7.0), shape, 20, 1),
            ClusterSpec::new(Vec2::new(5.0, 2.5), shape, 20, 2),
        ],
        solver: SolverSpec::Softmax {
            weights: vec![
                [-2.0, -1.5, 1.2],
                [-2.0, 1.5, 1.2],
                [2.0, 0.0, -1.8],
            ],
            center: (5.0, 5.0),
        },
    }
}

pub fn multinomial() -> Result<Scene> {
    generate(&multinomial_spec())
}

/// Spec for the LDA scene (seed 77): two correlated clusters; the boundary
/// and projection direction are fit from the sampled points.
pub fn lda_spec() -> SceneSpec {
    let shape = ClusterShape::Sheared {
        a: 1.2,
        b: 0.4,
        c: 0.4,
        d: 1.2,
    };
    SceneSpec {
        kind: ModelKind::Lda,
        seed: 77,
        margin: 0.2,
        clusters: vec![
            ClusterSpec::new(Vec2::new(3.0, 3.5), shape, 25, 0),
            ClusterSpec::new(Vec2::new(7.0, 6.5), shape, 25, 1),
        ],
        solver: SolverSpec::FitLda,
    }
}

pub fn lda() -> Result<Scene> {
    generate(&lda_spec())
}

/// Spec for the QDA scene (seed 66): a circular and an elongated rotated
/// cluster, with fixed per-class covariance constants. The comparison slot
/// carries the shared-covariance LDA variant.
pub fn qda_spec() -> SceneSpec {
    SceneSpec {
        kind: ModelKind::Qda,
        seed: 66,
        margin: 0.2,
        clusters: vec![
            ClusterSpec::new(
                Vec2::new(3.5, 4.0),
                ClusterShape::Diagonal { sx: 1.0, sy: 1.0 },
                25,
                0,
            ),
            ClusterSpec::new(
                Vec2::new(6.5, 6.5),
                ClusterShape::Rotated {
                    sx: 2.0,
                    sy: 0.6,
                    angle: 0.7,
                },
                25,
                1,
            ),
        ],
        solver: SolverSpec::Quadratic {
            classes: vec![
                ClassStats {
                    mean: Vec2::new(3.5, 4.0),
                    cov: Mat2::identity(),
                },
                ClassStats {
                    mean: Vec2::new(6.5, 6.5),
                    cov: Mat2::new(2.2, 1.4, 1.4, 1.6),
                },
            ],
            shared_comparison: true,
        },
    }
}

pub fn qda() -> Result<Scene> {
    generate(&qda_spec())
}

/// The ridge scene's boundary table: exact coefficients per regularization
/// strength alpha, `"1"` doubling as the fallback entry.
pub fn ridge_table() -> BoundaryTable {
    BoundaryTable::new(ridge_entries(), "1")
}

fn ridge_entries() -> Vec<(String, LinearBoundary)> {
    vec![
        ("0.01".to_string(), LinearBoundary::new(-7.8, 0.85, 0.75)),
        ("0.1".to_string(), LinearBoundary::new(-7.5, 0.82, 0.72)),
        ("1".to_string(), LinearBoundary::new(-7.0, 0.78, 0.68)),
        ("10".to_string(), LinearBoundary::new(-6.2, 0.70, 0.62)),
        ("100".to_string(), LinearBoundary::new(-5.5, 0.60, 0.55)),
    ]
}

/// Spec for the ridge classifier scene (seed 33): the boundary is looked up
/// by discrete alpha key; unrecognized keys fall back to the `"1"` entry.
pub fn ridge_spec(alpha: &str) -> SceneSpec {
    let shape = ClusterShape::Diagonal { sx: 1.5, sy: 1.5 };
    SceneSpec {
        kind: ModelKind::Ridge,
        seed: 33,
        margin: 0.3,
        clusters: vec![
            ClusterSpec::new(Vec2::new(3.5, 3.5), shape, 25, 0),
            ClusterSpec::new(Vec2::new(6.5, 6.5), shape, 25, 1),
        ],
        solver: SolverSpec::Table {
            entries: ridge_entries(),
            fallback: "1".to_string(),
            key: alpha.to_string(),
        },
    }
}

pub fn ridge(alpha: &str) -> Result<Scene> {
    generate(&ridge_spec(alpha))
}

/// The perceptron's simulated training run: 10 epochs of progressively
/// better separation, the last two identical (converged).
pub fn perceptron_epochs() -> EpochTrack {
    EpochTrack::new(perceptron_snapshots())
}

fn perceptron_snapshots() -> Vec<LinearBoundary> {
    vec![
        LinearBoundary::new(-1.5, 0.3, 0.1),
        LinearBoundary::new(-3.0, 0.5, 0.3),
        LinearBoundary::new(-4.5, 0.6, 0.5),
        LinearBoundary::new(-5.5, 0.7, 0.6),
        LinearBoundary::new(-6.2, 0.75, 0.65),
        LinearBoundary::new(-6.8, 0.78, 0.68),
        LinearBoundary::new(-7.2, 0.80, 0.70),
        LinearBoundary::new(-7.4, 0.81, 0.71),
        LinearBoundary::new(-7.5, 0.82, 0.72),
        LinearBoundary::new(-7.5, 0.82, 0.72),
    ]
}

/// Spec for the perceptron scene (seed 88) at a chosen training epoch;
/// indices past the last epoch clamp to the converged boundary.
pub fn perceptron_spec(epoch: usize) -> SceneSpec {
    let shape = ClusterShape::Diagonal { sx: 1.2, sy: 1.2 };
    SceneSpec {
        kind: ModelKind::Perceptron,
        seed: 88,
        margin: 0.5,
        clusters: vec![
            ClusterSpec::new(Vec2::new(3.0, 3.0), shape, 20, 0),
            ClusterSpec::new(Vec2::new(7.0, 7.0), shape, 20, 1),
        ],
        solver: SolverSpec::Epoch {
            snapshots: perceptron_snapshots(),
            epoch,
        },
    }
}

pub fn perceptron(epoch: usize) -> Result<Scene> {
    generate(&perceptron_spec(epoch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenes_are_reproducible() {
        let a = lda().unwrap();
        let b = lda().unwrap();
        assert_eq!(a.points, b.points);
        assert_eq!(a.repr, b.repr);
    }

    #[test]
    fn specs_roundtrip_through_generate() {
        let spec = perceptron_spec(3);
        let a = generate(&spec).unwrap();
        let b = generate(&spec).unwrap();
        assert_eq!(a.points, b.points);
        assert_eq!(a.repr, b.repr);
    }

    #[test]
    fn lda_scene_exposes_a_unit_direction() {
        let scene = lda().unwrap();
        let dir = scene.direction.unwrap();
        assert!((dir.length() - 1.0).abs() < 1e-12);
        assert!(matches!(scene.repr, BoundaryRepr::Line(_)));
    }

    #[test]
    fn multinomial_scene_has_three_pairwise_segments() {
        let scene = multinomial().unwrap();
        match &scene.repr {
            BoundaryRepr::Segments(segs) => {
                assert_eq!(segs.len(), 3);
                let pairs: Vec<(usize, usize)> = segs.iter().map(|s| s.classes).collect();
                assert!(pairs.contains(&(0, 1)));
                assert!(pairs.contains(&(0, 2)));
                assert!(pairs.contains(&(1, 2)));
            }
            other => panic!("expected segments, got {:?}", other),
        }
    }

    #[test]
    fn qda_scene_carries_the_lda_comparison() {
        let scene = qda().unwrap();
        assert!(scene.comparison.is_some());
        assert!(matches!(scene.repr, BoundaryRepr::Discriminant));
    }

    #[test]
    fn ridge_unknown_alpha_matches_the_default_entry() {
        let fallback = ridge("999").unwrap();
        let default = ridge("1").unwrap();
        assert_eq!(fallback.repr, default.repr);
        assert_eq!(fallback.points, default.points);
    }

    #[test]
    fn classify_grid_covers_every_node() {
        let scene = logistic(1.0).unwrap();
        let grid = scene.classify_grid(21, 11);
        assert_eq!(grid.len(), 21 * 11);
        assert!(grid.iter().any(|&c| c == 0));
        assert!(grid.iter().any(|&c| c == 1));
    }
}
