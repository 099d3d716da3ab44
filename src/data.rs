//! Data structures and sampling for the synthetic scatter datasets.
//!
//! This module defines `Point`, `Domain` and `ClusterSpec` and contains the
//! cluster sampler that turns a list of specs plus a seeded generator into
//! the flat, ordered point sequence a diagram is built from.

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;
use crate::math::Vec2;
use crate::rng::Lcg;

/// A labeled 2D sample. `class` indexes into the diagram palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub class: usize,
}

/// The rectangular plotting domain. Axis scaling and region sampling on the
/// renderer side both read from this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Domain {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Domain {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Domain shrunk by `margin` on every side. Sampled points are clamped
    /// into the shrunk rectangle so markers never touch the axes.
    pub fn shrink(&self, margin: f64) -> Domain {
        Domain {
            x_min: self.x_min + margin,
            x_max: self.x_max - margin,
            y_min: self.y_min + margin,
            y_max: self.y_max - margin,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    pub fn clamp_x(&self, x: f64) -> f64 {
        x.max(self.x_min).min(self.x_max)
    }

    pub fn clamp_y(&self, y: f64) -> f64 {
        y.max(self.y_min).min(self.y_max)
    }
}

impl Default for Domain {
    fn default() -> Self {
        Domain::new(0.0, 10.0, 0.0, 10.0)
    }
}

/// Covariance shaping applied to a pair of independent standard normals
/// `(u, v)` before the mean offset is added.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterShape {
    /// Axis-aligned scales: `x = sx*u`, `y = sy*v`.
    Diagonal { sx: f64, sy: f64 },
    /// Shear coefficients chosen so the empirical covariance matches the
    /// desired shape: `x = a*u + b*v`, `y = c*u + d*v`.
    Sheared { a: f64, b: f64, c: f64, d: f64 },
    /// Independently scaled normals rotated by a fixed angle (radians).
    Rotated { sx: f64, sy: f64, angle: f64 },
}

impl ClusterShape {
    fn offset(&self, u: f64, v: f64) -> (f64, f64) {
        match *self {
            ClusterShape::Diagonal { sx, sy } => (sx * u, sy * v),
            ClusterShape::Sheared { a, b, c, d } => (a * u + b * v, c * u + d * v),
            ClusterShape::Rotated { sx, sy, angle } => {
                let (su, sv) = (sx * u, sy * v);
                let (sin, cos) = angle.sin_cos();
                (su * cos - sv * sin, su * sin + sv * cos)
            }
        }
    }
}

/// A generative Gaussian blob: mean, shape, sample count and class label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterSpec {
    pub mean: Vec2,
    pub shape: ClusterShape,
    pub count: usize,
    pub class: usize,
}

impl ClusterSpec {
    pub fn new(mean: Vec2, shape: ClusterShape, count: usize, class: usize) -> Self {
        ClusterSpec {
            mean,
            shape,
            count,
            class,
        }
    }
}

/// Round to 2 decimal places for display stability.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Draw labeled points from a list of Gaussian cluster specs.
///
/// Sampling order matters for reproducibility: all of one cluster's points
/// are drawn before the next, two standard-normal draws per point in x, y
/// order. Each coordinate is clamped into `clamp` and rounded to 2
/// decimals.
///
/// A spec with `count == 0` is a configuration error and is rejected before
/// any PRNG state is consumed.
pub fn sample_clusters(
    rng: &mut Lcg,
    specs: &[ClusterSpec],
    clamp: &Domain,
) -> Result<Vec<Point>, GenerateError> {
    if let Some(idx) = specs.iter().position(|s| s.count == 0) {
        return Err(GenerateError::EmptyCluster(idx));
    }

    let total: usize = specs.iter().map(|s| s.count).sum();
    let mut points = Vec::with_capacity(total);

    for spec in specs {
        for _ in 0..spec.count {
            let u = rng.next_gaussian();
            let v = rng.next_gaussian();
            let (dx, dy) = spec.shape.offset(u, v);
            points.push(Point {
                x: round2(clamp.clamp_x(spec.mean.x + dx)),
                y: round2(clamp.clamp_y(spec.mean.y + dy)),
                class: spec.class,
            });
        }
    }

    log::debug!(
        "sampled {} points from {} clusters",
        points.len(),
        specs.len()
    );
    Ok(points)
}
