//! Multinomial (softmax) scoring and pairwise boundary segments.

use serde::{Deserialize, Serialize};

use crate::boundary::classifier_trait::Classifier;
use crate::boundary::clip::clip_segment;
use crate::boundary::linear::Segment;
use crate::data::Domain;
use crate::math::Vec2;

const COEFF_EPSILON: f64 = 1e-10;

/// Fixed per-class weight vectors `(bias, w1, w2)` scored against
/// coordinates centered at `center` (the domain midpoint in the preset
/// scene).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftmaxModel {
    pub weights: Vec<[f64; 3]>,
    pub center: Vec2,
}

impl SoftmaxModel {
    pub fn new(weights: Vec<[f64; 3]>, center: Vec2) -> Self {
        SoftmaxModel { weights, center }
    }

    pub fn num_classes(&self) -> usize {
        self.weights.len()
    }

    /// Raw linear score of class `k` at `(x, y)`.
    pub fn score(&self, k: usize, x: f64, y: f64) -> f64 {
        let w = &self.weights[k];
        w[0] + w[1] * (x - self.center.x) + w[2] * (y - self.center.y)
    }

    /// Per-class probabilities via numerically stable softmax (the max
    /// score is subtracted before exponentiating).
    pub fn probabilities(&self, x: f64, y: f64) -> Vec<f64> {
        let scores: Vec<f64> = (0..self.num_classes())
            .map(|k| self.score(k, x, y))
            .collect();
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mut probs: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let sum: f64 = probs.iter().sum();
        for p in probs.iter_mut() {
            *p /= sum;
        }
        probs
    }

    /// Pairwise decision-boundary segments between all class pairs, clipped
    /// to `domain`.
    ///
    /// The boundary between classes `i` and `j` is the line where
    /// `score_i = score_j`, solved for y as a function of x; when the
    /// y-coefficient vanishes the boundary is the vertical line
    /// `x = cx - db/dw1` instead of a division by a near-zero number. Pairs
    /// whose line never enters the domain contribute no segment.
    pub fn boundary_segments(&self, domain: &Domain) -> Vec<Segment> {
        let mut segments = Vec::new();
        let n = self.num_classes();
        for i in 0..n {
            for j in (i + 1)..n {
                if let Some(seg) = self.pair_boundary(i, j, domain) {
                    segments.push(seg);
                }
            }
        }
        segments
    }

    fn pair_boundary(&self, i: usize, j: usize, domain: &Domain) -> Option<Segment> {
        let (cx, cy) = (self.center.x, self.center.y);
        let db = self.weights[i][0] - self.weights[j][0];
        let dw1 = self.weights[i][1] - self.weights[j][1];
        let dw2 = self.weights[i][2] - self.weights[j][2];

        // db + dw1*(x - cx) + dw2*(y - cy) = 0
        if dw2.abs() > COEFF_EPSILON {
            let y_at = |x: f64| cy - (db + dw1 * (x - cx)) / dw2;
            let (x1, x2) = (domain.x_min, domain.x_max);
            clip_segment(x1, y_at(x1), x2, y_at(x2), domain).map(|(x1, y1, x2, y2)| {
                Segment {
                    x1,
                    y1,
                    x2,
                    y2,
                    classes: (i, j),
                }
            })
        } else if dw1.abs() > COEFF_EPSILON {
            let xv = cx - db / dw1;
            if xv >= domain.x_min && xv <= domain.x_max {
                Some(Segment {
                    x1: xv,
                    y1: domain.y_min,
                    x2: xv,
                    y2: domain.y_max,
                    classes: (i, j),
                })
            } else {
                None
            }
        } else {
            // Identical weight rows: the scores never differ.
            None
        }
    }
}

impl Classifier for SoftmaxModel {
    /// Arg-max probability (equivalently arg-max score).
    fn classify(&self, x: f64, y: f64) -> usize {
        let probs = self.probabilities(x, y);
        let mut best = 0;
        for k in 1..probs.len() {
            if probs[k] > probs[best] {
                best = k;
            }
        }
        best
    }

    fn name(&self) -> &str {
        "softmax"
    }
}
