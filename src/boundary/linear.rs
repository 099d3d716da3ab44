//! Linear decision boundaries of the form `w0 + w1*x + w2*y = 0`.

use serde::{Deserialize, Serialize};

use crate::boundary::classifier_trait::Classifier;
use crate::boundary::clip::clip_segment;
use crate::data::Domain;

/// Coefficients below this are treated as vanished when extracting a line
/// segment for drawing.
const COEFF_EPSILON: f64 = 1e-10;

/// A line `w0 + w1*x + w2*y = 0`; the classification rule is the sign of
/// the evaluated expression (`>= 0` selects class 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearBoundary {
    pub w0: f64,
    pub w1: f64,
    pub w2: f64,
}

/// A drawable piece of a boundary, clipped to the plotting domain.
/// `classes` names the pair of competing classes the segment separates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub classes: (usize, usize),
}

impl LinearBoundary {
    pub fn new(w0: f64, w1: f64, w2: f64) -> Self {
        LinearBoundary { w0, w1, w2 }
    }

    /// Signed score of a point; positive side is class 1.
    pub fn score(&self, x: f64, y: f64) -> f64 {
        self.w0 + self.w1 * x + self.w2 * y
    }

    /// The drawable segment of this line inside `domain`.
    ///
    /// When the y-coefficient vanishes the line is vertical and is handled
    /// as `x = -w0/w1` directly rather than dividing by a near-zero
    /// coefficient. Returns `None` for a line that never enters the domain
    /// or whose coefficients have both vanished.
    pub fn segment(&self, domain: &Domain) -> Option<Segment> {
        let seg = if self.w2.abs() > COEFF_EPSILON {
            // y as a function of x across the full domain width, then clip.
            let y_at = |x: f64| -(self.w0 + self.w1 * x) / self.w2;
            clip_segment(
                domain.x_min,
                y_at(domain.x_min),
                domain.x_max,
                y_at(domain.x_max),
                domain,
            )
        } else if self.w1.abs() > COEFF_EPSILON {
            let xv = -self.w0 / self.w1;
            if xv >= domain.x_min && xv <= domain.x_max {
                Some((xv, domain.y_min, xv, domain.y_max))
            } else {
                None
            }
        } else {
            log::warn!("boundary has no usable line representation");
            None
        };

        seg.map(|(x1, y1, x2, y2)| Segment {
            x1,
            y1,
            x2,
            y2,
            classes: (0, 1),
        })
    }
}

impl Classifier for LinearBoundary {
    fn classify(&self, x: f64, y: f64) -> usize {
        if self.score(x, y) >= 0.0 {
            1
        } else {
            0
        }
    }

    fn name(&self) -> &str {
        "linear boundary"
    }
}
