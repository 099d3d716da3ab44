//! Parametric (Liang-Barsky style) clipping of line segments to the
//! rectangular plotting domain.

use crate::data::Domain;

const EPS: f64 = 1e-12;

/// Clip the segment `(x1, y1) -> (x2, y2)` to `domain`.
///
/// Maintains `[tmin, tmax]` on the segment parameter and intersects it with
/// each of the four boundary half-planes. Returns `None` when the interval
/// becomes empty (segment fully outside); a segment already fully inside
/// comes back unchanged.
pub fn clip_segment(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    domain: &Domain,
) -> Option<(f64, f64, f64, f64)> {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let mut tmin = 0.0f64;
    let mut tmax = 1.0f64;

    let mut clip = |p: f64, q: f64| -> bool {
        if p.abs() < EPS {
            return q >= 0.0;
        }
        let r = q / p;
        if p < 0.0 {
            if r > tmax {
                return false;
            }
            if r > tmin {
                tmin = r;
            }
        } else {
            if r < tmin {
                return false;
            }
            if r < tmax {
                tmax = r;
            }
        }
        true
    };

    if !clip(-dx, x1 - domain.x_min) {
        return None;
    }
    if !clip(dx, domain.x_max - x1) {
        return None;
    }
    if !clip(-dy, y1 - domain.y_min) {
        return None;
    }
    if !clip(dy, domain.y_max - y1) {
        return None;
    }

    Some((
        x1 + tmin * dx,
        y1 + tmin * dy,
        x1 + tmax * dx,
        y1 + tmax * dy,
    ))
}
