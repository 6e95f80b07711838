use kurbo::{ParamCurve as _, ParamCurveArclen as _};

use crate::foundation::core::{FrameSize, Point, QuadBez, Rect};

const ARCLEN_ACCURACY: f64 = 1e-6;

/// Quadratic connector between two anchors, in container-relative coordinates.
///
/// Pure derived data: rebuilt in full from the current anchor rects on every
/// recomputation, never patched in place.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BeamPath {
    /// Center of the `from` anchor.
    pub start: Point,
    /// Quadratic control point.
    pub control: Point,
    /// Center of the `to` anchor.
    pub end: Point,
    /// Container dimensions; sizes the drawing surface.
    pub frame: FrameSize,
}

/// Compute the beam between the centers of `from` and `to`, relative to `container`.
///
/// Returns `None` when any rect is unresolved. The control point sits on the chord
/// midpoint's x and `curvature` units above its y; the curve only bows vertically.
pub fn compute_beam_path(
    container: Option<Rect>,
    from: Option<Rect>,
    to: Option<Rect>,
    curvature: f64,
) -> Option<BeamPath> {
    let container = container?;
    let from = from?;
    let to = to?;

    let start = center_relative_to(container, from);
    let end = center_relative_to(container, to);

    let mid_x = (start.x + end.x) / 2.0;
    let mid_y = (start.y + end.y) / 2.0;

    Some(BeamPath {
        start,
        control: Point::new(mid_x, mid_y - curvature),
        end,
        frame: FrameSize::of_rect(container),
    })
}

// kurbo's closed form divides by zero when all three points coincide.
fn finite_arclen(q: &QuadBez) -> f64 {
    let len = q.arclen(ARCLEN_ACCURACY);
    if len.is_finite() { len } else { 0.0 }
}

fn center_relative_to(container: Rect, r: Rect) -> Point {
    Point::new(
        r.x0 - container.x0 + r.width() / 2.0,
        r.y0 - container.y0 + r.height() / 2.0,
    )
}

impl BeamPath {
    /// The curve as a kurbo quadratic.
    pub fn quad(&self) -> QuadBez {
        QuadBez::new(self.start, self.control, self.end)
    }

    /// Arc length of the full curve.
    pub fn length(&self) -> f64 {
        finite_arclen(&self.quad())
    }

    /// True when the curve collapses to a single point.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.control && self.control == self.end
    }

    /// Portion of the curve between two arc-length fractions in `[0, 1]`.
    pub fn segment(&self, from_frac: f64, to_frac: f64) -> QuadBez {
        let quad = self.quad();
        let total = finite_arclen(&quad);
        if total <= 0.0 {
            return QuadBez::new(self.start, self.start, self.start);
        }

        let a = from_frac.clamp(0.0, 1.0);
        let b = to_frac.clamp(0.0, 1.0).max(a);
        let param = |frac: f64| {
            if frac <= 0.0 {
                0.0
            } else if frac >= 1.0 {
                1.0
            } else {
                quad.inv_arclen(frac * total, ARCLEN_ACCURACY)
            }
        };
        quad.subsegment(param(a)..param(b))
    }

    /// SVG path data: `M sx,sy Q cx,cy ex,ey`.
    pub fn to_svg_d(&self) -> String {
        quad_svg_d(&self.quad())
    }
}

/// SVG path data for one quadratic segment.
pub fn quad_svg_d(q: &QuadBez) -> String {
    format!(
        "M {},{} Q {},{} {},{}",
        num(q.p0.x),
        num(q.p0.y),
        num(q.p1.x),
        num(q.p1.y),
        num(q.p2.x),
        num(q.p2.y)
    )
}

// Shortest round-trip formatting; `-0` prints as `0`.
fn num(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
