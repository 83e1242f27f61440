// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plan-view curve segments consumed from the geometry kernel.
//!
//! Only bounded lines and circular arcs are supported. Arcs are carried in
//! three-point form (start, end, and a point on the arc halfway between
//! them), which survives reversal without any parameter bookkeeping.

use nalgebra::{Matrix4, Point2, Point3};
use smallvec::{smallvec, SmallVec};

/// Epsilon for the collinearity test when recovering an arc's centre.
const COLLINEAR_EPS: f64 = 1e-9;

/// Point buffer returned by tessellation.
pub type PointBuffer = SmallVec<[Point3<f64>; 8]>;

/// A bounded curve segment: a straight line or a circular arc.
///
/// Coordinates are model coordinates in feet. Arcs are assumed to lie in a
/// horizontal plane, which holds for plan-view silhouette output.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveSegment {
    Line {
        p0: Point3<f64>,
        p1: Point3<f64>,
    },
    Arc {
        start: Point3<f64>,
        end: Point3<f64>,
        /// Point on the arc at parameter 0.5.
        mid: Point3<f64>,
    },
}

impl CurveSegment {
    /// Create a line segment.
    pub fn line(p0: Point3<f64>, p1: Point3<f64>) -> Self {
        Self::Line { p0, p1 }
    }

    /// Create a three-point arc.
    pub fn arc(start: Point3<f64>, end: Point3<f64>, mid: Point3<f64>) -> Self {
        Self::Arc { start, end, mid }
    }

    /// Start point.
    pub fn start(&self) -> Point3<f64> {
        match self {
            Self::Line { p0, .. } => *p0,
            Self::Arc { start, .. } => *start,
        }
    }

    /// End point.
    pub fn end(&self) -> Point3<f64> {
        match self {
            Self::Line { p1, .. } => *p1,
            Self::Arc { end, .. } => *end,
        }
    }

    /// A new curve with the same geometry in the reverse direction.
    pub fn reversed(&self) -> Self {
        match self {
            Self::Line { p0, p1 } => Self::Line { p0: *p1, p1: *p0 },
            Self::Arc { start, end, mid } => Self::Arc {
                start: *end,
                end: *start,
                mid: *mid,
            },
        }
    }

    /// Point at parameter 0.5.
    pub fn midpoint(&self) -> Point3<f64> {
        match self {
            Self::Line { p0, p1 } => nalgebra::center(p0, p1),
            Self::Arc { mid, .. } => *mid,
        }
    }

    /// Curve length. For an arc whose three defining points are collinear
    /// the chord length is returned.
    pub fn length(&self) -> f64 {
        match self {
            Self::Line { p0, p1 } => (p1 - p0).norm(),
            Self::Arc { start, end, mid } => match arc_frame(start, end, mid) {
                Some(frame) => frame.radius * frame.sweep.abs(),
                None => (end - start).norm(),
            },
        }
    }

    /// Approximate the curve with a polyline. Lines yield their two
    /// endpoints; arcs are subdivided adaptively by radius and sweep. The
    /// first and last points are exactly the curve's start and end.
    pub fn tessellate(&self) -> PointBuffer {
        match self {
            Self::Line { p0, p1 } => smallvec![*p0, *p1],
            Self::Arc { start, end, mid } => {
                let Some(frame) = arc_frame(start, end, mid) else {
                    // degenerate arc, treat as a straight segment
                    return smallvec![*start, *end];
                };
                let full = circle_segment_count(frame.radius);
                let fraction = frame.sweep.abs() / (2.0 * std::f64::consts::PI);
                let n = ((full as f64 * fraction).ceil() as usize).max(1);

                let mut pts = PointBuffer::with_capacity(n + 1);
                pts.push(*start);
                for i in 1..n {
                    let angle = frame.start_angle + frame.sweep * (i as f64) / (n as f64);
                    let t = i as f64 / n as f64;
                    pts.push(Point3::new(
                        frame.center.x + frame.radius * angle.cos(),
                        frame.center.y + frame.radius * angle.sin(),
                        start.z + (end.z - start.z) * t,
                    ));
                }
                pts.push(*end);
                pts
            }
        }
    }

    /// Apply an affine transform to the curve's defining points.
    pub fn transformed(&self, m: &Matrix4<f64>) -> Self {
        let map = |p: &Point3<f64>| m.transform_point(p);
        match self {
            Self::Line { p0, p1 } => Self::Line {
                p0: map(p0),
                p1: map(p1),
            },
            Self::Arc { start, end, mid } => Self::Arc {
                start: map(start),
                end: map(end),
                mid: map(mid),
            },
        }
    }
}

/// Circle parameters recovered from an arc's three defining points.
struct ArcFrame {
    center: Point2<f64>,
    radius: f64,
    start_angle: f64,
    /// Signed sweep from the start angle; positive is counter-clockwise.
    sweep: f64,
}

/// Recover centre, radius and signed sweep from three points on an arc,
/// projected to the XY plane. Returns None when the points are collinear.
fn arc_frame(start: &Point3<f64>, end: &Point3<f64>, mid: &Point3<f64>) -> Option<ArcFrame> {
    let (ax, ay) = (start.x, start.y);
    let (bx, by) = (mid.x, mid.y);
    let (cx, cy) = (end.x, end.y);

    let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));
    if d.abs() < COLLINEAR_EPS {
        return None;
    }

    let a2 = ax * ax + ay * ay;
    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;
    let ux = (a2 * (by - cy) + b2 * (cy - ay) + c2 * (ay - by)) / d;
    let uy = (a2 * (cx - bx) + b2 * (ax - cx) + c2 * (bx - ax)) / d;

    let center = Point2::new(ux, uy);
    let radius = (ax - ux).hypot(ay - uy);

    let start_angle = (ay - uy).atan2(ax - ux);
    let end_angle = (cy - uy).atan2(cx - ux);
    let mid_angle = (by - uy).atan2(bx - ux);

    let tau = 2.0 * std::f64::consts::PI;
    // counter-clockwise sweep from start to end, and the counter-clockwise
    // offset of the interior point; the interior point decides direction
    let ccw_sweep = (end_angle - start_angle).rem_euclid(tau);
    let ccw_mid = (mid_angle - start_angle).rem_euclid(tau);

    let sweep = if ccw_mid <= ccw_sweep {
        ccw_sweep
    } else {
        ccw_sweep - tau
    };

    Some(ArcFrame {
        center,
        radius,
        start_angle,
        sweep,
    })
}

/// Adaptive segment count for a full circle of the given radius in feet;
/// smaller circles need fewer segments.
#[inline]
fn circle_segment_count(radius: f64) -> usize {
    ((radius.sqrt() * 8.0).ceil() as usize).clamp(8, 32)
}
