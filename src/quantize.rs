// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tessellation and quantization of contiguous curve sequences.
//!
//! Turns a contiguous, oriented sequence of curves into a deduplicated
//! sequence of integer-quantized grid points.

use crate::config::LoopConfig;
use crate::curve::CurveSegment;
use crate::error::{Error, Result};
use crate::loops::Loop;
use crate::point::GridPoint;
use crate::units::FOOT_TO_MM;

/// Build a [`Loop`] from a contiguous, oriented curve sequence.
///
/// Each curve contributes its quantized start point. Curves longer than
/// the configured minimum are tessellated when tessellation is enabled,
/// and the tessellation's interior points are appended as well; the end
/// point is deferred to the next curve's start so the loop's
/// adjacent-duplicate suppression keeps working. A tessellation that
/// degenerates to two points is treated as a straight segment.
///
/// The input must already chain end-to-start; the output of
/// [`crate::sort::sort_curves_contiguous`] or kernel curves oriented
/// following a face both qualify. Consecutive continuity is checked only
/// in debug builds. The closing gap between the last curve's end and the
/// loop's first point is always checked and yields [`Error::OpenLoop`]
/// when it exceeds the matching tolerance, since that indicates an
/// upstream sorting or orientation defect.
pub fn loop_from_curves(curves: &[CurveSegment], config: &LoopConfig) -> Result<Loop> {
    let mut result = Loop::with_capacity(curves.len());

    let mut loop_start = None;
    let mut prev_end: Option<nalgebra::Point3<f64>> = None;

    for curve in curves {
        let p = curve.start();
        let q = curve.end();

        debug_assert!(
            prev_end.map_or(true, |e| (e - p).norm() < config.match_tolerance),
            "expected last endpoint to equal current start point"
        );

        if loop_start.is_none() {
            loop_start = Some(p);
        }
        prev_end = Some(q);

        let mut tessellated = false;

        if config.tessellate && config.min_tessellation_length < curve.length() {
            let pts = curve.tessellate();
            debug_assert!(pts.len() > 1, "expected at least two points");

            // a two-point tessellation is a straight line
            if pts.len() > 2 {
                for pt in &pts[..pts.len() - 1] {
                    result.push(GridPoint::from_feet(pt));
                }
                tessellated = true;
            }
        }

        // tessellation disabled, curve too short to tessellate, or
        // straight anyway: just add the start point
        if !tessellated {
            result.push(GridPoint::from_feet(&p));
        }
    }

    if let (Some(p0), Some(q)) = (loop_start, prev_end) {
        let gap = (q - p0).norm();
        if gap > config.match_tolerance {
            return Err(Error::OpenLoop {
                gap_mm: gap * FOOT_TO_MM,
            });
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use std::f64::consts::SQRT_2;

    fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> CurveSegment {
        CurveSegment::line(Point3::new(x0, y0, 0.0), Point3::new(x1, y1, 0.0))
    }

    fn square_10ft() -> Vec<CurveSegment> {
        vec![
            line(0.0, 0.0, 10.0, 0.0),
            line(10.0, 0.0, 10.0, 10.0),
            line(10.0, 10.0, 0.0, 10.0),
            line(0.0, 10.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn square_quantizes_to_four_points() {
        let result = loop_from_curves(&square_10ft(), &LoopConfig::default()).unwrap();
        assert_eq!(
            result.points(),
            &[
                GridPoint::new(0, 0),
                GridPoint::new(3048, 0),
                GridPoint::new(3048, 3048),
                GridPoint::new(0, 3048),
            ]
        );
        assert!(result.closed());
    }

    #[test]
    fn arc_contributes_interior_points() {
        // half circle of radius 5 ft closed by a diameter line
        let r = 5.0;
        let curves = vec![
            CurveSegment::arc(
                Point3::new(r, 0.0, 0.0),
                Point3::new(-r, 0.0, 0.0),
                Point3::new(0.0, r, 0.0),
            ),
            line(-r, 0.0, r, 0.0),
        ];
        let result = loop_from_curves(&curves, &LoopConfig::default()).unwrap();
        // more vertices than the two curve start points
        assert!(result.len() > 2, "got {} points", result.len());
        // all arc samples stay within the radius
        let bb = result.bounding_box();
        assert!(bb.max().y <= 5 * 305);
        assert!(bb.min().y >= 0);
    }

    #[test]
    fn tessellation_disabled_keeps_start_points_only() {
        let r = 5.0;
        let curves = vec![
            CurveSegment::arc(
                Point3::new(r, 0.0, 0.0),
                Point3::new(-r, 0.0, 0.0),
                Point3::new(0.0, r, 0.0),
            ),
            line(-r, 0.0, r, 0.0),
        ];
        let config = LoopConfig {
            tessellate: false,
            ..LoopConfig::default()
        };
        let result = loop_from_curves(&curves, &config).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn short_curves_are_not_tessellated() {
        // a tiny quarter arc below the minimum tessellation length
        let r = 0.05;
        let curves = vec![
            CurveSegment::arc(
                Point3::new(r, 0.0, 0.0),
                Point3::new(0.0, r, 0.0),
                Point3::new(r * SQRT_2 / 2.0, r * SQRT_2 / 2.0, 0.0),
            ),
            line(0.0, r, 0.0, 0.0),
            line(0.0, 0.0, r, 0.0),
        ];
        let result = loop_from_curves(&curves, &LoopConfig::default()).unwrap();
        // each curve contributes exactly its start point, and on the
        // millimetre grid some of those may collapse
        assert!(result.len() <= 3);
    }

    #[test]
    fn open_chain_fails_closure_check() {
        let curves = vec![
            line(0.0, 0.0, 10.0, 0.0),
            line(10.0, 0.0, 10.0, 10.0),
            // never returns to the start
        ];
        let err = loop_from_curves(&curves, &LoopConfig::default()).unwrap_err();
        match err {
            Error::OpenLoop { gap_mm } => assert!(gap_mm > 1000.0),
            other => panic!("expected OpenLoop, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_yields_empty_loop() {
        let result = loop_from_curves(&[], &LoopConfig::default()).unwrap();
        assert!(result.is_empty());
    }
}
