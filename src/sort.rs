// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Contiguous curve sorting.
//!
//! Reorders and reorients an unordered bag of curve segments that is known
//! to form exactly one closed loop, so that consecutive segments chain
//! end-to-start.

use crate::curve::CurveSegment;
use crate::error::{Error, Result};

/// Sort a list of curves in place to make them correctly ordered and
/// oriented to form a closed loop.
///
/// For each position, the remaining segments are scanned for one whose
/// start point lies within `tolerance` of the current end point (swapped
/// into place) or whose end point does (reversed, then swapped into
/// place). The first match found wins; when several segments match within
/// tolerance the chaining is arbitrary but deterministic. The final
/// segment has no successor and is trivially accepted.
///
/// Fails with [`Error::NonContiguous`] when some segment has no
/// continuation, which signals malformed source topology.
pub fn sort_curves_contiguous(curves: &mut [CurveSegment], tolerance: f64) -> Result<()> {
    let n = curves.len();

    for i in 0..n {
        let end_point = curves[i].end();

        let mut found = i + 1 >= n;

        for j in (i + 1)..n {
            // match end->start: this is the next curve
            if (curves[j].start() - end_point).norm() < tolerance {
                curves.swap(i + 1, j);
                found = true;
                break;
            }

            // match end->end: reverse the next curve
            if (curves[j].end() - end_point).norm() < tolerance {
                curves.swap(i + 1, j);
                curves[i + 1] = curves[i + 1].reversed();
                found = true;
                break;
            }
        }

        if !found {
            return Err(Error::NonContiguous { index: i });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> CurveSegment {
        CurveSegment::line(Point3::new(x0, y0, 0.0), Point3::new(x1, y1, 0.0))
    }

    fn assert_contiguous(curves: &[CurveSegment], tolerance: f64) {
        for w in curves.windows(2) {
            assert!(
                (w[1].start() - w[0].end()).norm() < tolerance,
                "segment end {:?} does not meet next start {:?}",
                w[0].end(),
                w[1].start()
            );
        }
        let first = curves.first().unwrap();
        let last = curves.last().unwrap();
        assert!((first.start() - last.end()).norm() < tolerance);
    }

    #[test]
    fn sorts_scrambled_reversed_square() {
        // square segments in scrambled order with random reversal
        let mut curves = vec![
            line(0.0, 0.0, 10.0, 0.0),   // A
            line(10.0, 10.0, 10.0, 0.0), // B reversed
            line(0.0, 10.0, 10.0, 10.0), // C reversed
            line(0.0, 0.0, 0.0, 10.0),   // D reversed
        ];
        sort_curves_contiguous(&mut curves, 1e-3).unwrap();
        assert_contiguous(&curves, 1e-3);
    }

    #[test]
    fn sorting_is_deterministic() {
        let make = || {
            vec![
                line(0.0, 0.0, 10.0, 0.0),
                line(10.0, 10.0, 10.0, 0.0),
                line(0.0, 10.0, 10.0, 10.0),
                line(0.0, 0.0, 0.0, 10.0),
            ]
        };
        let mut a = make();
        let mut b = make();
        sort_curves_contiguous(&mut a, 1e-3).unwrap();
        sort_curves_contiguous(&mut b, 1e-3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tolerates_small_endpoint_gaps() {
        let mut curves = vec![
            line(0.0, 0.0, 10.0, 0.0005), // slightly off
            line(10.0, 10.0, 0.0, 10.0),
            line(10.0, 0.0, 10.0, 10.0),
            line(0.0, 10.0, 0.0, 0.0),
        ];
        sort_curves_contiguous(&mut curves, 1e-2).unwrap();
        assert_contiguous(&curves, 1e-2);
    }

    #[test]
    fn dangling_segment_is_non_contiguous() {
        let mut curves = vec![
            line(0.0, 0.0, 10.0, 0.0),
            line(10.0, 0.0, 10.0, 10.0),
            // unconnected extra segment
            line(50.0, 50.0, 60.0, 50.0),
        ];
        let err = sort_curves_contiguous(&mut curves, 1e-3).unwrap_err();
        assert!(matches!(err, Error::NonContiguous { .. }));
    }

    #[test]
    fn single_segment_is_trivially_accepted() {
        let mut curves = vec![line(0.0, 0.0, 1.0, 0.0)];
        sort_curves_contiguous(&mut curves, 1e-3).unwrap();
    }

    #[test]
    fn empty_input_is_accepted() {
        sort_curves_contiguous(&mut [], 1e-3).unwrap();
    }
}
