// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integer 2D bounding box for collections of grid points.

use serde::{Deserialize, Serialize};

use crate::point::{flip, GridPoint};

/// Margin in millimetres around graphics when exporting the SVG view box.
const VIEW_BOX_MARGIN: i64 = 10;

/// An axis-aligned bounding box for a collection of 2D integer points.
///
/// Starts out empty (min at +infinity, max at -infinity) and widens
/// monotonically as points are inserted; it never shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    xmin: i64,
    ymin: i64,
    xmax: i64,
    ymax: i64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundingBox {
    /// Initialise to the empty sentinel.
    pub fn new() -> Self {
        Self {
            xmin: i64::MAX,
            ymin: i64::MAX,
            xmax: i64::MIN,
            ymax: i64::MIN,
        }
    }

    /// True if no point has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.xmax < self.xmin
    }

    /// Expand to contain the given point.
    pub fn expand_to_contain(&mut self, p: GridPoint) {
        self.xmin = self.xmin.min(p.x);
        self.ymin = self.ymin.min(p.y);
        self.xmax = self.xmax.max(p.x);
        self.ymax = self.ymax.max(p.y);
    }

    /// Expand to contain another bounding box.
    pub fn expand_to_contain_box(&mut self, other: &BoundingBox) {
        if !other.is_empty() {
            self.expand_to_contain(other.min());
            self.expand_to_contain(other.max());
        }
    }

    /// Lower left corner.
    pub fn min(&self) -> GridPoint {
        GridPoint::new(self.xmin, self.ymin)
    }

    /// Upper right corner.
    pub fn max(&self) -> GridPoint {
        GridPoint::new(self.xmax, self.ymax)
    }

    /// Centre point.
    pub fn midpoint(&self) -> GridPoint {
        GridPoint::new((self.xmin + self.xmax) / 2, (self.ymin + self.ymax) / 2)
    }

    pub fn width(&self) -> i64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> i64 {
        self.ymax - self.ymin
    }

    /// Aspect ratio, i.e. height over width.
    pub fn aspect_ratio(&self) -> f64 {
        self.height() as f64 / self.width() as f64
    }

    /// The four corner points in counter-clockwise order starting at the
    /// lower left.
    pub fn corners(&self) -> [GridPoint; 4] {
        [
            GridPoint::new(self.xmin, self.ymin),
            GridPoint::new(self.xmax, self.ymin),
            GridPoint::new(self.xmax, self.ymax),
            GridPoint::new(self.xmin, self.ymax),
        ]
    }

    /// The SVG viewBox of this bounding box, expanded by a fixed margin.
    pub fn svg_view_box(&self, flip_y: bool) -> String {
        let left = self.xmin - VIEW_BOX_MARGIN;
        let mut bottom = self.ymin - VIEW_BOX_MARGIN;
        let w = self.width() + 2 * VIEW_BOX_MARGIN;
        let h = self.height() + 2 * VIEW_BOX_MARGIN;
        if flip_y {
            bottom = flip(bottom, true) - h;
        }
        format!("{} {} {} {}", left, bottom, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_widens() {
        let mut bb = BoundingBox::new();
        assert!(bb.is_empty());

        bb.expand_to_contain(GridPoint::new(10, -5));
        assert!(!bb.is_empty());
        assert_eq!(bb.min(), GridPoint::new(10, -5));
        assert_eq!(bb.max(), GridPoint::new(10, -5));

        bb.expand_to_contain(GridPoint::new(-2, 8));
        assert_eq!(bb.min(), GridPoint::new(-2, -5));
        assert_eq!(bb.max(), GridPoint::new(10, 8));
        assert_eq!(bb.width(), 12);
        assert_eq!(bb.height(), 13);
    }

    #[test]
    fn never_shrinks() {
        let mut bb = BoundingBox::new();
        bb.expand_to_contain(GridPoint::new(0, 0));
        bb.expand_to_contain(GridPoint::new(100, 100));
        bb.expand_to_contain(GridPoint::new(50, 50));
        assert_eq!(bb.min(), GridPoint::new(0, 0));
        assert_eq!(bb.max(), GridPoint::new(100, 100));
    }

    #[test]
    fn corners_and_midpoint() {
        let mut bb = BoundingBox::new();
        bb.expand_to_contain(GridPoint::new(0, 0));
        bb.expand_to_contain(GridPoint::new(4, 2));
        assert_eq!(
            bb.corners(),
            [
                GridPoint::new(0, 0),
                GridPoint::new(4, 0),
                GridPoint::new(4, 2),
                GridPoint::new(0, 2),
            ]
        );
        assert_eq!(bb.midpoint(), GridPoint::new(2, 1));
        assert_eq!(bb.aspect_ratio(), 0.5);
    }

    #[test]
    fn view_box_applies_margin_and_flip() {
        let mut bb = BoundingBox::new();
        bb.expand_to_contain(GridPoint::new(0, 0));
        bb.expand_to_contain(GridPoint::new(100, 50));
        assert_eq!(bb.svg_view_box(false), "-10 -10 120 70");
        // flipped: bottom = -(-10) - 70 = -60
        assert_eq!(bb.svg_view_box(true), "-10 -60 120 70");
    }

    #[test]
    fn merges_boxes() {
        let mut a = BoundingBox::new();
        a.expand_to_contain(GridPoint::new(0, 0));
        let mut b = BoundingBox::new();
        b.expand_to_contain(GridPoint::new(5, -3));
        a.expand_to_contain_box(&b);
        assert_eq!(a.min(), GridPoint::new(0, -3));
        assert_eq!(a.max(), GridPoint::new(5, 0));

        // merging an empty box is a no-op
        a.expand_to_contain_box(&BoundingBox::new());
        assert_eq!(a.max(), GridPoint::new(5, 0));
    }
}
