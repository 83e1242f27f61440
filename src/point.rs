// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integer-based 2D point on the millimetre grid.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::units::feet_to_mm;

/// An integer-based 2D point in millimetres.
///
/// Ordering is lexicographic (x then y); it supports deduplication and map
/// lookup, not geometric meaning.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct GridPoint {
    pub x: i64,
    pub y: i64,
}

impl GridPoint {
    /// Create a point from raw millimetre coordinates.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Quantize a 3D model point in feet by discarding the Z coordinate
    /// and scaling X and Y from feet to millimetres.
    pub fn from_feet(p: &Point3<f64>) -> Self {
        Self::from_xy_feet(p.x, p.y)
    }

    /// Quantize 2D model coordinates in feet to millimetres.
    pub fn from_xy_feet(x: f64, y: f64) -> Self {
        Self {
            x: feet_to_mm(x),
            y: feet_to_mm(y),
        }
    }

    /// Return an SVG path fragment for this point: `M x y` for the first
    /// point of a path, `L x y` for every subsequent one. `flip_y` negates
    /// the Y coordinate for display conventions whose positive Y points
    /// down.
    pub fn svg_path_fragment(&self, index: usize, flip_y: bool) -> String {
        let prefix = if index == 0 { "M" } else { "L" };
        format!("{}{} {}", prefix, self.x, flip(self.y, flip_y))
    }
}

/// Negate a Y coordinate when the vertical flip is enabled.
#[inline]
pub(crate) fn flip(y: i64, flip_y: bool) -> i64 {
    if flip_y {
        -y
    } else {
        y
    }
}

impl Add for GridPoint {
    type Output = GridPoint;

    /// Add two points, i.e. treat one of them as a translation vector.
    fn add(self, other: GridPoint) -> GridPoint {
        GridPoint::new(self.x + other.x, self.y + other.y)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn ordering_is_lexicographic() {
        let a = GridPoint::new(1, 5);
        let b = GridPoint::new(2, 0);
        let c = GridPoint::new(1, 6);
        assert!(a < b);
        assert!(a < c);
        assert!(c < b);
        assert_eq!(a, GridPoint::new(1, 5));
    }

    #[test]
    fn from_feet_discards_z() {
        let p = GridPoint::from_feet(&Point3::new(1.0, 2.0, 99.0));
        assert_eq!(p, GridPoint::new(305, 610));
    }

    #[test]
    fn svg_fragment_prefixes() {
        let p = GridPoint::new(10, 20);
        assert_eq!(p.svg_path_fragment(0, false), "M10 20");
        assert_eq!(p.svg_path_fragment(1, false), "L10 20");
        assert_eq!(p.svg_path_fragment(2, true), "L10 -20");
    }

    #[test]
    fn add_translates() {
        let p = GridPoint::new(1, 2) + GridPoint::new(10, -20);
        assert_eq!(p, GridPoint::new(11, -18));
    }

    #[test]
    fn displays_as_tuple() {
        assert_eq!(GridPoint::new(-3, 7).to_string(), "(-3,7)");
    }
}
