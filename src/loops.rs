// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polygon boundary loops and loop collections.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::bbox::BoundingBox;
use crate::point::GridPoint;

/// A closed or open polygon boundary loop.
///
/// Points are append-only during construction. A point identical to the
/// immediately preceding one is silently dropped, which automatically
/// suppresses really small boundary segment fragments that collapse on the
/// millimetre grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loop {
    points: Vec<GridPoint>,
    closed: bool,
}

impl Default for Loop {
    fn default() -> Self {
        Self::new()
    }
}

impl Loop {
    /// Create an empty closed loop.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            closed: true,
        }
    }

    /// Create an empty closed loop with the given point capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            closed: true,
        }
    }

    /// Append a point, dropping it if it equals the current last point.
    pub fn push(&mut self, p: GridPoint) {
        if self.points.last() != Some(&p) {
            self.points.push(p);
        }
    }

    /// Append a sequence of points with the same adjacent-duplicate
    /// suppression as [`push`](Self::push).
    pub fn extend<I: IntoIterator<Item = GridPoint>>(&mut self, points: I) {
        for p in points {
            self.push(p);
        }
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn closed(&self) -> bool {
        self.closed
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    /// The bounding box containing this loop.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bb = BoundingBox::new();
        for p in &self.points {
            bb.expand_to_contain(*p);
        }
        bb
    }

    /// Flattened x,y coordinate array for painting. For a closed loop the
    /// first point is appended again at the end so the closing segment is
    /// drawn.
    pub fn flattened_points(&self) -> Vec<i64> {
        let n = self.points.len() + usize::from(self.closed && !self.points.is_empty());
        let mut flat = Vec::with_capacity(2 * n);
        for p in &self.points {
            flat.push(p.x);
            flat.push(p.y);
        }
        if self.closed {
            if let Some(first) = self.points.first() {
                flat.push(first.x);
                flat.push(first.y);
            }
        }
        flat
    }

    /// SVG path specification `M x0 y0 L x1 y1 ... Z`, closing the path
    /// only for closed loops. `flip_y` negates Y coordinates for display
    /// conventions whose positive Y points the other way.
    pub fn svg_path(&self, flip_y: bool) -> String {
        let mut path = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| p.svg_path_fragment(i, flip_y))
            .collect::<Vec<_>>()
            .join(" ");
        if self.closed && !self.points.is_empty() {
            path.push_str(" Z");
        }
        path
    }
}

impl fmt::Display for Loop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for p in &self.points {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
            first = false;
        }
        Ok(())
    }
}

/// An ordered list of boundary loops for one entity: the outer silhouette
/// plus any coincident or nested openings, with no outer/inner distinction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loops(Vec<Loop>);

impl Loops {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, l: Loop) {
        self.0.push(l);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Loop> {
        self.0.iter()
    }

    /// The bounding box containing all loops.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bb = BoundingBox::new();
        for l in &self.0 {
            bb.expand_to_contain_box(&l.bounding_box());
        }
        bb
    }

    /// Flattened coordinate arrays for painting, one per loop.
    pub fn flattened_points(&self) -> Vec<Vec<i64>> {
        self.0.iter().map(Loop::flattened_points).collect()
    }

    /// The concatenated SVG path specifications for all loops.
    pub fn svg_path(&self, flip_y: bool) -> String {
        self.0
            .iter()
            .map(|l| l.svg_path(flip_y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Add for Loops {
    type Output = Loops;

    /// Unite two collections of boundary loops into a single one.
    fn add(mut self, other: Loops) -> Loops {
        self.0.extend(other.0);
        self
    }
}

impl IntoIterator for Loops {
    type Item = Loop;
    type IntoIter = std::vec::IntoIter<Loop>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Loops {
    type Item = &'a Loop;
    type IntoIter = std::slice::Iter<'a, Loop>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Loops {
    type Output = Loop;

    fn index(&self, i: usize) -> &Loop {
        &self.0[i]
    }
}
