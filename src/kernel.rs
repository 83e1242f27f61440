// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry-kernel collaborator seam.
//!
//! The modeling kernel that supplies solids and performs projection and
//! boolean analysis lives outside this crate. This module defines the
//! narrow trait surface the extraction pipeline consumes, with kernel
//! analysis failures expressed as result values rather than exceptions.

use nalgebra::{Matrix4, Point3};

use crate::curve::CurveSegment;
use crate::loops::Loop;
use crate::point::GridPoint;

/// Marker for a kernel-reported inability to analyze the given geometry.
///
/// Recoverable by design: callers skip the offending solid, count the
/// failure and continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("kernel cannot analyze the given geometry")]
pub struct Unanalyzable;

/// Result of a kernel analysis operation.
pub type AnalyzeResult<T> = std::result::Result<T, Unanalyzable>;

/// An axis-aligned 3D bounding box in model coordinates (feet), used as
/// the fallback footprint source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Aabb {
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// The 4-point rectangular plan-view loop of this box, counter
    /// clockwise from the minimum corner.
    pub fn footprint_loop(&self) -> Loop {
        let mut l = Loop::with_capacity(4);
        l.push(GridPoint::from_feet(&self.min));
        l.push(GridPoint::from_xy_feet(self.max.x, self.min.y));
        l.push(GridPoint::from_feet(&self.max));
        l.push(GridPoint::from_xy_feet(self.min.x, self.max.y));
        l
    }
}

/// The base face produced by the kernel's extrusion analysis.
///
/// Edge-loop curves are required to already be oriented consistently
/// following the face, so no contiguous re-sorting is needed downstream.
pub trait BaseFace {
    /// The face's edge loops as ordered, face-oriented curve sequences.
    fn edge_loops(&self) -> Vec<Vec<CurveSegment>>;
}

/// Services consumed from the 3D modeling kernel.
pub trait GeometryKernel {
    /// Opaque kernel solid.
    type Solid;
    /// Base face of an extrusion analysis.
    type Face: BaseFace;

    /// Boolean-union two solids into one.
    fn union(&self, a: &Self::Solid, b: &Self::Solid) -> AnalyzeResult<Self::Solid>;

    /// Run extrusion analysis of the solid against the horizontal
    /// reference plane with a vertical extrusion direction, returning the
    /// base face.
    fn extrusion_base(&self, solid: &Self::Solid) -> AnalyzeResult<Self::Face>;

    /// A copy of the solid with the given affine transform applied.
    fn transformed(&self, solid: &Self::Solid, transform: &Matrix4<f64>) -> Self::Solid;
}
