// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Instance placement: full-precision placement of a symbol instance in
//! the model, and its quantized 2D form for serialization.
//!
//! Repeated instances of one symbol share a single cached loop collection;
//! only the placement (translation + rotation) is stored per instance.

use nalgebra::{Matrix4, Point3, Rotation3, Translation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::point::{flip, GridPoint};
use crate::units::radians_to_degrees;

/// Placement of a symbol instance: insertion point in model coordinates
/// (feet) and rotation about the vertical axis in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub point: Point3<f64>,
    pub rotation: f64,
}

impl Placement {
    pub fn new(point: Point3<f64>, rotation: f64) -> Self {
        Self { point, rotation }
    }

    /// Transform pulling world geometry back into the symbol definition
    /// frame: inverse rotation about the vertical axis at the insertion
    /// point, then inverse translation.
    pub fn to_symbol_frame(&self) -> Matrix4<f64> {
        let t = Translation3::from(-self.point.coords).to_homogeneous();
        let r = Translation3::from(self.point.coords).to_homogeneous()
            * Rotation3::from_axis_angle(&Vector3::z_axis(), -self.rotation).to_homogeneous()
            * Translation3::from(-self.point.coords).to_homogeneous();
        t * r
    }
}

/// A 2D integer-based placement, i.e. translation and rotation, with the
/// id of the symbol it places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementInt {
    /// Translation in millimetres.
    pub translation: GridPoint,
    /// Rotation in degrees.
    pub rotation_deg: i64,
    /// The placed symbol's unique id.
    pub symbol_id: String,
}

impl PlacementInt {
    /// Quantize a full-precision placement.
    pub fn new(placement: &Placement, symbol_id: impl Into<String>) -> Self {
        Self {
            translation: GridPoint::from_feet(&placement.point),
            rotation_deg: radians_to_degrees(placement.rotation),
            symbol_id: symbol_id.into(),
        }
    }

    /// SVG transform string `R{rotation}T{x},{y}` for the browser client.
    pub fn svg_transform(&self, flip_y: bool) -> String {
        format!(
            "R{}T{},{}",
            flip(self.rotation_deg, flip_y),
            self.translation.x,
            flip(self.translation.y, flip_y)
        )
    }
}
