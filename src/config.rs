// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pipeline configuration.

use crate::units::{MIN_TESSELLATION_LENGTH_FT, SIXTEENTH_INCH_FT};

/// Configuration for loop extraction, passed explicitly into the pipeline
/// entry points.
#[derive(Debug, Clone)]
pub struct LoopConfig {
    /// Tessellate curved segments into polylines. When disabled, only
    /// straight segments from start to end point are exported.
    pub tessellate: bool,

    /// Never tessellate a curve shorter than this length, in feet.
    pub min_tessellation_length: f64,

    /// Negate Y coordinates in SVG output for display conventions whose
    /// positive Y points the opposite way.
    pub flip_vertical_axis: bool,

    /// Absolute endpoint matching tolerance in feet, used when chaining
    /// segments and when checking loop closure.
    pub match_tolerance: f64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tessellate: true,
            min_tessellation_length: MIN_TESSELLATION_LENGTH_FT,
            flip_vertical_axis: true,
            match_tolerance: SIXTEENTH_INCH_FT,
        }
    }
}
