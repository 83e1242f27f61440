// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unit conversion between host model units and the integer output grid.
//!
//! The host model measures lengths in decimal feet; the exported loops live
//! on an integer millimetre grid. Host precision is limited to 1/16 of an
//! inch, about 1.2 mm, so the millimetre grid loses nothing meaningful.

/// Conversion factor from feet to millimetres.
pub const FOOT_TO_MM: f64 = 25.4 * 12.0;

/// One inch in feet.
pub const INCH_FT: f64 = 1.0 / 12.0;

/// One sixteenth of an inch in feet, the host's finest reliable linear
/// resolution. Default endpoint matching tolerance.
pub const SIXTEENTH_INCH_FT: f64 = INCH_FT / 16.0;

/// Default minimum curve length in feet below which tessellation is
/// skipped, to avoid over-subdividing short fragments.
pub const MIN_TESSELLATION_LENGTH_FT: f64 = 0.2;

/// Convert a length in feet to integer millimetres, rounding half away
/// from zero.
#[inline]
pub fn feet_to_mm(d: f64) -> i64 {
    // f64::round rounds half-way cases away from zero
    (FOOT_TO_MM * d).round() as i64
}

/// Convert millimetres back to feet.
#[inline]
pub fn mm_to_feet(d: i64) -> f64 {
    d as f64 / FOOT_TO_MM
}

/// Convert an angle in radians to integer degrees, rounding half away
/// from zero.
#[inline]
pub fn radians_to_degrees(a: f64) -> i64 {
    a.to_degrees().round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feet_to_mm_rounds_half_away_from_zero() {
        // 0.5 mm rounds up to 1 mm, -0.5 mm down to -1 mm
        assert_eq!(feet_to_mm(0.5 / FOOT_TO_MM), 1);
        assert_eq!(feet_to_mm(-0.5 / FOOT_TO_MM), -1);
        assert_eq!(feet_to_mm(0.49 / FOOT_TO_MM), 0);
        assert_eq!(feet_to_mm(1.5 / FOOT_TO_MM), 2);
        assert_eq!(feet_to_mm(-1.5 / FOOT_TO_MM), -2);
    }

    #[test]
    fn feet_to_mm_scales() {
        assert_eq!(feet_to_mm(1.0), 305); // 304.8 mm
        assert_eq!(feet_to_mm(10.0), 3048);
        // 1.005 ft = 306.324 mm
        assert_eq!(feet_to_mm(1.005), 306);
    }

    #[test]
    fn radians_to_degrees_rounds() {
        assert_eq!(radians_to_degrees(std::f64::consts::PI), 180);
        assert_eq!(radians_to_degrees(-std::f64::consts::FRAC_PI_2), -90);
        assert_eq!(radians_to_degrees(0.5_f64.to_radians()), 1);
        assert_eq!(radians_to_degrees(-0.5_f64.to_radians()), -1);
    }
}
