// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for loop extraction.

/// Result type for loop extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during loop extraction.
///
/// Recoverable kernel analysis failures are deliberately not represented
/// here; they travel as [`crate::kernel::Unanalyzable`] on the kernel seam
/// and are counted rather than propagated.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The sorter could not find any segment chaining onto the given one.
    /// The claimed closed loop is not actually closed; there is no safe
    /// best-effort recovery.
    #[error("non-contiguous input curves: no segment chains onto segment {index}")]
    NonContiguous { index: usize },

    /// The quantizer's final endpoint does not meet the loop's first point
    /// within tolerance. Indicates an upstream sorting or orientation
    /// defect, or a tolerance unsuited to the current unit scale.
    #[error("loop does not close: final endpoint misses the start point by {gap_mm:.2} mm")]
    OpenLoop { gap_mm: f64 },
}
