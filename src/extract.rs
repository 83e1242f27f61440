// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Footprint extraction orchestrator.
//!
//! Top-level per-entity entry point. Picks the cheapest correct strategy:
//! direct quantization when the host already supplies ordered boundary
//! loops (room-like spatial entities), full silhouette extraction
//! otherwise (furniture and building parts), with a bounding-box fallback
//! when no usable geometry exists at all.

use crate::config::LoopConfig;
use crate::curve::CurveSegment;
use crate::error::Result;
use crate::kernel::{Aabb, GeometryKernel};
use crate::loops::{Loop, Loops};
use crate::placement::Placement;
use crate::quantize::loop_from_curves;
use crate::silhouette::plan_view_loops;
use crate::sort::sort_curves_contiguous;

/// An entity whose footprint can be extracted: a room, a furniture
/// symbol instance, or a building part.
pub trait FootprintSource {
    /// Kernel solid type, matching the kernel used for extraction.
    type Solid;

    /// Ordered boundary-segment loops when the host supplies them
    /// directly, already chained start-to-end. Room-like spatial entities
    /// return these; geometry-only entities return None.
    fn boundary_loops(&self) -> Option<Vec<Vec<CurveSegment>>>;

    /// The entity's constituent solids, in world coordinates.
    fn solids(&self) -> Vec<Self::Solid>;

    /// Instance placement for symbol-based entities. When present, the
    /// geometry is pulled back into the symbol definition frame before
    /// extraction so all instances of one symbol share a single loop
    /// collection.
    fn placement(&self) -> Option<Placement>;

    /// Axis-aligned bounding box, the fallback footprint source. For a
    /// placed instance this is the symbol-space box.
    fn bounding_box(&self) -> Option<Aabb>;
}

/// The extracted footprint of one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footprint {
    /// All boundary loops, outer silhouette first when derived from
    /// silhouette analysis.
    pub loops: Loops,
    /// Count of solids the kernel could not analyze. Nonzero counts are
    /// diagnostics, not failures; the loops remain usable.
    pub failures: usize,
}

/// Extract the plan-view footprint of one entity.
///
/// Stateless and synchronous; calling it twice on an unchanged entity
/// returns point-for-point identical loop collections. Failure counts and
/// loop tallies are reported through the `log` facade; nothing is ever
/// surfaced as a dialog from here.
pub fn extract_footprint<K, E>(kernel: &K, entity: &E, config: &LoopConfig) -> Result<Footprint>
where
    K: GeometryKernel,
    E: FootprintSource<Solid = K::Solid>,
{
    // Strategy (a): host-supplied boundary segments need no sorting and
    // no kernel analysis, just quantization.
    if let Some(boundary) = entity.boundary_loops() {
        let mut loops = Loops::with_capacity(boundary.len());
        for curves in &boundary {
            loops.push(loop_from_curves(curves, config)?);
        }
        log::debug!("extracted {} boundary loop(s) directly", loops.len());
        return Ok(Footprint { loops, failures: 0 });
    }

    // Strategy (b): silhouette extraction from the entity's solids,
    // pulled back into the symbol frame for placed instances.
    let mut solids = entity.solids();

    if let Some(placement) = entity.placement() {
        let to_symbol = placement.to_symbol_frame();
        solids = solids
            .into_iter()
            .map(|s| kernel.transformed(&s, &to_symbol))
            .collect();
    }

    let (mut loops, failures) = plan_view_loops(kernel, solids, config)?;

    if loops.is_empty() {
        match entity.bounding_box() {
            Some(bb) => {
                log::debug!("unable to determine geometry; using bounding box instead");
                loops.push(bb.footprint_loop());
            }
            None => log::warn!("entity has no usable geometry and no bounding box"),
        }
    }

    if failures > 0 {
        log::warn!(
            "{} extrusion analysis failure(s), {} loop(s) extracted",
            failures,
            loops.len()
        );
    } else {
        log::debug!("extracted {} loop(s)", loops.len());
    }

    Ok(Footprint { loops, failures })
}

/// Build one quantized loop from an unordered bag of boundary segments,
/// e.g. model curves the user selected to outline a building part. The
/// segments are first chained contiguously, then quantized.
pub fn sorted_boundary_loop(mut curves: Vec<CurveSegment>, config: &LoopConfig) -> Result<Loop> {
    sort_curves_contiguous(&mut curves, config.match_tolerance)?;
    loop_from_curves(&curves, config)
}
