// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar silhouette extraction.
//!
//! Unites an entity's solids and projects the result onto the plan view,
//! walking the resulting base face's edge loops into quantized boundary
//! loops.

use crate::config::LoopConfig;
use crate::error::Result;
use crate::kernel::{BaseFace, GeometryKernel};
use crate::loops::Loops;
use crate::quantize::loop_from_curves;

/// Extract the plan-view boundary loops of one or more solids belonging
/// to a single entity, returning the loops and the count of recoverable
/// kernel analysis failures.
///
/// Solids the kernel cannot analyze are skipped and counted; a failed
/// union step keeps the union accumulated so far. A single bad solid
/// never aborts the whole extraction. Zero loops is a valid outcome here;
/// the orchestrator applies the bounding-box fallback.
pub fn plan_view_loops<K: GeometryKernel>(
    kernel: &K,
    solids: Vec<K::Solid>,
    config: &LoopConfig,
) -> Result<(Loops, usize)> {
    let mut failures = 0;

    // Union all analyzable solids pairwise. Each solid is probed first;
    // some real-world content defeats the extrusion analyzer and must
    // simply be skipped.
    let mut union: Option<K::Solid> = None;

    for solid in solids {
        if kernel.extrusion_base(&solid).is_err() {
            failures += 1;
            continue;
        }

        union = Some(match union {
            None => solid,
            Some(merged) => match kernel.union(&merged, &solid) {
                Ok(u) => u,
                Err(_) => {
                    failures += 1;
                    merged
                }
            },
        });
    }

    let mut loops = Loops::new();

    if let Some(solid) = union {
        match kernel.extrusion_base(&solid) {
            Ok(face) => {
                // The kernel returns the curves already oriented following
                // the face, so no contiguous re-sorting is needed.
                for edge_loop in face.edge_loops() {
                    loops.push(loop_from_curves(&edge_loop, config)?);
                }
            }
            Err(_) => failures += 1,
        }
    }

    Ok((loops, failures))
}
