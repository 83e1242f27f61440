//! Footprint loop extraction
//!
//! Turns 3D solid or curve geometry describing rooms, furniture and
//! building parts into correctly ordered, closed, integer-quantized 2D
//! polygon loops suitable for lightweight rendering and round-trip
//! serialization. The 3D modeling kernel is an external collaborator,
//! consumed through the traits in [`kernel`].

pub mod bbox;
pub mod cache;
pub mod config;
pub mod curve;
pub mod error;
pub mod extract;
pub mod kernel;
pub mod loops;
pub mod placement;
pub mod point;
pub mod quantize;
pub mod silhouette;
pub mod sort;
pub mod units;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point2, Point3, Vector3};

pub use bbox::BoundingBox;
pub use cache::SymbolCache;
pub use config::LoopConfig;
pub use curve::CurveSegment;
pub use error::{Error, Result};
pub use extract::{extract_footprint, sorted_boundary_loop, Footprint, FootprintSource};
pub use kernel::{Aabb, AnalyzeResult, BaseFace, GeometryKernel, Unanalyzable};
pub use loops::{Loop, Loops};
pub use placement::{Placement, PlacementInt};
pub use point::GridPoint;
pub use quantize::loop_from_curves;
pub use silhouette::plan_view_loops;
pub use sort::sort_curves_contiguous;
