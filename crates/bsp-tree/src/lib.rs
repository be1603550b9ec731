//! BSP (Binary Space Partitioning) tree implementation for constructive
//! solid geometry: building a tree from a bag of convex polygons,
//! flattening it back out, inverting its orientation, and clipping one
//! tree's polygons against another's — the four primitives the `Csg`
//! Boolean layer is built from.

pub mod bsp;
mod csg;
mod cuttable;
mod error;
mod pipeline;
mod plane;
mod polygon;
pub mod primitives;
mod rectangle;
mod subdivide;
mod triangle;
mod vertex_index;

pub use bsp::{faces_same_direction, BspNode, BspTree, BspVisitor, CollectingVisitor, FnVisitor};
pub use csg::{intersect, subtract, union, Csg};
pub use cuttable::Cuttable;
pub use error::CsgError;
pub use pipeline::{filter_polygons, insert_edge_bisectors, map_with_index, no_degenerate_edges};
pub use plane::{Classification, Plane, PlaneSide, PLANE_EPSILON};
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use subdivide::{subdivide, subdivide_merged};
pub use triangle::Triangle;
pub use vertex_index::{VertexIndex, SEGMENT_EPSILON};
