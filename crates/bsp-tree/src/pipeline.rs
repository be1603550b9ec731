//! Filter/map helpers over polygon sequences.
//!
//! These share the polygon-sequence contract the BSP core itself uses
//! (`&[Polygon]` in, `Vec<Polygon>` out) but are independent of any tree —
//! they operate on a bag of polygons directly.

use crate::{Polygon, VertexIndex};

/// Returns deep clones of every polygon for which `predicate` returns `true`.
pub fn filter_polygons<S: Clone>(
    polygons: &[Polygon<S>],
    predicate: impl Fn(&Polygon<S>) -> bool,
) -> Vec<Polygon<S>> {
    polygons
        .iter()
        .filter(|p| predicate(p))
        .cloned()
        .collect()
}

/// Invokes `mapper` once per input polygon, appending to a growing
/// destination sequence. The extension point for per-polygon expansion
/// operations such as edge bisector insertion.
pub fn map_with_index<S: Clone>(
    polygons: &[Polygon<S>],
    index: &VertexIndex,
    mut mapper: impl FnMut(&mut Vec<Polygon<S>>, &VertexIndex, &Polygon<S>),
) -> Vec<Polygon<S>> {
    let mut dst = Vec::with_capacity(polygons.len());
    for polygon in polygons {
        mapper(&mut dst, index, polygon);
    }
    dst
}

/// Predicate: `true` if no two adjacent vertices of `poly` coincide.
///
/// A degenerate edge (zero length) signals a polygon that collapsed during
/// an earlier split and should be dropped before it reaches the tree
/// builder or emitter.
pub fn no_degenerate_edges<S>(poly: &Polygon<S>) -> bool {
    let vertices = poly.vertices();
    let n = vertices.len();
    (0..n).all(|i| {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        (a - b).norm() > f32::EPSILON
    })
}

/// Mapper: for each edge `(v_i, v_{i+1})` of `poly`, queries `index` for any
/// vertices lying on that segment and inserts them between the endpoints,
/// sorted by distance from `v_i`. Edges with no intermediate hits keep just
/// their two endpoints.
pub fn insert_edge_bisectors<S: Clone>(
    dst: &mut Vec<Polygon<S>>,
    index: &VertexIndex,
    poly: &Polygon<S>,
) {
    let vertices = poly.vertices();
    let n = vertices.len();
    let mut expanded = Vec::with_capacity(n);

    for i in 0..n {
        let current = vertices[i];
        let next = vertices[(i + 1) % n];
        expanded.push(current);
        expanded.extend(index.search_segment(current, next));
    }

    dst.push(Polygon::with_shared(expanded, poly.shared().clone()));
}
