//! Flattening a BSP tree back into a polygon sequence.

use crate::{CsgError, Polygon};

use super::node::BspNode;
use super::tree::BspTree;

impl BspTree {
    /// Flattens this tree into a fresh polygon sequence.
    ///
    /// Walks the tree in back-first, self, front-last order — a stable
    /// emission order, though (unlike the painter's-algorithm traversal this
    /// recursion shape is borrowed from) this core does not interpret it as
    /// view-dependent. When `make_triangles` is set, every polygon with more
    /// than three vertices is fan-triangulated; exactly-three-vertex
    /// polygons pass through cloned.
    ///
    /// # Errors
    /// Returns [`CsgError::DegeneratePolygon`] if any stored polygon has
    /// fewer than three vertices.
    pub fn emit(&self, make_triangles: bool) -> Result<Vec<Polygon>, CsgError> {
        let mut dst = Vec::with_capacity(self.polygon_count());
        self.emit_into(&mut dst, make_triangles)?;
        Ok(dst)
    }

    /// Like [`BspTree::emit`], but appends into a caller-provided
    /// destination rather than allocating a fresh one. On failure, `dst`
    /// retains whatever was appended before the failing polygon.
    pub fn emit_into(&self, dst: &mut Vec<Polygon>, make_triangles: bool) -> Result<(), CsgError> {
        if let Some(root) = self.root() {
            emit_node(root, dst, make_triangles)?;
        }
        Ok(())
    }
}

fn emit_node(node: &BspNode, dst: &mut Vec<Polygon>, make_triangles: bool) -> Result<(), CsgError> {
    if let Some(back) = node.back() {
        emit_node(back, dst, make_triangles)?;
    }

    for polygon in node.polygons() {
        emit_polygon(polygon, dst, make_triangles)?;
    }

    if let Some(front) = node.front() {
        emit_node(front, dst, make_triangles)?;
    }

    Ok(())
}

fn emit_polygon(polygon: &Polygon, dst: &mut Vec<Polygon>, make_triangles: bool) -> Result<(), CsgError> {
    let count = polygon.vertex_count();
    if count < 3 {
        log::warn!("emit: encountered degenerate polygon with {count} vertices");
        return Err(CsgError::DegeneratePolygon);
    }

    if !make_triangles || count == 3 {
        dst.push(polygon.clone());
        return Ok(());
    }

    let vertices = polygon.vertices();
    let v0 = vertices[0];
    for i in 2..count {
        dst.push(Polygon::make_triangle(v0, vertices[i - 1], vertices[i], ()));
    }
    Ok(())
}
