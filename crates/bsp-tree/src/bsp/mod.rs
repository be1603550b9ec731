//! Binary Space Partitioning tree for 3D polygon management.
//!
//! This module provides the core BSP tree: recursive construction from a
//! bag of convex polygons, flattening back to a polygon sequence, in-place
//! inversion, and clipping (both read-only and destructive tree-vs-tree).
//!
//! # Example
//!
//! ```ignore
//! use bsp_tree::{BspTree, Polygon};
//!
//! let polygons: Vec<Polygon> = /* create polygons */;
//! let tree = BspTree::build(polygons, false)?;
//!
//! let flattened = tree.emit(true)?; // triangulated
//! ```
//!
//! # Architecture
//!
//! - [`BspTree`]: the main container holding the root node
//! - [`BspNode`]: cells storing a divider polygon and coplanar polygon lists
//! - [`BspVisitor`]: visitor trait for the fixed back-self-front traversal [`BspTree::traverse`] drives

mod clip;
mod emit;
mod invert;
mod node;
mod tree;
mod visitor;

pub use node::{faces_same_direction, BspNode};
pub use tree::BspTree;
pub use visitor::{BspVisitor, CollectingVisitor, FnVisitor};

impl BspTree {
    /// Walks the tree in the same fixed back-first, self, front-last order
    /// [`BspTree::emit`] uses, invoking `visitor` once per node with that
    /// node's own coplanar polygons (divider-clone first). Unlike `emit`,
    /// this never triangulates and cannot fail — it is the infallible,
    /// visitor-driven sibling for callers that just want a traversal hook.
    pub fn traverse(&self, visitor: &mut impl BspVisitor) {
        if let Some(root) = self.root() {
            traverse_node(root, visitor);
        }
    }
}

fn traverse_node(node: &BspNode, visitor: &mut impl BspVisitor) {
    if let Some(back) = node.back() {
        traverse_node(back, visitor);
    }

    let polygons: Vec<_> = node.polygons().cloned().collect();
    if !polygons.is_empty() {
        visitor.visit(&polygons);
    }

    if let Some(front) = node.front() {
        traverse_node(front, visitor);
    }
}
