//! Clipping polygon sequences against a BSP tree's "solid" half-space, and
//! the destructive tree-vs-tree clip built on top of it.

use crate::{CsgError, Polygon};

use super::node::BspNode;
use super::tree::BspTree;

impl BspTree {
    /// Returns clones of (the fragments of) `polygons` that lie on this
    /// tree's interpretation of the "kept" side — by convention, the front
    /// side of every divider. `polygons` is left untouched.
    pub fn clip_polygons(&self, polygons: &[Polygon]) -> Result<Vec<Polygon>, CsgError> {
        match self.root() {
            Some(root) => clip_node(root, polygons),
            None => Ok(polygons.to_vec()),
        }
    }

    /// Destructively replaces this tree with the tree built from clipping
    /// `other`'s kept side against this tree's own emitted polygons. `self`
    /// keeps its identity: callers holding `&mut BspTree` observe the new
    /// geometry through the same reference.
    ///
    /// # Errors
    /// On failure `self` is left untouched — the rebuild happens entirely
    /// in temporaries that only get assigned into `self` once every step
    /// has succeeded.
    pub fn clip_to(&mut self, other: &BspTree) -> Result<(), CsgError> {
        let old = self.emit(false)?;
        log::debug!("clip_to: clipping {} polygons against other tree", old.len());
        let new = other.clip_polygons(&old)?;
        let new_tree = BspTree::build(new, true)?;
        *self = new_tree;
        Ok(())
    }
}

fn clip_node(node: &BspNode, polygons: &[Polygon]) -> Result<Vec<Polygon>, CsgError> {
    if polygons.is_empty() {
        return Ok(Vec::new());
    }

    let divider = node
        .divider()
        .expect("clip_node is only called on nodes with a divider");
    let plane = divider.plane();

    let n = polygons.len();
    let mut front_bucket = Vec::with_capacity(n);
    let mut back_bucket = Vec::with_capacity(n);

    for polygon in polygons {
        // Coplanar polygons join the side matching their facing relative to
        // the divider, preserving surface attribution for the Boolean layer
        // built on top of this core.
        crate::subdivide::subdivide_merged(
            divider,
            &plane,
            polygon.clone(),
            &mut front_bucket,
            &mut back_bucket,
        )?;
    }

    let front_result = match node.front() {
        Some(front) => clip_node(front, &front_bucket)?,
        None => front_bucket,
    };

    // Polygons behind a divider with no back subtree fall into solid space
    // and are discarded — this asymmetry is what "inside vs outside" means.
    let back_result = match node.back() {
        Some(back) => clip_node(back, &back_bucket)?,
        None => Vec::new(),
    };

    let mut result = front_result;
    result.extend(back_result);
    Ok(result)
}
