//! BSP tree container and construction.

use crate::{CsgError, Polygon};

use super::node::BspNode;

/// A Binary Space Partitioning tree for 3D polygons.
///
/// BSP trees recursively partition space using planes, enabling Boolean set
/// operations between solids built from convex polygons. Each node contains
/// polygons coplanar with its divider, while non-coplanar polygons are
/// stored in front or back subtrees.
///
/// # Construction
///
/// ```ignore
/// use bsp_tree::{BspTree, Polygon};
///
/// let polygons: Vec<Polygon> = /* ... */;
/// let tree = BspTree::build(polygons, false)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BspTree {
    root: Option<BspNode>,
}

impl BspTree {
    /// Creates an empty BSP tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a BSP tree from a bag of polygons.
    ///
    /// `copy` mirrors the distilled builder's caller-supplied flag: when
    /// `true`, the tree is built from clones of `polygons` (the caller's
    /// `Vec` is left untouched beyond the implicit clone); when `false`, the
    /// input is consumed and moved directly into the tree. Since `build`
    /// always takes `polygons` by value, the distinction only matters if the
    /// caller retained a separate clone beforehand — it exists for API
    /// parity with the reviewed contract and for recursive calls, which
    /// always pass `false` because fragments are already uniquely owned.
    ///
    /// Divider selection has no balancing heuristic: the first polygon of
    /// each (sub)sequence becomes that node's divider.
    pub fn build(polygons: Vec<Polygon>, copy: bool) -> Result<Self, CsgError> {
        let polygons = if copy { polygons.clone() } else { polygons };
        log::debug!("building BSP tree from {} polygons (copy={copy})", polygons.len());
        Ok(Self {
            root: build_node(polygons)?,
        })
    }

    /// Returns `true` if the tree contains no polygons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a reference to the root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&BspNode> {
        self.root.as_ref()
    }

    /// Returns a mutable reference to the root node, if any.
    #[inline]
    pub fn root_mut(&mut self) -> Option<&mut BspNode> {
        self.root.as_mut()
    }

    /// Returns the total number of polygons in the tree.
    pub fn polygon_count(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.polygon_count())
    }

    /// Returns the maximum depth of the tree (0 for empty tree).
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.depth())
    }
}

/// Recursively builds a BSP node from a list of polygons.
///
/// `polygons` must be non-empty; the first element is chosen as the node's
/// divider (no balancing heuristic — see the distilled spec's Non-goals).
fn build_node(mut polygons: Vec<Polygon>) -> Result<Option<BspNode>, CsgError> {
    if polygons.is_empty() {
        return Ok(None);
    }

    let divider = polygons.remove(0);
    log::trace!("new node: divider chosen, {} polygons remain to partition", polygons.len());
    let mut node = BspNode::new(divider);
    build_into(&mut node, polygons)?;
    Ok(Some(node))
}

/// Partitions `polygons` against `node`'s existing divider, appending
/// coplanar fragments to `node` and recursively building `front`/`back`.
///
/// Used both by a fresh [`build_node`] call (after the divider has been
/// seeded) and by the rebuild-in-place path destructive clip relies on
/// (`node` already carries a divider; `polygons` is the full replacement
/// bag starting at index 0).
fn build_into(node: &mut BspNode, polygons: Vec<Polygon>) -> Result<(), CsgError> {
    let divider = node
        .divider()
        .cloned()
        .expect("build_into requires a node with a divider already set");
    let plane = divider.plane();

    let n = polygons.len();
    let mut coplanar_front = Vec::with_capacity(n);
    let mut coplanar_back = Vec::with_capacity(n);
    let mut front_bucket = Vec::with_capacity(n);
    let mut back_bucket = Vec::with_capacity(n);

    for polygon in polygons {
        crate::subdivide::subdivide(
            &divider,
            &plane,
            polygon,
            &mut coplanar_front,
            &mut coplanar_back,
            &mut front_bucket,
            &mut back_bucket,
        )?;
    }

    node.coplanar_front_mut().extend(coplanar_front);
    node.coplanar_back_mut().extend(coplanar_back);

    if !front_bucket.is_empty() {
        let front = build_node(front_bucket).map_err(|e| CsgError::RecursiveFailure(Box::new(e)))?;
        if let Some(front) = front {
            node.set_front(Some(front));
        }
    }
    if !back_bucket.is_empty() {
        let back = build_node(back_bucket).map_err(|e| CsgError::RecursiveFailure(Box::new(e)))?;
        if let Some(back) = back {
            node.set_back(Some(back));
        }
    }

    Ok(())
}
