//! BSP tree node implementation.

use crate::{Plane, Polygon};

/// A node in the BSP tree.
///
/// Each node partitions space using the plane of its `divider` polygon and
/// stores polygons that are coplanar with that plane. Polygons in front of
/// or behind the plane live in the respective child subtrees.
///
/// # Coplanar polygon storage
///
/// Coplanar polygons are separated by their facing direction relative to
/// the divider's own normal:
/// - `coplanar_front`: polygons whose normal points the same direction as the divider's normal
/// - `coplanar_back`: polygons whose normal points opposite to the divider's normal
///
/// The divider's own clone always lives at the front of `coplanar_front`,
/// since its normal trivially faces "the same direction" as itself — this is
/// what keeps the node's externally-visible polygon order divider-first.
/// This distinction matters for CSG operations, where polygon facing
/// determines inside/outside classification, and for `invert`, which must
/// swap the two lists along with flipping every polygon they contain.
#[derive(Debug, Clone, PartialEq)]
pub struct BspNode {
    /// The polygon chosen as this node's splitting divider, or `None` for an
    /// empty node (only ever observed at the root of a fresh, empty tree).
    divider: Option<Polygon>,

    /// Polygons coplanar with the divider, facing the SAME direction.
    coplanar_front: Vec<Polygon>,

    /// Polygons coplanar with the divider, facing the OPPOSITE direction.
    coplanar_back: Vec<Polygon>,

    /// Subtree containing polygons in FRONT of the divider's plane.
    front: Option<Box<BspNode>>,

    /// Subtree containing polygons BEHIND the divider's plane.
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Creates a new, empty leaf node with no divider.
    pub fn empty() -> Self {
        Self {
            divider: None,
            coplanar_front: Vec::new(),
            coplanar_back: Vec::new(),
            front: None,
            back: None,
        }
    }

    /// Creates a new node with `divider` as its splitting polygon. The
    /// divider's own clone is seeded into `coplanar_front`, satisfying the
    /// "first element of `polygons()` is the divider's clone" invariant.
    pub fn new(divider: Polygon) -> Self {
        let seed = divider.clone();
        Self {
            divider: Some(divider),
            coplanar_front: vec![seed],
            coplanar_back: Vec::new(),
            front: None,
            back: None,
        }
    }

    /// Returns the plane defined by this node's divider, if any.
    #[inline]
    pub fn plane(&self) -> Option<Plane> {
        self.divider.as_ref().map(Polygon::plane)
    }

    /// Returns a reference to the divider polygon, if any.
    #[inline]
    pub fn divider(&self) -> Option<&Polygon> {
        self.divider.as_ref()
    }

    /// Returns a mutable reference to the divider polygon, if any.
    #[inline]
    pub fn divider_mut(&mut self) -> Option<&mut Polygon> {
        self.divider.as_mut()
    }

    /// Returns coplanar polygons facing the same direction as the divider.
    #[inline]
    pub fn coplanar_front(&self) -> &[Polygon] {
        &self.coplanar_front
    }

    /// Returns coplanar polygons facing opposite to the divider.
    #[inline]
    pub fn coplanar_back(&self) -> &[Polygon] {
        &self.coplanar_back
    }

    /// Returns a mutable reference to the front-facing coplanar list.
    #[inline]
    pub fn coplanar_front_mut(&mut self) -> &mut Vec<Polygon> {
        &mut self.coplanar_front
    }

    /// Returns a mutable reference to the back-facing coplanar list.
    #[inline]
    pub fn coplanar_back_mut(&mut self) -> &mut Vec<Polygon> {
        &mut self.coplanar_back
    }

    /// Returns every polygon stored directly at this node, divider-clone
    /// first, in insertion order. Does not descend into children.
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.coplanar_front.iter().chain(self.coplanar_back.iter())
    }

    /// Returns the number of polygons stored directly at this node.
    pub fn coplanar_count(&self) -> usize {
        self.coplanar_front.len() + self.coplanar_back.len()
    }

    /// Returns a reference to the front child subtree.
    #[inline]
    pub fn front(&self) -> Option<&BspNode> {
        self.front.as_deref()
    }

    /// Returns a reference to the back child subtree.
    #[inline]
    pub fn back(&self) -> Option<&BspNode> {
        self.back.as_deref()
    }

    /// Returns a mutable reference to the front child subtree.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut BspNode> {
        self.front.as_deref_mut()
    }

    /// Returns a mutable reference to the back child subtree.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut BspNode> {
        self.back.as_deref_mut()
    }

    /// Sets the front child subtree.
    #[inline]
    pub fn set_front(&mut self, node: Option<BspNode>) {
        self.front = node.map(Box::new);
    }

    /// Sets the back child subtree.
    #[inline]
    pub fn set_back(&mut self, node: Option<BspNode>) {
        self.back = node.map(Box::new);
    }

    /// Swaps the front and back child subtrees in place.
    #[inline]
    pub fn swap_children(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Ensures a front child exists, returning a mutable reference to it.
    pub fn front_or_insert_with(&mut self, f: impl FnOnce() -> BspNode) -> &mut BspNode {
        self.front.get_or_insert_with(|| Box::new(f()))
    }

    /// Ensures a back child exists, returning a mutable reference to it.
    pub fn back_or_insert_with(&mut self, f: impl FnOnce() -> BspNode) -> &mut BspNode {
        self.back.get_or_insert_with(|| Box::new(f()))
    }

    /// Adds a polygon to the coplanar front list.
    #[inline]
    pub fn add_coplanar_front(&mut self, polygon: Polygon) {
        self.coplanar_front.push(polygon);
    }

    /// Adds a polygon to the coplanar back list.
    #[inline]
    pub fn add_coplanar_back(&mut self, polygon: Polygon) {
        self.coplanar_back.push(polygon);
    }

    /// Checks whether this node has a divider at all (an empty tree's root
    /// before anything has been built into it).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.divider.is_none()
    }

    /// Checks if this node has any children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.front.is_none() && self.back.is_none()
    }

    /// Returns the total number of polygons in this subtree (including all descendants).
    pub fn polygon_count(&self) -> usize {
        let mut count = self.coplanar_count();

        if let Some(ref front) = self.front {
            count += front.polygon_count();
        }
        if let Some(ref back) = self.back {
            count += back.polygon_count();
        }

        count
    }

    /// Returns the depth of this subtree (1 for a leaf node).
    pub fn depth(&self) -> usize {
        let front_depth = self.front.as_ref().map_or(0, |n| n.depth());
        let back_depth = self.back.as_ref().map_or(0, |n| n.depth());
        1 + front_depth.max(back_depth)
    }
}

impl Default for BspNode {
    fn default() -> Self {
        Self::empty()
    }
}

/// Determines if a polygon faces the same direction as a plane.
///
/// Compares the polygon's normal to the plane's normal using the dot product.
/// Returns `true` if the normals point in roughly the same direction (dot > 0).
/// Ties (`dot == 0.0`) are treated as facing away, matching the divider's own
/// "treat zero as negative" coplanar-routing rule.
///
/// # Panics
///
/// Panics if the polygon has a degenerate (zero-length) normal.
#[inline]
pub fn faces_same_direction(polygon: &Polygon, plane: &Plane) -> bool {
    let poly_normal = polygon
        .unit_normal()
        .expect("Polygon must have a valid normal for BSP operations");
    poly_normal.dot(&plane.normal()) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn make_triangle(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Polygon {
        Polygon::new(vec![
            Point3::new(a[0], a[1], a[2]),
            Point3::new(b[0], b[1], b[2]),
            Point3::new(c[0], c[1], c[2]),
        ])
    }

    #[test]
    fn empty_node_has_no_divider() {
        let node = BspNode::empty();
        assert!(node.is_empty());
        assert!(node.is_leaf());
        assert_eq!(node.coplanar_count(), 0);
        assert_eq!(node.polygon_count(), 0);
        assert_eq!(node.depth(), 1);
    }

    #[test]
    fn new_node_seeds_divider_as_first_polygon() {
        let divider = make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let node = BspNode::new(divider.clone());

        assert!(!node.is_empty());
        assert_eq!(node.coplanar_count(), 1);
        assert_eq!(node.polygons().next(), Some(&divider));
    }

    #[test]
    fn set_children_updates_leaf_status() {
        let divider = make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let mut node = BspNode::new(divider.clone());

        assert!(node.is_leaf());

        node.set_front(Some(BspNode::new(divider.clone())));
        assert!(!node.is_leaf());

        node.set_front(None);
        assert!(node.is_leaf());

        node.set_back(Some(BspNode::new(divider)));
        assert!(!node.is_leaf());
    }

    #[test]
    fn depth_calculation() {
        let divider = make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let mut root = BspNode::new(divider.clone());
        assert_eq!(root.depth(), 1);

        let mut front = BspNode::new(divider.clone());
        front.set_front(Some(BspNode::new(divider.clone())));
        root.set_front(Some(front));

        // root -> front -> front (depth 3)
        assert_eq!(root.depth(), 3);

        root.set_back(Some(BspNode::new(divider)));
        // Still depth 3 (front branch is deeper)
        assert_eq!(root.depth(), 3);
    }

    #[test]
    fn polygon_count_recursive() {
        let divider = make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let mut root = BspNode::new(divider.clone());
        assert_eq!(root.polygon_count(), 1);

        let mut front = BspNode::new(divider.clone());
        front.add_coplanar_front(divider.clone());
        let mut back = BspNode::new(divider.clone());
        back.add_coplanar_back(divider);
        root.set_front(Some(front));
        root.set_back(Some(back));

        assert_eq!(root.polygon_count(), 5);
    }

    #[test]
    fn faces_same_direction_positive() {
        // Polygon on XZ plane with normal pointing up (+Y)
        let poly = make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let plane = Plane::new(nalgebra::Vector3::new(0.0, 1.0, 0.0), 0.0);

        // Polygon normal is -Y (due to winding), plane normal is +Y
        let poly_normal = poly.unit_normal().unwrap();
        assert!(poly_normal.y < 0.0);

        // So they face opposite directions
        assert!(!faces_same_direction(&poly, &plane));
    }

    #[test]
    fn faces_same_direction_negative() {
        // Polygon with normal pointing up (+Y)
        let poly = make_triangle([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]);
        let plane = Plane::new(nalgebra::Vector3::new(0.0, 1.0, 0.0), 0.0);

        let poly_normal = poly.unit_normal().unwrap();
        assert!(poly_normal.y > 0.0);

        // Same direction as plane normal
        assert!(faces_same_direction(&poly, &plane));
    }
}
