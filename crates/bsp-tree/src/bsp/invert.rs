//! Flipping a BSP tree's half-space orientation in place.

use super::node::BspNode;
use super::tree::BspTree;

impl BspTree {
    /// Inverts this tree in place: every polygon and every divider is
    /// flipped, and front/back subtrees swap roles. After inversion the
    /// tree represents the complement of the half-spaces it represented
    /// before. Inverting twice is an identity.
    pub fn invert(&mut self) {
        log::trace!("inverting tree, {} polygons", self.polygon_count());
        if let Some(root) = self.root_mut() {
            invert_node(root);
        }
    }
}

fn invert_node(node: &mut BspNode) {
    // List membership is defined by the sign of dot(normal(divider),
    // normal(polygon)). Negating both the divider's normal and every
    // coplanar polygon's normal leaves that sign unchanged, so each
    // polygon stays in the list it was already in — no swap here, or the
    // divider's own clone (seeded at coplanar_front[0]) would move out of
    // first position and violate invariant 2.
    for polygon in node.coplanar_front_mut() {
        polygon.invert();
    }
    for polygon in node.coplanar_back_mut() {
        polygon.invert();
    }

    if let Some(divider) = node.divider_mut() {
        divider.invert();
    }

    if let Some(front) = node.front_mut() {
        invert_node(front);
    }
    if let Some(back) = node.back_mut() {
        invert_node(back);
    }

    node.swap_children();
}
