//! Boolean set operations over solids, built from clip + invert + the
//! destructive tree-vs-tree clip the core exposes.
//!
//! The algorithm below is the standard BSP Boolean recipe (build two
//! working trees, clip each against the other with an invert bracketing the
//! "keep the other side" step, then rebuild from the combined result) —
//! the same shape `bsp_node.rs`-style CSG kernels in the wider ecosystem
//! use, expressed here purely in terms of [`BspTree::clip_to`] and
//! [`BspTree::invert`].

use crate::{CsgError, Polygon};

use crate::bsp::BspTree;

/// An ergonomic solid handle wrapping a [`BspTree`], so callers get one
/// entry point for building a solid from polygons and combining it with
/// others instead of hand-wiring clip/invert/destructive-clip each time.
#[derive(Debug, Clone)]
pub struct Csg {
    tree: BspTree,
}

impl Csg {
    /// Builds a solid from a bag of polygons.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Result<Self, CsgError> {
        Ok(Self {
            tree: BspTree::build(polygons, false)?,
        })
    }

    /// Flattens this solid back into a triangulated polygon sequence.
    pub fn to_polygons(&self) -> Result<Vec<Polygon>, CsgError> {
        self.tree.emit(true)
    }

    /// Inverts this solid's orientation in place (inside becomes outside).
    pub fn invert(&mut self) {
        self.tree.invert();
    }

    /// Returns the solid representing the union of `self` and `other`.
    pub fn union(&self, other: &Csg) -> Result<Csg, CsgError> {
        Ok(Csg {
            tree: union(&self.tree, &other.tree)?,
        })
    }

    /// Returns the solid representing the intersection of `self` and `other`.
    pub fn intersect(&self, other: &Csg) -> Result<Csg, CsgError> {
        Ok(Csg {
            tree: intersect(&self.tree, &other.tree)?,
        })
    }

    /// Returns the solid representing `self` with `other` removed.
    pub fn subtract(&self, other: &Csg) -> Result<Csg, CsgError> {
        Ok(Csg {
            tree: subtract(&self.tree, &other.tree)?,
        })
    }

    /// Returns the solid representing the symmetric difference (the parts
    /// of `self` and `other` that don't overlap).
    pub fn symmetric_difference(&self, other: &Csg) -> Result<Csg, CsgError> {
        let a_minus_b = subtract(&self.tree, &other.tree)?;
        let b_minus_a = subtract(&other.tree, &self.tree)?;
        Ok(Csg {
            tree: union(&a_minus_b, &b_minus_a)?,
        })
    }
}

/// Returns a new tree representing the union of `a` and `b`.
pub fn union(a: &BspTree, b: &BspTree) -> Result<BspTree, CsgError> {
    let mut a1 = a.clone();
    let mut b1 = b.clone();

    a1.clip_to(&b1)?;
    b1.clip_to(&a1)?;
    b1.invert();
    b1.clip_to(&a1)?;
    b1.invert();

    rebuild_from(&a1, &b1)
}

/// Returns a new tree representing `a` with `b` removed.
pub fn subtract(a: &BspTree, b: &BspTree) -> Result<BspTree, CsgError> {
    let mut a1 = a.clone();
    let mut b1 = b.clone();

    a1.invert();
    a1.clip_to(&b1)?;
    b1.clip_to(&a1)?;
    b1.invert();
    b1.clip_to(&a1)?;
    b1.invert();

    let mut result = rebuild_from(&a1, &b1)?;
    result.invert();
    Ok(result)
}

/// Returns a new tree representing the intersection of `a` and `b`.
pub fn intersect(a: &BspTree, b: &BspTree) -> Result<BspTree, CsgError> {
    let mut a1 = a.clone();
    let mut b1 = b.clone();

    a1.invert();
    b1.clip_to(&a1)?;
    b1.invert();
    a1.clip_to(&b1)?;
    b1.clip_to(&a1)?;

    let mut result = rebuild_from(&a1, &b1)?;
    result.invert();
    Ok(result)
}

fn rebuild_from(a: &BspTree, b: &BspTree) -> Result<BspTree, CsgError> {
    let mut polygons = a.emit(false)?;
    polygons.extend(b.emit(false)?);
    BspTree::build(polygons, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::cuboid;
    use nalgebra::{Point3, Vector3};

    fn cube_csg(center: Point3<f32>) -> Csg {
        Csg::from_polygons(cuboid(center, Vector3::new(1.0, 1.0, 1.0))).unwrap()
    }

    #[test]
    fn subtract_self_is_empty() {
        let a = cube_csg(Point3::origin());
        let result = a.subtract(&a).unwrap();
        let area: f32 = result.to_polygons().unwrap().iter().map(Polygon::area).sum();
        assert!(area < 1e-3, "expected near-zero area, got {area}");
    }

    #[test]
    fn union_with_self_preserves_area() {
        let a = cube_csg(Point3::origin());
        let a_area: f32 = a.to_polygons().unwrap().iter().map(Polygon::area).sum();

        let result = a.union(&a).unwrap();
        let result_area: f32 = result.to_polygons().unwrap().iter().map(Polygon::area).sum();

        assert!((a_area - result_area).abs() < 1e-2);
    }

    #[test]
    fn intersect_disjoint_cubes_is_empty() {
        let a = cube_csg(Point3::origin());
        let b = cube_csg(Point3::new(10.0, 10.0, 10.0));

        let result = a.intersect(&b).unwrap();
        let area: f32 = result.to_polygons().unwrap().iter().map(Polygon::area).sum();
        assert!(area < 1e-3, "expected near-zero area, got {area}");
    }
}
