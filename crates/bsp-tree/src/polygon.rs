//! Generic convex polygon representation for BSP trees.

use nalgebra::{Point3, Vector3};

use crate::{Classification, Plane, PlaneSide};

/// A convex polygon in 3D space, defined by an ordered list of vertices and
/// an optional piece of shared metadata `S` (defaults to `()`).
///
/// Vertices should be coplanar and in counter-clockwise winding order
/// when viewed from the front (the direction the normal points).
///
/// The metadata travels with the polygon through cloning, splitting, and
/// triangulation, so callers can attach e.g. a material id or source index
/// without the core caring what it means.
#[derive(Debug, Clone)]
pub struct Polygon<S = ()> {
    vertices: Vec<Point3<f32>>,
    shared: S,
}

impl<S: PartialEq> PartialEq for Polygon<S> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.shared == other.shared
    }
}

impl<S: Default> Polygon<S> {
    /// Creates a new polygon from a list of vertices, with default metadata.
    ///
    /// # Panics (debug builds only)
    /// Panics if vertices are not coplanar.
    pub fn new(vertices: Vec<Point3<f32>>) -> Self {
        Self::with_shared(vertices, S::default())
    }
}

impl<S> Polygon<S> {
    /// Creates a new polygon from a list of vertices and explicit metadata.
    ///
    /// Fewer than 3 vertices is accepted here without complaint — a polygon
    /// with too few vertices to have any area is a legitimate value, not a
    /// contract violation; it surfaces as [`crate::CsgError::DegeneratePolygon`]
    /// the first time an operation that requires a plane or area (splitting,
    /// emitting) touches it.
    ///
    /// # Panics (debug builds only)
    /// Panics if vertices are not coplanar.
    pub fn with_shared(vertices: Vec<Point3<f32>>, shared: S) -> Self {
        debug_assert!(
            Self::are_coplanar(&vertices),
            "Polygon vertices must be coplanar"
        );
        Self { vertices, shared }
    }

    /// Builds a triangle `(v0, v1, v2)` sharing the given metadata. The
    /// extension point the emitter's fan-triangulation (§4.F) uses to mint
    /// fresh polygons.
    pub fn make_triangle(v0: Point3<f32>, v1: Point3<f32>, v2: Point3<f32>, shared: S) -> Self {
        Self {
            vertices: vec![v0, v1, v2],
            shared,
        }
    }

    /// Checks if all vertices lie on the same plane.
    fn are_coplanar(vertices: &[Point3<f32>]) -> bool {
        if vertices.len() <= 3 {
            return true;
        }

        let plane = Plane::from_three_points(vertices[0], vertices[1], vertices[2]);
        vertices[3..]
            .iter()
            .all(|v| plane.classify_point(*v) == PlaneSide::OnPlane)
    }

    /// Returns the vertices of the polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns a reference to this polygon's shared metadata.
    #[inline]
    pub fn shared(&self) -> &S {
        &self.shared
    }

    /// Computes the (unnormalized) normal vector of the polygon.
    ///
    /// Uses the first three vertices to compute the normal via cross product.
    /// The direction follows the right-hand rule based on vertex winding.
    pub fn normal(&self) -> Vector3<f32> {
        let a = &self.vertices[0];
        let b = &self.vertices[1];
        let c = &self.vertices[2];
        let ab = b - a;
        let ac = c - a;
        ab.cross(&ac)
    }

    /// Computes the unit normal vector of the polygon.
    ///
    /// Returns `None` if the first three vertices are collinear.
    pub fn unit_normal(&self) -> Option<Vector3<f32>> {
        let n = self.normal();
        let len = n.norm();
        if len > f32::EPSILON {
            Some(n / len)
        } else {
            None
        }
    }

    /// Returns the plane that this polygon lies on.
    ///
    /// # Panics
    /// Panics if the first three vertices are collinear.
    pub fn plane(&self) -> Plane {
        Plane::from_three_points(self.vertices[0], self.vertices[1], self.vertices[2])
    }

    /// Computes the centroid (center of mass) of the polygon.
    pub fn centroid(&self) -> Point3<f32> {
        let sum: Vector3<f32> = self.vertices.iter().map(|p| p.coords).sum();
        Point3::from(sum / self.vertices.len() as f32)
    }

    /// Computes the area of this (convex, planar) polygon via fan
    /// triangulation around the first vertex.
    pub fn area(&self) -> f32 {
        let a = self.vertices[0];
        self.vertices[1..]
            .windows(2)
            .map(|pair| (pair[0] - a).cross(&(pair[1] - a)).norm() * 0.5)
            .sum()
    }

    /// Classifies this polygon relative to a plane.
    ///
    /// Returns:
    /// - `Front` if all vertices are in front of the plane
    /// - `Back` if all vertices are behind the plane
    /// - `Coplanar` if all vertices lie on the plane
    /// - `Spanning` if vertices are on both sides
    pub fn classify(&self, plane: &Plane) -> Classification {
        let mut front = 0;
        let mut back = 0;
        let mut on_plane = 0;

        for vertex in &self.vertices {
            match plane.classify_point(*vertex) {
                PlaneSide::Front => front += 1,
                PlaneSide::Back => back += 1,
                PlaneSide::OnPlane => on_plane += 1,
            }
        }

        if on_plane == self.vertices.len() {
            Classification::Coplanar
        } else if back == 0 {
            Classification::Front
        } else if front == 0 {
            Classification::Back
        } else {
            Classification::Spanning
        }
    }

    /// Reverses vertex order in place, flipping the normal. The same
    /// logical polygon, now facing the opposite direction.
    pub fn invert(&mut self) {
        self.vertices.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn tri(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Polygon {
        Polygon::new(vec![
            Point3::new(a[0], a[1], a[2]),
            Point3::new(b[0], b[1], b[2]),
            Point3::new(c[0], c[1], c[2]),
        ])
    }

    #[test]
    fn normal_follows_winding() {
        let poly = tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let n = poly.unit_normal().unwrap();
        assert!(n.y < 0.0);
    }

    #[test]
    fn invert_flips_normal_and_reverses_vertices() {
        let mut poly = tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let original_normal = poly.unit_normal().unwrap();
        let original_vertices: Vec<_> = poly.vertices().to_vec();

        poly.invert();

        let inverted_normal = poly.unit_normal().unwrap();
        assert!((inverted_normal + original_normal).norm() < 1e-6);

        let mut reversed = original_vertices;
        reversed.reverse();
        assert_eq!(poly.vertices(), reversed.as_slice());
    }

    #[test]
    fn double_invert_is_identity() {
        let mut poly = tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let original = poly.clone();
        poly.invert();
        poly.invert();
        assert_eq!(poly, original);
    }

    #[test]
    fn area_of_unit_square() {
        let square = Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 1.0),
        ]);
        assert!((square.area() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn shared_metadata_travels_with_clone() {
        let poly = Polygon::with_shared(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            42u32,
        );
        let cloned = poly.clone();
        assert_eq!(*cloned.shared(), 42);
    }

    #[test]
    fn classify_spanning_polygon() {
        let poly = tri([-1.0, -1.0, 0.0], [1.0, -1.0, 0.0], [0.0, 1.0, 0.0]);
        let plane = Plane::from_point_and_normal(Point3::origin(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(poly.classify(&plane), Classification::Spanning);
    }
}
