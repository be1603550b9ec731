//! Polygon cutting/splitting operations for BSP trees.

use crate::{Classification, CsgError, Plane, PlaneSide, Polygon, Rectangle, Triangle};

/// Trait for geometry that can be cut by a plane.
pub trait Cuttable {
    /// The polygon type produced by a cut. Lets [`Triangle`]/[`Rectangle`]
    /// funnel through the same splitting logic as a generic [`Polygon`].
    type Output;

    /// Cuts the geometry by a plane.
    ///
    /// Returns `(front, back)` where:
    /// - `front`: `Some(polygon)` containing the part on the front side of the plane
    /// - `back`: `Some(polygon)` containing the part on the back side of the plane
    ///
    /// # Return values by classification
    ///
    /// - **Front**: `(Some(self), None)` - entire geometry is in front
    /// - **Back**: `(None, Some(self))` - entire geometry is behind
    /// - **Coplanar**: `(Some(self), None)` - treated as front
    /// - **Spanning**: `(Some(front_part), Some(back_part))` - split into two pieces
    ///
    /// # Errors
    /// Returns [`CsgError::SplitFailed`] if a spanning polygon's intersection
    /// points collapse into fewer than three vertices on both sides (callers
    /// should treat this as the polygon having negligible extent).
    fn split(&self, plane: &Plane) -> Result<(Option<Self::Output>, Option<Self::Output>), CsgError>;
}

impl<S: Clone> Cuttable for Polygon<S> {
    type Output = Polygon<S>;

    fn split(&self, plane: &Plane) -> Result<(Option<Polygon<S>>, Option<Polygon<S>>), CsgError> {
        match self.classify(plane) {
            Classification::Front | Classification::Coplanar => Ok((Some(self.clone()), None)),
            Classification::Back => Ok((None, Some(self.clone()))),
            Classification::Spanning => split_polygon(self, plane),
        }
    }
}

/// Splits a spanning polygon into front and back parts.
///
/// Uses a variant of the Sutherland-Hodgman algorithm:
/// walks the polygon edges and builds two vertex lists,
/// adding intersection points when edges cross the plane.
fn split_polygon<S: Clone>(
    polygon: &Polygon<S>,
    plane: &Plane,
) -> Result<(Option<Polygon<S>>, Option<Polygon<S>>), CsgError> {
    let vertices = polygon.vertices();
    let n = vertices.len();

    let mut front_verts = Vec::with_capacity(n + 1);
    let mut back_verts = Vec::with_capacity(n + 1);

    // Classify all vertices upfront
    let sides: Vec<PlaneSide> = vertices.iter().map(|v| plane.classify_point(*v)).collect();

    for i in 0..n {
        let current = vertices[i];
        let current_side = sides[i];
        let next_idx = (i + 1) % n;
        let next = vertices[next_idx];
        let next_side = sides[next_idx];

        // Add current vertex to appropriate list(s)
        match current_side {
            PlaneSide::Front => front_verts.push(current),
            PlaneSide::Back => back_verts.push(current),
            PlaneSide::OnPlane => {
                // On-plane vertices go to both sides
                front_verts.push(current);
                back_verts.push(current);
            }
        }

        // Check if edge crosses the plane (excluding on-plane cases)
        let crosses = matches!(
            (current_side, next_side),
            (PlaneSide::Front, PlaneSide::Back) | (PlaneSide::Back, PlaneSide::Front)
        );

        if crosses {
            // Compute intersection point
            if let Some((_, intersection)) = plane.intersect_segment(current, next) {
                front_verts.push(intersection);
                back_verts.push(intersection);
            }
        }
    }

    if front_verts.len() < 3 && back_verts.len() < 3 {
        return Err(CsgError::SplitFailed);
    }

    let shared = polygon.shared().clone();
    let front = if front_verts.len() >= 3 {
        Some(Polygon::with_shared(front_verts, shared.clone()))
    } else {
        None
    };

    let back = if back_verts.len() >= 3 {
        Some(Polygon::with_shared(back_verts, shared))
    } else {
        None
    };

    Ok((front, back))
}

impl Cuttable for Triangle {
    type Output = Polygon;

    fn split(&self, plane: &Plane) -> Result<(Option<Polygon>, Option<Polygon>), CsgError> {
        Polygon::from(self).split(plane)
    }
}

impl Cuttable for Rectangle {
    type Output = Polygon;

    fn split(&self, plane: &Plane) -> Result<(Option<Polygon>, Option<Polygon>), CsgError> {
        Polygon::from(self).split(plane)
    }
}
