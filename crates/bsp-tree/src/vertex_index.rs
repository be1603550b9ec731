//! A minimal spatial index over a point cloud, queryable by segment.

use nalgebra::Point3;

/// Points within this distance of a segment (and within the segment's span)
/// are considered to lie "on" it.
pub const SEGMENT_EPSILON: f32 = 1e-5;

/// A flat point cloud supporting segment-containment queries.
///
/// Backed by a linear scan rather than a tree: the workloads this crate
/// drives it with are per-polygon edge queries over a handful of vertices,
/// well under the size where a spatial partitioning structure would pay for
/// its own bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct VertexIndex {
    points: Vec<Point3<f32>>,
}

impl VertexIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Builds an index from an existing point collection.
    pub fn from_points(points: Vec<Point3<f32>>) -> Self {
        Self { points }
    }

    /// Inserts a point into the index.
    pub fn insert(&mut self, point: Point3<f32>) {
        self.points.push(point);
    }

    /// Returns the number of indexed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the index holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns every indexed point lying on segment `a -> b` (excluding the
    /// endpoints themselves, within [`SEGMENT_EPSILON`]), sorted by distance
    /// from `a`.
    pub fn search_segment(&self, a: Point3<f32>, b: Point3<f32>) -> Vec<Point3<f32>> {
        let direction = b - a;
        let length = direction.norm();
        if length <= f32::EPSILON {
            return Vec::new();
        }
        let unit = direction / length;

        let mut hits: Vec<(f32, Point3<f32>)> = self
            .points
            .iter()
            .copied()
            .filter_map(|p| {
                let offset = p - a;
                let t = offset.dot(&unit);
                if t <= SEGMENT_EPSILON || t >= length - SEGMENT_EPSILON {
                    return None;
                }
                let closest = a + unit * t;
                if (p - closest).norm() <= SEGMENT_EPSILON {
                    Some((t, p))
                } else {
                    None
                }
            })
            .collect();

        hits.sort_by(|(ta, _), (tb, _)| ta.partial_cmp(tb).expect("distances are finite"));
        hits.into_iter().map(|(_, p)| p).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_index_finds_nothing() {
        let index = VertexIndex::new();
        let hits = index.search_segment(Point3::origin(), Point3::new(1.0, 0.0, 0.0));
        assert!(hits.is_empty());
    }

    #[test]
    fn finds_points_on_segment_sorted_by_distance() {
        let mut index = VertexIndex::new();
        index.insert(Point3::new(0.75, 0.0, 0.0));
        index.insert(Point3::new(0.25, 0.0, 0.0));
        index.insert(Point3::new(0.5, 0.0, 0.0));

        let hits = index.search_segment(Point3::origin(), Point3::new(1.0, 0.0, 0.0));
        assert_eq!(
            hits,
            vec![
                Point3::new(0.25, 0.0, 0.0),
                Point3::new(0.5, 0.0, 0.0),
                Point3::new(0.75, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn ignores_points_off_the_segment_line() {
        let mut index = VertexIndex::new();
        index.insert(Point3::new(0.5, 1.0, 0.0));
        let hits = index.search_segment(Point3::origin(), Point3::new(1.0, 0.0, 0.0));
        assert!(hits.is_empty());
    }

    #[test]
    fn ignores_endpoints() {
        let mut index = VertexIndex::new();
        index.insert(Point3::new(0.0, 0.0, 0.0));
        index.insert(Point3::new(1.0, 0.0, 0.0));
        let hits = index.search_segment(Point3::origin(), Point3::new(1.0, 0.0, 0.0));
        assert!(hits.is_empty());
    }
}
