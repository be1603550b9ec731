//! Primitive solid generators: enough to build and test the BSP core and
//! the Boolean layer end-to-end without pulling in mesh I/O.

use std::f32::consts::PI;

use nalgebra::{Point3, Vector3};

use crate::{Polygon, Rectangle};

/// Generates the 6 face quads of an axis-aligned cuboid, counter-clockwise
/// winding viewed from outside (outward-facing normals).
pub fn cuboid(center: Point3<f32>, size: Vector3<f32>) -> Vec<Polygon> {
    let half = size * 0.5;

    let corners = [
        center + Vector3::new(-half.x, -half.y, -half.z), // 0: left-bottom-back
        center + Vector3::new(half.x, -half.y, -half.z),  // 1: right-bottom-back
        center + Vector3::new(half.x, half.y, -half.z),   // 2: right-top-back
        center + Vector3::new(-half.x, half.y, -half.z),  // 3: left-top-back
        center + Vector3::new(-half.x, -half.y, half.z),  // 4: left-bottom-front
        center + Vector3::new(half.x, -half.y, half.z),   // 5: right-bottom-front
        center + Vector3::new(half.x, half.y, half.z),    // 6: right-top-front
        center + Vector3::new(-half.x, half.y, half.z),   // 7: left-top-front
    ];

    let faces: [[usize; 4]; 6] = [
        [4, 5, 6, 7], // front (+Z)
        [1, 0, 3, 2], // back (-Z)
        [0, 4, 7, 3], // left (-X)
        [5, 1, 2, 6], // right (+X)
        [7, 6, 2, 3], // top (+Y)
        [0, 1, 5, 4], // bottom (-Y)
    ];

    faces
        .iter()
        .map(|indices| {
            Rectangle::from_corners(
                corners[indices[0]],
                corners[indices[1]],
                corners[indices[2]],
                corners[indices[3]],
            )
            .into()
        })
        .collect()
}

/// Generates a UV-sphere approximation as a sequence of quads, with the
/// polar rings collapsed to triangles. `subdivisions` controls both the
/// number of latitude stacks and longitude slices; values below the
/// geometric minimum (2 stacks, 3 slices) are clamped up.
pub fn sphere(center: Point3<f32>, radius: f32, subdivisions: usize) -> Vec<Polygon> {
    let stacks = subdivisions.max(2);
    let slices = subdivisions.max(3);

    let vertex = |stack: usize, slice: usize| -> Point3<f32> {
        let theta = PI * stack as f32 / stacks as f32;
        let phi = 2.0 * PI * slice as f32 / slices as f32;
        let direction = Vector3::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin());
        center + direction * radius
    };

    let mut polygons = Vec::with_capacity(stacks * slices);
    for stack in 0..stacks {
        for slice in 0..slices {
            let top_left = vertex(stack, slice);
            let top_right = vertex(stack, slice + 1);
            let bottom_right = vertex(stack + 1, slice + 1);
            let bottom_left = vertex(stack + 1, slice);

            if stack == 0 {
                // Top ring collapses to the pole: top_left == top_right.
                polygons.push(Polygon::new(vec![top_left, bottom_right, bottom_left]));
            } else if stack == stacks - 1 {
                // Bottom ring collapses to the pole: bottom_left == bottom_right.
                polygons.push(Polygon::new(vec![top_left, top_right, bottom_left]));
            } else {
                polygons.push(Polygon::new(vec![top_left, top_right, bottom_right, bottom_left]));
            }
        }
    }
    polygons
}
