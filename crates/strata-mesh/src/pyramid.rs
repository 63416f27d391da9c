//! Pyramid doodad: a four-vertex, three-sided marker used for trees and shrubs.

use glam::Vec3;

use crate::MeshData;

/// Builds a pyramid of total `height` centred on the origin, with an apex at
/// `+height / 2` and a triangular base at `-height / 2`.
///
/// The base is laid out from an isoceles triangle stretched to `1.5 * base_size`
/// deep: the front corner sits `base_size` in front of the axis and the two back
/// corners sit behind it, spread so the sides are equal. The base itself is
/// left open.
pub fn generate_pyramid(height: f32, base_size: f32) -> MeshData {
    let mut mesh = MeshData::with_capacity(4, 3);

    let base_depth = base_size * 1.5;
    let back_offset = base_depth - base_size;
    let side_offset = (back_offset * back_offset + (base_depth / 2.0) * (base_depth / 2.0)).sqrt();
    let half = height / 2.0;

    let apex = mesh.add_vertex(Vec3::new(0.0, half, 0.0), [0.0, 0.0]);
    let front = mesh.add_vertex(Vec3::new(0.0, -half, -base_size), [0.0, 0.0]);
    let right = mesh.add_vertex(Vec3::new(side_offset, -half, back_offset), [0.0, 0.0]);
    let left = mesh.add_vertex(Vec3::new(-side_offset, -half, back_offset), [0.0, 0.0]);

    mesh.add_triangle(right, front, apex);
    mesh.add_triangle(left, right, apex);
    mesh.add_triangle(front, left, apex);

    mesh
}
