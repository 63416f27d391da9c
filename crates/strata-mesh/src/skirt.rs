//! Bottom skirt: seals the volume under the top surface so the board never
//! shows a hole from below or from a low camera angle.
//!
//! Two perimeter rings are used. The inner ring traces the edge of the bordered
//! top surface at terrain height. The outer ring sits one cell further out at
//! [`SKIRT_WALL_Y`], skipping its four corner slots. A strip joins the rings and
//! a fan closes the outer ring against one centre vertex at [`SKIRT_CENTER_Y`].
//! Interior grid points carry no vertices.

use glam::Vec3;
use strata_board::HeightField;

use crate::{BorderedGrid, MeshData};

/// Elevation of the outer skirt ring.
pub const SKIRT_WALL_Y: f32 = -1.0;
/// Elevation of the shared centre vertex underneath the board.
pub const SKIRT_CENTER_Y: f32 = -5.0;

/// Vertex indices of both skirt rings, addressed by bordered coordinate in
/// `-1..=bw` x `-1..=bh`.
struct SkirtRings {
    stride: usize,
    slots: Vec<Option<u32>>,
}

impl SkirtRings {
    fn new(bw: usize, bh: usize) -> Self {
        Self {
            stride: bw + 2,
            slots: vec![None; (bw + 2) * (bh + 2)],
        }
    }

    fn slot(&self, bx: isize, by: isize) -> usize {
        (bx + 1) as usize + self.stride * (by + 1) as usize
    }

    fn insert(&mut self, bx: isize, by: isize, index: u32) {
        let slot = self.slot(bx, by);
        self.slots[slot] = Some(index);
    }

    fn at(&self, bx: isize, by: isize) -> u32 {
        match self.slots[self.slot(bx, by)] {
            Some(index) => index,
            None => panic!("no skirt vertex at bordered ({bx}, {by})"),
        }
    }
}

/// Number of grid points on the perimeter of a `bw x bh` grid.
fn perimeter_len(bw: usize, bh: usize) -> usize {
    if bw == 1 || bh == 1 {
        bw * bh
    } else {
        2 * (bw + bh - 2)
    }
}

/// Builds the closed skirt under the top surface of `field` with `border`
/// rings of border cells.
///
/// Capacity is derived from the perimeter alone: the inner ring, the
/// `2 * (bw + bh)` outer ring slots, and the centre vertex.
pub fn build_bottom_skirt(field: &HeightField, border: usize) -> MeshData {
    let grid = BorderedGrid::new(field, border);
    let bw = grid.bordered_width();
    let bh = grid.bordered_height();
    let (bw_i, bh_i) = (bw as isize, bh as isize);

    let inner = perimeter_len(bw, bh);
    let outer = 2 * (bw + bh);
    let strip_triangles = 6 * (bw - 1) + 6 * (bh - 1);
    let mut mesh = MeshData::with_capacity(inner + outer + 1, strip_triangles + 8);

    let mut rings = SkirtRings::new(bw, bh);
    for bx in -1..=bw_i {
        for by in -1..=bh_i {
            let outer_edges = [by == -1, bx == -1, by == bh_i, bx == bw_i]
                .iter()
                .filter(|&&edge| edge)
                .count();
            let on_inner = bx <= 0 || by <= 0 || bx >= bw_i - 1 || by >= bh_i - 1;

            let elevation = match outer_edges {
                0 if on_inner => {
                    let (x, y) = grid.interior(bx, by);
                    field.get_clamped(x, y)
                }
                1 => SKIRT_WALL_Y,
                _ => continue,
            };
            let index = mesh.add_vertex(grid.position(bx, by, elevation), [0.0, 0.0]);
            rings.insert(bx, by, index);
        }
    }
    let center = mesh.add_vertex(Vec3::new(0.0, SKIRT_CENTER_Y, 0.0), [0.0, 0.0]);

    // Near (-z) and far (+z) edges.
    for x in 0..bw_i - 1 {
        let (a, b) = (rings.at(x, 0), rings.at(x + 1, 0));
        let (c, d) = (rings.at(x, -1), rings.at(x + 1, -1));
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(b, d, c);
        mesh.add_triangle(c, d, center);

        let (a, b) = (rings.at(x, bh_i - 1), rings.at(x + 1, bh_i - 1));
        let (c, d) = (rings.at(x, bh_i), rings.at(x + 1, bh_i));
        mesh.add_triangle(a, c, b);
        mesh.add_triangle(b, c, d);
        mesh.add_triangle(d, c, center);
    }

    // Left (-x) and right (+x) edges.
    for y in 0..bh_i - 1 {
        let (a, b) = (rings.at(0, y), rings.at(0, y + 1));
        let (c, d) = (rings.at(-1, y), rings.at(-1, y + 1));
        mesh.add_triangle(a, c, b);
        mesh.add_triangle(b, c, d);
        mesh.add_triangle(d, c, center);

        let (a, b) = (rings.at(bw_i - 1, y), rings.at(bw_i - 1, y + 1));
        let (c, d) = (rings.at(bw_i, y), rings.at(bw_i, y + 1));
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(b, d, c);
        mesh.add_triangle(c, d, center);
    }

    // Corners: the two outer ring sides meet orthogonally, so each corner gets
    // one triangle bridging the rings and one closing the fan.
    let (r, t) = (bw_i - 1, bh_i - 1);
    mesh.add_triangle(rings.at(0, 0), rings.at(0, -1), rings.at(-1, 0));
    mesh.add_triangle(rings.at(-1, 0), rings.at(0, -1), center);
    mesh.add_triangle(rings.at(r, 0), rings.at(bw_i, 0), rings.at(r, -1));
    mesh.add_triangle(rings.at(r, -1), rings.at(bw_i, 0), center);
    mesh.add_triangle(rings.at(0, t), rings.at(-1, t), rings.at(0, bh_i));
    mesh.add_triangle(rings.at(0, bh_i), rings.at(-1, t), center);
    mesh.add_triangle(rings.at(r, t), rings.at(r, bh_i), rings.at(bw_i, t));
    mesh.add_triangle(rings.at(bw_i, t), rings.at(r, bh_i), center);

    tracing::debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        border,
        "built bottom skirt"
    );
    mesh
}
