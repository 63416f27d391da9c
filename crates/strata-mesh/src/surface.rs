//! Top terrain surface: one vertex per bordered grid point, two triangles per quad.

use strata_board::HeightField;

use crate::{BorderedGrid, MeshData};

/// Builds the terrain top surface over `field` with `border` extra rings of
/// vertices on every side.
///
/// Border vertices reuse the height of the nearest interior cell. UVs are
/// offset by half a texel so each interior vertex samples its cell's centre.
///
/// Vertices are emitted column by column, so the fast axis runs along z with
/// stride `bh` (the bordered height). Quads are split as `(a, b, c)`,
/// `(b, d, c)` with `a = row + bh * col`, `b = a + 1`, `c = a + bh`, `d = c + 1`,
/// which faces every triangle up.
pub fn build_top_surface(field: &HeightField, border: usize) -> MeshData {
    let grid = BorderedGrid::new(field, border);
    let bw = grid.bordered_width();
    let bh = grid.bordered_height();

    let triangle_count = 2 * (bw - 1) * (bh - 1);
    let mut mesh = MeshData::with_capacity(bw * bh, triangle_count);

    let texel_u = 1.0 / field.width() as f32;
    let texel_v = 1.0 / field.height() as f32;

    for bx in 0..bw as isize {
        for by in 0..bh as isize {
            let (x, y) = grid.interior(bx, by);
            let elevation = field.get_clamped(x, y);
            let uv = [(x as f32 + 0.5) * texel_u, (y as f32 + 0.5) * texel_v];
            mesh.add_vertex(grid.position(bx, by, elevation), uv);
        }
    }

    for col in 0..bw - 1 {
        for row in 0..bh - 1 {
            let a = (row + bh * col) as u32;
            let b = a + 1;
            let c = a + bh as u32;
            let d = c + 1;
            mesh.add_triangle(a, b, c);
            mesh.add_triangle(b, d, c);
        }
    }

    tracing::debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        border,
        "built top surface"
    );
    mesh
}
