//! Terrain mesh construction: the bordered top surface, the sealing bottom
//! skirt, pyramid doodads, and the fixed-capacity mesh buffer they fill.

pub mod layout;
pub mod mesh_data;
pub mod pyramid;
pub mod skirt;
pub mod surface;

pub use layout::BorderedGrid;
pub use mesh_data::{MeshData, MeshVertex};
pub use pyramid::generate_pyramid;
pub use skirt::{SKIRT_CENTER_Y, SKIRT_WALL_Y, build_bottom_skirt};
pub use surface::build_top_surface;
