//! Static resources: the box mesh and its material

mod material;
mod mesh;

pub use material::*;
pub use mesh::*;
