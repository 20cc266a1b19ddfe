//! # Primitives
//!
//! Reference meshes with known topology and known normals: a closed box,
//! a closed cylinder with sharp rims, a closed UV sphere and an open fan.

pub mod cube;
pub mod cylinder;
pub mod fan;
pub mod sphere;

pub use cube::create_cube;
pub use cylinder::create_cylinder;
pub use fan::create_fan;
pub use sphere::create_sphere;
