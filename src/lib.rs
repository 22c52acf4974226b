//! Recursive ray tracer for scenes made of spheres and point lights, shaded with
//! the Phong model and mirror reflections.

pub mod algebra;
pub mod camera;
pub mod color;
pub mod constants;
pub mod error;
pub mod light;
pub mod material;
pub mod pattern;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod sphere;
pub mod tonemap;

pub use error::{Error, Result};
