//! WebGPU rendering module
//!
//! Flat-shaded triangle lists: the scene builder turns the game state into
//! world-space vertices, the pipeline maps them through the camera and
//! draws them.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::{Palette, Vertex};
