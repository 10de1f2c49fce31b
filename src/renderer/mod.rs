//! Rendering module
//!
//! The sandbox draws through the `Canvas` trait; `VertexBatch` tessellates a
//! frame into a GPU-ready triangle list.

pub mod canvas;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, VertexBatch};
pub use scene::render_world;
pub use vertex::{Palette, Vertex};
