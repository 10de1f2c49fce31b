//! Drawing contract between the sandbox and its presentation layer
//!
//! Anything that can put rectangles, lines and outlines on screen can host
//! the sandbox by implementing `Canvas`. `VertexBatch` is the built-in
//! implementation: it tessellates everything into one triangle list.

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;

/// Segments used per rounded corner
const CORNER_SEGMENTS: u32 = 4;
/// Segments used per circle outline
const CIRCLE_SEGMENTS: u32 = 12;

/// Destination surface for sandbox drawing
pub trait Canvas {
    fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: [f32; 4]);
    fn fill_rounded_rect(&mut self, top_left: Vec2, size: Vec2, radius: f32, color: [f32; 4]);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]);
    fn circle_outline(&mut self, center: Vec2, radius: f32, width: f32, color: [f32; 4]);

    /// Draw a block's sprite at `top_left`; the default is a flat rectangle
    fn sprite(&mut self, top_left: Vec2, size: Vec2, tint: [f32; 4]) {
        self.fill_rect(top_left, size, tint);
    }
}

/// Triangle-list recorder ready for GPU upload
#[derive(Debug, Clone, Default)]
pub struct VertexBatch {
    vertices: Vec<Vertex>,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Canvas for VertexBatch {
    fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: [f32; 4]) {
        self.vertices.extend(shapes::rect(top_left, size, color));
    }

    fn fill_rounded_rect(&mut self, top_left: Vec2, size: Vec2, radius: f32, color: [f32; 4]) {
        self.vertices.extend(shapes::rounded_rect(
            top_left,
            size,
            radius,
            color,
            CORNER_SEGMENTS,
        ));
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
        self.vertices.extend(shapes::line(from, to, width, color));
    }

    fn circle_outline(&mut self, center: Vec2, radius: f32, width: f32, color: [f32; 4]) {
        let inner = (radius - width).max(0.0);
        self.vertices
            .extend(shapes::ring(center, inner, radius, color, CIRCLE_SEGMENTS));
    }
}
