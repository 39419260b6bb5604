//! Geometry and surface types for the triangle pipeline.

use bytemuck::{Pod, Zeroable};

/// A single 2D vertex, ready for the GPU.
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    /// Clip-space `(x, y)`.
    pub position: [f32; 2],
}

/// The hard-coded triangle: top middle, bottom left, bottom right.
pub const TRIANGLE: [Vertex; 3] = [
    Vertex {
        position: [-0.5, 0.0],
    },
    Vertex {
        position: [-0.5, -0.5],
    },
    Vertex {
        position: [1.0, -1.0],
    },
];

/// Number of vertices drawn, derived from [`TRIANGLE`] so the draw call
/// always matches the uploaded buffer.
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const VERTEX_COUNT: i32 = TRIANGLE.len() as i32;

/// Components per position attribute (`x`, `y`).
pub const POSITION_COMPONENTS: i32 = 2;

/// Bytes between consecutive vertices. The buffer is tightly packed.
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const VERTEX_STRIDE: i32 = std::mem::size_of::<Vertex>() as i32;

/// Drawable dimensions of the target surface, in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceSize {
    /// Create a new surface size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
