//! The renderer: owns the GL context, uploads the triangle, builds the
//! shader program, and issues the draw call.

use crate::{
    backend::GlBackend,
    config::RendererConfig,
    error::RenderError,
    shaders::{self, ShaderStage, StageOutcome},
    types::{SurfaceSize, POSITION_COMPONENTS, TRIANGLE, VERTEX_COUNT, VERTEX_STRIDE},
};

/// Convert a `u32` to `i32` for GL API calls.
fn gl_size(value: u32) -> Result<i32, RenderError> {
    i32::try_from(value).map_err(|_| RenderError::SurfaceTooLarge(value))
}

/// GPU objects created for the triangle. They are never deleted and live as
/// long as the context.
#[derive(Debug)]
pub struct GpuTriangle<G: GlBackend> {
    /// Vertex buffer holding [`TRIANGLE`].
    pub buffer: G::Buffer,
    /// Linked shader program.
    pub program: G::Program,
    /// Vertex array describing the position attribute layout.
    pub vertex_array: G::VertexArray,
    /// Location of the position input in [`program`](Self::program).
    pub position_location: u32,
    /// How the vertex stage compiled.
    pub vertex_stage: StageOutcome,
    /// How the fragment stage compiled.
    pub fragment_stage: StageOutcome,
}

/// Draws one static triangle into the current framebuffer.
///
/// # Example
///
/// ```no_run
/// # use triangle_renderer_glow::{RendererConfig, SurfaceSize, TriangleRenderer};
/// # fn example(gl: glow::Context) {
/// let mut renderer = TriangleRenderer::new(gl, RendererConfig::default());
/// let triangle = unsafe { renderer.render(SurfaceSize::new(800, 600)) };
/// # }
/// ```
pub struct TriangleRenderer<G: GlBackend> {
    /// The GL context, owned for the renderer's lifetime.
    gl: G,
    config: RendererConfig,
    /// Set after a successful [`render`](Self::render).
    triangle: Option<GpuTriangle<G>>,
}

impl<G: GlBackend> TriangleRenderer<G> {
    /// Create a renderer around `gl`. No GL calls are issued.
    pub fn new(gl: G, config: RendererConfig) -> Self {
        Self {
            gl,
            config,
            triangle: None,
        }
    }

    /// The context this renderer issues commands through.
    pub fn context(&self) -> &G {
        &self.gl
    }

    /// The configuration this renderer was created with.
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// GPU objects from the last successful render.
    pub fn triangle(&self) -> Option<&GpuTriangle<G>> {
        self.triangle.as_ref()
    }

    /// Upload the triangle, build the program, and draw once.
    ///
    /// Shader compile failures are logged and do not stop the pipeline. A
    /// link failure or a missing position attribute stops it before any
    /// viewport or draw configuration. The surface is left cleared.
    ///
    /// # Safety
    ///
    /// Requires the context passed to [`new`](Self::new) to be current.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if a GL object cannot be created, the
    /// program fails to link, the position attribute is missing, or `size`
    /// does not fit GL's signed dimensions.
    pub unsafe fn render(&mut self, size: SurfaceSize) -> Result<&GpuTriangle<G>, RenderError> {
        let width = gl_size(size.width)?;
        let height = gl_size(size.height)?;
        let gl = &self.gl;

        unsafe { clear(gl, self.config.initial_clear_color) };

        let buffer = unsafe {
            let buffer = gl.create_buffer().map_err(RenderError::Resource)?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&TRIANGLE),
                glow::STATIC_DRAW,
            );
            buffer
        };
        log::debug!("uploaded {} vertices", TRIANGLE.len());

        let vertex =
            unsafe { shaders::compile_stage(gl, ShaderStage::Vertex, shaders::VERTEX_SRC) }?;
        let fragment =
            unsafe { shaders::compile_stage(gl, ShaderStage::Fragment, shaders::FRAGMENT_SRC) }?;
        let program = unsafe { shaders::link_program(gl, &vertex, &fragment) }?;

        let position_location =
            unsafe { gl.get_attrib_location(program, shaders::POSITION_ATTRIBUTE) }
                .ok_or(RenderError::MissingAttribute(shaders::POSITION_ATTRIBUTE))?;

        unsafe {
            clear(gl, self.config.clear_color);
            gl.viewport(0, 0, width, height);
            gl.use_program(Some(program));
        }

        // Input assembly: one tightly packed vec2 per vertex.
        let vertex_array = unsafe {
            let vertex_array = gl.create_vertex_array().map_err(RenderError::Resource)?;
            gl.bind_vertex_array(Some(vertex_array));
            gl.enable_vertex_attrib_array(position_location);
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            gl.vertex_attrib_pointer_f32(
                position_location,
                POSITION_COMPONENTS,
                glow::FLOAT,
                false,
                VERTEX_STRIDE,
                0,
            );
            vertex_array
        };

        unsafe { gl.draw_arrays(glow::TRIANGLES, 0, VERTEX_COUNT) };
        log::info!("drew triangle into {}x{} surface", size.width, size.height);

        Ok(self.triangle.insert(GpuTriangle {
            buffer,
            program,
            vertex_array,
            position_location,
            vertex_stage: vertex.outcome,
            fragment_stage: fragment.outcome,
        }))
    }
}

/// Clear color and depth to `color`.
unsafe fn clear<G: GlBackend>(gl: &G, [red, green, blue, alpha]: [f32; 4]) {
    unsafe {
        gl.clear_color(red, green, blue, alpha);
        gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
    }
}
