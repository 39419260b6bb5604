//! GLSL shader sources and compilation helpers.
//!
//! Both stages target GLSL ES 3.00, the WebGL2 shading language.

use std::fmt;

use crate::backend::GlBackend;
use crate::error::RenderError;

/// Name of the vertex position input in [`VERTEX_SRC`].
pub const POSITION_ATTRIBUTE: &str = "vertexPosition";

/// Vertex shader: passes the 2D position through as clip space.
///
/// # Inputs
///
/// | Name             | Type   | Description             |
/// |------------------|--------|-------------------------|
/// | `vertexPosition` | `vec2` | Clip-space `(x, y)`     |
pub const VERTEX_SRC: &str = r"#version 300 es
precision mediump float;

in vec2 vertexPosition;

void main() {
    gl_Position = vec4(vertexPosition, 0.0, 1.0);
}
";

/// Fragment shader: fills with a constant olive color.
pub const FRAGMENT_SRC: &str = r"#version 300 es
precision mediump float;

out vec4 outputColor;

void main() {
    outputColor = vec4(0.5, 0.5, 0.0, 1.0);
}
";

/// A programmable pipeline stage.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    /// Runs once per vertex.
    Vertex,
    /// Runs once per covered pixel.
    Fragment,
}

impl ShaderStage {
    /// The GL shader type enum for this stage.
    #[must_use]
    pub const fn gl_type(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        })
    }
}

/// Result of compiling one stage.
///
/// A failed compile is not an error here: the diagnostic is logged and the
/// shader object is still handed to the linker, which reports the failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageOutcome {
    /// The compile status flag was set.
    Compiled,
    /// Compilation failed with the given info log.
    CompiledWithDiagnostic(String),
}

impl StageOutcome {
    /// Whether the stage compiled cleanly.
    #[must_use]
    pub fn is_compiled(&self) -> bool {
        matches!(self, Self::Compiled)
    }
}

/// A shader object together with how its compilation went.
#[derive(Clone, Debug)]
pub struct CompiledStage<S> {
    /// Which stage this is.
    pub stage: ShaderStage,
    /// The GL shader object.
    pub shader: S,
    /// Compile result.
    pub outcome: StageOutcome,
}

/// Compile a single shader stage from source.
///
/// # Safety
///
/// Requires a valid, current GL context.
///
/// # Errors
///
/// Returns [`RenderError::Resource`] only if the shader object cannot be
/// created. A failed compile is reported through [`StageOutcome`].
pub unsafe fn compile_stage<G: GlBackend>(
    gl: &G,
    stage: ShaderStage,
    source: &str,
) -> Result<CompiledStage<G::Shader>, RenderError> {
    unsafe {
        let shader = gl
            .create_shader(stage.gl_type())
            .map_err(RenderError::Resource)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        let outcome = if gl.get_shader_compile_status(shader) {
            log::debug!("{stage} shader compiled");
            StageOutcome::Compiled
        } else {
            let info_log = gl.get_shader_info_log(shader);
            log::error!("{stage} shader compile error: {info_log}");
            StageOutcome::CompiledWithDiagnostic(info_log)
        };

        Ok(CompiledStage {
            stage,
            shader,
            outcome,
        })
    }
}

/// Link a vertex and a fragment stage into a program.
///
/// The shader objects stay attached and alive for the lifetime of the
/// context.
///
/// # Safety
///
/// Requires a valid, current GL context that created both shaders.
///
/// # Errors
///
/// Returns [`RenderError::Link`] with the program info log if linking fails,
/// or [`RenderError::Resource`] if the program object cannot be created.
pub unsafe fn link_program<G: GlBackend>(
    gl: &G,
    vertex: &CompiledStage<G::Shader>,
    fragment: &CompiledStage<G::Shader>,
) -> Result<G::Program, RenderError> {
    unsafe {
        let program = gl.create_program().map_err(RenderError::Resource)?;
        gl.attach_shader(program, vertex.shader);
        gl.attach_shader(program, fragment.shader);
        gl.link_program(program);

        if !gl.get_program_link_status(program) {
            let info_log = gl.get_program_info_log(program);
            log::error!("program link error: {info_log}");
            return Err(RenderError::Link(info_log));
        }

        log::debug!("shader program linked");
        Ok(program)
    }
}
