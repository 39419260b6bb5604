//! Draws a single static triangle into a WebGL2 canvas using [glow].
//!
//! On page load the crate finds the `canvas` element and creates a WebGL2
//! context. It then uploads a three-vertex triangle, compiles and links a
//! GLSL ES 3.00 shader pair, and issues one draw call. Nothing is animated or
//! re-rendered afterwards.
//!
//! The pipeline itself, [`TriangleRenderer`], is written against the
//! [`GlBackend`] trait, which every [`glow::HasContext`] implements. It can
//! therefore also draw into a native OpenGL ES context.
//!
//! # Failure handling
//!
//! - A missing canvas or an unsupported graphics API is fatal. It is shown to
//!   the user once via [`Platform::alert`].
//! - A shader compile failure is logged. Setup carries on to linking.
//! - A link failure or a missing position attribute is logged. Setup stops
//!   before any viewport or draw configuration.
//!
//! # Safety
//!
//! Rendering issues raw GL calls and requires a current context, so
//! [`TriangleRenderer::render`] is `unsafe`. [`run`] is safe because
//! [`Platform`] implementors guarantee a current context.
//!
//! [glow]: https://docs.rs/glow

mod app;
mod backend;
mod config;
mod error;
pub mod logging;
mod platform;
mod render;
pub mod shaders;
mod types;

#[cfg(test)]
mod testing;
#[cfg(target_arch = "wasm32")]
mod web;

pub use app::run;
pub use backend::GlBackend;
pub use config::{RendererConfig, DEFAULT_CANVAS_ID};
pub use error::{RenderError, RunError, SurfaceError};
pub use platform::{Platform, Surface};
pub use render::{GpuTriangle, TriangleRenderer};
pub use types::{SurfaceSize, Vertex, POSITION_COMPONENTS, TRIANGLE, VERTEX_COUNT, VERTEX_STRIDE};
#[cfg(target_arch = "wasm32")]
pub use web::{start, BrowserPlatform};
