//! Error types for surface acquisition and rendering.

use thiserror::Error;

/// Failures while acquiring the drawing surface. All of these are fatal and
/// reported to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// No global `window` object.
    #[error("No browser window available.")]
    NoWindow,

    /// The window has no document.
    #[error("No document available.")]
    NoDocument,

    /// No element with the configured id exists.
    #[error("Canvas `{0}` not found.")]
    CanvasNotFound(String),

    /// An element with the configured id exists but is not a canvas.
    #[error("Element `{0}` is not a canvas.")]
    NotACanvas(String),

    /// The platform cannot provide a WebGL2 context.
    #[error("WebGL not supported on your browser.")]
    Unsupported,
}

/// Failures while building the triangle pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A GL object could not be created.
    #[error("GL resource creation failed: {0}")]
    Resource(String),

    /// Linking the shader program failed. Holds the program info log.
    #[error("Program link error: {0}")]
    Link(String),

    /// The named vertex attribute does not exist in the linked program.
    #[error("Failed to get attrib location of `{0}`")]
    MissingAttribute(&'static str),

    /// A surface dimension does not fit in a GL `i32`.
    #[error("surface dimension {0} exceeds i32::MAX")]
    SurfaceTooLarge(u32),
}

/// Any failure of [`run`](crate::run).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The surface could not be acquired.
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// The surface was acquired but rendering stopped early.
    #[error(transparent)]
    Render(#[from] RenderError),
}
