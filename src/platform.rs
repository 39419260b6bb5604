//! Where the drawing surface comes from.

use crate::backend::GlBackend;
use crate::error::SurfaceError;
use crate::types::SurfaceSize;

/// A GL context bound to a sized drawing surface.
#[derive(Debug)]
pub struct Surface<G> {
    /// The context GL commands are issued through.
    pub gl: G,
    /// Drawable size of the surface.
    pub size: SurfaceSize,
}

/// Provides the drawing surface and a way to tell the user about fatal
/// environment problems.
///
/// # Safety
///
/// The context returned by [`acquire_surface`](Self::acquire_surface) must be
/// valid and current on the calling thread for as long as it is used.
pub unsafe trait Platform {
    /// The GL context type this platform hands out.
    type Gl: GlBackend;

    /// Look up the surface identified by `canvas_id` and create its context.
    ///
    /// # Errors
    ///
    /// Returns a [`SurfaceError`] if the surface is missing or the graphics
    /// API is unsupported.
    fn acquire_surface(&self, canvas_id: &str) -> Result<Surface<Self::Gl>, SurfaceError>;

    /// Show a blocking, user-visible message.
    fn alert(&self, message: &str);
}
