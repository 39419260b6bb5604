//! One-shot entry point: acquire the surface, then render.

use crate::{
    config::RendererConfig,
    error::RunError,
    platform::Platform,
    render::TriangleRenderer,
};

/// Acquire the configured surface from `platform` and draw the triangle.
///
/// A surface failure is logged and shown to the user exactly once through
/// [`Platform::alert`]; no GL calls are made. A render failure is logged.
///
/// # Errors
///
/// Returns [`RunError::Surface`] if the surface cannot be acquired, or
/// [`RunError::Render`] if the pipeline stopped early.
pub fn run<P: Platform>(
    platform: &P,
    config: RendererConfig,
) -> Result<TriangleRenderer<P::Gl>, RunError> {
    let surface = match platform.acquire_surface(&config.canvas_id) {
        Ok(surface) => surface,
        Err(err) => {
            log::error!("failed to acquire surface: {err}");
            platform.alert(&err.to_string());
            return Err(err.into());
        }
    };

    let mut renderer = TriangleRenderer::new(surface.gl, config);

    // SAFETY: `Platform` guarantees the acquired context is current.
    if let Err(err) = unsafe { renderer.render(surface.size) } {
        log::error!("{err}");
        return Err(err.into());
    }

    Ok(renderer)
}
