//! Browser platform: canvas lookup, WebGL2 context creation, and the
//! `wasm-bindgen` start hook.

use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext, Window};

use crate::{
    app,
    config::RendererConfig,
    error::SurfaceError,
    logging::{self, LoggingConfig},
    platform::{Platform, Surface},
    types::SurfaceSize,
};

/// A [`Platform`] backed by the page's `window` and `document`.
pub struct BrowserPlatform {
    window: Window,
}

impl BrowserPlatform {
    /// Bind to the global `window`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::NoWindow`] outside a browsing context.
    pub fn new() -> Result<Self, SurfaceError> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or(SurfaceError::NoWindow)
    }

    /// The window's inner size in CSS pixels.
    // Inner sizes are small non-negative integers in practice.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn inner_size(&self) -> SurfaceSize {
        let dimension = |value: Result<JsValue, JsValue>| {
            value
                .ok()
                .and_then(|value| value.as_f64())
                .map_or(0, |value| value.max(0.0) as u32)
        };
        SurfaceSize::new(
            dimension(self.window.inner_width()),
            dimension(self.window.inner_height()),
        )
    }
}

// SAFETY: a WebGL2 context is always current for the thread that created it.
unsafe impl Platform for BrowserPlatform {
    type Gl = glow::Context;

    fn acquire_surface(&self, canvas_id: &str) -> Result<Surface<glow::Context>, SurfaceError> {
        let document = self.window.document().ok_or(SurfaceError::NoDocument)?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| SurfaceError::CanvasNotFound(canvas_id.to_owned()))?
            .dyn_into()
            .map_err(|_| SurfaceError::NotACanvas(canvas_id.to_owned()))?;

        let context: WebGl2RenderingContext = canvas
            .get_context("webgl2")
            .ok()
            .flatten()
            .ok_or(SurfaceError::Unsupported)?
            .dyn_into()
            .map_err(|_| SurfaceError::Unsupported)?;

        let size = self.inner_size();
        canvas.set_width(size.width);
        canvas.set_height(size.height);
        log::debug!("acquired webgl2 context on #{canvas_id}");

        Ok(Surface {
            gl: glow::Context::from_webgl2_context(context),
            size,
        })
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::error!("alert failed: {err:?}");
        }
    }
}

/// Page-load entry point.
#[wasm_bindgen(start)]
pub fn start() {
    logging::init_logging(&LoggingConfig::default());

    let platform = match BrowserPlatform::new() {
        Ok(platform) => platform,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };

    // Failures are already logged and, when fatal, alerted.
    let _ = app::run(&platform, RendererConfig::default());
}
