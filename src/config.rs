//! Renderer configuration.

/// Element id of the canvas the triangle is drawn into.
pub const DEFAULT_CANVAS_ID: &str = "canvas";

/// Settings for a single triangle render.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    /// Id of the canvas element to draw into.
    pub canvas_id: String,
    /// Color the surface is cleared to before any setup (RGBA).
    pub initial_clear_color: [f32; 4],
    /// Background color cleared to right before drawing (RGBA).
    pub clear_color: [f32; 4],
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_owned(),
            initial_clear_color: [0.05, 0.05, 0.05, 1.0],
            clear_color: [0.0, 0.1, 0.08, 1.0],
        }
    }
}

impl RendererConfig {
    /// Draw into the canvas with the given element id.
    #[must_use]
    pub fn with_canvas_id(mut self, canvas_id: impl Into<String>) -> Self {
        self.canvas_id = canvas_id.into();
        self
    }

    /// Set the initial clear color.
    #[must_use]
    pub fn with_initial_clear_color(mut self, color: [f32; 4]) -> Self {
        self.initial_clear_color = color;
        self
    }

    /// Set the background color behind the triangle.
    #[must_use]
    pub fn with_clear_color(mut self, color: [f32; 4]) -> Self {
        self.clear_color = color;
        self
    }
}
