//! View scale and coordinate transformation for canvas rendering.
//!
//! Converts between pixel coordinates (screen space, origin top-left, +Y
//! down) and panel coordinates (physical units, origin bottom-left, +Y up).
//! The scale is owned here and only changes through [`ViewScale::resize`].

use ripperkit_core::{Panel, Point};

/// Pixels-per-unit scale and the canvas size it was fitted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewScale {
    scale: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl ViewScale {
    /// A 1:1 view sized to the panel.
    pub fn new(panel: &Panel) -> Self {
        Self {
            scale: 1.0,
            canvas_width: panel.width,
            canvas_height: panel.height,
        }
    }

    /// Current pixels per panel unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Canvas width in pixels.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Canvas height in pixels.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Fit the canvas to a container of the given width.
    ///
    /// The canvas takes the container width minus `margin` (never below
    /// zero) and keeps the panel aspect ratio.
    pub fn resize(&mut self, panel: &Panel, container_width: f64, margin: f64) {
        let width = (container_width - margin).max(0.0);
        self.canvas_width = width;
        self.canvas_height = width * panel.aspect();
        self.scale = width / panel.width;
    }

    /// Converts panel coordinates to pixel coordinates.
    ///
    /// Formula:
    /// ```text
    /// pixel_x = x * scale
    /// pixel_y = (h - y) * scale  // Flip Y-axis
    /// ```
    pub fn world_to_pixel(&self, panel: &Panel, world: Point) -> Point {
        Point::new(world.x * self.scale, (panel.height - world.y) * self.scale)
    }

    /// Converts pixel coordinates to panel coordinates.
    pub fn pixel_to_world(&self, panel: &Panel, pixel: Point) -> Point {
        Point::new(pixel.x / self.scale, panel.height - pixel.y / self.scale)
    }
}
