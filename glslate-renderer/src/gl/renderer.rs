use web_sys::HtmlCanvasElement;

use crate::{error::Error, gl::GL, js};

/// Thin wrapper over one canvas and its WebGL2 context.
///
/// Tracks the viewport and clear color to skip redundant state changes;
/// everything else goes through the context handle directly.
#[derive(Debug)]
pub struct Renderer {
    gl: GL,
    canvas: HtmlCanvasElement,
    viewport: [i32; 4],
    clear_color: [f32; 4],
}

impl Renderer {
    /// Creates a renderer for the canvas element with the given DOM id.
    pub fn create(canvas_id: &str) -> Result<Self, Error> {
        let canvas = js::get_canvas_by_id(canvas_id)?;
        Self::create_with_canvas(canvas)
    }

    /// Creates a renderer from an existing canvas element, initializing the
    /// WebGL2 context and sizing the viewport to the canvas.
    pub fn create_with_canvas(canvas: HtmlCanvasElement) -> Result<Self, Error> {
        let (width, height) = (canvas.width() as i32, canvas.height() as i32);
        let gl = js::get_webgl2_context(&canvas)?;

        let mut renderer = Self {
            gl,
            canvas,
            viewport: [0, 0, 0, 0],
            clear_color: [0.0, 0.0, 0.0, 0.0],
        };
        renderer.resize(width, height);
        Ok(renderer)
    }

    /// Resizes the canvas resolution and adjusts the viewport to match.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.viewport(0, 0, width, height);
    }

    /// Sets the viewport, skipping the call when nothing changed.
    pub fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let requested = [x, y, width, height];
        if self.viewport != requested {
            self.gl.viewport(x, y, width, height);
            self.viewport = requested;
        }
    }

    /// Clears the color and depth buffers with the given color.
    pub fn clear(&mut self, r: f32, g: f32, b: f32) {
        let requested = [r, g, b, 1.0];
        if self.clear_color != requested {
            self.gl.clear_color(r, g, b, 1.0);
            self.clear_color = requested;
        }
        self.gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }

    /// The WebGL2 rendering context.
    pub fn gl(&self) -> &GL {
        &self.gl
    }

    /// The canvas element backing this renderer.
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Canvas dimensions as `(width, height)` in pixels.
    pub fn canvas_size(&self) -> (i32, i32) {
        (self.canvas.width() as i32, self.canvas.height() as i32)
    }
}
