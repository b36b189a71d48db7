use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::{
    error::Error,
    gl::Renderer,
    scene::{self, View},
};

/// JavaScript wrapper for the demo sandbox: one canvas, one active scene.
#[wasm_bindgen]
pub struct Sandbox {
    renderer: Renderer,
    active: Option<View>,
}

/// Menu row handed to the JS side, derived from the route tree.
#[derive(Debug, serde::Serialize)]
struct MenuRow {
    label: String,
    path: String,
}

#[wasm_bindgen]
impl Sandbox {
    /// Creates a sandbox over the canvas element with the given DOM id.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<Sandbox, JsValue> {
        console_error_panic_hook::set_once();

        let renderer = Renderer::create(canvas_id).map_err(to_js)?;
        Ok(Sandbox { renderer, active: None })
    }

    /// The flattened menu as an array of `{label, path}` objects.
    #[wasm_bindgen(js_name = "menuEntries")]
    pub fn menu_entries(&self) -> Result<JsValue, JsValue> {
        let rows: Vec<MenuRow> = scene::flatten_menu(&scene::route_tree())
            .into_iter()
            .map(|entry| MenuRow {
                label: entry.label.to_string(),
                path: entry.path.to_string(),
            })
            .collect();

        serde_wasm_bindgen::to_value(&rows).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Tears down the active view and mounts the scene at `path`.
    pub fn select(&mut self, path: &str) -> Result<(), JsValue> {
        let kind = scene::find_scene(path).ok_or_else(|| to_js(Error::unknown_scene(path)))?;

        // the old view must be fully torn down before the context is reused
        self.active = None;

        let view = View::mount(self.renderer.gl(), kind.create()).map_err(to_js)?;
        self.active = Some(view);
        Ok(())
    }

    /// Pauses the active scene's animation, if any.
    pub fn pause(&self) {
        if let Some(view) = &self.active {
            view.scheduler().set_playing(false);
        }
    }

    /// Resumes the active scene's animation, if any.
    pub fn resume(&self) {
        if let Some(view) = &self.active {
            view.scheduler().set_playing(true);
        }
    }

    /// Resizes the canvas resolution and viewport.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.renderer.resize(width, height);
    }
}

fn to_js(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console::log_1(&"glslate WASM module loaded".into());
}
