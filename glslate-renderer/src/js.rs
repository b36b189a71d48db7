use js_sys::wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

use crate::error::Error;

pub(crate) fn window() -> Result<Window, Error> {
    web_sys::window().ok_or(Error::window_not_found())
}

pub(crate) fn document() -> Result<Document, Error> {
    window()?.document().ok_or(Error::document_not_found())
}

pub(crate) fn get_canvas_by_id(canvas_id: &str) -> Result<HtmlCanvasElement, Error> {
    document()?
        .get_element_by_id(canvas_id)
        .ok_or(Error::canvas_not_found(canvas_id))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| Error::canvas_not_found(canvas_id))
}

pub(crate) fn get_webgl2_context(
    canvas: &HtmlCanvasElement,
) -> Result<web_sys::WebGl2RenderingContext, Error> {
    canvas
        .get_context("webgl2")
        .map_err(|_| Error::webgl_context_failed())?
        .ok_or(Error::webgl_context_failed())?
        .dyn_into::<web_sys::WebGl2RenderingContext>()
        .map_err(|_| Error::webgl_context_failed())
}
