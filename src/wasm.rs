//! WASM bindings for the frame solver
//!
//! Runs the solver directly in the browser. Requests and responses use the
//! same JSON shapes as the HTTP server (see [`crate::api`]).

use wasm_bindgen::prelude::*;

use crate::api;
use crate::elements::SectionSelection;
use crate::error::FrameError;
use crate::model::FrameModel;

// Use wee_alloc for smaller WASM binary
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Analyze a frame model
///
/// Takes a JSON analysis request and returns the JSON response. Malformed
/// requests and failed analyses are reported inside the response, so this
/// never returns `Err`.
#[wasm_bindgen]
pub fn analyze_json(request_json: &str) -> Result<String, JsValue> {
    let start = js_sys::Date::now();
    let response = api::run_json(request_json);
    web_sys::console::log_1(&format!("frame solver: {:.1} ms", js_sys::Date::now() - start).into());
    Ok(response)
}

/// Apply one section picker choice to a model, both given as JSON
///
/// Returns the updated model JSON.
#[wasm_bindgen]
pub fn apply_section_selection(model_json: &str, selection_json: &str) -> Result<String, JsValue> {
    let to_js = |e: FrameError| JsValue::from_str(&e.to_string());

    let mut model: FrameModel = serde_json::from_str(model_json).map_err(|e| to_js(e.into()))?;
    let selection: SectionSelection = serde_json::from_str(selection_json).map_err(|e| to_js(e.into()))?;
    model.apply_section_selection(selection).map_err(to_js)?;
    serde_json::to_string(&model).map_err(|e| to_js(e.into()))
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
