//! WASM bindings for Fiber Section
//!
//! Lets a browser build sections and draw them without a server round trip.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::prelude::*;

// Use wee_alloc for smaller WASM binary
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[derive(Debug, Serialize)]
struct BuildResult {
    commands: Vec<Command>,
    tcl: String,
    python: String,
    sections: Vec<FiberSection>,
}

fn to_js(err: SectionError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn build(input_json: &str) -> SectionResult<BuildResult> {
    let input = ModelInput::from_json_str(input_json)?;
    let model = Model::from_input(&input)?;
    Ok(BuildResult {
        commands: model.commands().to_vec(),
        tcl: model.to_script(ScriptFormat::Tcl)?,
        python: model.to_script(ScriptFormat::Python)?,
        sections: model.sections().cloned().collect(),
    })
}

/// Build every section of a JSON `ModelInput`; returns JSON
#[wasm_bindgen]
pub fn build_sections(input_json: &str) -> Result<String, JsValue> {
    let result = build(input_json).map_err(to_js)?;
    web_sys::console::log_1(&format!("built {} sections", result.sections.len()).into());
    serde_json::to_string(&result).map_err(|e| to_js(e.into()))
}

/// Render one section of a JSON `ModelInput` as SVG
#[wasm_bindgen]
pub fn section_svg(input_json: &str, tag: u32) -> Result<String, JsValue> {
    let input = ModelInput::from_json_str(input_json).map_err(to_js)?;
    let model = Model::from_input(&input).map_err(to_js)?;
    let section = model.section(tag).map_err(to_js)?;
    SvgPlotter::default()
        .render(section, &Palette::default())
        .map_err(to_js)
}

/// The bundled example input as JSON
#[wasm_bindgen]
pub fn example_input() -> Result<String, JsValue> {
    ModelInput::example().to_json().map_err(to_js)
}
