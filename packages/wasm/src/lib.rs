use storygen_generator::{generate, GenerationRequest, NodeStyleInfo};
use storygen_plugin::{inspect_selection, style_context, PluginMessage, SceneNode, UiOptions};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Generate the four component files.
///
/// Returns a JSON object mapping relative path to file content.
#[wasm_bindgen(js_name = generateFiles)]
pub fn generate_files_js(request_json: &str, node_json: Option<String>) -> Result<String, JsValue> {
    generate_files(request_json, node_json.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Generate files using the style of the current selection.
///
/// The selection only contributes styling when it holds exactly one node.
#[wasm_bindgen(js_name = generateFromSelection)]
pub fn generate_from_selection_js(request_json: &str, selection_json: &str) -> Result<String, JsValue> {
    generate_from_selection(request_json, selection_json).map_err(|e| JsValue::from_str(&e))
}

/// Inspect the canvas selection and return the message to post to the UI
#[wasm_bindgen(js_name = inspectSelection)]
pub fn inspect_selection_js(selection_json: &str) -> Result<String, JsValue> {
    inspect(selection_json).map_err(|e| JsValue::from_str(&e))
}

/// Panel size as `{ width, height }` JSON
#[wasm_bindgen(js_name = uiOptions)]
pub fn ui_options_js() -> String {
    serde_json::to_string(&UiOptions::default()).unwrap_or_else(|_| "{}".to_string())
}

fn generate_files(request_json: &str, node_json: Option<&str>) -> Result<String, String> {
    let request: GenerationRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid request: {}", e))?;
    let node: Option<NodeStyleInfo> = node_json
        .map(|json| serde_json::from_str::<NodeStyleInfo>(json))
        .transpose()
        .map_err(|e| format!("Invalid node info: {}", e))?;

    let files = generate(&request, node.as_ref()).map_err(|e| e.to_string())?;
    serde_json::to_string(&files).map_err(|e| format!("Serialization error: {}", e))
}

fn generate_from_selection(request_json: &str, selection_json: &str) -> Result<String, String> {
    let selection = parse_selection(selection_json)?;
    let node = style_context(&selection);
    let node_json = node
        .map(|node| serde_json::to_string(&node))
        .transpose()
        .map_err(|e| format!("Serialization error: {}", e))?;

    generate_files(request_json, node_json.as_deref())
}

fn inspect(selection_json: &str) -> Result<String, String> {
    let selection = parse_selection(selection_json)?;
    let message = match inspect_selection(&selection) {
        Ok(data) => PluginMessage::SelectionInfo { data },
        Err(err) => PluginMessage::selection_error(&err),
    };
    serde_json::to_string(&message).map_err(|e| format!("Serialization error: {}", e))
}

fn parse_selection(selection_json: &str) -> Result<Vec<SceneNode>, String> {
    serde_json::from_str(selection_json).map_err(|e| format!("Invalid selection: {}", e))
}
