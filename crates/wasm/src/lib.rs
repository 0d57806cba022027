#![deny(unsafe_code)]
//! WASM bindings for backdrop.
//!
//! Browser hosts pass a JSON settings object (as a string) and get pasteable
//! markup back. Errors are thrown as plain strings.

use backdrop_core::{
    render_blob, BackdropError, BlobConfig, Decoration, GridPatternConfig, GridPatternRenderer,
    KeyedIds,
};
use serde_json::Value;
use wasm_bindgen::prelude::*;

fn parse(json: &str) -> Result<Value, String> {
    if json.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_str(json).map_err(|e| format!("invalid JSON: {e}"))
}

fn message(e: BackdropError) -> String {
    e.to_string()
}

fn blob_html(json: &str) -> Result<String, String> {
    let config = BlobConfig::from_json(&parse(json)?).map_err(message)?;
    render_blob(&config).map(|b| b.to_html()).map_err(message)
}

fn grid_html(json: &str, key: Option<&str>) -> Result<String, String> {
    let config = GridPatternConfig::from_json(&parse(json)?).map_err(message)?;
    let grid = match key {
        Some(key) => GridPatternRenderer::new(&KeyedIds::new("backdrop-grid", key)).render(&config),
        None => GridPatternRenderer::default().render(&config),
    };
    grid.map(|g| g.to_html()).map_err(message)
}

/// Renders a gradient blob from a JSON settings object.
#[wasm_bindgen(js_name = renderBlob)]
pub fn render_blob_js(json: &str) -> Result<String, JsValue> {
    blob_html(json).map_err(|e| JsValue::from_str(&e))
}

/// Renders a grid rectangle. Pass `key` for a stable pattern id.
#[wasm_bindgen(js_name = renderGrid)]
pub fn render_grid_js(json: &str, key: Option<String>) -> Result<String, JsValue> {
    grid_html(json, key.as_deref()).map_err(|e| JsValue::from_str(&e))
}
