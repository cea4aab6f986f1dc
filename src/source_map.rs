use crate::{logging, AnnotateError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// JSON key holding the encoded PC-to-line mapping.
pub const MAPPING_KEY: &str = "mapping";

/// Read the raw encoded mapping string from a source map file.
pub fn load_raw_mapping(path: &Path) -> Result<String> {
    logging::log_loading_source_map(&path.to_string_lossy());

    let content = fs::read_to_string(path).map_err(|e| {
        AnnotateError::FileError(format!("Failed to read source map {:?}: {}", path, e))
    })?;

    let raw = parse_raw_mapping(&content)?;
    logging::log_source_map_loaded(raw.len());
    Ok(raw)
}

/// Extract the `"mapping"` string from a source map JSON document.
pub fn parse_raw_mapping(json: &str) -> Result<String> {
    let document: Value = serde_json::from_str(json)
        .map_err(|e| AnnotateError::JsonError(format!("Invalid source map JSON: {}", e)))?;

    match document.get(MAPPING_KEY) {
        Some(Value::String(raw)) => Ok(raw.clone()),
        Some(other) => Err(AnnotateError::InvalidMapping(format!(
            "expected a string under \"{}\", found {}",
            MAPPING_KEY,
            json_kind(other)
        ))
        .into()),
        None => Err(AnnotateError::MissingKey(MAPPING_KEY.to_string()).into()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
