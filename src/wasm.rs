//! WASM bindings for ulatex
//!
//! This module provides JavaScript-accessible functions for LaTeX ↔ Unicode
//! transcoding.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Transcoding result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct TranscodeOutcome {
    /// The transcoded output
    pub output: String,
    /// Whether the operation succeeded
    pub success: bool,
    /// Error message if the operation failed
    pub error: Option<String>,
    /// LaTeX tokens left unresolved (decode only)
    pub unresolved: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Decode LaTeX-escaped text to normalized Unicode
///
/// # Arguments
/// * `input` - LaTeX-escaped text
///
/// # Returns
/// A `TranscodeOutcome` object with the decoded text and any unresolved
/// command tokens
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "decodeLatex")]
pub fn decode_latex_wasm(input: &str) -> JsValue {
    let result = match crate::decode_latex(input) {
        Ok(out) => TranscodeOutcome {
            output: out.text,
            success: true,
            error: None,
            unresolved: out.unresolved,
        },
        Err(e) => TranscodeOutcome {
            output: String::new(),
            success: false,
            error: Some(e.to_string()),
            unresolved: vec![],
        },
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Encode Unicode text to the corpus's LaTeX conventions
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "encodeToLatex")]
pub fn encode_to_latex_wasm(input: &str) -> JsValue {
    let result = match crate::encode_to_latex(input) {
        Ok(output) => TranscodeOutcome {
            output,
            success: true,
            error: None,
            unresolved: vec![],
        },
        Err(e) => TranscodeOutcome {
            output: String::new(),
            success: false,
            error: Some(e.to_string()),
            unresolved: vec![],
        },
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Escape non-ASCII code points in the legacy `?[\u<dec>]` format
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "legacyEscape")]
pub fn legacy_escape_wasm(input: &str) -> String {
    crate::legacy_escape(input)
}

/// Reverse the legacy `?[\u<dec>]` escaping
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "legacyUnescape")]
pub fn legacy_unescape_wasm(input: &str) -> String {
    crate::legacy_unescape(input)
}
