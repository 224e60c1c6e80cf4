//! WASM-compatible wrapper for carousel text partitioning.
//!
//! This crate exposes the partitioning and request-validation logic to
//! JavaScript plugin hosts, which own the actual canvas rendering.

use carousel_core::{CarouselConfig, CarouselRequest, TextSplitter, UiMessage};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of partitioning text into slides.
#[derive(Debug, Serialize, Deserialize)]
pub struct SplitResult {
    /// Number of fragments produced.
    pub slide_count: usize,
    /// One entry per slide, in display order; entries may be empty.
    pub fragments: Vec<String>,
}

/// Result of a validated carousel request.
#[derive(Debug, Serialize, Deserialize)]
pub struct CarouselResult {
    /// Whether the request was a cancellation.
    pub cancelled: bool,
    /// Number of fragments produced (zero when cancelled).
    pub slide_count: usize,
    /// One entry per slide, in display order.
    pub fragments: Vec<String>,
    /// Resolved style configuration for the host renderer, absent when
    /// cancelled.
    pub config: Option<CarouselConfig>,
}

/// Partition text into exactly `slide_count` fragments.
///
/// # Arguments
/// * `text` - The raw text to partition
/// * `slide_count` - How many fragments to produce
///
/// # Returns
/// A JavaScript object with the fragments, or throws when the text is
/// empty after trimming.
#[wasm_bindgen]
pub fn split_text_into_slides(text: &str, slide_count: usize) -> Result<JsValue, JsValue> {
    let result = split_text_into_slides_impl(text, slide_count).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn split_text_into_slides_impl(text: &str, slide_count: usize) -> Result<SplitResult, String> {
    let fragments = TextSplitter::new().split_into_slides(text, slide_count);

    if fragments.is_empty() {
        return Err("The text could not be split into slides".to_string());
    }

    Ok(SplitResult {
        slide_count: fragments.len(),
        fragments,
    })
}

/// Validate a UI message and partition its text.
///
/// # Arguments
/// * `message` - A tagged message object: `{ type: "create-carousel", ... }`
///   or `{ type: "cancel" }`
///
/// # Returns
/// A JavaScript object with the fragments and the resolved style
/// configuration, or throws on validation failure.
#[wasm_bindgen]
pub fn create_carousel(message: JsValue) -> Result<JsValue, JsValue> {
    let message: UiMessage = serde_wasm_bindgen::from_value(message)
        .map_err(|e| JsValue::from_str(&format!("Invalid message: {}", e)))?;

    let result = create_carousel_impl(message).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn create_carousel_impl(message: UiMessage) -> Result<CarouselResult, String> {
    let request = match CarouselRequest::from_message(message).map_err(|e| e.to_string())? {
        Some(request) => request,
        None => {
            return Ok(CarouselResult {
                cancelled: true,
                slide_count: 0,
                fragments: Vec::new(),
                config: None,
            })
        }
    };

    let fragments = TextSplitter::new().split_into_slides(&request.text, request.slide_count);

    if fragments.is_empty() {
        return Err("The text could not be split into slides".to_string());
    }

    Ok(CarouselResult {
        cancelled: false,
        slide_count: fragments.len(),
        fragments,
        config: Some(request.config),
    })
}
