//! Small DOM and parsing helpers for the builder.

use serde_json::Value;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Shows a transient toast at the bottom of the viewport. All builder
/// feedback (validation failures, save outcomes) goes through here; toasts
/// never block the editing surface and never touch the staged draft.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                // set_text_content: the message may quote user input.
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Width hint input → `Option<u32>`; blank or unparsable clears the hint.
pub fn parse_width(raw: &str) -> Option<u32> {
    raw.trim().parse().ok().filter(|width| *width > 0)
}

/// Converts a number input's string into a JSON cell value. Integers stay
/// integers so fees render as "50000", not "50000.0"; blank or unparsable
/// input clears the cell.
pub fn number_cell_value(raw: &str) -> Value {
    let raw = raw.trim();
    if raw.is_empty() {
        return Value::Null;
    }
    if let Ok(integer) = raw.parse::<i64>() {
        return Value::Number(integer.into());
    }
    raw.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Converts a plain text input into a JSON cell value; blank clears.
pub fn text_cell_value(raw: &str) -> Value {
    if raw.trim().is_empty() {
        Value::Null
    } else {
        Value::String(raw.to_string())
    }
}
