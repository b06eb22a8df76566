mod fetch;
mod speech;
mod view;

pub use fetch::FetchAskClient;
pub use speech::BrowserSpeech;
pub use view::SignalView;

use wasm_bindgen::{JsCast, JsValue};

/// Best-effort readable text for a thrown JS value.
pub(crate) fn describe_js(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{:?}", value),
    }
}
