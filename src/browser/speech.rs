use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::SpeechSynthesisUtterance;

use super::describe_js;
use crate::chat::{SpeechError, SpeechPlatform};

// The prefixed constructor is the only one Chrome and Safari ship.
const RECOGNITION_CONSTRUCTORS: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];
const RECOGNITION_HANDLERS: [&str; 3] = ["onresult", "onerror", "onend"];

type ResultSlot = Rc<RefCell<Option<oneshot::Sender<Result<String, SpeechError>>>>>;

/// Web Speech API: `speechSynthesis` for output, `SpeechRecognition` for input.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSpeech;

fn recognition_constructor() -> Option<Function> {
    let window = web_sys::window()?;
    RECOGNITION_CONSTRUCTORS.iter().find_map(|name| {
        Reflect::get(&window, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
    })
}

fn set_property(target: &JsValue, key: &str, value: &JsValue) -> Result<(), SpeechError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| SpeechError::Recognition(describe_js(&e)))
}

/// `event.results[0][0].transcript`
fn top_transcript(event: &JsValue) -> Option<String> {
    let results = Reflect::get(event, &JsValue::from_str("results")).ok()?;
    let first = Reflect::get_u32(&results, 0).ok()?;
    let alternative = Reflect::get_u32(&first, 0).ok()?;
    Reflect::get(&alternative, &JsValue::from_str("transcript"))
        .ok()?
        .as_string()
}

fn error_code(event: &JsValue) -> String {
    Reflect::get(event, &JsValue::from_str("error"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn settle(slot: &ResultSlot, result: Result<String, SpeechError>) {
    if let Some(tx) = slot.borrow_mut().take() {
        let _ = tx.send(result);
    }
}

fn no_result() -> SpeechError {
    SpeechError::Recognition("no-result".to_string())
}

impl SpeechPlatform for BrowserSpeech {
    fn synthesis_available(&self) -> bool {
        web_sys::window()
            .map(|window| Reflect::has(&window, &JsValue::from_str("speechSynthesis")).unwrap_or(false))
            .unwrap_or(false)
    }

    fn speak(&self, text: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let synthesis = match window.speech_synthesis() {
            Ok(synthesis) => synthesis,
            Err(e) => {
                log::debug!("speechSynthesis unavailable: {}", describe_js(&e));
                return;
            }
        };
        match SpeechSynthesisUtterance::new_with_text(text) {
            Ok(utterance) => synthesis.speak(&utterance),
            Err(e) => log::debug!("Could not create utterance: {}", describe_js(&e)),
        }
    }

    fn recognition_available(&self) -> bool {
        recognition_constructor().is_some()
    }

    async fn recognize(&self, locale: &str) -> Result<String, SpeechError> {
        let constructor = recognition_constructor().ok_or(SpeechError::Unsupported)?;
        let recognition = Reflect::construct(&constructor, &Array::new())
            .map_err(|e| SpeechError::Recognition(describe_js(&e)))?;

        set_property(&recognition, "lang", &JsValue::from_str(locale))?;
        set_property(&recognition, "continuous", &JsValue::FALSE)?;
        set_property(&recognition, "interimResults", &JsValue::FALSE)?;
        set_property(&recognition, "maxAlternatives", &JsValue::from_f64(1.0))?;

        let (tx, rx) = oneshot::channel();
        let slot: ResultSlot = Rc::new(RefCell::new(Some(tx)));

        let result_slot = slot.clone();
        let on_result = Closure::wrap(Box::new(move |event: JsValue| {
            settle(&result_slot, top_transcript(&event).ok_or_else(no_result));
        }) as Box<dyn FnMut(JsValue)>);

        let error_slot = slot.clone();
        let on_error = Closure::wrap(Box::new(move |event: JsValue| {
            settle(&error_slot, Err(SpeechError::Recognition(error_code(&event))));
        }) as Box<dyn FnMut(JsValue)>);

        // `end` follows `result`/`error`; on its own it means nothing was heard.
        let end_slot = slot;
        let on_end = Closure::wrap(Box::new(move |_event: JsValue| {
            settle(&end_slot, Err(no_result()));
        }) as Box<dyn FnMut(JsValue)>);

        set_property(&recognition, "onresult", on_result.as_ref())?;
        set_property(&recognition, "onerror", on_error.as_ref())?;
        set_property(&recognition, "onend", on_end.as_ref())?;

        let start: Function = Reflect::get(&recognition, &JsValue::from_str("start"))
            .and_then(|value| value.dyn_into())
            .map_err(|e| SpeechError::Recognition(describe_js(&e)))?;
        start
            .call0(&recognition)
            .map_err(|e| SpeechError::Recognition(describe_js(&e)))?;

        let result = rx.await.unwrap_or_else(|_| Err(no_result()));

        for handler in RECOGNITION_HANDLERS {
            let _ = Reflect::set(&recognition, &JsValue::from_str(handler), &JsValue::NULL);
        }

        result
    }
}
