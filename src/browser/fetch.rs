use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::describe_js;
use crate::chat::{AskClient, AskRequest, AskResponse, ChatError};

/// `AskClient` over `window.fetch`.
#[derive(Debug, Clone)]
pub struct FetchAskClient {
    endpoint: String,
}

impl FetchAskClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    fn build_request(&self, request: &AskRequest) -> Result<Request, ChatError> {
        let body = serde_json::to_string(request).map_err(|e| ChatError::Encode(e.to_string()))?;

        let headers = Headers::new().map_err(|e| ChatError::Encode(describe_js(&e)))?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| ChatError::Encode(describe_js(&e)))?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));

        Request::new_with_str_and_init(&self.endpoint, &init)
            .map_err(|e| ChatError::Encode(describe_js(&e)))
    }
}

impl AskClient for FetchAskClient {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, ChatError> {
        let window =
            web_sys::window().ok_or_else(|| ChatError::Network("no window available".to_string()))?;
        let fetch_request = self.build_request(request)?;

        let resp_value = JsFuture::from(window.fetch_with_request(&fetch_request))
            .await
            .map_err(|e| ChatError::Network(describe_js(&e)))?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|e| ChatError::Network(describe_js(&e)))?;

        if !resp.ok() {
            return Err(ChatError::Status(resp.status()));
        }

        let json_promise = resp.json().map_err(|e| ChatError::Decode(describe_js(&e)))?;
        let json = JsFuture::from(json_promise)
            .await
            .map_err(|e| ChatError::Decode(describe_js(&e)))?;

        serde_wasm_bindgen::from_value(json).map_err(|e| ChatError::Decode(e.to_string()))
    }
}
