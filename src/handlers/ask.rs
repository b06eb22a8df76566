use std::fmt;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::chat::{AskRequest, AskResponse};
use crate::config::{ServerConfig, ASK_UPSTREAM_VAR};

#[derive(Debug)]
pub enum ProxyError {
    NotConfigured,
    Upstream(String),
    UpstreamStatus(u16),
    Decode(String),
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyError::NotConfigured => write!(f, "{} is not configured", ASK_UPSTREAM_VAR),
            ProxyError::Upstream(e) => write!(f, "upstream request failed: {}", e),
            ProxyError::UpstreamStatus(code) => write!(f, "upstream responded with {}", code),
            ProxyError::Decode(e) => write!(f, "upstream sent an invalid body: {}", e),
        }
    }
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        log::error!("/ask relay failed: {}", self);
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Same-origin `POST /ask`, relayed to the configured backend.
pub async fn ask_handler(
    State(config): State<ServerConfig>,
    State(http): State<reqwest::Client>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ProxyError> {
    let upstream = config
        .ask_upstream
        .as_deref()
        .ok_or(ProxyError::NotConfigured)?;

    log::info!(
        "Relaying query ({} chars, mode '{}') to {}",
        request.query.len(),
        request.mode,
        upstream
    );

    let response = http
        .post(upstream)
        .json(&request)
        .send()
        .await
        .map_err(|e| ProxyError::Upstream(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProxyError::UpstreamStatus(status.as_u16()));
    }

    let answer = response
        .json::<AskResponse>()
        .await
        .map_err(|e| ProxyError::Decode(e.to_string()))?;

    Ok(Json(answer))
}
