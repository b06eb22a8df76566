use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("server responded with {}", describe_status(.0))]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("speech recognition is not supported")]
    Unsupported,
    /// Error code reported by the recognition engine, e.g. `no-speech` or `not-allowed`.
    #[error("speech recognition failed: {0}")]
    Recognition(String),
}

impl SpeechError {
    pub fn code(&self) -> &str {
        match self {
            SpeechError::Unsupported => "unsupported",
            SpeechError::Recognition(code) => code,
        }
    }
}

fn describe_status(code: &u16) -> String {
    match http::StatusCode::from_u16(*code)
        .ok()
        .and_then(|status| status.canonical_reason())
    {
        Some(reason) => format!("HTTP {} {}", code, reason),
        None => format!("HTTP {}", code),
    }
}
