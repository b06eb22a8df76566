#![allow(async_fn_in_trait)]

use super::error::{ChatError, SpeechError};
use super::types::{AskRequest, AskResponse, Message};

/// Transport for `POST /ask`.
pub trait AskClient {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, ChatError>;
}

/// The UI surface the controller writes to.
pub trait ChatView {
    fn push_message(&self, message: Message);
    fn show_typing(&self);
    fn hide_typing(&self);
    fn set_input(&self, text: &str);
    fn selected_mode(&self) -> String;
    fn speak_answers(&self) -> bool;
    fn set_listening(&self, listening: bool);
    fn notify(&self, notice: &str);
}

/// Speech synthesis and single-shot recognition.
pub trait SpeechPlatform {
    fn synthesis_available(&self) -> bool;
    /// Fire-and-forget.
    fn speak(&self, text: &str);
    fn recognition_available(&self) -> bool;
    /// Resolves with the top transcript of one non-continuous recognition session.
    async fn recognize(&self, locale: &str) -> Result<String, SpeechError>;
}
