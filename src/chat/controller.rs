use std::cell::Cell;

use super::error::{ChatError, SpeechError};
use super::platform::{AskClient, ChatView, SpeechPlatform};
use super::types::{AskRequest, Message};
use crate::config::ChatConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, nothing happened.
    Empty,
    /// Another submission is still waiting for its answer.
    Busy,
    Answered(String),
    Failed(ChatError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceOutcome {
    Unsupported,
    Failed(SpeechError),
    Submitted(SubmitOutcome),
}

/// Runs the request/response cycle for chat messages. At most one submission is in flight.
pub struct ChatController<C, V, S> {
    config: ChatConfig,
    client: C,
    view: V,
    speech: S,
    pending: Cell<bool>,
}

struct PendingGuard<'a>(&'a Cell<bool>);

impl<'a> PendingGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<C, V, S> ChatController<C, V, S>
where
    C: AskClient,
    V: ChatView,
    S: SpeechPlatform,
{
    pub fn new(config: ChatConfig, client: C, view: V, speech: S) -> Self {
        Self {
            config,
            client,
            view,
            speech,
            pending: Cell::new(false),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    pub async fn submit(&self, query: &str, mode: &str) -> SubmitOutcome {
        let query = query.trim();
        if query.is_empty() {
            return SubmitOutcome::Empty;
        }

        let Some(_pending) = PendingGuard::acquire(&self.pending) else {
            log::warn!("Ignoring query while a previous one is pending");
            return SubmitOutcome::Busy;
        };

        self.view.push_message(Message::user(query));
        self.view.show_typing();

        let request = AskRequest::new(query, mode);
        log::debug!("Asking {} in mode '{}'", self.config.endpoint, mode);
        let result = self.client.ask(&request).await;

        self.view.hide_typing();

        match result {
            Ok(response) => {
                let answer = response.answer_or(&self.config.fallback_answer).to_string();
                self.view.push_message(Message::assistant(answer.clone()));

                if self.view.speak_answers() && self.speech.synthesis_available() {
                    self.speech.speak(&answer);
                }

                SubmitOutcome::Answered(answer)
            }
            Err(e) => {
                log::error!("Error talking to {}: {}", self.config.endpoint, e);
                self.view
                    .push_message(Message::assistant(self.config.error_answer.clone()));
                SubmitOutcome::Failed(e)
            }
        }
    }

    pub async fn start_voice_input(&self) -> VoiceOutcome {
        if !self.speech.recognition_available() {
            self.view.notify(&self.config.unsupported_notice);
            return VoiceOutcome::Unsupported;
        }

        self.view.set_listening(true);
        let result = self.speech.recognize(&self.config.locale).await;
        self.view.set_listening(false);

        match result {
            Ok(transcript) => {
                log::info!("Recognized speech input ({} chars)", transcript.len());
                self.view.set_input(&transcript);
                let mode = self.view.selected_mode();
                let outcome = self.submit(&transcript, &mode).await;
                if outcome == SubmitOutcome::Busy {
                    // transcript stays in the input field for a manual resend
                    self.view.notify(&self.config.busy_notice);
                }
                VoiceOutcome::Submitted(outcome)
            }
            Err(SpeechError::Unsupported) => {
                self.view.notify(&self.config.unsupported_notice);
                VoiceOutcome::Unsupported
            }
            Err(e) => {
                log::error!("Speech recognition error: {}", e.code());
                self.view
                    .notify(&self.config.recognition_error_notice(e.code()));
                VoiceOutcome::Failed(e)
            }
        }
    }
}
