use leptos::prelude::*;

use super::describe_js;
use crate::chat::{ChatView, Message, Mode, Transcript};

/// `ChatView` backed by Leptos signals; the widget renders straight from these.
#[derive(Clone, Copy)]
pub struct SignalView {
    pub transcript: RwSignal<Transcript>,
    pub input: RwSignal<String>,
    pub mode: RwSignal<Mode>,
    pub speak_answers: RwSignal<bool>,
    pub listening: RwSignal<bool>,
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            transcript: RwSignal::new(Transcript::new()),
            input: RwSignal::new(String::new()),
            mode: RwSignal::new(Mode::default()),
            speak_answers: RwSignal::new(false),
            listening: RwSignal::new(false),
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.transcript.with(|t| t.is_typing())
    }
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatView for SignalView {
    fn push_message(&self, message: Message) {
        self.transcript.update(|t| t.push(message));
    }

    fn show_typing(&self) {
        self.transcript.update(|t| {
            t.show_typing();
        });
    }

    fn hide_typing(&self) {
        self.transcript.update(Transcript::hide_typing);
    }

    fn set_input(&self, text: &str) {
        self.input.set(text.to_string());
    }

    fn selected_mode(&self) -> String {
        self.mode.get_untracked().as_str().to_string()
    }

    fn speak_answers(&self) -> bool {
        self.speak_answers.get_untracked()
    }

    fn set_listening(&self, listening: bool) {
        self.listening.set(listening);
    }

    fn notify(&self, notice: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(notice) {
                    log::warn!("Could not show notice '{}': {}", notice, describe_js(&e));
                }
            }
            None => log::warn!("{}", notice),
        }
    }
}
