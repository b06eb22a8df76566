use super::types::Message;

/// Append-only list of displayed messages plus the pending-response placeholder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    messages: Vec<Message>,
    typing: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Returns false if a placeholder was already showing.
    pub fn show_typing(&mut self) -> bool {
        !std::mem::replace(&mut self.typing, true)
    }

    pub fn hide_typing(&mut self) {
        self.typing = false;
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages paired with their position, which doubles as a stable key.
    pub fn entries(&self) -> Vec<(usize, Message)> {
        self.messages.iter().cloned().enumerate().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::types::Sender;

    #[test]
    fn keeps_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("hello"));
        transcript.push(Message::assistant("hi"));

        let senders: Vec<Sender> = transcript.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::User, Sender::Assistant]);
        assert_eq!(transcript.entries()[1].0, 1);
        assert_eq!(transcript.messages().last().map(|m| m.text.as_str()), Some("hi"));
    }

    #[test]
    fn single_placeholder() {
        let mut transcript = Transcript::new();
        assert!(transcript.show_typing());
        assert!(!transcript.show_typing());
        assert!(transcript.is_typing());

        transcript.hide_typing();
        assert!(!transcript.is_typing());
        assert!(transcript.is_empty());
    }
}
