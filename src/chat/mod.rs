pub mod controller;
pub mod error;
pub mod platform;
pub mod transcript;
pub mod types;

pub use controller::{ChatController, SubmitOutcome, VoiceOutcome};
pub use error::{ChatError, SpeechError};
pub use platform::{AskClient, ChatView, SpeechPlatform};
pub use transcript::Transcript;
pub use types::{AskRequest, AskResponse, Message, Mode, Sender};
