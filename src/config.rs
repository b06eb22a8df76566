use cfg_if::cfg_if;

pub const DEFAULT_ASK_ENDPOINT: &str = "/ask";
pub const DEFAULT_RECOGNITION_LOCALE: &str = "en-IN";

/// Client-side settings for the chat widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    pub endpoint: String,
    pub locale: String,
    pub assistant_name: String,
    pub user_name: String,
    pub fallback_answer: String,
    pub error_answer: String,
    pub unsupported_notice: String,
    pub busy_notice: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ASK_ENDPOINT.to_string(),
            locale: DEFAULT_RECOGNITION_LOCALE.to_string(),
            assistant_name: "GYAN".to_string(),
            user_name: "You".to_string(),
            fallback_answer: "Sorry, I couldn't understand that.".to_string(),
            error_answer: "Error talking to the server. Please check if the server is running."
                .to_string(),
            unsupported_notice: "Your browser doesn't support speech recognition.".to_string(),
            busy_notice: "Still waiting for the previous answer. Send your question again once it arrives."
                .to_string(),
        }
    }
}

impl ChatConfig {
    pub fn recognition_error_notice(&self, code: &str) -> String {
        format!("Speech recognition error: {}", code)
    }
}

cfg_if! {
    if #[cfg(feature = "ssr")] {
        pub const ASK_UPSTREAM_VAR: &str = "ASK_UPSTREAM_URL";

        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct ServerConfig {
            /// Backend that actually answers `/ask` queries. `None` leaves the relay disabled.
            pub ask_upstream: Option<String>,
        }

        impl ServerConfig {
            pub fn from_env() -> Self {
                Self::from_lookup(|key| std::env::var(key).ok())
            }

            pub fn from_lookup<F>(lookup: F) -> Self
            where
                F: Fn(&str) -> Option<String>,
            {
                let ask_upstream = lookup(ASK_UPSTREAM_VAR)
                    .map(|url| url.trim().to_string())
                    .filter(|url| !url.is_empty());

                if ask_upstream.is_none() {
                    log::warn!("{} not set, /ask will answer 503", ASK_UPSTREAM_VAR);
                }

                Self { ask_upstream }
            }
        }
    }
}
