use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// Text split at line breaks, so the view can place `<br>` between plain text nodes.
    pub fn lines(&self) -> Vec<&str> {
        self.text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect()
    }
}

/// Body of `POST /ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub query: String,
    pub mode: String,
}

impl AskRequest {
    pub fn new(query: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            mode: mode.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default, deserialize_with = "deserialize_answer")]
    pub answer: Option<String>,
}

/// Accepts any JSON value. Falsy ones (`null`, `false`, `0`, `""`) count as no answer,
/// other scalars are shown as text and arrays/objects as their JSON.
fn deserialize_answer<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(answer_text))
}

fn answer_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

impl AskResponse {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
        }
    }

    /// The answer, or `fallback` when it is missing or empty.
    pub fn answer_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.answer.as_deref() {
            Some(answer) if !answer.is_empty() => answer,
            _ => fallback,
        }
    }
}

/// Answer source hint forwarded to the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Default,
    School,
    Conclave,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Default, Mode::School, Mode::Conclave];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Default => "default",
            Mode::School => "school",
            Mode::Conclave => "conclave",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "school" => Mode::School,
            "conclave" => Mode::Conclave,
            _ => Mode::Default,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Default => "General",
            Mode::School => "School",
            Mode::Conclave => "Conclave",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_query_and_mode() {
        let body = serde_json::to_value(AskRequest::new("when is the exam?", "school")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "query": "when is the exam?", "mode": "school" })
        );
    }

    #[test]
    fn response_tolerates_missing_or_null_answer() {
        let missing: AskResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.answer, None);

        let null: AskResponse = serde_json::from_str(r#"{"answer": null}"#).unwrap();
        assert_eq!(null.answer, None);

        let extra: AskResponse =
            serde_json::from_str(r#"{"answer": "Hi there", "source": "ai"}"#).unwrap();
        assert_eq!(extra.answer.as_deref(), Some("Hi there"));
    }

    #[test]
    fn non_string_answers_are_shown_as_text() {
        let number: AskResponse = serde_json::from_str(r#"{"answer": 42}"#).unwrap();
        assert_eq!(number.answer.as_deref(), Some("42"));

        let flag: AskResponse = serde_json::from_str(r#"{"answer": true}"#).unwrap();
        assert_eq!(flag.answer.as_deref(), Some("true"));

        let list: AskResponse = serde_json::from_str(r#"{"answer": ["a", 1]}"#).unwrap();
        assert_eq!(list.answer.as_deref(), Some(r#"["a",1]"#));

        for falsy in [r#"{"answer": 0}"#, r#"{"answer": false}"#, r#"{"answer": ""}"#] {
            let response: AskResponse = serde_json::from_str(falsy).unwrap();
            assert_eq!(response.answer, None, "{}", falsy);
        }
    }

    #[test]
    fn empty_answer_falls_back() {
        let fallback = "Sorry, I couldn't understand that.";
        assert_eq!(AskResponse::default().answer_or(fallback), fallback);
        assert_eq!(AskResponse::new("").answer_or(fallback), fallback);
        assert_eq!(AskResponse::new("Hi there").answer_or(fallback), "Hi there");
    }

    #[test]
    fn lines_split_on_newlines() {
        let message = Message::assistant("Timings:\r\nMon 9am\nTue 10am");
        assert_eq!(message.lines(), vec!["Timings:", "Mon 9am", "Tue 10am"]);

        let markup = Message::assistant("<b>bold</b>");
        assert_eq!(markup.lines(), vec!["<b>bold</b>"]);
    }

    #[test]
    fn unknown_mode_falls_back_to_default() {
        assert_eq!(Mode::from_str("school"), Mode::School);
        assert_eq!(Mode::from_str("conclave"), Mode::Conclave);
        assert_eq!(Mode::from_str("astrology"), Mode::Default);
        for mode in Mode::ALL {
            assert_eq!(Mode::from_str(mode.as_str()), mode);
        }
    }
}
