//! Tolerant hook payload model so prompt extraction never fails on odd input shapes.
//!
//! Hosts send `{ "prompt"?: string, "session"?: { "messages"?: [...] } }`. Any
//! field whose JSON shape is unexpected is treated as absent instead of failing
//! the whole payload.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

const USER_ROLE: &str = "user";
const TEXT_BLOCK_TYPE: &str = "text";

/// Payload received on stdin for a `UserPromptSubmit` event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HookInput {
    #[serde(default, deserialize_with = "lenient")]
    pub prompt: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub session: Option<Session>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Session {
    #[serde(default, deserialize_with = "lenient_objects")]
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "lenient")]
    pub role: Option<String>,
    #[serde(default)]
    pub content: MessageContent,
}

/// Message body: plain text, a list of typed blocks, or anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
    #[default]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
}

impl<'de> Deserialize<'de> for MessageContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => MessageContent::Text(text),
            Value::Array(items) => MessageContent::Blocks(objects_from(items)),
            _ => MessageContent::Other,
        })
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_objects<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => objects_from(items),
        _ => Vec::new(),
    })
}

/// Decode the object entries of a JSON array, skipping everything else.
fn objects_from<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

impl HookInput {
    /// Parse a raw payload. Only invalid JSON is an error; a valid document
    /// that is not an object yields an empty input.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(value).unwrap_or_default())
    }

    /// Prompt text to classify, or `""` when none can be extracted.
    ///
    /// A non-empty `prompt` wins; otherwise the most recent user message in
    /// `session.messages` is used.
    pub fn prompt_text(&self) -> &str {
        if let Some(prompt) = self.prompt.as_deref().filter(|prompt| !prompt.is_empty()) {
            return prompt;
        }
        self.session
            .as_ref()
            .map(Session::last_user_text)
            .unwrap_or_default()
    }
}

impl Session {
    /// Text of the last user message. Earlier user messages are never consulted.
    pub fn last_user_text(&self) -> &str {
        self.messages
            .iter()
            .rev()
            .find(|message| message.is_user())
            .map(Message::text)
            .unwrap_or_default()
    }
}

impl Message {
    pub fn is_user(&self) -> bool {
        self.role.as_deref() == Some(USER_ROLE)
    }

    pub fn text(&self) -> &str {
        match &self.content {
            MessageContent::Text(text) => text.as_str(),
            MessageContent::Blocks(blocks) => blocks
                .iter()
                .find(|block| block.kind.as_deref() == Some(TEXT_BLOCK_TYPE))
                .and_then(|block| block.text.as_deref())
                .unwrap_or_default(),
            MessageContent::Other => "",
        }
    }
}
