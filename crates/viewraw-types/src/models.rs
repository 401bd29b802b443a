use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One chat message exactly as the host delivered it.
///
/// The host owns the shape: beyond `author`, `content` and `attachments`,
/// other extensions may have bolted on fields of their own. The record is
/// only ever read; the sanitizer works on its own deep copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageRecord(Map<String, Value>);

impl MessageRecord {
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Deep-copy any serializable host record into a `MessageRecord`.
    /// Fails if the value can't be represented as JSON or isn't an object.
    pub fn from_serialize<T: Serialize + ?Sized>(record: &T) -> serde_json::Result<Self> {
        Self::try_from(serde_json::to_value(record)?)
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn channel_id(&self) -> Option<&str> {
        self.0.get("channel_id").and_then(Value::as_str)
    }

    /// Text content; a missing or non-string `content` reads as empty.
    pub fn content(&self) -> &str {
        self.0.get("content").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn author(&self) -> Option<&Map<String, Value>> {
        self.0.get("author").and_then(Value::as_object)
    }

    pub fn attachments(&self) -> Option<&Vec<Value>> {
        self.0.get("attachments").and_then(Value::as_array)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl TryFrom<Value> for MessageRecord {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
                "message record must be an object, got {}",
                kind_of(&other)
            ))),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Channel a message belongs to, as resolved by the host's channel lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRef {
    pub id: String,
    pub name: Option<String>,
}
