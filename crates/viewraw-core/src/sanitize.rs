/// Message sanitization.
///
/// Turns a host message record into a snapshot that is safe to show and to
/// copy: private author fields and extension bookkeeping are stripped, and
/// the top-level and `author` keys are put in a stable order so the JSON
/// rendering diffs cleanly between messages.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

use viewraw_types::MessageRecord;

use crate::error::Result;

/// Author fields that never leave the client.
pub const SENSITIVE_AUTHOR_FIELDS: [&str; 4] = ["email", "phone", "mfaEnabled", "personalConnectionId"];

/// Top-level fields added by the message-logging extension.
pub const EXTENSION_MARKERS: [&str; 2] = ["editHistory", "deleted"];

/// Per-attachment soft-delete flag added by the same extension.
pub const ATTACHMENT_MARKER: &str = "deleted";

/// A redacted, key-ordered copy of a message record.
///
/// Only [`sanitize`] builds these. The snapshot shares nothing with the
/// record it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SanitizedSnapshot(Map<String, Value>);

impl SanitizedSnapshot {
    /// `content` exactly as it was on the record, if it was there.
    pub fn raw_content(&self) -> Option<&Value> {
        self.0.get("content")
    }

    /// Text content; missing or non-string reads as empty.
    pub fn content(&self) -> &str {
        self.0.get("content").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn has_content(&self) -> bool {
        !self.content().is_empty()
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

    /// JSON with a four-space indent, as shown in the detail view.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.0.serialize(&mut ser)?;
        // serde_json only ever writes UTF-8.
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Reinterpret the snapshot as host input, e.g. to sanitize it again.
    pub fn into_record(self) -> MessageRecord {
        MessageRecord::from_map(self.0)
    }
}

/// Sanitize a host message record.
///
/// The record itself is left alone; absent fields are simply skipped, so
/// this never fails on a record that is already a JSON object.
pub fn sanitize(record: &MessageRecord) -> SanitizedSnapshot {
    let mut clone = rebuild(record.as_map().clone(), &EXTENSION_MARKERS, true);

    if let Some(Value::Object(author)) = clone.get_mut("author") {
        let stripped = rebuild(std::mem::take(author), &SENSITIVE_AUTHOR_FIELDS, true);
        *author = stripped;
    }

    if let Some(Value::Array(attachments)) = clone.get_mut("attachments") {
        for attachment in attachments.iter_mut() {
            if let Value::Object(fields) = attachment {
                let stripped = rebuild(std::mem::take(fields), &[ATTACHMENT_MARKER], false);
                *fields = stripped;
            }
        }
    }

    trace!(
        id = record.id().unwrap_or("?"),
        dropped = record.as_map().len() - clone.len(),
        "sanitized message record"
    );

    SanitizedSnapshot(clone)
}

/// Deep-copy a typed host record through JSON, then sanitize it.
/// Fails with [`ViewRawError::Serialization`](crate::ViewRawError) if the
/// record has no JSON object representation.
pub fn sanitize_serialize<T: Serialize + ?Sized>(record: &T) -> Result<SanitizedSnapshot> {
    let record = MessageRecord::from_serialize(record)?;
    Ok(sanitize(&record))
}

/// Rebuild `map` without the `strip` keys, optionally sorting the remaining
/// keys. Values are moved as-is; nested objects keep their own order.
fn rebuild(map: Map<String, Value>, strip: &[&str], sort: bool) -> Map<String, Value> {
    let mut entries: Vec<(String, Value)> = map
        .into_iter()
        .filter(|(key, _)| !strip.contains(&key.as_str()))
        .collect();
    if sort {
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    }
    entries.into_iter().collect()
}
