//! Conversation storage and the JSON-facing file envelope.

use serde::{Deserialize, Serialize};

use crate::entry::{DialogueEntry, EntryRaw};
use crate::error::{DialogueError, DialogueResult};
use crate::limits::ConversationLimits;

/// Schema version stamped into and accepted from conversation files.
pub const CONVERSATION_SCHEMA_VERSION: &str = "1.0";

/// JSON-facing conversation file format.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConversationRaw {
    #[serde(default)]
    pub schema_version: Option<String>,
    pub entries: Vec<EntryRaw>,
}

impl ConversationRaw {
    /// Creates a raw conversation from authored entries.
    pub fn new(entries: Vec<EntryRaw>) -> Self {
        Self {
            schema_version: Some(CONVERSATION_SCHEMA_VERSION.to_string()),
            entries,
        }
    }

    /// Parses a JSON conversation file.
    ///
    /// Files without a version are accepted as legacy data; files with a
    /// different version are rejected.
    pub fn from_json(input: &str) -> DialogueResult<Self> {
        let raw: ConversationRaw =
            serde_json::from_str(input).map_err(|err| json_deserialize_error(input, &err))?;
        match raw.schema_version.as_deref() {
            Some(version) if version != CONVERSATION_SCHEMA_VERSION => {
                Err(DialogueError::InvalidConversation(format!(
                    "schema incompatible: found {version}, expected {CONVERSATION_SCHEMA_VERSION}"
                )))
            }
            _ => Ok(raw),
        }
    }

    /// Serializes the conversation with the current schema version stamped.
    pub fn to_json(&self) -> DialogueResult<String> {
        let envelope = ConversationRaw {
            schema_version: Some(CONVERSATION_SCHEMA_VERSION.to_string()),
            entries: self.entries.clone(),
        };
        serde_json::to_string_pretty(&envelope).map_err(|err| DialogueError::Serialization {
            message: err.to_string(),
            src: String::new(),
            span: (0, 0).into(),
        })
    }

    /// Validates against `limits` and converts into runtime entries.
    pub fn into_entries(self, limits: &ConversationLimits) -> DialogueResult<Vec<DialogueEntry>> {
        limits.validate(&self)?;
        Ok(self
            .entries
            .into_iter()
            .map(EntryRaw::into_entry)
            .collect())
    }
}

/// Ordered, cursor-stable sequence of entries for the active conversation.
///
/// Entries behind the playback cursor are immutable history; the only
/// mid-play mutation is the pagination splice via [`Conversation::insert_after`].
#[derive(Clone, Debug, Default)]
pub struct Conversation {
    entries: Vec<DialogueEntry>,
}

impl Conversation {
    pub fn new(entries: Vec<DialogueEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DialogueEntry> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut DialogueEntry> {
        self.entries.get_mut(index)
    }

    /// Inserts a derived entry immediately after `index`.
    ///
    /// An out-of-range index clamps to the end of the sequence.
    pub fn insert_after(&mut self, index: usize, entry: DialogueEntry) {
        let at = index.saturating_add(1).min(self.entries.len());
        self.entries.insert(at, entry);
    }
}

#[cold]
#[inline(never)]
fn json_deserialize_error(input: &str, err: &serde_json::Error) -> DialogueError {
    const CONTEXT: usize = 120;
    let offset = byte_offset(input, err.line(), err.column());
    let mut start = offset.saturating_sub(CONTEXT);
    let mut end = (offset + CONTEXT).min(input.len());
    while start > 0 && !input.is_char_boundary(start) {
        start -= 1;
    }
    while end < input.len() && !input.is_char_boundary(end) {
        end += 1;
    }
    DialogueError::Serialization {
        message: err.to_string(),
        src: input[start..end].to_string(),
        span: (offset - start, 1usize.min(end.saturating_sub(offset))).into(),
    }
}

fn byte_offset(input: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let mut offset = 0usize;
    for (current, chunk) in input.split_inclusive('\n').enumerate() {
        if current + 1 == line {
            let in_line = chunk
                .char_indices()
                .nth(column.saturating_sub(1))
                .map(|(idx, _)| idx)
                .unwrap_or_else(|| chunk.len().saturating_sub(1));
            return offset + in_line;
        }
        offset += chunk.len();
    }
    input.len().saturating_sub(1)
}
