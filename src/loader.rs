//! Conversation data sources.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use crate::conversation::ConversationRaw;
use crate::entry::{ConversationId, DialogueEntry};
use crate::error::{DialogueError, DialogueResult};
use crate::limits::ConversationLimits;

/// Maps a conversation id to its ordered entries.
///
/// Implementations validate before returning and must be side-effect-free on
/// failure; the session relies on that to leave prior state untouched when a
/// load fails mid-branch.
pub trait ConversationLoader {
    fn load(&self, id: ConversationId) -> DialogueResult<Vec<DialogueEntry>>;
}

/// In-memory loader backed by raw conversation records.
#[derive(Clone, Debug, Default)]
pub struct MemoryLoader {
    conversations: HashMap<ConversationId, ConversationRaw>,
    limits: ConversationLimits,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ConversationLimits) -> Self {
        Self {
            conversations: HashMap::new(),
            limits,
        }
    }

    /// Registers a conversation under `id`, replacing any existing one.
    pub fn insert(&mut self, id: ConversationId, raw: ConversationRaw) {
        self.conversations.insert(id, raw);
    }
}

impl ConversationLoader for MemoryLoader {
    fn load(&self, id: ConversationId) -> DialogueResult<Vec<DialogueEntry>> {
        let raw = self
            .conversations
            .get(&id)
            .ok_or(DialogueError::NotFound { id })?;
        raw.clone().into_entries(&self.limits)
    }
}

/// Loads `<id>.json` conversation files from a directory.
#[derive(Clone, Debug)]
pub struct DirectoryLoader {
    root: PathBuf,
    limits: ConversationLimits,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_limits(root, ConversationLimits::default())
    }

    pub fn with_limits(root: impl Into<PathBuf>, limits: ConversationLimits) -> Self {
        Self {
            root: root.into(),
            limits,
        }
    }

    fn path_for(&self, id: ConversationId) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }
}

impl ConversationLoader for DirectoryLoader {
    fn load(&self, id: ConversationId) -> DialogueResult<Vec<DialogueEntry>> {
        let path = self.path_for(id);
        let input = match std::fs::read_to_string(&path) {
            Ok(input) => input,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(DialogueError::NotFound { id });
            }
            Err(err) => return Err(err.into()),
        };
        debug!(id, path = %path.display(), "loading conversation file");
        ConversationRaw::from_json(&input)?.into_entries(&self.limits)
    }
}
