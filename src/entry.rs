//! Dialogue entries in raw and runtime form.

use serde::{Deserialize, Serialize};

/// Identifier a conversation is loaded under.
pub type ConversationId = u32;

/// Avatar expression hint carried through to the renderer, opaque here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    #[default]
    Normal,
    Surprised,
    Sad,
    Angry,
}

/// One selectable branch of a choice prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceOption {
    pub label: String,
    pub target: ConversationId,
}

/// One speaker line or one choice prompt in a conversation.
///
/// Text entries get the typewriter reveal and auto-advance; choice entries
/// get neither. A choice entry that reaches playback always has at least one
/// option, enforced at load time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogueEntry {
    Text {
        avatar_index: usize,
        text: String,
        mood: Mood,
    },
    Choice {
        avatar_index: usize,
        mood: Mood,
        options: Vec<ChoiceOption>,
    },
}

impl DialogueEntry {
    /// Index into the host's avatar image set.
    pub fn avatar_index(&self) -> usize {
        match self {
            DialogueEntry::Text { avatar_index, .. } => *avatar_index,
            DialogueEntry::Choice { avatar_index, .. } => *avatar_index,
        }
    }

    /// Expression hint for the avatar.
    pub fn mood(&self) -> Mood {
        match self {
            DialogueEntry::Text { mood, .. } => *mood,
            DialogueEntry::Choice { mood, .. } => *mood,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, DialogueEntry::Choice { .. })
    }
}

/// JSON-facing entry record.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntryRaw {
    Text(TextRaw),
    Choice(ChoiceRaw),
}

/// Speaker line record as authored in conversation files.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextRaw {
    pub avatar: usize,
    pub message: String,
    #[serde(default)]
    pub mood: Mood,
}

/// Choice prompt record as authored in conversation files.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChoiceRaw {
    pub avatar: usize,
    #[serde(default)]
    pub mood: Mood,
    pub options: Vec<ChoiceOptionRaw>,
}

/// Choice branch record pairing a label with a target conversation id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChoiceOptionRaw {
    pub label: String,
    pub target: ConversationId,
}

impl EntryRaw {
    /// Converts the record into its runtime form.
    pub fn into_entry(self) -> DialogueEntry {
        match self {
            EntryRaw::Text(text) => DialogueEntry::Text {
                avatar_index: text.avatar,
                text: text.message,
                mood: text.mood,
            },
            EntryRaw::Choice(choice) => DialogueEntry::Choice {
                avatar_index: choice.avatar,
                mood: choice.mood,
                options: choice
                    .options
                    .into_iter()
                    .map(|option| ChoiceOption {
                        label: option.label,
                        target: option.target,
                    })
                    .collect(),
            },
        }
    }
}
