mod audio;
mod config;
mod conversation;
mod entry;
mod error;
mod input;
mod limits;
mod loader;
mod measure;
mod paginate;
mod session;
mod ui;

#[cfg(test)]
mod tests;

pub use audio::AudioCommand;
pub use config::{Rect, SessionConfig};
pub use conversation::{Conversation, ConversationRaw, CONVERSATION_SCHEMA_VERSION};
pub use entry::{
    ChoiceOption, ChoiceOptionRaw, ChoiceRaw, ConversationId, DialogueEntry, EntryRaw, Mood,
    TextRaw,
};
pub use error::{DialogueError, DialogueResult};
pub use input::InputEvent;
pub use limits::ConversationLimits;
pub use loader::{ConversationLoader, DirectoryLoader, MemoryLoader};
pub use measure::{FixedAdvanceMeasurer, TextMeasurer, TextSize};
pub use paginate::{paginate, paginate_entry, PageSplit};
pub use session::{DialogueSession, Phase};
pub use ui::{UiState, UiView};
