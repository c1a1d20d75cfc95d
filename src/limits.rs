//! Content budgets applied before conversation data reaches a session.

use crate::conversation::ConversationRaw;
use crate::entry::EntryRaw;
use crate::error::{DialogueError, DialogueResult};

/// Budgets for a single conversation file.
#[derive(Clone, Copy, Debug)]
pub struct ConversationLimits {
    pub max_entries: usize,
    pub max_text_length: usize,
    pub max_label_length: usize,
    pub max_options: usize,
}

impl Default for ConversationLimits {
    fn default() -> Self {
        Self {
            max_entries: 1_000,
            max_text_length: 4_096,
            max_label_length: 128,
            max_options: 16,
        }
    }
}

impl ConversationLimits {
    /// Validates a raw conversation against policy and budgets.
    ///
    /// Rejecting empty choice sets here keeps the playback state machine free
    /// of an unnavigable zero-option state.
    pub fn validate(&self, raw: &ConversationRaw) -> DialogueResult<()> {
        if raw.entries.is_empty() {
            return Err(DialogueError::InvalidConversation(
                "conversation has no entries".to_string(),
            ));
        }
        if raw.entries.len() > self.max_entries {
            return Err(DialogueError::ResourceLimit("entry count".to_string()));
        }

        for entry in &raw.entries {
            match entry {
                EntryRaw::Text(text) => {
                    if text.message.len() > self.max_text_length {
                        return Err(DialogueError::ResourceLimit("message text".to_string()));
                    }
                }
                EntryRaw::Choice(choice) => {
                    if choice.options.is_empty() {
                        return Err(DialogueError::InvalidConversation(
                            "choice entry has no options".to_string(),
                        ));
                    }
                    if choice.options.len() > self.max_options {
                        return Err(DialogueError::ResourceLimit("option count".to_string()));
                    }
                    for option in &choice.options {
                        if option.label.len() > self.max_label_length {
                            return Err(DialogueError::ResourceLimit("option label".to_string()));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{ChoiceRaw, TextRaw};

    fn text_entry(message: &str) -> EntryRaw {
        EntryRaw::Text(TextRaw {
            avatar: 0,
            message: message.to_string(),
            mood: Default::default(),
        })
    }

    #[test]
    fn empty_conversation_is_rejected() {
        let raw = ConversationRaw::new(vec![]);
        let result = ConversationLimits::default().validate(&raw);
        assert!(matches!(result, Err(DialogueError::InvalidConversation(_))));
    }

    #[test]
    fn choice_without_options_is_rejected() {
        let raw = ConversationRaw::new(vec![EntryRaw::Choice(ChoiceRaw {
            avatar: 0,
            mood: Default::default(),
            options: vec![],
        })]);
        let result = ConversationLimits::default().validate(&raw);
        assert!(matches!(result, Err(DialogueError::InvalidConversation(_))));
    }

    #[test]
    fn oversized_message_hits_the_text_budget() {
        let limits = ConversationLimits {
            max_text_length: 8,
            ..Default::default()
        };
        let raw = ConversationRaw::new(vec![text_entry("way past the budget")]);
        assert!(matches!(
            limits.validate(&raw),
            Err(DialogueError::ResourceLimit(_))
        ));
    }

    #[test]
    fn conversation_within_budgets_passes() {
        let raw = ConversationRaw::new(vec![text_entry("Hi")]);
        assert!(ConversationLimits::default().validate(&raw).is_ok());
    }
}
