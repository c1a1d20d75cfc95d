//! Read-only render snapshot for host frontends.

use crate::entry::Mood;
use crate::session::{DialogueSession, Phase};

/// UI state derived from a session.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub view: UiView,
}

/// Distinct views a frontend renders.
#[derive(Clone, Debug, PartialEq)]
pub enum UiView {
    Text {
        avatar_index: usize,
        mood: Mood,
        /// Revealed prefix only; grows as the typewriter advances.
        text: String,
        more_indicator: bool,
        indicator_raised: bool,
    },
    Choice {
        avatar_index: usize,
        mood: Mood,
        options: Vec<String>,
        selected: usize,
    },
    /// Dismissed session; render nothing.
    Inactive,
}

impl UiState {
    /// Builds the view for the session's current entry.
    pub fn from_session(session: &DialogueSession) -> Self {
        let view = match session.phase() {
            Phase::Dismissed => UiView::Inactive,
            Phase::ChoicePending => UiView::Choice {
                avatar_index: session.avatar_index().unwrap_or(0),
                mood: session.mood().unwrap_or_default(),
                options: session
                    .choices()
                    .iter()
                    .map(|option| option.label.clone())
                    .collect(),
                selected: session.selected_choice(),
            },
            Phase::Revealing | Phase::Shown => UiView::Text {
                avatar_index: session.avatar_index().unwrap_or(0),
                mood: session.mood().unwrap_or_default(),
                text: session.displayed_text().to_string(),
                more_indicator: session.show_more_indicator(),
                indicator_raised: session.indicator_raised(),
            },
        };
        Self { view }
    }
}
