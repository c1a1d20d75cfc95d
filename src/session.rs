//! Playback state machine for an active dialogue box.

use tracing::{debug, trace};

use crate::audio::AudioCommand;
use crate::config::SessionConfig;
use crate::conversation::Conversation;
use crate::entry::{ChoiceOption, ConversationId, DialogueEntry, Mood};
use crate::error::DialogueResult;
use crate::input::InputEvent;
use crate::loader::ConversationLoader;
use crate::measure::TextMeasurer;
use crate::paginate::paginate_entry;

/// Playback phase of the entry under the cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Typewriter reveal in progress.
    Revealing,
    /// Text fully revealed, awaiting input.
    Shown,
    /// Choice entry active, cursor navigable.
    ChoicePending,
    /// No box displayed.
    #[default]
    Dismissed,
}

/// One dialogue box: the owned conversation, cursor, and reveal state.
///
/// Sessions are plain values owned by the host game loop; several can coexist.
/// All mutation happens synchronously inside [`DialogueSession::update`] or
/// the explicit operations; rendering reads the accessors (or a
/// [`crate::UiState`] snapshot) and never mutates.
#[derive(Debug)]
pub struct DialogueSession {
    config: SessionConfig,
    conversation: Conversation,
    phase: Phase,
    current: usize,
    revealed: usize,
    choice_cursor: usize,
    reveal_timer: f32,
    choice_timer: f32,
    indicator_timer: f32,
    indicator_raised: bool,
    audio: Vec<AudioCommand>,
}

impl DialogueSession {
    /// Creates an inactive session; nothing displays until a conversation
    /// starts.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            conversation: Conversation::default(),
            phase: Phase::Dismissed,
            current: 0,
            revealed: 0,
            choice_cursor: 0,
            reveal_timer: 0.0,
            choice_timer: 0.0,
            indicator_timer: 0.0,
            indicator_raised: false,
            audio: Vec::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Loads `id` and replaces the active conversation wholesale.
    ///
    /// On any load or validation failure the previous conversation and
    /// playback state are left untouched.
    pub fn start_conversation(
        &mut self,
        id: ConversationId,
        loader: &dyn ConversationLoader,
        measurer: &dyn TextMeasurer,
    ) -> DialogueResult<()> {
        let entries = loader.load(id)?;
        debug!(id, entries = entries.len(), "starting conversation");
        self.replace_conversation(Conversation::new(entries), measurer);
        Ok(())
    }

    /// Advances one tick: timers, typewriter reveal, then input handling.
    ///
    /// `elapsed` is the frame time in seconds; `events` is the frame's
    /// discrete input. A dismissed session is a cheap no-op.
    pub fn update(
        &mut self,
        elapsed: f32,
        events: &[InputEvent],
        loader: &dyn ConversationLoader,
        measurer: &dyn TextMeasurer,
    ) -> DialogueResult<()> {
        if self.phase == Phase::Dismissed {
            return Ok(());
        }

        self.choice_timer += elapsed;
        self.indicator_timer += elapsed;
        if self.indicator_timer >= self.config.indicator_blink {
            self.indicator_raised = !self.indicator_raised;
            self.indicator_timer = 0.0;
        }

        if self.phase == Phase::Revealing {
            self.reveal_timer += elapsed;
            // One character per crossed interval; the accumulator resets each
            // step rather than carrying the remainder, so a long frame still
            // reveals a single character.
            if self.reveal_timer >= self.config.reveal_interval {
                self.reveal_timer = 0.0;
                let total = self.current_char_count();
                if self.revealed < total {
                    self.revealed += 1;
                }
                if self.revealed >= total {
                    self.phase = Phase::Shown;
                    trace!(index = self.current, "text fully revealed");
                }
            }
        }

        for event in events {
            self.handle_event(*event, loader, measurer)?;
        }
        Ok(())
    }

    /// Dismisses the box. Terminal until the next conversation starts.
    pub fn dismiss(&mut self) {
        if self.phase != Phase::Dismissed {
            debug!("dialogue box dismissed");
        }
        self.phase = Phase::Dismissed;
    }

    fn handle_event(
        &mut self,
        event: InputEvent,
        loader: &dyn ConversationLoader,
        measurer: &dyn TextMeasurer,
    ) -> DialogueResult<()> {
        match (self.phase, event) {
            (Phase::Shown, InputEvent::Advance) => {
                self.audio.push(AudioCommand::AdvanceCue);
                if self.current + 1 < self.conversation.len() {
                    self.current += 1;
                    self.enter_current(measurer);
                } else {
                    self.dismiss();
                }
            }
            (Phase::ChoicePending, InputEvent::ChoiceDown) => {
                if self.debounce_ready() {
                    let last = self.option_count().saturating_sub(1);
                    self.choice_cursor = (self.choice_cursor + 1).min(last);
                    self.choice_timer = 0.0;
                }
            }
            (Phase::ChoicePending, InputEvent::ChoiceUp) => {
                if self.debounce_ready() {
                    self.choice_cursor = self.choice_cursor.saturating_sub(1);
                    self.choice_timer = 0.0;
                }
            }
            (Phase::ChoicePending, InputEvent::Confirm) => {
                if self.debounce_ready() {
                    self.choice_timer = 0.0;
                    self.audio.push(AudioCommand::AdvanceCue);
                    if let Some(target) = self.selected_target() {
                        let entries = loader.load(target)?;
                        debug!(id = target, "choice branch replaces conversation");
                        self.replace_conversation(Conversation::new(entries), measurer);
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn replace_conversation(&mut self, conversation: Conversation, measurer: &dyn TextMeasurer) {
        self.conversation = conversation;
        self.current = 0;
        self.indicator_timer = 0.0;
        self.indicator_raised = false;
        self.enter_current(measurer);
    }

    /// Paginates and re-arms reveal or choice state for the entry under the
    /// cursor.
    fn enter_current(&mut self, measurer: &dyn TextMeasurer) {
        let area = self.config.text_rect();
        paginate_entry(
            &mut self.conversation,
            self.current,
            area.width,
            area.height,
            measurer,
        );
        self.revealed = 0;
        self.reveal_timer = 0.0;
        self.choice_cursor = 0;
        self.choice_timer = 0.0;
        self.phase = match self.conversation.get(self.current) {
            Some(DialogueEntry::Text { .. }) => Phase::Revealing,
            Some(DialogueEntry::Choice { .. }) => Phase::ChoicePending,
            None => Phase::Dismissed,
        };
        trace!(index = self.current, phase = ?self.phase, "entering entry");
    }

    fn debounce_ready(&self) -> bool {
        self.choice_timer > self.config.choice_debounce
    }

    fn current_entry(&self) -> Option<&DialogueEntry> {
        self.conversation.get(self.current)
    }

    fn current_text(&self) -> &str {
        match self.current_entry() {
            Some(DialogueEntry::Text { text, .. }) => text,
            _ => "",
        }
    }

    fn current_char_count(&self) -> usize {
        self.current_text().chars().count()
    }

    fn option_count(&self) -> usize {
        match self.current_entry() {
            Some(DialogueEntry::Choice { options, .. }) => options.len(),
            _ => 0,
        }
    }

    fn selected_target(&self) -> Option<ConversationId> {
        match self.current_entry() {
            Some(DialogueEntry::Choice { options, .. }) => {
                options.get(self.choice_cursor).map(|option| option.target)
            }
            _ => None,
        }
    }

    /// Whether a box is currently displayed.
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Dismissed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Revealed prefix of the current entry's text, char-boundary safe.
    pub fn displayed_text(&self) -> &str {
        let text = self.current_text();
        match text.char_indices().nth(self.revealed) {
            Some((idx, _)) => &text[..idx],
            None => text,
        }
    }

    /// Full post-pagination text of the current entry.
    pub fn full_text(&self) -> &str {
        self.current_text()
    }

    pub fn avatar_index(&self) -> Option<usize> {
        self.current_entry().map(DialogueEntry::avatar_index)
    }

    pub fn mood(&self) -> Option<Mood> {
        self.current_entry().map(DialogueEntry::mood)
    }

    /// Options of the current choice entry, empty for text entries.
    pub fn choices(&self) -> &[ChoiceOption] {
        match self.current_entry() {
            Some(DialogueEntry::Choice { options, .. }) => options,
            _ => &[],
        }
    }

    pub fn selected_choice(&self) -> usize {
        self.choice_cursor
    }

    /// Whether the continue-reading indicator should draw.
    pub fn show_more_indicator(&self) -> bool {
        self.phase == Phase::Shown && self.current + 1 < self.conversation.len()
    }

    /// Blink phase of the continue-reading indicator.
    pub fn indicator_raised(&self) -> bool {
        self.indicator_raised
    }

    /// Drains queued audio cues for the host to play.
    pub fn take_audio(&mut self) -> Vec<AudioCommand> {
        std::mem::take(&mut self.audio)
    }
}
