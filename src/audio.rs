//! Audio command boundary.
//!
//! The session never touches an audio device; it queues commands the host
//! drains after each update and plays however it likes.

/// Fire-and-forget cues queued by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCommand {
    /// Blip played on an accepted advance or choice confirm.
    AdvanceCue,
}
