//! Session configuration: playback timing and box layout.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DialogueError, DialogueResult};

/// Axis-aligned rectangle in screen units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrinks the rectangle by `inset` on every side, clamping at zero size.
    pub fn inset(&self, inset: f32) -> Rect {
        Rect {
            x: self.x + inset,
            y: self.y + inset,
            width: (self.width - 2.0 * inset).max(0.0),
            height: (self.height - 2.0 * inset).max(0.0),
        }
    }
}

/// Layout and timing for a dialogue session.
///
/// The playback logic only consumes [`SessionConfig::text_rect`] and the
/// timing fields; the box, border, and avatar geometry are carried for the
/// host renderer. Scalar fields precede the rectangles so the struct maps
/// cleanly onto a TOML document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seconds per revealed character.
    pub reveal_interval: f32,
    /// Minimum seconds between accepted choice inputs.
    pub choice_debounce: f32,
    /// Seconds per continue-indicator blink toggle.
    pub indicator_blink: f32,
    /// Displayed-area inset used when no explicit text rectangle is set.
    pub text_inset: f32,
    pub border_width: f32,
    pub border_color: [u8; 4],
    pub box_rect: Rect,
    /// Explicit text area override, e.g. to leave room for the avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_rect: Option<Rect>,
    pub avatar_rect: Rect,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reveal_interval: 0.008,
            choice_debounce: 0.15,
            indicator_blink: 0.4,
            text_inset: 10.0,
            border_width: 2.0,
            border_color: [255, 255, 255, 255],
            box_rect: Rect::new(100.0, 200.0, 600.0, 150.0),
            text_rect: Some(Rect::new(250.0, 215.0, 445.0, 115.0)),
            avatar_rect: Rect::new(120.0, 215.0, 115.0, 115.0),
        }
    }
}

impl SessionConfig {
    /// The displayed-text area: the explicit override if set, otherwise the
    /// box rectangle shrunk by the inset.
    pub fn text_rect(&self) -> Rect {
        self.text_rect
            .unwrap_or_else(|| self.box_rect.inset(self.text_inset))
    }

    /// Parses a config from TOML text.
    pub fn from_toml_str(input: &str) -> DialogueResult<Self> {
        toml::from_str(input).map_err(|err| DialogueError::Config(err.to_string()))
    }

    /// Serializes the config to TOML text.
    pub fn to_toml_string(&self) -> DialogueResult<String> {
        toml::to_string_pretty(self).map_err(|err| DialogueError::Config(err.to_string()))
    }

    /// Loads a config file.
    pub fn load(path: &Path) -> DialogueResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Saves the config to a file.
    pub fn save(&self, path: &Path) -> DialogueResult<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
