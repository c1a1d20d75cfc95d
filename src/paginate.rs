//! Greedy reflow of message text into a fixed box, splicing overflow into a
//! continuation entry.

use tracing::trace;

use crate::conversation::Conversation;
use crate::entry::DialogueEntry;
use crate::measure::TextMeasurer;

/// Result of reflowing one message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSplit {
    /// Line-broken text that fits the box.
    pub displayed: String,
    /// Remainder destined for a follow-up entry, if the box filled up.
    pub overflow: Option<String>,
}

/// Reflows `text` into a `width` x `height` area.
///
/// Words accumulate greedily into lines; a line closes when the next word
/// would push it past `width`. Closed lines flush into the displayed fragment
/// while the fragment plus one more line still measures under `height`; the
/// line whose close would exceed the height ends the page (appended without a
/// line break), and everything after it accumulates into a single overflow
/// fragment of space-separated words. The overflow is raw text, re-paginated
/// when its entry is reached, so later width overflows never re-split it.
///
/// Words are split on single spaces so preformatted newlines survive inside
/// them; every word is followed by one space, including at line ends. A word
/// wider than the box gets its own line. One pass over the words, so a
/// degenerate zero-size box cannot loop.
pub fn paginate(
    text: &str,
    width: f32,
    height: f32,
    measurer: &dyn TextMeasurer,
) -> PageSplit {
    if text.is_empty() {
        return PageSplit {
            displayed: String::new(),
            overflow: None,
        };
    }

    let mut displayed = String::new();
    let mut line = String::new();
    let mut filled = false;

    for word in text.split(' ') {
        let mut candidate = line.clone();
        candidate.push_str(word);
        if !filled && measurer.measure(&candidate).width > width {
            let mut flushed = displayed.clone();
            flushed.push_str(&line);
            flushed.push('\n');
            if measurer.measure(&flushed).height < height {
                displayed = flushed;
            } else {
                // The page ends here; the closing line keeps the box full and
                // every later word falls through into the overflow fragment.
                filled = true;
                displayed.push_str(&line);
            }
            line.clear();
        }
        line.push_str(word);
        line.push(' ');
    }

    if filled {
        PageSplit {
            displayed,
            overflow: Some(line),
        }
    } else {
        displayed.push_str(&line);
        PageSplit {
            displayed,
            overflow: None,
        }
    }
}

/// Paginates the text entry at `index`, replacing its text with the displayed
/// fragment and splicing any overflow in as a continuation entry at
/// `index + 1` with the same avatar and mood.
///
/// Choice entries and out-of-range indices are left untouched. Returns
/// whether a continuation entry was inserted.
pub fn paginate_entry(
    conversation: &mut Conversation,
    index: usize,
    width: f32,
    height: f32,
    measurer: &dyn TextMeasurer,
) -> bool {
    let (avatar_index, mood, split) = match conversation.get(index) {
        Some(DialogueEntry::Text {
            avatar_index,
            text,
            mood,
        }) => (*avatar_index, *mood, paginate(text, width, height, measurer)),
        _ => return false,
    };

    if let Some(DialogueEntry::Text { text, .. }) = conversation.get_mut(index) {
        *text = split.displayed;
    }

    match split.overflow {
        Some(rest) => {
            trace!(index, "pagination split produced a continuation entry");
            conversation.insert_after(
                index,
                DialogueEntry::Text {
                    avatar_index,
                    text: rest,
                    mood,
                },
            );
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::FixedAdvanceMeasurer;

    fn measurer() -> FixedAdvanceMeasurer {
        FixedAdvanceMeasurer::new(1.0, 1.0)
    }

    #[test]
    fn short_text_is_returned_whole() {
        let split = paginate("to the point", 100.0, 10.0, &measurer());
        assert_eq!(split.displayed, "to the point ");
        assert_eq!(split.overflow, None);
    }

    #[test]
    fn empty_input_yields_empty_page() {
        let split = paginate("", 10.0, 10.0, &measurer());
        assert_eq!(split.displayed, "");
        assert_eq!(split.overflow, None);
    }

    #[test]
    fn lines_break_at_the_box_width() {
        // Three-char words; width 7 fits two words per line.
        let split = paginate("foo bar baz qux", 7.0, 10.0, &measurer());
        assert_eq!(split.displayed, "foo bar \nbaz qux ");
        assert_eq!(split.overflow, None);
    }

    #[test]
    fn word_wider_than_box_gets_its_own_line() {
        let split = paginate("hi extraordinarily hi", 6.0, 10.0, &measurer());
        assert_eq!(split.displayed, "hi \nextraordinarily \nhi ");
        assert_eq!(split.overflow, None);
    }

    #[test]
    fn overflow_carries_every_word_past_the_fill_point() {
        // Width 7 fits two words per line, height 2.5 fits one flushed line
        // plus the closing line.
        let split = paginate("foo bar baz qux quo zed", 7.0, 2.5, &measurer());
        assert_eq!(split.displayed, "foo bar \nbaz qux ");
        assert_eq!(split.overflow.as_deref(), Some("quo zed "));
    }

    #[test]
    fn displayed_height_stays_within_the_box() {
        let measurer = measurer();
        let split = paginate("foo bar baz qux quo zed alpha beta", 7.0, 2.5, &measurer);
        assert!(measurer.measure(&split.displayed).height <= 2.5);
        assert!(split.overflow.is_some());
    }
}
