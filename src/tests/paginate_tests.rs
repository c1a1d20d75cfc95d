use crate::conversation::Conversation;
use crate::entry::{ChoiceOption, DialogueEntry, Mood};
use crate::measure::{FixedAdvanceMeasurer, TextMeasurer};
use crate::paginate::{paginate, paginate_entry};

fn measurer() -> FixedAdvanceMeasurer {
    FixedAdvanceMeasurer::new(1.0, 1.0)
}

fn text_entry(avatar_index: usize, text: &str, mood: Mood) -> DialogueEntry {
    DialogueEntry::Text {
        avatar_index,
        text: text.to_string(),
        mood,
    }
}

/// Box width fits five two-char words per line, height fits two lines: a
/// twelve-word message displays two full lines and the remainder becomes the
/// continuation entry.
#[test]
fn twelve_short_words_fill_two_lines_and_splice() {
    let message = vec!["aa"; 12].join(" ");
    let mut conversation = Conversation::new(vec![text_entry(4, &message, Mood::Angry)]);

    let split = paginate_entry(&mut conversation, 0, 15.0, 2.5, &measurer());

    assert!(split);
    assert_eq!(conversation.len(), 2);
    match conversation.get(0).unwrap() {
        DialogueEntry::Text { text, .. } => {
            assert_eq!(text, "aa aa aa aa aa \naa aa aa aa aa ");
        }
        entry => panic!("expected text entry, got {entry:?}"),
    }
    match conversation.get(1).unwrap() {
        DialogueEntry::Text {
            avatar_index,
            text,
            mood,
        } => {
            assert_eq!(*avatar_index, 4);
            assert_eq!(*mood, Mood::Angry);
            assert_eq!(text, "aa aa ");
        }
        entry => panic!("expected continuation entry, got {entry:?}"),
    }
}

#[test]
fn short_message_does_not_splice() {
    let mut conversation = Conversation::new(vec![text_entry(0, "just fits", Mood::Normal)]);
    let split = paginate_entry(&mut conversation, 0, 100.0, 10.0, &measurer());
    assert!(!split);
    assert_eq!(conversation.len(), 1);
    match conversation.get(0).unwrap() {
        DialogueEntry::Text { text, .. } => assert_eq!(text, "just fits "),
        entry => panic!("expected text entry, got {entry:?}"),
    }
}

#[test]
fn displayed_fragment_height_never_exceeds_the_box() {
    let measurer = measurer();
    let message = vec!["word"; 40].join(" ");
    let mut conversation = Conversation::new(vec![text_entry(0, &message, Mood::Normal)]);
    paginate_entry(&mut conversation, 0, 20.0, 3.5, &measurer);
    match conversation.get(0).unwrap() {
        DialogueEntry::Text { text, .. } => {
            assert!(measurer.measure(text).height <= 3.5);
        }
        entry => panic!("expected text entry, got {entry:?}"),
    }
}

#[test]
fn choice_entry_is_left_untouched() {
    let mut conversation = Conversation::new(vec![DialogueEntry::Choice {
        avatar_index: 0,
        mood: Mood::Normal,
        options: vec![ChoiceOption {
            label: "A long label that would otherwise wrap".to_string(),
            target: 2,
        }],
    }]);
    let before = conversation.get(0).unwrap().clone();
    assert!(before.is_choice());
    let split = paginate_entry(&mut conversation, 0, 5.0, 2.0, &measurer());
    assert!(!split);
    assert_eq!(conversation.len(), 1);
    assert_eq!(conversation.get(0).unwrap(), &before);
}

#[test]
fn out_of_range_index_is_a_no_op() {
    let mut conversation = Conversation::new(vec![text_entry(0, "hi", Mood::Normal)]);
    assert!(!paginate_entry(&mut conversation, 9, 10.0, 10.0, &measurer()));
    assert_eq!(conversation.len(), 1);
}

/// A zero-width box forces every word onto its own line but must still
/// finish in one pass.
#[test]
fn degenerate_zero_width_box_terminates() {
    let split = paginate("a bb ccc", 0.0, 5.0, &measurer());
    assert!(split.displayed.contains("a "));
    assert!(split.displayed.contains("bb "));
    assert!(split.displayed.contains("ccc "));
}

#[test]
fn preformatted_newlines_survive_inside_words() {
    // Authored line breaks ride along inside a "word" and count toward the
    // measured height.
    let split = paginate("one\ntwo three", 20.0, 10.0, &measurer());
    assert_eq!(split.displayed, "one\ntwo three ");
    assert_eq!(split.overflow, None);
}
