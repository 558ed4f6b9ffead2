//! End-to-end conformance scenarios driving the public buffer API the way an
//! external caller would.

use editbuf::{BufferConfig, EditableBuffer, IndexError};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    // Run with EDITBUF_LOG=trace to see edit/undo events during tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("EDITBUF_LOG"))
        .with_test_writer()
        .try_init();
}

/// The canonical demo interaction sequence, starting from "Hello".
///
/// The search for "World" only has a forward match before the reverse, where
/// it starts at index 16; after the reverse it must report no match.
#[test]
fn demo_interaction_sequence() {
    init_tracing();
    let mut buffer = EditableBuffer::from_str("Hello");

    buffer.append(" World");
    assert_eq!(buffer.to_string(), "Hello World");

    buffer.append("!");
    assert_eq!(buffer.to_string(), "Hello World!");

    assert!(buffer.undo());
    assert_eq!(buffer.to_string(), "Hello World");

    buffer.insert(5, " Beautiful").unwrap();
    assert_eq!(buffer.to_string(), "Hello Beautiful World");
    assert_eq!(buffer.index_of("World"), Some(16));

    buffer.reverse();
    assert_eq!(buffer.to_string(), "dlroW lufituaeB olleH");
    assert_eq!(buffer.index_of("World"), None);
}

#[test]
fn undo_unwinds_a_full_editing_session() {
    let mut buffer = EditableBuffer::from_str("base");

    buffer.append(" one");
    buffer.insert(0, ">> ").unwrap();
    buffer.replace(0, 2, "<<").unwrap();
    buffer.delete(0, 3).unwrap();
    assert_eq!(buffer.to_string(), "base one");
    buffer.reverse();
    assert_eq!(buffer.to_string(), "eno esab");

    let states = [
        "base one",
        "<< base one",
        ">> base one",
        "base one",
        "base",
    ];
    for expected in states {
        assert!(buffer.undo());
        assert_eq!(buffer.to_string(), expected);
    }
    assert!(!buffer.undo());
    assert_eq!(buffer.to_string(), "base");
}

#[test]
fn failed_operations_are_not_undo_points() {
    let mut buffer = EditableBuffer::from_str("abc");

    assert_eq!(
        buffer.insert(10, "x").unwrap_err(),
        IndexError::OutOfBounds { offset: 10, len: 3 }
    );
    assert_eq!(
        buffer.delete(2, 1).unwrap_err(),
        IndexError::InvertedRange { start: 2, end: 1 }
    );
    assert_eq!(
        buffer.replace(4, 9, "y").unwrap_err(),
        IndexError::OutOfBounds { offset: 4, len: 3 }
    );

    // Nothing was recorded, so there is nothing to undo.
    assert_eq!(buffer.history_depth(), 1);
    assert!(!buffer.undo());
    assert_eq!(buffer.to_string(), "abc");
}

#[test]
fn absent_text_normalizes_to_null_everywhere() {
    let mut buffer = EditableBuffer::new();

    buffer.append(None);
    assert_eq!(buffer.to_string(), "null");

    buffer.insert(4, None).unwrap();
    assert_eq!(buffer.to_string(), "nullnull");

    buffer.replace(0, 4, None).unwrap();
    assert_eq!(buffer.to_string(), "nullnull");

    assert_eq!(buffer.index_of(None), Some(0));
}

#[test]
fn custom_initial_capacity_is_honored() {
    let buffer = EditableBuffer::with_config("hi", BufferConfig::new(64));
    assert_eq!(buffer.capacity(), 64);
    assert_eq!(buffer.len(), 2);

    // Initial content longer than the configured capacity still fits.
    let buffer = EditableBuffer::with_config("a much longer initial text", BufferConfig::new(4));
    assert_eq!(buffer.len(), 26);
    assert!(buffer.capacity() >= 26);
}

#[test]
fn editing_resumes_cleanly_after_undo() {
    let mut buffer = EditableBuffer::from_str("Hello");

    buffer.append(" World");
    buffer.append("!");
    assert!(buffer.undo());

    // New edits branch from the restored state; the discarded "!" never
    // reappears no matter how far back we go.
    buffer.append("?");
    assert_eq!(buffer.to_string(), "Hello World?");

    assert!(buffer.undo());
    assert_eq!(buffer.to_string(), "Hello World");
    assert!(buffer.undo());
    assert_eq!(buffer.to_string(), "Hello");
    assert!(!buffer.undo());
}

#[test]
fn char_at_reads_are_copies_of_current_state() {
    let mut buffer = EditableBuffer::from_str("abc");

    let before = buffer.char_at(0).unwrap();
    buffer.replace(0, 1, "z").unwrap();
    let after = buffer.char_at(0).unwrap();

    assert_eq!(before, 'a');
    assert_eq!(after, 'z');
}
