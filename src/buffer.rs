//! The editable buffer: editing operations over character storage, with a
//! snapshot recorded into the undo history after every mutation.
//!
//! Every public mutator follows the same shape: validate inputs, mutate the
//! storage, record a snapshot. Validation always happens first, so a failed
//! call leaves both the content and the history untouched, and the top of the
//! history equals the rendered content at every method boundary.
//!
//! Reads (`Display`, [`EditableBuffer::char_at`]) copy values out; no caller
//! ever holds a reference into the internal storage.

use std::fmt;

use tracing::trace;

use crate::char_array::{BufferConfig, CharArray};
use crate::error::{IndexError, Result};
use crate::history::History;

/// Default configuration for the backing storage.
const DEFAULT_CONFIG: BufferConfig = BufferConfig::new(crate::char_array::DEFAULT_CAPACITY);

/// A mutable character buffer with in-place editing and linear undo.
///
/// Text arguments are `impl Into<Option<&str>>`, so both `buffer.append("x")`
/// and `buffer.append(None)` compile; an absent argument is normalized to the
/// literal string `"null"` rather than rejected. This leniency is part of the
/// buffer's contract and applies to every text-taking operation.
#[derive(Debug, Clone)]
pub struct EditableBuffer {
    /// Capacity-tracked content; grows ahead of any lengthening operation.
    storage: CharArray,
    /// Snapshot stack; its top always mirrors `storage` between calls.
    history: History,
}

/// An absent text argument stands in for the literal string "null".
fn normalize(text: Option<&str>) -> &str {
    text.unwrap_or("null")
}

impl EditableBuffer {
    /// Create an empty buffer with the default initial capacity.
    pub fn new() -> Self {
        Self::with_config("", DEFAULT_CONFIG)
    }

    /// Create a buffer holding `initial`.
    pub fn from_str(initial: &str) -> Self {
        Self::with_config(initial, DEFAULT_CONFIG)
    }

    /// Create a buffer holding `initial` with an explicit storage config.
    pub fn with_config(initial: &str, config: BufferConfig) -> Self {
        Self {
            storage: CharArray::from_str(initial, config),
            history: History::new(initial.to_string()),
        }
    }

    /// Logical length in character units.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Is the content empty?
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Current physical capacity of the backing storage.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Number of snapshots in the undo history (at least 1).
    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    /// Append text at the end of the buffer. Never fails.
    pub fn append<'a>(&mut self, text: impl Into<Option<&'a str>>) {
        let chars: Vec<char> = normalize(text.into()).chars().collect();
        trace!(count = chars.len(), "append");

        self.storage.insert_at(self.storage.len(), &chars);
        self.record();
    }

    /// Append a single character. Never fails.
    pub fn append_char(&mut self, c: char) {
        self.storage.push(c);
        self.record();
    }

    /// Insert text at `offset`, shifting the suffix right.
    ///
    /// Fails when `offset` is past the logical end; the buffer is unchanged
    /// on error.
    pub fn insert<'a>(&mut self, offset: usize, text: impl Into<Option<&'a str>>) -> Result<()> {
        if offset > self.storage.len() {
            return Err(IndexError::OutOfBounds {
                offset,
                len: self.storage.len(),
            });
        }

        let chars: Vec<char> = normalize(text.into()).chars().collect();
        trace!(offset, count = chars.len(), "insert");

        self.storage.insert_at(offset, &chars);
        self.record();
        Ok(())
    }

    /// Remove the half-open range `[start, end)`.
    ///
    /// Fails when `start` is past the logical end or past `end`. An `end`
    /// beyond the logical length is clamped rather than rejected.
    pub fn delete(&mut self, start: usize, end: usize) -> Result<()> {
        self.validate_range(start, end)?;
        let end = end.min(self.storage.len());
        trace!(start, end, "delete");

        self.storage.remove_range(start, end);
        self.record();
        Ok(())
    }

    /// Replace the range `[start, end)` with `text`.
    ///
    /// Validation and clamping follow [`EditableBuffer::delete`]; the logical
    /// length changes by `text` length minus the removed range length.
    pub fn replace<'a>(
        &mut self,
        start: usize,
        end: usize,
        text: impl Into<Option<&'a str>>,
    ) -> Result<()> {
        self.validate_range(start, end)?;
        let end = end.min(self.storage.len());

        let chars: Vec<char> = normalize(text.into()).chars().collect();
        trace!(start, end, count = chars.len(), "replace");

        self.storage.splice(start, end, &chars);
        self.record();
        Ok(())
    }

    /// Reverse the content in place.
    ///
    /// Records a snapshot like any other mutation, so each call is
    /// independently undoable.
    pub fn reverse(&mut self) {
        self.storage.reverse();
        self.record();
    }

    /// Step the buffer back to the previous snapshot.
    ///
    /// Returns `false` when only the initial state remains. Each call moves
    /// exactly one snapshot back; there is no redo.
    pub fn undo(&mut self) -> bool {
        match self.history.revert() {
            Some(previous) => {
                self.storage = CharArray::from_str(previous, DEFAULT_CONFIG);
                trace!(len = self.storage.len(), "undo restored snapshot");
                true
            }
            None => false,
        }
    }

    /// Get the character at `index`.
    pub fn char_at(&self, index: usize) -> Result<char> {
        self.storage.get(index).ok_or(IndexError::OutOfBounds {
            offset: index,
            len: self.storage.len(),
        })
    }

    /// Find the first occurrence of `text` using a naive forward scan.
    ///
    /// Returns the starting index of the match, or `None` if the text does
    /// not occur (including when it is longer than the content). An empty
    /// pattern matches at index 0 on any buffer. The scan never reads past
    /// the logical length.
    pub fn index_of<'a>(&self, text: impl Into<Option<&'a str>>) -> Option<usize> {
        let needle: Vec<char> = normalize(text.into()).chars().collect();
        let haystack = self.storage.as_chars();

        if haystack.len() < needle.len() {
            return None;
        }

        for i in 0..=(haystack.len() - needle.len()) {
            if haystack[i..i + needle.len()] == needle[..] {
                return Some(i);
            }
        }

        None
    }

    /// Shared bounds check for range-taking operations. `end` is only checked
    /// against `start`; clamping it to the length stays with the caller.
    fn validate_range(&self, start: usize, end: usize) -> Result<()> {
        if start > self.storage.len() {
            return Err(IndexError::OutOfBounds {
                offset: start,
                len: self.storage.len(),
            });
        }
        if start > end {
            return Err(IndexError::InvertedRange { start, end });
        }
        Ok(())
    }

    /// Record the post-mutation content as a new snapshot.
    fn record(&mut self) {
        self.history.record(self.storage.render());
    }
}

impl Default for EditableBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EditableBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage.render())
    }
}
