//! Capacity-tracked character storage for the editable buffer.
//!
//! # Overview
//! `CharArray` owns a heap-allocated slice of `char` units whose physical
//! length (the capacity) may exceed the logical content length. All editing
//! primitives work by shifting the logical suffix and copying new units into
//! place; growth happens through an explicit `ensure_capacity` step so the
//! amortized-growth contract is an observable, testable part of the structure
//! rather than a property delegated to `Vec`.
//!
//! # Examples
//! ```
//! use editbuf::char_array::{BufferConfig, CharArray};
//!
//! let mut array = CharArray::from_str("Hello World!", BufferConfig::default());
//! array.insert_at(5, &[' ', 'b', 'i', 'g']);
//! assert_eq!(array.render(), "Hello big World!");
//!
//! array.remove_range(5, 9);
//! assert_eq!(array.render(), "Hello World!");
//! ```
//!
//! # Implementation Details
//! The structure maintains the following invariants:
//! - `len <= capacity` at every method boundary
//! - Capacity never shrinks; `ensure_capacity(min)` reallocates to
//!   `max(capacity * 2, min)` and copies only the logical prefix `[0, len)`
//! - The tail `[len, capacity)` is padding and is never read
//! - Editing primitives never leave a partially-shifted state observable
//!
//! # Performance
//! - Append: amortized O(1) per unit (doubling growth, never a slack-free
//!   reallocation)
//! - Insert/remove at offset `i`: O(len - i) shift plus the copy
//! - Reverse: O(len) single swap pass
//! - Render to `String`: O(len)

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default initial capacity for a fresh array, in character units.
pub const DEFAULT_CAPACITY: usize = 16;

/// Configuration for a [`CharArray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferConfig {
    /// Capacity allocated before any content is written. Must be non-zero,
    /// otherwise doubling growth degenerates into a reallocation per unit.
    pub initial_capacity: usize,
}

impl BufferConfig {
    pub const fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Growable character storage with an explicit capacity/length split.
#[derive(Debug, Clone)]
pub struct CharArray {
    /// Physical storage; `data.len()` is the capacity.
    data: Box<[char]>,
    /// Logical count of valid characters in `data[..len]`.
    len: usize,
}

impl CharArray {
    /// Create an empty array with the configured initial capacity.
    pub fn new(config: BufferConfig) -> Self {
        assert!(config.initial_capacity > 0);
        Self {
            data: vec!['\0'; config.initial_capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Create an array holding `s`, with capacity at least
    /// max(initial capacity, character count of `s`).
    pub fn from_str(s: &str, config: BufferConfig) -> Self {
        assert!(config.initial_capacity > 0);
        let chars: Vec<char> = s.chars().collect();
        let capacity = config.initial_capacity.max(chars.len());
        let mut data = vec!['\0'; capacity].into_boxed_slice();
        data[..chars.len()].copy_from_slice(&chars);
        Self {
            data,
            len: chars.len(),
        }
    }

    /// Logical length in character units.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the logical content empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Physical capacity in character units.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// The valid content as a slice.
    pub fn as_chars(&self) -> &[char] {
        &self.data[..self.len]
    }

    /// Get the character at `index`, or `None` past the logical end.
    pub fn get(&self, index: usize) -> Option<char> {
        self.as_chars().get(index).copied()
    }

    /// Render the logical content `[0, len)` as an owned `String`.
    pub fn render(&self) -> String {
        self.as_chars().iter().collect()
    }

    /// Grow the capacity to hold at least `min` units.
    ///
    /// Reallocates to `max(capacity * 2, min)` and copies the logical prefix,
    /// so repeated single-unit appends reallocate O(log n) times.
    pub fn ensure_capacity(&mut self, min: usize) {
        if min <= self.data.len() {
            return;
        }

        let new_capacity = (self.data.len() * 2).max(min);
        debug!(
            old = self.data.len(),
            new = new_capacity,
            "growing character storage"
        );

        let mut new_data = vec!['\0'; new_capacity].into_boxed_slice();
        new_data[..self.len].copy_from_slice(&self.data[..self.len]);
        self.data = new_data;
    }

    /// Append a single character, growing if needed.
    pub fn push(&mut self, c: char) {
        self.ensure_capacity(self.len + 1);
        self.data[self.len] = c;
        self.len += 1;
    }

    /// Insert `chars` at `offset`, shifting the suffix `[offset, len)` right.
    ///
    /// `offset` must be `<= len`; the caller validates before mutating.
    pub fn insert_at(&mut self, offset: usize, chars: &[char]) {
        debug_assert!(offset <= self.len);
        self.ensure_capacity(self.len + chars.len());

        self.data.copy_within(offset..self.len, offset + chars.len());
        self.data[offset..offset + chars.len()].copy_from_slice(chars);
        self.len += chars.len();
    }

    /// Remove the half-open range `[start, end)`, shifting the suffix left.
    ///
    /// Both bounds must already be validated and clamped to `len`.
    pub fn remove_range(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= self.len);

        self.data.copy_within(end..self.len, start);
        self.len -= end - start;
    }

    /// Replace the range `[start, end)` with `chars` in one pass: shift the
    /// suffix to its final position, then copy the replacement into the gap.
    pub fn splice(&mut self, start: usize, end: usize, chars: &[char]) {
        debug_assert!(start <= end && end <= self.len);
        let new_len = self.len - (end - start) + chars.len();
        self.ensure_capacity(new_len);

        self.data.copy_within(end..self.len, start + chars.len());
        self.data[start..start + chars.len()].copy_from_slice(chars);
        self.len = new_len;
    }

    /// Reverse the logical content in place.
    ///
    /// Swap pass pairing each index `j` in the first half with its mirror
    /// `len - 1 - j`; an odd-length middle element stays put.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }

        let n = self.len - 1;
        for j in (0..=(n - 1) >> 1).rev() {
            self.data.swap(j, n - j);
        }
    }
}
