use crate::error::TextError;
use std::fmt;

// ─── Text Buffer ────────────────────────────────────────────────────────────

/// Largest name in bytes. The on-disk format was only ever written from a
/// 128-byte arena with a terminator byte and one slot of append headroom, so
/// no existing file carries a longer name.
pub const MAX_TEXT_LEN: usize = 126;

/// Owned, bounded text buffer.
///
/// Used both for staging keyboard input and as the stored name of every
/// record. The byte-length cap is enforced at the API boundary; a failing
/// call never mutates the buffer. Duplication is plain [`Clone`] — the copy
/// shares no storage with the original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    /// Create a buffer holding a copy of `initial`.
    pub fn new(initial: &str) -> Result<Self, TextError> {
        if initial.len() > MAX_TEXT_LEN {
            return Err(TextError::TextTooLong {
                len: initial.len(),
                max: MAX_TEXT_LEN,
            });
        }
        Ok(Self {
            text: initial.to_owned(),
        })
    }

    /// Append one character.
    pub fn push(&mut self, ch: char) -> Result<(), TextError> {
        if self.text.len() + ch.len_utf8() > MAX_TEXT_LEN {
            return Err(TextError::BufferFull { max: MAX_TEXT_LEN });
        }
        self.text.push(ch);
        Ok(())
    }

    /// Remove the last character. No-op on an empty buffer.
    pub fn pop(&mut self) {
        self.text.pop();
    }

    /// Reset to empty. Retains the allocation.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes, as written to the stream.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
