//! Decoding of the flat binary stream back into a record store.

use crate::error::CodecError;
use crate::serialization::save;
use crate::store::RecordStore;
use crate::text::TextBuffer;
use log::{debug, trace, warn};
use std::path::Path;

// ─── Stream ─────────────────────────────────────────────────────────────────

/// Forward-only cursor over the raw stream.
///
/// Every read validates the remaining length first; a declared field longer
/// than the stream fails with [`CodecError::TruncatedStream`] instead of
/// reading out of bounds.
struct Stream<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Stream<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        if self.remaining() < n {
            return Err(CodecError::TruncatedStream {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read a little-endian i32 count or length, rejecting negative values.
    fn read_len(&mut self) -> Result<usize, CodecError> {
        let value = i32::from_le_bytes(self.take(4)?.try_into().unwrap());
        if value < 0 {
            return Err(CodecError::NegativeLength { value });
        }
        Ok(value as usize)
    }

    fn read_done(&mut self) -> Result<bool, CodecError> {
        Ok(self.take(1)?[0] != 0)
    }
}

// ─── Decoding ───────────────────────────────────────────────────────────────

/// Rebuild a store from an encoded stream.
///
/// Every record is constructed active and added through the normal
/// [`RecordStore::insert`] path, so slot-reuse and growth rules apply to
/// loaded data exactly as to live insertions. Trailing bytes after the last
/// declared record are ignored, as the original format always allowed.
pub fn deserialize(bytes: &[u8]) -> Result<RecordStore, CodecError> {
    let mut stream = Stream::new(bytes);
    let count = stream.read_len()?;

    let mut store = RecordStore::default();
    for _ in 0..count {
        let name_len = stream.read_len()?;
        let name = std::str::from_utf8(stream.take(name_len)?)?;
        let done = stream.read_done()?;
        let index = store.insert(TextBuffer::new(name)?, done);
        trace!("slot {index}: name={name:?} done={done}");
    }

    // A fresh store never reuses a slot during decoding, so the high-water
    // mark must equal the declared record count.
    debug_assert_eq!(store.len(), count);

    if stream.remaining() > 0 {
        debug!("{} trailing bytes ignored", stream.remaining());
    }
    Ok(store)
}

/// Load the store from `path`.
///
/// A missing file is not an error: the first run gets an empty store, and an
/// empty save establishes the file so the next load finds it (idempotent
/// bootstrap).
pub fn load(path: &Path) -> Result<RecordStore, CodecError> {
    if !path.exists() {
        warn!("{} missing, writing empty store", path.display());
        let store = RecordStore::default();
        save(&store, path)?;
        return Ok(store);
    }

    let bytes = std::fs::read(path)?;
    let store = deserialize(&bytes)?;
    debug!(
        "loaded {} active records from {}",
        store.active_count(),
        path.display()
    );
    Ok(store)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
