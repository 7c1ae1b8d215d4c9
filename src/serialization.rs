//! Encoding of the active record set into the flat binary stream.

use crate::error::CodecError;
use crate::store::RecordStore;
use log::{debug, trace};
use std::io::Write;
use std::path::Path;

// ─── Binary Layout ──────────────────────────────────────────────────────────
//
//  ┌──────────────────────────────────────────────┐
//  │ record_count: i32 (LE)                       │
//  ├──────────────────────────────────────────────┤
//  │ per active record, in slot order:            │
//  │   name_len: i32 (LE)                         │
//  │   name:     u8 × name_len (no terminator)    │
//  │   done:     u8 (0 or 1)                      │
//  └──────────────────────────────────────────────┘
//
// No magic number, no version tag, no checksum: the layout is shared with
// files written by the original widget and must stay byte-compatible in both
// directions.

/// Conventional file name (`./todo.bin` in the original widget).
pub const DEFAULT_STORE_FILE: &str = "todo.bin";

pub(crate) const LEN_FIELD_SIZE: usize = 4;
pub(crate) const DONE_FIELD_SIZE: usize = 1;

/// Exact size in bytes of the encoded stream for `store`'s active records.
pub fn encoded_size(store: &RecordStore) -> usize {
    let mut total = LEN_FIELD_SIZE;
    for (_, record) in store.iter_active() {
        total += LEN_FIELD_SIZE + record.name().len() + DONE_FIELD_SIZE;
    }
    total
}

/// Append one record to the stream. Returns the bytes written.
fn write_record_into(buf: &mut Vec<u8>, name: &str, done: bool) -> usize {
    let start = buf.len();
    buf.extend_from_slice(&(name.len() as i32).to_le_bytes());
    buf.extend_from_slice(name.as_bytes());
    buf.push(done as u8);
    buf.len() - start
}

/// Encode the active records, in ascending slot order, into a byte stream.
///
/// Tombstoned slots do not appear in the stream at all — they are permanently
/// dropped from persistence. The total bytes written must equal the
/// precomputed [`encoded_size`]; a mismatch fails with
/// [`CodecError::CodecInvariantViolation`] before anything reaches durable
/// storage.
pub fn serialize(store: &RecordStore) -> Result<Vec<u8>, CodecError> {
    let expected = encoded_size(store);
    let active = store.active_count();

    let mut buf = Vec::with_capacity(expected);
    buf.extend_from_slice(&(active as i32).to_le_bytes());
    debug!("serializing {active} active records, {expected} bytes expected");

    for (index, record) in store.iter_active() {
        let written = write_record_into(&mut buf, record.name(), record.done());
        trace!(
            "slot {index}: {written} bytes, name={:?} done={}",
            record.name(),
            record.done()
        );
    }

    let written = buf.len();
    if written != expected {
        return Err(CodecError::CodecInvariantViolation { expected, written });
    }
    Ok(buf)
}

/// Serialize `store` and atomically replace the file at `path`.
///
/// The stream is built fully in memory, written to a temporary file in the
/// destination directory, synced, and renamed over `path`. A failed save
/// never leaves a partial or truncated file in place.
pub fn save(store: &RecordStore, path: &Path) -> Result<(), CodecError> {
    let bytes = serialize(store)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| CodecError::Io(err.error))?;

    debug!("saved {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TextBuffer;

    fn name(text: &str) -> TextBuffer {
        TextBuffer::new(text).unwrap()
    }

    #[test]
    fn empty_store_is_just_a_zero_count() {
        let store = RecordStore::default();
        assert_eq!(serialize(&store).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn encoded_size_matches_actual_output() {
        let mut store = RecordStore::default();
        store.insert(name("Buy milk"), false);
        store.insert(name(""), true);
        store.insert(name("Walk dog"), false);
        store.remove(2).unwrap();

        let bytes = serialize(&store).unwrap();
        assert_eq!(bytes.len(), encoded_size(&store));
        // count + ("Buy milk": 4+8+1) + ("": 4+0+1)
        assert_eq!(bytes.len(), 4 + 13 + 5);
    }

    #[test]
    fn tombstones_are_skipped_entirely() {
        let mut store = RecordStore::default();
        store.insert(name("a"), false);
        store.insert(name("gone"), true);
        store.insert(name("b"), true);
        store.remove(1).unwrap();

        let bytes = serialize(&store).unwrap();
        assert_eq!(&bytes[0..4], &2i32.to_le_bytes());
        assert!(
            !bytes.windows(4).any(|w| w == b"gone"),
            "removed record must not appear in the stream"
        );
    }
}
