// ─── Errors ─────────────────────────────────────────────────────────────────
use thiserror::Error;

/// Text buffer capacity violations. Recoverable; the buffer is left exactly
/// as it was before the failing call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("text of {len} bytes exceeds the {max}-byte limit")]
    TextTooLong { len: usize, max: usize },
    #[error("buffer full ({max}-byte limit)")]
    BufferFull { max: usize },
}

/// Caller misuse of the record store. The store is unchanged on failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("index {index} out of range for store of length {length}")]
    IndexOutOfRange { index: usize, length: usize },
    #[error("slot {index} is already inactive")]
    AlreadyInactive { index: usize },
}

/// Save/load failures at the codec boundary.
///
/// On load these are isolated per file; the caller may fall back to an empty
/// store. On save they are fatal for that attempt and nothing durable is
/// touched.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Size accounting mismatch while encoding. Always an internal bug.
    #[error("encoding invariant violated: expected {expected} bytes, wrote {written}")]
    CodecInvariantViolation { expected: usize, written: usize },
    #[error("stream truncated: needed {needed} more bytes, {remaining} remain")]
    TruncatedStream { needed: usize, remaining: usize },
    #[error("negative length field: {value}")]
    NegativeLength { value: i32 },
    #[error("record name is not valid UTF-8")]
    InvalidName(#[from] std::str::Utf8Error),
    #[error(transparent)]
    Text(#[from] TextError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
