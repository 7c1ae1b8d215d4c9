//! Record core of a small persistent todo widget.
//!
//! Keeps an in-memory list of short text records with a completion flag and
//! persists the active set to a flat binary file between runs. Three pieces:
//!
//! - [`TextBuffer`] — owned, bounded text used for input staging and for
//!   every record's name.
//! - [`RecordStore`] — growable slot array with tombstone removal and
//!   slot reuse, so indices stay stable across frames.
//! - the codec ([`serialize`]/[`save`], [`deserialize`]/[`load`]) — a fixed
//!   little-endian layout, byte-compatible with `todo.bin` files written by
//!   the original widget.
//!
//! The UI layer (windowing, input polling, drawing) lives elsewhere and talks
//! to this crate only through insert/remove/toggle, [`RecordStore::iter_active`],
//! and save/load at process boundaries.

pub mod deserialization;
pub mod error;
pub mod serialization;
pub mod store;
pub mod text;

pub use deserialization::{deserialize, load};
pub use error::{CodecError, StoreError, TextError};
pub use serialization::{DEFAULT_STORE_FILE, encoded_size, save, serialize};
pub use store::{ActiveIter, DEFAULT_CAPACITY, Record, RecordStore, Slot};
pub use text::{MAX_TEXT_LEN, TextBuffer};
