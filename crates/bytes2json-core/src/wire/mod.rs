//! Wire-level decoding.
//!
//! The layering follows the usual split:
//! - `layout`: byte widths of every primitive (source of truth)
//! - `cursor`: bounds-checked primitive reads over a borrowed buffer
//! - `reader`: presence-flag and count conventions
//! - `error`: explicit, actionable errors
//!
//! Every read fails with `BufferUnderrun` when the buffer is too short;
//! nothing here substitutes a default value for missing bytes.

pub mod cursor;
pub mod error;
pub mod layout;
pub mod reader;

pub use cursor::Cursor;
pub use error::WireError;
pub use reader::{read_count, read_presence};
