//! seam is an implementation of a [gap buffer]: a mutable byte sequence
//! backed by a single growable array whose spare capacity, the *gap*, sits
//! in the middle of the allocation instead of at the end.
//!
//! Keeping the gap at the point where edits happen makes consecutive
//! insertions and deletions at that point O(1), which is the access pattern
//! of a text editor's active cursor. Moving the edit point costs a single
//! `memmove` proportional to the distance moved, and only when the next
//! mutation actually happens: browsing the buffer is free.
//!
//! # Example
//!
//! ```
//! # use seam::GapBuffer;
//! let mut buffer = GapBuffer::new(10, 6);
//!
//! buffer.insert_str("Hello world");
//!
//! buffer.move_cursor_to(5);
//! buffer.insert(b',');
//!
//! buffer.move_cursor_to(buffer.len());
//! buffer.insert(b'!');
//!
//! assert_eq!("Hello, world!", buffer);
//! assert_eq!(Some(7), buffer.find("world"));
//! ```
//!
//! [gap buffer]: https://en.wikipedia.org/wiki/Gap_buffer

mod gap_buffer;

pub use gap_buffer::{Bytes, GapBuffer};
