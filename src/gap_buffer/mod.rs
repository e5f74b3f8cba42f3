//! This module exports the [`GapBuffer`] struct together with the iterator
//! over its contents.
//!
//! The buffer itself lives in `buffer`, the search routines in `search`,
//! and the bookkeeping types and shared helpers in the remaining
//! submodules.

mod buffer;
mod gap;
mod iterators;
mod search;
mod utils;

pub use buffer::GapBuffer;
pub use iterators::Bytes;
