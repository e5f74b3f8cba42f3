//! Iterators over the contents of [`GapBuffer`]s.

use core::iter::FusedIterator;
use core::slice;

use super::GapBuffer;

impl GapBuffer {
    /// Returns an iterator over the logical bytes of the buffer.
    ///
    /// The iterator chains the two physical segments, so it never yields
    /// the bytes covered by the gap.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seam::GapBuffer;
    /// let mut buffer = GapBuffer::from("bc");
    /// buffer.move_cursor_to(0);
    /// buffer.insert(b'a');
    ///
    /// assert!(buffer.bytes().eq(*b"abc"));
    /// ```
    #[inline]
    pub fn bytes(&self) -> Bytes<'_> {
        Bytes {
            chunks: self
                .left_chunk()
                .iter()
                .chain(self.right_chunk().iter()),
        }
    }
}

/// An iterator over the bytes of a [`GapBuffer`], created by
/// [`bytes()`](GapBuffer::bytes).
#[derive(Clone)]
pub struct Bytes<'a> {
    chunks: core::iter::Chain<slice::Iter<'a, u8>, slice::Iter<'a, u8>>,
}

impl Iterator for Bytes<'_> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        self.chunks.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl DoubleEndedIterator for Bytes<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<u8> {
        self.chunks.next_back().copied()
    }
}

impl FusedIterator for Bytes<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_cross_the_gap() {
        let mut buffer = GapBuffer::from("hello world");
        buffer.move_cursor_to(5);
        buffer.insert(b',');

        let collected = buffer.bytes().collect::<Vec<_>>();
        assert_eq!(b"hello, world", &collected[..]);

        let reversed = buffer.bytes().rev().collect::<Vec<_>>();
        assert_eq!(b"dlrow ,olleh", &reversed[..]);
    }
}
