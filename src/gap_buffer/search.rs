//! Substring and byte search over a [`GapBuffer`].
//!
//! The gap splits the logical byte stream into two physical segments.
//! [`find()`](GapBuffer::find) searches each segment contiguously and only
//! falls back to reading through the logical mapping for the handful of
//! candidate positions where a match could straddle the boundary;
//! [`find_from()`](GapBuffer::find_from) trades that for a simpler scan
//! that reads every window through the mapping.

use super::GapBuffer;

impl GapBuffer {
    /// Returns the logical position of the first occurrence of `needle`,
    /// or `None` if the buffer doesn't contain it.
    ///
    /// An empty needle matches at position 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seam::GapBuffer;
    /// let buffer = GapBuffer::from("hello world says c++");
    /// assert_eq!(Some(6), buffer.find("world"));
    /// assert_eq!(None, buffer.find("mars"));
    /// ```
    #[inline]
    pub fn find(&self, needle: &str) -> Option<usize> {
        let needle = needle.as_bytes();

        if needle.is_empty() {
            return Some(0);
        }
        if needle.len() > self.len() {
            return None;
        }

        // A match wholly inside the pre-gap segment starts before any match
        // that straddles the boundary, which in turn starts before any match
        // wholly inside the post-gap segment, so searching in this order
        // returns the first occurrence.

        if let Some(pos) = find_in(self.left_chunk(), needle) {
            return Some(pos);
        }

        // A straddling match starts within `needle.len() - 1` positions of
        // the gap; those windows are compared through the logical mapping so
        // they transparently read across the gap.
        let gap_begin = self.gap_begin();
        let window_start = gap_begin.saturating_sub(needle.len() - 1);

        for start in window_start..gap_begin {
            if start + needle.len() > self.len() {
                break;
            }
            if self.matches_at(start, needle) {
                return Some(start);
            }
        }

        find_in(self.right_chunk(), needle).map(|pos| pos + gap_begin)
    }

    /// Returns the logical position of the first occurrence of `byte` at or
    /// after the logical position `start`, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seam::GapBuffer;
    /// let buffer = GapBuffer::from("foo\nbar\n");
    /// assert_eq!(Some(3), buffer.find_byte_from(b'\n', 0));
    /// assert_eq!(Some(7), buffer.find_byte_from(b'\n', 4));
    /// assert_eq!(None, buffer.find_byte_from(b'\n', 8));
    /// ```
    #[inline]
    pub fn find_byte_from(&self, byte: u8, start: usize) -> Option<usize> {
        (start..self.len()).find(|&pos| self.byte(pos) == byte)
    }

    /// Returns the logical position of the first occurrence of `needle` at
    /// or after the logical position `start`, or `None` if there is none.
    ///
    /// Every window is compared through the logical mapping, so no
    /// boundary-crossing special cases are needed. An empty needle matches
    /// at `start` itself, as long as that's a valid position.
    ///
    /// This always agrees with [`find()`](Self::find):
    /// `buffer.find_from(needle, 0) == buffer.find(needle)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seam::GapBuffer;
    /// let buffer = GapBuffer::from("hello world says c++");
    /// assert_eq!(Some(6), buffer.find_from("world", 0));
    /// assert_eq!(Some(6), buffer.find_from("world", 6));
    /// assert_eq!(None, buffer.find_from("world", 7));
    /// ```
    #[inline]
    pub fn find_from(&self, needle: &str, start: usize) -> Option<usize> {
        let needle = needle.as_bytes();

        let last_start = self.len().checked_sub(needle.len())?;

        (start..=last_start).find(|&pos| self.matches_at(pos, needle))
    }

    /// Whether the window of logical positions `[start, start + len)`
    /// matches the needle, reading through the logical mapping.
    #[inline]
    fn matches_at(&self, start: usize, needle: &[u8]) -> bool {
        debug_assert!(start + needle.len() <= self.len());

        needle
            .iter()
            .enumerate()
            .all(|(offset, &byte)| self.byte(start + offset) == byte)
    }
}

/// Substring search over a single contiguous physical segment.
#[inline]
fn find_in(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    debug_assert!(!needle.is_empty());

    if needle.len() > haystack.len() {
        return None;
    }

    haystack.windows(needle.len()).position(|window| window == needle)
}
