use core::fmt;
use core::ops::{Index, IndexMut};

use super::gap::Gap;
use super::utils::{self, panic_messages as panic};

/// A growable [gap buffer] over bytes.
///
/// Unlike a regular `Vec<u8>` where the spare capacity is stored at the end
/// of the allocation, a `GapBuffer` stores it in the middle, at the position
/// where the next edit is going to happen. This makes consecutive insertions
/// and deletions at the same cursor position O(1) in the size of the buffer,
/// where a `Vec<u8>` would have to shift everything after the edit point on
/// every call.
///
/// The buffer keeps two positions: the *logical cursor*, which the various
/// `move_cursor_*` methods update in O(1) without touching the contents, and
/// the physical position of the gap, which catches up with the cursor only
/// when a mutation actually happens. Reading never depends on where the gap
/// is: logical position `p` maps to physical offset `p` before the gap and
/// `p + gap_len` after it.
///
/// [gap buffer]: https://en.wikipedia.org/wiki/Gap_buffer
#[derive(Clone)]
pub struct GapBuffer {
    /// The backing array. Only the bytes outside of `gap`'s physical range
    /// and before `len + gap.len` hold valid content.
    pub(super) bytes: Box<[u8]>,

    /// Number of valid content bytes.
    pub(super) len: usize,

    pub(super) gap: Gap,

    /// The logical position edits happen at. Decoupled from `gap.begin`
    /// until a mutation commits the gap to it.
    pub(super) cursor: usize,

    /// The length the gap is reopened to whenever it runs out.
    pub(super) gap_reserve: usize,
}

impl GapBuffer {
    /// The gap length used by [`with_capacity()`](Self::with_capacity) and
    /// [`From<&str>`](Self::from).
    pub const DEFAULT_GAP_LEN: usize = 16;

    /// Asserts the relational invariants between the buffer's fields.
    ///
    /// This is mainly useful in tests and when debugging.
    pub fn assert_invariants(&self) {
        assert!(self.len + self.gap.len <= self.capacity());
        assert!(self.gap.begin <= self.len);
        assert!(self.cursor <= self.len);
    }

    /// Returns the byte at the given logical index.
    ///
    /// This is O(1): the index is translated to a physical offset without
    /// any content being moved.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds, i.e. greater than or equal to
    /// [`len()`](Self::len).
    ///
    /// # Examples
    ///
    /// ```
    /// # use seam::GapBuffer;
    /// let mut buffer = GapBuffer::from("bar");
    /// buffer.move_cursor_to(1);
    /// buffer.insert(b'a');
    ///
    /// assert_eq!(b'a', buffer.byte(1));
    /// assert_eq!(b'a', buffer.byte(2));
    /// assert_eq!(b'r', buffer.byte(3));
    /// ```
    #[track_caller]
    #[inline]
    pub fn byte(&self, byte_index: usize) -> u8 {
        if byte_index >= self.len {
            panic::byte_index_out_of_bounds(byte_index, self.len);
        }
        self.bytes[self.physical_index(byte_index)]
    }

    /// Returns the byte at the cursor, or `None` if the cursor sits at the
    /// end of the content.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seam::GapBuffer;
    /// let mut buffer = GapBuffer::from("ab");
    ///
    /// buffer.move_cursor_to(1);
    /// assert_eq!(Some(b'b'), buffer.byte_at_cursor());
    ///
    /// buffer.move_cursor_to(2);
    /// assert_eq!(None, buffer.byte_at_cursor());
    /// ```
    #[inline]
    pub fn byte_at_cursor(&self) -> Option<u8> {
        (self.cursor < self.len).then(|| self.byte(self.cursor))
    }

    /// Returns a mutable reference to the byte at the given logical index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[track_caller]
    #[inline]
    pub fn byte_mut(&mut self, byte_index: usize) -> &mut u8 {
        if byte_index >= self.len {
            panic::byte_index_out_of_bounds(byte_index, self.len);
        }
        let physical_index = self.physical_index(byte_index);
        &mut self.bytes[physical_index]
    }

    /// The total number of bytes in the backing array, including the ones
    /// covered by the gap.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Resets the buffer to being empty.
    ///
    /// The backing array is not released: the gap is simply restored to
    /// span the full capacity, so subsequent insertions behave as on a
    /// freshly created buffer of the same capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seam::GapBuffer;
    /// let mut buffer = GapBuffer::from("hello");
    /// let capacity = buffer.capacity();
    ///
    /// buffer.clear();
    ///
    /// assert_eq!(0, buffer.len());
    /// assert_eq!(capacity, buffer.capacity());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
        self.cursor = 0;
        self.gap = Gap { begin: 0, len: self.capacity() };
    }

    /// Returns an owned copy of the `len` bytes starting at the logical
    /// position `start`.
    ///
    /// Neither the contents nor the cursor are affected. If the requested
    /// range lies entirely within one physical segment the copy is a single
    /// contiguous `memcpy`; a range that straddles the gap is walked one
    /// logical index at a time.
    ///
    /// # Panics
    ///
    /// Panics if the end of the range is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seam::GapBuffer;
    /// let buffer = GapBuffer::from("hello world");
    /// assert_eq!(buffer.clone_range(6, 5), b"world");
    /// ```
    #[track_caller]
    #[inline]
    pub fn clone_range(&self, start: usize, len: usize) -> Vec<u8> {
        let end = start + len;

        if end > self.len {
            panic::byte_offset_out_of_bounds(end, self.len);
        }

        // Every logical position at or after `gap.begin` is shifted by the
        // same amount, so a range is physically contiguous unless it crosses
        // `gap.begin`.
        if end <= self.gap.begin || start >= self.gap.begin {
            let physical_start = self.physical_index(start);
            self.bytes[physical_start..physical_start + len].to_vec()
        } else {
            (start..end).map(|position| self.byte(position)).collect()
        }
    }

    /// The column the cursor is on, i.e. the number of bytes between the
    /// cursor and the previous line feed (or the start of the buffer).
    ///
    /// Like [`line()`](Self::line), this is derived from the contents on
    /// every call.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seam::GapBuffer;
    /// let mut buffer = GapBuffer::from("foo\nbar");
    ///
    /// buffer.move_cursor_to(6);
    /// assert_eq!(1, buffer.line());
    /// assert_eq!(2, buffer.col());
    ///
    /// buffer.move_cursor_to(3);
    /// assert_eq!(0, buffer.line());
    /// assert_eq!(3, buffer.col());
    /// ```
    #[inline]
    pub fn col(&self) -> usize {
        (0..self.cursor)
            .rev()
            .find(|&position| self.byte(position) == b'\n')
            .map(|newline| self.cursor - newline - 1)
            .unwrap_or(self.cursor)
    }

    /// Commits the gap to the logical cursor's position.
    ///
    /// Every mutating operation starts with this: the cursor moves freely
    /// and cheaply while the caller is only navigating, and the physical
    /// shuffle is deferred until an actual edit is made.
    #[inline]
    pub(super) fn commit(&mut self) {
        self.move_gap_to(self.cursor);
        debug_assert_eq!(self.gap.begin, self.cursor);
    }

    /// Removes up to `count` bytes before the cursor, as if the user pressed
    /// backspace. If fewer than `count` bytes precede the cursor the
    /// deletion clamps at the start of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seam::GapBuffer;
    /// let mut buffer = GapBuffer::from("hello world");
    ///
    /// buffer.move_cursor_to(5);
    /// buffer.erase_backward(usize::MAX);
    ///
    /// assert_eq!(" world", buffer);
    /// assert_eq!(0, buffer.pos());
    /// ```
    #[inline]
    pub fn erase_backward(&mut self, count: usize) {
        self.commit();

        let removed = count.min(self.gap.begin);

        self.cursor -= removed;
        self.gap.begin -= removed;
        self.gap.len += removed;
        self.len -= removed;

        debug_assert_eq!(self.gap.begin, self.cursor);
    }

    /// Removes up to `count` bytes after the cursor, as if the user pressed
    /// delete. If fewer than `count` bytes follow the cursor the deletion
    /// clamps at the end of the buffer.
    ///
    /// The cursor doesn't move.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seam::GapBuffer;
    /// let mut buffer = GapBuffer::from("hello world");
    ///
    /// buffer.move_cursor_to(5);
    /// buffer.erase_forward(6);
    ///
    /// assert_eq!("hello", buffer);
    /// ```
    #[inline]
    pub fn erase_forward(&mut self, count: usize) {
        self.commit();

        let removed = count.min(self.len - self.gap.begin);

        self.gap.len += removed;
        self.len -= removed;

        debug_assert_eq!(self.gap.begin, self.cursor);
    }

    /// Position of the gap in the backing array.
    ///
    /// Mainly useful for diagnostics; reading the buffer never requires
    /// knowing where the gap is.
    #[inline]
    pub fn gap_begin(&self) -> usize {
        self.gap.begin
    }

    /// Current length of the gap, i.e. how many bytes can be inserted at
    /// the gap's position before it has to be reopened.
    #[inline]
    pub fn gap_len(&self) -> usize {
        self.gap.len
    }

    /// Reallocates the backing array to `new_capacity` bytes, copying the
    /// old array into the head of the new one so that both content and gap
    /// keep their physical positions.
    #[inline]
    fn grow(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity > self.capacity());

        let mut grown = vec![0u8; new_capacity].into_boxed_slice();
        grown[..self.bytes.len()].copy_from_slice(&self.bytes);
        self.bytes = grown;
    }

    /// Inserts a byte at the cursor, advancing the cursor past it.
    ///
    /// This is amortized O(1) when the cursor doesn't move between
    /// insertions: the byte is written into the gap, and the occasional
    /// capacity doubling or gap reopening spreads its cost over the
    /// insertions that preceded it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seam::GapBuffer;
    /// let mut buffer = GapBuffer::from("ac");
    ///
    /// buffer.move_cursor_to(1);
    /// buffer.insert(b'b');
    ///
    /// assert_eq!("abc", buffer);
    /// assert_eq!(2, buffer.pos());
    /// ```
    #[inline]
    pub fn insert(&mut self, byte: u8) {
        self.commit();

        if self.len == self.capacity() {
            self.grow(self.capacity() * 2);
        }
        if self.gap.len == 0 {
            self.reopen_gap(self.gap_reserve);
        }

        self.bytes[self.gap.begin] = byte;

        self.cursor += 1;
        self.gap.begin += 1;
        self.gap.len -= 1;
        self.len += 1;

        debug_assert_eq!(self.gap.begin, self.cursor);
    }

    /// Inserts a string at the cursor, advancing the cursor past it.
    ///
    /// When the string fits within the current gap this is a single bulk
    /// copy. A longer string falls back to the byte-at-a-time path, growing
    /// the gap as it goes; each byte is still amortized O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// # use seam::GapBuffer;
    /// let mut buffer = GapBuffer::from("world!");
    ///
    /// buffer.move_cursor_to(0);
    /// buffer.insert_str("Hello ");
    ///
    /// assert_eq!("Hello world!", buffer);
    /// ```
    #[inline]
    pub fn insert_str(&mut self, s: &str) {
        self.commit();

        let insert_len = s.len();

        if insert_len + self.len >= self.capacity() {
            self.grow((insert_len + self.capacity()) * 2);
        }

        if insert_len < self.gap.len {
            let insert_range = {
                let start = self.gap.begin;
                start..start + insert_len
            };

            self.bytes[insert_range].copy_from_slice(s.as_bytes());

            self.cursor += insert_len;
            self.gap.begin += insert_len;
            self.gap.len -= insert_len;
            self.len += insert_len;
        } else {
            for &byte in s.as_bytes() {
                self.insert(byte);
            }
        }

        debug_assert_eq!(self.gap.begin, self.cursor);
    }

    /// Returns `true` if the buffer contains no content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The contents before the gap, i.e. the logical positions
    /// `0..gap_begin`.
    #[inline]
    pub(super) fn left_chunk(&self) -> &[u8] {
        &self.bytes[..self.gap.begin]
    }

    /// Returns the number of content bytes in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The line the cursor is on, i.e. the number of line feeds before it.
    ///
    /// The value is derived from the contents on every call, so it stays
    /// correct across erases and backward cursor motion. The cost is linear
    /// in the cursor position.
    #[inline]
    pub fn line(&self) -> usize {
        let split = self.cursor.min(self.gap.begin);

        let mut newlines = utils::count_newlines(&self.bytes[..split]);

        if self.cursor > self.gap.begin {
            let end = self.cursor + self.gap.len;
            newlines +=
                utils::count_newlines(&self.bytes[self.gap.end()..end]);
        }

        newlines
    }

    /// Moves the cursor `steps` bytes toward the start of the buffer,
    /// clamping at position 0.
    ///
    /// Like all cursor motion this is O(1) and doesn't touch the contents.
    #[inline]
    pub fn move_cursor_backward(&mut self, steps: usize) {
        self.cursor = self.cursor.saturating_sub(steps);
    }

    /// Moves the cursor `steps` bytes toward the end of the buffer,
    /// clamping at [`len()`](Self::len).
    #[inline]
    pub fn move_cursor_forward(&mut self, steps: usize) {
        self.cursor = self.cursor.saturating_add(steps).min(self.len);
    }

    /// Moves the cursor to the given logical position.
    ///
    /// The gap doesn't move until the next mutation.
    ///
    /// # Panics
    ///
    /// Panics if the position is greater than [`len()`](Self::len).
    #[track_caller]
    #[inline]
    pub fn move_cursor_to(&mut self, pos: usize) {
        if pos > self.len {
            panic::byte_offset_out_of_bounds(pos, self.len);
        }
        self.cursor = pos;
    }

    /// Moves the gap to the given logical position.
    ///
    /// The bytes between the gap and the target slide across it with a
    /// single overlap-safe move, after which logical position `to` is the
    /// first byte of the gap.
    #[inline]
    fn move_gap_to(&mut self, to: usize) {
        debug_assert!(to <= self.len);

        // The target lies after the gap => the bytes logically in
        // `[gap.begin, to)` sit just past the gap's far edge and slide left
        // onto it.
        //
        // aaa~~~bb|cc => aaabb~~~cc
        if to > self.gap.begin {
            let src = self.gap.end()..to + self.gap.len;
            self.bytes.copy_within(src, self.gap.begin);
            self.gap.begin = to;
        }
        // The target lies before the gap => the bytes in `[to, gap.begin)`
        // slide right past it.
        //
        // aa|bb~~~cc => aa~~~bbcc
        else if to < self.gap.begin {
            let src = to..self.gap.begin;
            self.bytes.copy_within(src, to + self.gap.len);
            self.gap.begin = to;
        }
    }

    /// Creates an empty buffer with the given starting capacity whose gap
    /// is reopened to `gap_len` bytes whenever it runs out.
    ///
    /// # Panics
    ///
    /// Panics if `gap_len` is zero or greater than `capacity`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seam::GapBuffer;
    /// let buffer = GapBuffer::new(64, 8);
    /// assert_eq!(0, buffer.len());
    /// assert_eq!(64, buffer.capacity());
    /// ```
    #[track_caller]
    #[inline]
    pub fn new(capacity: usize, gap_len: usize) -> Self {
        if gap_len == 0 || gap_len > capacity {
            panic::gap_len_out_of_bounds(gap_len, capacity);
        }

        Self {
            bytes: vec![0u8; capacity].into_boxed_slice(),
            len: 0,
            gap: Gap { begin: 0, len: gap_len },
            cursor: 0,
            gap_reserve: gap_len,
        }
    }

    /// Translates a logical position into its physical offset in the
    /// backing array.
    ///
    /// This mapping is the single source of truth for all read access.
    #[inline]
    fn physical_index(&self, pos: usize) -> usize {
        debug_assert!(pos <= self.len);

        if pos < self.gap.begin { pos } else { pos + self.gap.len }
    }

    /// Position of the logical cursor.
    #[inline]
    pub fn pos(&self) -> usize {
        self.cursor
    }

    /// Reopens an exhausted gap to `gap_len` bytes at its current position,
    /// shifting the post-gap segment right to make room. Grows the backing
    /// array first if the new gap wouldn't fit.
    #[inline]
    fn reopen_gap(&mut self, gap_len: usize) {
        if self.len + gap_len >= self.capacity() {
            self.grow((self.capacity() + gap_len) * 2);
        }

        debug_assert!(self.len + gap_len < self.capacity());

        let src = self.gap.end()..self.len + self.gap.len;
        self.bytes.copy_within(src, self.gap.begin + gap_len);
        self.gap.len = gap_len;
    }

    /// The contents after the gap, i.e. the logical positions
    /// `gap_begin..len`.
    #[inline]
    pub(super) fn right_chunk(&self) -> &[u8] {
        &self.bytes[self.gap.end()..self.len + self.gap.len]
    }

    /// Creates an empty buffer with the given starting capacity and the
    /// default gap length.
    ///
    /// The capacity is raised to [`DEFAULT_GAP_LEN`](Self::DEFAULT_GAP_LEN)
    /// if it's smaller than that.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity.max(Self::DEFAULT_GAP_LEN), Self::DEFAULT_GAP_LEN)
    }

    /// Compares the buffer's logical contents to a byte slice.
    #[inline]
    pub(super) fn eq_bytes(&self, bytes: &[u8]) -> bool {
        self.len == bytes.len()
            && self.left_chunk() == &bytes[..self.gap.begin]
            && self.right_chunk() == &bytes[self.gap.begin..]
    }
}

impl fmt::Debug for GapBuffer {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        utils::debug_bytes(self.left_chunk(), f)?;
        write!(f, "{:~^1$}", "", self.gap.len)?;
        utils::debug_bytes(self.right_chunk(), f)?;
        f.write_str("\"")
    }
}

impl Default for GapBuffer {
    #[inline]
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_GAP_LEN)
    }
}

impl From<&str> for GapBuffer {
    #[inline]
    fn from(s: &str) -> Self {
        let mut buffer =
            Self::new(s.len() + Self::DEFAULT_GAP_LEN, Self::DEFAULT_GAP_LEN);
        buffer.insert_str(s);
        buffer
    }
}

impl Index<usize> for GapBuffer {
    type Output = u8;

    #[track_caller]
    #[inline]
    fn index(&self, byte_index: usize) -> &u8 {
        if byte_index >= self.len {
            panic::byte_index_out_of_bounds(byte_index, self.len);
        }
        &self.bytes[self.physical_index(byte_index)]
    }
}

impl IndexMut<usize> for GapBuffer {
    /// # Examples
    ///
    /// ```
    /// # use seam::GapBuffer;
    /// let mut buffer = GapBuffer::from("abc");
    /// buffer[0] = b'A';
    /// assert_eq!("Abc", buffer);
    /// ```
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, byte_index: usize) -> &mut u8 {
        self.byte_mut(byte_index)
    }
}

// We only need these to compare `GapBuffer`s with `&str`s and byte slices in
// (doc)tests.
impl PartialEq<GapBuffer> for &str {
    #[inline]
    fn eq(&self, rhs: &GapBuffer) -> bool {
        rhs.eq_bytes(self.as_bytes())
    }
}

impl PartialEq<&str> for GapBuffer {
    #[inline]
    fn eq(&self, rhs: &&str) -> bool {
        rhs == self
    }
}

impl PartialEq<GapBuffer> for &[u8] {
    #[inline]
    fn eq(&self, rhs: &GapBuffer) -> bool {
        rhs.eq_bytes(self)
    }
}

impl PartialEq<&[u8]> for GapBuffer {
    #[inline]
    fn eq(&self, rhs: &&[u8]) -> bool {
        rhs == self
    }
}
