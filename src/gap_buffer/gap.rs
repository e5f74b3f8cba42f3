/// The contiguous unused region inside a
/// [`GapBuffer`](super::GapBuffer)'s backing array.
///
/// The bytes in `[begin, begin + len)` of the backing array are garbage and
/// must never be read. Everything before `begin` and everything between
/// `begin + len` and the end of the content is valid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) struct Gap {
    /// Physical offset of the first byte of the gap.
    pub(super) begin: usize,

    /// Number of unused bytes in the gap.
    pub(super) len: usize,
}

impl Gap {
    /// Physical offset of the first valid byte after the gap.
    #[inline]
    pub(super) fn end(&self) -> usize {
        self.begin + self.len
    }
}
