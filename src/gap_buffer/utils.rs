//! Helpers shared between the buffer, its search routines and its `Debug`
//! implementation.

use core::fmt;

/// Returns the number of line feeds (0x0A) in the given bytes.
#[inline]
pub(super) fn count_newlines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&byte| byte == b'\n').count()
}

/// Writes the bytes to the formatter in their ASCII-escaped form, without
/// enclosing the output in double quotes.
#[inline]
pub(super) fn debug_bytes(
    bytes: &[u8],
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    for byte in bytes {
        write!(f, "{}", byte.escape_ascii())?;
    }
    Ok(())
}

pub(super) mod panic_messages {
    #[inline]
    pub(crate) fn byte_index_out_of_bounds(
        byte_index: usize,
        byte_len: usize,
    ) -> ! {
        debug_assert!(byte_index >= byte_len);

        panic!(
            "Byte index out of bounds: the index is {byte_index} but the \
             length is {byte_len}"
        );
    }

    #[inline]
    pub(crate) fn byte_offset_out_of_bounds(
        byte_offset: usize,
        byte_len: usize,
    ) -> ! {
        debug_assert!(byte_offset > byte_len);

        panic!(
            "Byte offset out of bounds: the offset is {byte_offset} but the \
             length is {byte_len}"
        );
    }

    #[inline]
    pub(crate) fn gap_len_out_of_bounds(
        gap_len: usize,
        capacity: usize,
    ) -> ! {
        debug_assert!(gap_len == 0 || gap_len > capacity);

        panic!(
            "Gap length out of bounds: the gap length is {gap_len} but the \
             capacity is {capacity} (the gap must be at least 1 byte and at \
             most the capacity)"
        );
    }
}
