use seam::GapBuffer;

mod common;

use common::{TEXT, buffer_matrix, commit_gap_at, contents};

#[test]
fn byte_is_gap_independent() {
    for mut buffer in buffer_matrix() {
        buffer.insert_str(TEXT);

        let expected = TEXT.as_bytes();

        for pos in 0..=buffer.len() {
            commit_gap_at(&mut buffer, pos);

            for (index, &byte) in expected.iter().enumerate() {
                assert_eq!(byte, buffer.byte(index));
                assert_eq!(byte, buffer[index]);
            }
        }
    }
}

#[test]
fn index_mut_edits_in_place() {
    for mut buffer in buffer_matrix() {
        buffer.insert_str("hello world!");

        for index in 0..buffer.len() {
            buffer[index] = buffer[index].to_ascii_uppercase();
        }

        assert_eq!("HELLO WORLD!", buffer);
    }
}

#[test]
fn clone_range_across_gap() {
    let mut buffer = GapBuffer::from("hello world");
    commit_gap_at(&mut buffer, 8);

    let cursor = buffer.pos();

    // Entirely before the gap.
    assert_eq!(buffer.clone_range(0, 5), b"hello");

    // Entirely after the gap.
    assert_eq!(buffer.clone_range(9, 2), b"ld");

    // Straddling the gap.
    assert_eq!(buffer.clone_range(6, 5), b"world");

    // The whole contents.
    assert_eq!(buffer.clone_range(0, buffer.len()), b"hello world");

    // Empty range.
    assert!(buffer.clone_range(3, 0).is_empty());

    // Extraction is read-only.
    assert_eq!(cursor, buffer.pos());
    assert_eq!(8, buffer.gap_begin());
    assert_eq!("hello world", buffer);
}

#[test]
fn bytes_iterator_matches_contents() {
    for mut buffer in buffer_matrix() {
        buffer.insert_str(TEXT);
        let mid = buffer.len() / 2;
        commit_gap_at(&mut buffer, mid);

        assert!(buffer.bytes().eq(TEXT.bytes()));
        assert_eq!(contents(&buffer), TEXT.as_bytes());
    }
}

#[test]
#[should_panic(expected = "Byte index out of bounds")]
fn byte_out_of_bounds() {
    let buffer = GapBuffer::from("abc");
    buffer.byte(3);
}

#[test]
#[should_panic(expected = "Byte offset out of bounds")]
fn cursor_out_of_bounds() {
    let mut buffer = GapBuffer::from("abc");
    buffer.move_cursor_to(4);
}

#[test]
#[should_panic(expected = "Byte offset out of bounds")]
fn clone_range_out_of_bounds() {
    let buffer = GapBuffer::from("abc");
    buffer.clone_range(2, 2);
}

#[test]
#[should_panic(expected = "Gap length out of bounds")]
fn zero_gap_rejected() {
    let _ = GapBuffer::new(8, 0);
}

#[test]
#[should_panic(expected = "Gap length out of bounds")]
fn gap_larger_than_capacity_rejected() {
    let _ = GapBuffer::new(8, 16);
}
