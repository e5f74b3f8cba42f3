use seam::GapBuffer;

mod common;

use common::{buffer_matrix, commit_gap_at};

const CONTENT: &str = "hello world says c++";

/// A needle must be found no matter where the gap sits, including at every
/// position where the needle straddles the gap boundary.
#[test]
fn needle_found_at_every_gap_position() {
    for needle in ["hello", "world", "ll", "l", "c++"] {
        let expected = CONTENT.find(needle);

        for mut buffer in buffer_matrix() {
            buffer.insert_str(CONTENT);

            for pos in 0..=buffer.len() {
                commit_gap_at(&mut buffer, pos);

                assert_eq!(
                    expected,
                    buffer.find(needle),
                    "needle {needle:?} with the gap at {pos}",
                );

                assert_eq!(expected, buffer.find_from(needle, 0));
            }
        }
    }
}

#[test]
fn world_found_at_six_regardless_of_gap() {
    for mut buffer in buffer_matrix() {
        buffer.insert_str(CONTENT);

        for pos in 0..=buffer.len() {
            commit_gap_at(&mut buffer, pos);
            assert_eq!(Some(6), buffer.find("world"));
        }
    }
}

#[test]
fn find_from_never_returns_before_start() {
    for needle in ["hello", "world", "ll", "l"] {
        let buffer = GapBuffer::from(CONTENT);
        let first = buffer.find(needle).unwrap();

        for start in 0..=buffer.len() {
            let found = buffer.find_from(needle, start);

            let expected =
                CONTENT[start..].find(needle).map(|pos| pos + start);

            assert_eq!(expected, found);

            if let Some(pos) = found {
                assert!(pos >= start);
            }

            if start <= first {
                assert_eq!(Some(first), found);
            }
        }
    }
}

#[test]
fn find_from_agrees_across_gap_positions() {
    let mut buffer = GapBuffer::from(CONTENT);

    for pos in 0..=buffer.len() {
        commit_gap_at(&mut buffer, pos);

        for start in 0..=buffer.len() {
            let expected = CONTENT[start..].find("l").map(|pos| pos + start);
            assert_eq!(expected, buffer.find_from("l", start));
        }
    }
}

#[test]
fn find_byte_from_matches_substring_search() {
    let mut buffer = GapBuffer::from(CONTENT);

    for pos in 0..=buffer.len() {
        commit_gap_at(&mut buffer, pos);

        for start in 0..=buffer.len() {
            assert_eq!(
                buffer.find_from("l", start),
                buffer.find_byte_from(b'l', start),
            );
        }
    }
}

#[test]
fn missing_needle_is_a_miss_not_an_error() {
    let buffer = GapBuffer::from(CONTENT);

    assert_eq!(None, buffer.find("mars"));
    assert_eq!(None, buffer.find_from("mars", 0));
    assert_eq!(None, buffer.find_byte_from(b'z', 0));

    // Longer than the whole buffer.
    assert_eq!(None, buffer.find(&CONTENT.repeat(2)));
}
