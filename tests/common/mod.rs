#![allow(dead_code)]

use std::env;

use rand::SeedableRng;
use seam::GapBuffer;

/// A multi-line chunk of text used as a larger insertion corpus.
pub const TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing\n\
                        elit, sed do eiusmod tempor incididunt ut labore et\n\
                        dolore magna aliqua. Ut enim ad minim veniam, quis\n\
                        nostrud exercitation ullamco laboris nisi ut aliquip\n\
                        ex ea commodo consequat.\n";

/// One buffer per (gap length, starting capacity) combination, with gap
/// lengths from 2 to 32 and starting capacities up to 64.
///
/// Growth and gap-reopening behavior depends heavily on these two knobs, so
/// most tests run over the whole matrix.
pub fn buffer_matrix() -> Vec<GapBuffer> {
    let mut buffers = Vec::new();

    let mut gap_len = 2;

    while gap_len <= 32 {
        let mut capacity = gap_len;
        while capacity <= 64 {
            buffers.push(GapBuffer::new(capacity, gap_len));
            capacity *= 2;
        }
        gap_len *= 2;
    }

    buffers
}

/// Commits the gap to the given position without changing the contents.
///
/// Cursor motion alone never moves the gap, so this forces a commit with an
/// insertion that's immediately erased again.
pub fn commit_gap_at(buffer: &mut GapBuffer, pos: usize) {
    buffer.move_cursor_to(pos);
    buffer.insert(b'\0');
    buffer.erase_backward(1);
    assert_eq!(pos, buffer.gap_begin());
}

/// The buffer's full logical contents as an owned vector.
pub fn contents(buffer: &GapBuffer) -> Vec<u8> {
    buffer.clone_range(0, buffer.len())
}

#[track_caller]
pub fn rng() -> impl rand::Rng {
    let seed = seed();
    println!("SEED: {seed:?}");
    rand_chacha::ChaChaRng::seed_from_u64(seed)
}

#[track_caller]
fn seed() -> u64 {
    match env::var("SEED") {
        Ok(seed) => seed.parse().expect("couldn't parse $SEED"),
        Err(env::VarError::NotPresent) => rand::random(),
        Err(env::VarError::NotUnicode(seed)) => {
            panic!("$SEED contained invalid unicode: {seed:?}")
        },
    }
}
