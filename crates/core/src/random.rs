//! Small draw helpers over the engine's single `ChaCha8Rng` stream.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

/// Uniform index in `0..len`. `len` must be non-zero.
pub(crate) fn random_index(rng: &mut ChaCha8Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    (rng.next_u64() % len as u64) as usize
}

pub(crate) fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> Option<T> {
    if slice.is_empty() {
        return None;
    }
    Some(slice[random_index(rng, slice.len())])
}

/// Removes and returns a uniformly chosen element.
pub(crate) fn take_random<T>(rng: &mut ChaCha8Rng, pool: &mut Vec<T>) -> Option<T> {
    if pool.is_empty() {
        return None;
    }
    let index = random_index(rng, pool.len());
    Some(pool.swap_remove(index))
}

/// Fisher-Yates, back to front.
pub(crate) fn shuffle<T>(rng: &mut ChaCha8Rng, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = random_index(rng, i + 1);
        items.swap(i, j);
    }
}
