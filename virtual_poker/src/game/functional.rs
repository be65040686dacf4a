//! Free functions over card sequences.

use rand::Rng;

/// Return a uniformly random permutation of `items` without touching the
/// input.
///
/// Fisher-Yates: walk from the last index down to index 1 and swap each
/// element with one picked uniformly from `[0, i]`.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
