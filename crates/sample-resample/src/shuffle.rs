//! Fisher–Yates shuffling
//!
//! Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P
//! (Durstenfeld's in-place variant).

use sample_core::RandomSource;

/// Shuffle `data` in place
///
/// For `i` from the last index down to 1, swaps element `i` with a uniformly
/// chosen element in `[0, i]`, so each of the `n!` permutations is equally
/// likely. Callers that need the original order must copy first, or use
/// [`shuffled`].
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
///
/// ```rust
/// use sample_core::seeded;
/// use sample_resample::shuffle;
///
/// let mut v = vec![1, 2, 3, 4, 5];
/// shuffle(&mut v, &mut seeded(42));
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R: RandomSource + ?Sized>(data: &mut [T], rng: &mut R) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.next_index(i + 1);
        data.swap(i, j);
    }
}

/// Return a shuffled copy of `data`, leaving the input untouched
pub fn shuffled<T: Clone, R: RandomSource + ?Sized>(data: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = data.to_vec();
    shuffle(&mut copy, rng);
    copy
}

/// Random permutation of the indices `[0, n)`
pub fn shuffled_indices<R: RandomSource + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    shuffle(&mut indices, rng);
    indices
}
