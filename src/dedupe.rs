//! Order-preserving deduplication and the stride merge of two collections.

use itertools::Itertools;
use std::hash::Hash;
use std::num::NonZeroUsize;

/// Keep the first record of every distinct key, in the original order.
pub fn dedupe<T, K, F>(records: Vec<T>, key_fn: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    records.into_iter().unique_by(key_fn).collect()
}

/// All of `first`, then every `stride`-th element of `second` starting at index 0.
pub fn stride_merge<T>(first: Vec<T>, second: Vec<T>, stride: NonZeroUsize) -> Vec<T> {
    first
        .into_iter()
        .chain(second.into_iter().step_by(stride.get()))
        .collect()
}
