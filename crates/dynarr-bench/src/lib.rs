//! Benchmark fixtures for the dynarr container.
//!
//! Provides pre-built arrays so the benches measure the operation under
//! test rather than setup cost.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr::DynArray;

/// Build an array of `n` sequential values via repeated `push`, so the
/// backing buffer has gone through the full doubling schedule.
pub fn grown_array(n: usize) -> DynArray<u64> {
    let mut array = DynArray::new();
    for i in 0..n {
        array.push(i as u64);
    }
    array
}

/// Build an array of `n` sequential values at exact capacity
/// (`len() == capacity() == n`), as a literal-sequence construction would.
pub fn exact_array(n: usize) -> DynArray<u64> {
    (0..n as u64).collect()
}
