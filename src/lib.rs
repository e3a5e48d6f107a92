//! Static, read-only key-value lookup structures for the regime where the
//! key set outgrows L2 cache but fits in RAM.
//!
//! Given many random lookups against the same large set of 64-bit keys,
//! per-lookup latency is dominated by how well the CPU's memory subsystem
//! can be kept busy with useful fetches. This crate provides three layouts
//! of the same map, co-designed around that constraint, in the spirit of
//! [Array Layouts for Comparison-Based
//! Searching](https://arxiv.org/abs/1509.05053) by Paul-Virak Khuong and
//! Pat Morin and the authors' [C++ implementation
//! repository](https://github.com/patmorin/arraylayout):
//!
//! * [`SortedMap`]: plain sorted arrays with lower-bound binary search.
//!   The baseline and the correctness oracle.
//! * [`EytzingerMap`]: the tree stored implicitly in BFS order, searched
//!   with a branch-free descent whose next address is plain arithmetic, so
//!   prefetches pipeline across levels. The production choice.
//! * [`VebMap`]: the cache-oblivious van Emde Boas blocking with explicit
//!   child indices. Spatially ideal, yet slower than Eytzinger here
//!   because its prefetch addresses depend on in-flight loads; kept as the
//!   instructive counter-example.
//!
//! # Performance
//!
//! Measured on an isolated Sapphire Rapids core over 10 million random
//! 64-bit keys, random queries:
//!
//! | layout      | ns/lookup |
//! |-------------|-----------|
//! | `SortedMap` | ~322      |
//! | `EytzingerMap` | ~65    |
//! | `VebMap`    | ~97       |
//!
//! Top-down microarchitecture analysis attributes the vEB gap to its
//! dependent-load prefetch chain and to the roughly doubled working set
//! from storing explicit child indices.
//!
//! # Contract
//!
//! All three structures are built once from a `Vec` of `(Key, value)`
//! entries and are immutable afterwards. Lookups allocate nothing, take no
//! locks, and return a reference borrowed from the structure. Duplicate
//! keys are resolved at build time in favor of the entry that appeared
//! first in the input, identically across the family.
//!
//! # Examples
//!
//! ```
//! use arraylayout::EytzingerMap;
//!
//! let m = EytzingerMap::from_entries(vec![(42, "a"), (7, "b"), (19, "c")]);
//! assert_eq!(m.find(7), Some(&"b"));
//! assert_eq!(m.find(19), Some(&"c"));
//! assert_eq!(m.find(20), None);
//! ```
#![deny(missing_docs)]

use thiserror::Error;

mod build;
mod eytzinger;
mod sorted;
mod veb;

pub use eytzinger::EytzingerMap;
pub use sorted::SortedMap;
pub use veb::VebMap;

/// Key type shared by every layout.
pub type Key = i64;

/// Error returned when a structure cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The van Emde Boas layout addresses tree slots with 32-bit indices;
    /// a build whose node count does not fit that space is refused and no
    /// structure is constructed. The other layouts have no such limit.
    #[error("{nodes} tree nodes exceed the 32-bit slot index space")]
    CapacityExceeded {
        /// Requested node count, entries plus the null sentinel.
        nodes: u64,
    },
}

/// Hint the memory subsystem to pull the cache line holding `addr`.
///
/// The pointer is never dereferenced, so callers may form addresses past
/// their allocation with `wrapping_add`. Compiles to nothing off x86-64.
#[inline(always)]
pub(crate) fn do_prefetch<T>(addr: *const T) {
    #[cfg(target_arch = "x86_64")]
    // the instruction never faults, whatever the address
    unsafe {
        use std::arch::x86_64::{_mm_prefetch, _MM_HINT_T0};
        _mm_prefetch::<_MM_HINT_T0>(addr as *const i8);
    }
    #[cfg(not(target_arch = "x86_64"))]
    let _ = addr;
}

/// Calculates the prefetch mask for a given collection size.
///
/// Creates a binary mask that fully covers the given [`usize`] value (eg.
/// for the value `0b100` the mask is `0b111`). The mask keeps a prefetch
/// address within a factor of two of the array even many levels below the
/// current node: it is totally valid to prefetch invalid addresses from
/// the x86 point of view, but on some CPUs far-out addresses cost real
/// cycles, so the hint is kept near the allocation instead.
pub(crate) fn prefetch_mask(n: usize) -> usize {
    if n > 0 {
        usize::MAX >> n.leading_zeros()
    } else {
        0
    }
}
