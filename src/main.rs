//! Ad-hoc latency comparison of the three layouts over random datasets.
//!
//! Builds each structure from the same random entries, then replays one
//! stream of random queries (roughly half hits, half misses) against each
//! of them and reports mean nanoseconds per lookup. Pin the process to an
//! isolated core and build with `--release` for numbers worth reading.

use arraylayout::{EytzingerMap, Key, SortedMap, VebMap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Instant;

const LOOKUPS: usize = 1_000_000;

struct Workload {
    entries: Vec<(Key, u64)>,
    queries: Vec<Key>,
}

impl Workload {
    /// Entry keys are even numbers below `2 * size` and queries are drawn
    /// uniformly from the whole range, which lands close to 50% hits.
    fn new(size: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let span = 2 * size as Key;
        let entries = (0..size)
            .map(|i| (rng.gen_range(0..span / 2) * 2, i as u64))
            .collect();
        let queries = (0..LOOKUPS).map(|_| rng.gen_range(0..span)).collect();
        Workload { entries, queries }
    }
}

fn measure(queries: &[Key], mut lookup: impl FnMut(Key) -> bool) -> f64 {
    let mut hits = 0usize;
    let start = Instant::now();
    for &q in queries {
        hits += usize::from(lookup(q));
    }
    let elapsed = start.elapsed();
    black_box(hits);
    elapsed.as_nanos() as f64 / queries.len() as f64
}

fn main() {
    println!(
        "{:16} {:>10} {:>14} {:>14} {:>14}",
        "keys", "distinct", "sorted ns", "eytzinger ns", "veb ns"
    );

    for size in [1_000, 10_000, 100_000, 1_000_000, 10_000_000] {
        let Workload { entries, queries } = Workload::new(size);

        let sorted = SortedMap::from_entries(entries.clone());
        let eytzinger = EytzingerMap::from_entries(entries.clone());
        let veb = VebMap::from_entries(entries).expect("size fits u32 slots");

        let a = measure(&queries, |q| sorted.find(q).is_some());
        let b = measure(&queries, |q| eytzinger.find(q).is_some());
        let c = measure(&queries, |q| veb.find(q).is_some());

        println!(
            "{:16} {:>10} {:>14.1} {:>14.1} {:>14.1}",
            size,
            sorted.len(),
            a,
            b,
            c
        );
    }
}
