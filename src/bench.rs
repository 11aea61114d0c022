//! Push/pop workloads used to compare the engine with `biheap`.

use std::fmt::Display;
use std::time::{Duration, Instant};

use biheap::core::BiHeap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::heap;
use crate::seq::Counted;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Workload {
    /// n equal elements pushed, then drained
    Dup,
    /// 0..n pushed in order, then drained
    Ordered,
    /// random pushes with an occasional pop, then drained
    Random,
    /// 0..n pushed in order, never popped
    OrderedPushOnly,
}

pub const ALL: [Workload; 4] = [
    Workload::Dup,
    Workload::Ordered,
    Workload::Random,
    Workload::OrderedPushOnly,
];

impl Display for Workload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Workload::Dup => "dup",
            Workload::Ordered => "ordered",
            Workload::Random => "random",
            Workload::OrderedPushOnly => "ordered_push_only",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug)]
pub struct Report {
    pub workload: Workload,
    pub backend: &'static str,
    pub elapsed: Duration,
    pub compares: u64,
    pub swaps: u64,
    /// wrapping sum of every popped value
    pub checksum: u64,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<18} {:<8} {:>10.3?} compares={} swaps={} checksum={}",
            self.workload.to_string(),
            self.backend,
            self.elapsed,
            self.compares,
            self.swaps,
            self.checksum
        )
    }
}

/// The two heap shapes driven by a workload.
trait Target {
    fn push(&mut self, v: u64);
    fn pop(&mut self) -> Option<u64>;
    fn len(&self) -> usize;
    fn clear(&mut self);
}

struct Engine(Counted<Vec<u64>>);

impl Target for Engine {
    fn push(&mut self, v: u64) {
        heap::push(&mut self.0, v)
    }
    fn pop(&mut self) -> Option<u64> {
        heap::pop(&mut self.0).ok()
    }
    fn len(&self) -> usize {
        self.0.get_ref().len()
    }
    fn clear(&mut self) {
        self.0.get_mut().clear()
    }
}

/// A `BiHeap` with a real allocation behind it. `BiHeap::new` starts from a
/// dangling placeholder that its first growth copies out of, so every heap
/// built here reserves at least one slot up front.
pub fn new_biheap<T: Ord>(capacity: usize) -> BiHeap<T> {
    BiHeap::with_capacity(capacity.max(1))
}

struct Bi(BiHeap<u64>, usize);

impl Target for Bi {
    fn push(&mut self, v: u64) {
        self.0.push(v);
    }
    fn pop(&mut self) -> Option<u64> {
        self.0.pop_min()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
    fn clear(&mut self) {
        self.0 = new_biheap(self.1);
    }
}

fn drain<H: Target>(h: &mut H, checksum: &mut u64) {
    while let Some(v) = h.pop() {
        *checksum = checksum.wrapping_add(v);
    }
}

fn drive<H: Target>(h: &mut H, workload: Workload, n: usize, rounds: usize, seed: u64) -> u64 {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut checksum = 0u64;
    for _ in 0..rounds {
        match workload {
            Workload::Dup => {
                for _ in 0..n {
                    h.push(0);
                }
                drain(h, &mut checksum);
            }
            Workload::Ordered => {
                for j in 0..n {
                    h.push(j as u64);
                }
                drain(h, &mut checksum);
            }
            Workload::Random => {
                for _ in 0..n {
                    if rng.gen_range(0..10) == 1 && h.len() > 0 {
                        if let Some(v) = h.pop() {
                            checksum = checksum.wrapping_add(v);
                        }
                    } else {
                        h.push(rng.gen_range(0..n.max(1) as u64));
                    }
                }
                drain(h, &mut checksum);
            }
            Workload::OrderedPushOnly => {
                h.clear();
                for j in 0..n {
                    h.push(j as u64);
                }
            }
        }
    }
    checksum
}

pub fn run_engine(workload: Workload, n: usize, rounds: usize, seed: u64) -> Report {
    let mut h = Engine(Counted::new(Vec::with_capacity(n)));
    let start = Instant::now();
    let checksum = drive(&mut h, workload, n, rounds, seed);
    let elapsed = start.elapsed();
    let stats = h.0.stats();
    Report {
        workload,
        backend: "mmheap",
        elapsed,
        compares: stats.compares,
        swaps: stats.swaps,
        checksum,
    }
}

pub fn run_biheap(workload: Workload, n: usize, rounds: usize, seed: u64) -> Report {
    let mut h = Bi(new_biheap(n), n);
    let start = Instant::now();
    let checksum = drive(&mut h, workload, n, rounds, seed);
    Report {
        workload,
        backend: "biheap",
        elapsed: start.elapsed(),
        compares: 0,
        swaps: 0,
        checksum,
    }
}
