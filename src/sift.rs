//! Repair procedures for a single perturbed position.

use crate::level::{child, grandparent, has_grandparent, has_parent, is_min_level, parent};
use crate::seq::HeapSeq;

/// Whether element `i` belongs above element `j` on a level of the given
/// parity: smaller on a min level, larger on a max level. Strict, so equal
/// elements never trade places.
#[inline]
pub(crate) fn precedes<S: HeapSeq + ?Sized>(seq: &S, min_level: bool, i: usize, j: usize) -> bool {
    if min_level {
        seq.less(i, j)
    } else {
        seq.less(j, i)
    }
}

/// Moves the element at `on` towards the root until the min-max property
/// holds along its ancestor chain.
pub fn sift_up<S: HeapSeq + ?Sized>(seq: &mut S, mut on: usize) {
    let mut on_min_level = is_min_level(on);

    // The parent lives on the other level family. If `on` belongs above it
    // there, they trade places and `on` changes family once.
    if has_parent(on) {
        let p = parent(on);
        if precedes(seq, !on_min_level, on, p) {
            seq.swap(on, p);
            on = p;
            on_min_level = !on_min_level;
        }
    }

    // Same family from here on, two levels per hop.
    while has_grandparent(on) {
        let gp = grandparent(on);
        if !precedes(seq, on_min_level, on, gp) {
            break;
        }
        seq.swap(on, gp);
        on = gp;
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Relation {
    Stay,
    Child,
    Grandchild,
}

#[derive(Clone, Copy, Debug)]
struct Progeny {
    index: usize,
    relation: Relation,
}

/// Moves the element at `i0` towards the leaves, looking only at indices
/// below `n`. Returns whether the element left `i0`.
pub fn sift_down<S: HeapSeq + ?Sized>(seq: &mut S, i0: usize, n: usize) -> bool {
    let mut on = i0;
    let on_min_level = is_min_level(i0);

    loop {
        let l = child(on);
        let r = l.saturating_add(1);
        let ll = child(l);
        let rl = child(r);
        let candidates = [
            Progeny { index: l, relation: Relation::Child },
            Progeny { index: r, relation: Relation::Child },
            Progeny { index: ll, relation: Relation::Grandchild },
            Progeny { index: ll.saturating_add(1), relation: Relation::Grandchild },
            Progeny { index: rl, relation: Relation::Grandchild },
            Progeny { index: rl.saturating_add(1), relation: Relation::Grandchild },
        ];

        let mut best = Progeny { index: on, relation: Relation::Stay };
        // candidates are ascending, the first one past `n` ends the scan
        for p in candidates.iter().take_while(|p| p.index < n) {
            if precedes(seq, on_min_level, p.index, best.index) {
                best = *p;
            }
        }

        match best.relation {
            Relation::Stay => break,
            Relation::Child => {
                seq.swap(on, best.index);
                on = best.index;
                break;
            }
            Relation::Grandchild => {
                seq.swap(on, best.index);
                on = best.index;
                // repair the level that was jumped over
                let p = parent(on);
                if precedes(seq, !on_min_level, on, p) {
                    seq.swap(on, p);
                }
            }
        }
    }

    on != i0
}
