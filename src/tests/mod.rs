use crate::heap::*;
use crate::level::{is_min_level, parent};
use crate::seq::HeapSeq;

mod init_test;
mod remove_test;

/// Panics with the offending pair when some node breaks the min-max rule
/// against one of its ancestors.
pub fn verify<T: Ord + std::fmt::Debug>(h: &[T]) {
    for d in 1..h.len() {
        let mut a = d;
        while a > 0 {
            a = parent(a);
            if is_min_level(a) {
                assert!(h[a] <= h[d], "min node [{}] = {:?} > [{}] = {:?}", a, h[a], d, h[d]);
            } else {
                assert!(h[a] >= h[d], "max node [{}] = {:?} < [{}] = {:?}", a, h[a], d, h[d]);
            }
        }
    }
}

pub fn max_of<T: Ord + Copy>(h: &[T]) -> Option<T> {
    h.iter().copied().max()
}
