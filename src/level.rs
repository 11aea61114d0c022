//! Index arithmetic of the implicit tree.
//!
//! Node `i` lives at depth `floor(log2(i + 1))`. Even depths are min levels,
//! odd depths are max levels.

/// Depth of `index`, the root being at depth 0.
pub fn depth(index: usize) -> u32 {
    match index.checked_add(1) {
        Some(n) => usize::BITS - 1 - n.leading_zeros(),
        None => usize::BITS,
    }
}

/// Whether `index` sits on a min level.
///
/// `usize::BITS` is even, so an even depth means an odd number of leading
/// zeros in `index + 1`.
#[inline]
pub fn is_min_level(index: usize) -> bool {
    match index.checked_add(1) {
        Some(n) => n.leading_zeros() & 1 == 1,
        None => depth(index) & 1 == 0,
    }
}

#[inline]
pub fn has_parent(index: usize) -> bool {
    index > 0
}

#[inline]
pub fn parent(index: usize) -> usize {
    debug_assert!(has_parent(index));
    (index - 1) / 2
}

#[inline]
pub fn has_grandparent(index: usize) -> bool {
    index > 2
}

#[inline]
pub fn grandparent(index: usize) -> usize {
    parent(parent(index))
}

/// Left child of `index`. Saturates instead of wrapping, a saturated index is
/// never below any real length.
#[inline]
pub fn child(index: usize) -> usize {
    index.saturating_mul(2).saturating_add(1)
}
