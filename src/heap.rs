//! Min-max heap operations over a caller-owned [`HeapSeq`].
//!
//! The minimum is always at index 0 and the maximum at index 0, 1 or 2
//! (see [`max_index`]). Every function leaves the sequence satisfying the
//! min-max property over all of its indices, or returns an error without
//! touching it.
//!
//! # Examples
//! ```
//! use mmheaplib::heap;
//! let mut v = vec![5, 3, 8, 1, 9, 2];
//! heap::init(&mut v);
//! assert_eq!(v[0], 1);
//! assert_eq!(v[heap::max_index(&v).unwrap()], 9);
//! assert_eq!(heap::pop(&mut v), Ok(1));
//! assert_eq!(heap::pop_max(&mut v), Ok(9));
//! ```

use crate::error::HeapErr;
use crate::level::{grandparent, has_grandparent, has_parent, is_min_level, parent};
use crate::seq::HeapSeq;
use crate::sift::{precedes, sift_down, sift_up};

/// Establishes the min-max property over an arbitrary sequence in O(n).
pub fn init<S: HeapSeq + ?Sized>(seq: &mut S) {
    let n = seq.len();
    for i in (0..n / 2).rev() {
        sift_down(seq, i, n);
    }
}

/// Appends `value` and moves it to its place.
pub fn push<S: HeapSeq + ?Sized>(seq: &mut S, value: S::Item) {
    seq.push(value);
    let last = seq.len() - 1;
    sift_up(seq, last);
}

/// Removes and returns the minimum.
pub fn pop<S: HeapSeq + ?Sized>(seq: &mut S) -> Result<S::Item, HeapErr> {
    let n = match seq.len() {
        0 => return Err(HeapErr::Empty),
        len => len - 1,
    };
    seq.swap(0, n);
    sift_down(seq, 0, n);
    seq.pop().ok_or(HeapErr::Empty)
}

/// Index of the maximum: 0 for a single element, otherwise 1 or 2.
/// Index 2 is chosen only when it is strictly larger than index 1.
pub fn max_index<S: HeapSeq + ?Sized>(seq: &S) -> Result<usize, HeapErr> {
    match seq.len() {
        0 => Err(HeapErr::Empty),
        1 => Ok(0),
        2 => Ok(1),
        _ => {
            if seq.less(1, 2) {
                Ok(2)
            } else {
                Ok(1)
            }
        }
    }
}

/// Removes and returns the maximum.
pub fn pop_max<S: HeapSeq + ?Sized>(seq: &mut S) -> Result<S::Item, HeapErr> {
    let i = max_index(seq)?;
    remove(seq, i)
}

/// Removes and returns the element at index `i`.
pub fn remove<S: HeapSeq + ?Sized>(seq: &mut S, i: usize) -> Result<S::Item, HeapErr> {
    let len = seq.len();
    if i >= len {
        return Err(HeapErr::OutOfRange { index: i, len });
    }
    let n = len - 1;
    if i != n {
        seq.swap(i, n);
        repair(seq, i, n);
    }
    seq.pop().ok_or(HeapErr::Empty)
}

/// Restores the min-max property after the element at `i` changed in place.
/// A no-op when the element still fits where it is.
pub fn fix<S: HeapSeq + ?Sized>(seq: &mut S, i: usize) -> Result<(), HeapErr> {
    let len = seq.len();
    if i >= len {
        return Err(HeapErr::OutOfRange { index: i, len });
    }
    repair(seq, i, len);
    Ok(())
}

/// Puts back the single out-of-place element at `i` within the first `n`
/// indices. The ancestors are checked first: a value that has to climb may
/// still look fine against its children.
fn repair<S: HeapSeq + ?Sized>(seq: &mut S, i: usize, n: usize) {
    let on_min_level = is_min_level(i);
    if has_parent(i) && precedes(seq, !on_min_level, i, parent(i)) {
        // the old parent drops into `i` and may now be too extreme for the
        // subtree below it
        let p = parent(i);
        seq.swap(i, p);
        sift_down(seq, i, n);
        sift_up(seq, p);
    } else if has_grandparent(i) && precedes(seq, on_min_level, i, grandparent(i)) {
        sift_up(seq, i);
    } else {
        sift_down(seq, i, n);
    }
}

/// Checks the min-max property: every node is no larger (min level) or no
/// smaller (max level) than each of its descendants.
pub fn is_heap<S: HeapSeq + ?Sized>(seq: &S) -> bool {
    for d in 1..seq.len() {
        let mut a = d;
        while a > 0 {
            a = parent(a);
            let broken = if is_min_level(a) {
                seq.less(d, a)
            } else {
                seq.less(a, d)
            };
            if broken {
                return false;
            }
        }
    }
    true
}
