//! The capabilities the engine needs from a backing sequence.

use std::cell::Cell;
use std::collections::VecDeque;

/// An ordered, 0-indexed sequence the heap functions operate on.
///
/// The engine never keeps the sequence between calls; the caller owns it.
/// Indices passed to `less` and `swap` are always `< len()`.
pub trait HeapSeq {
    type Item;

    fn len(&self) -> usize;

    /// Strict weak ordering between the elements at `i` and `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    fn swap(&mut self, i: usize, j: usize);

    /// Appends `value` at index `len()`.
    fn push(&mut self, value: Self::Item);

    /// Removes the element at `len() - 1`.
    fn pop(&mut self) -> Option<Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Ord> HeapSeq for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j)
    }

    #[inline]
    fn push(&mut self, value: T) {
        Vec::push(self, value)
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
}

impl<T: Ord> HeapSeq for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        VecDeque::swap(self, i, j)
    }

    fn push(&mut self, value: T) {
        self.push_back(value)
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }
}

/// Comparison and swap counts observed by a [`Counted`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub compares: u64,
    pub swaps: u64,
}

/// Forwards to the inner sequence and counts `less` and `swap` calls.
pub struct Counted<S> {
    inner: S,
    compares: Cell<u64>,
    swaps: u64,
}

impl<S> Counted<S> {
    pub fn new(inner: S) -> Self {
        Counted {
            inner,
            compares: Cell::new(0),
            swaps: 0,
        }
    }

    pub fn stats(&self) -> Stats {
        Stats {
            compares: self.compares.get(),
            swaps: self.swaps,
        }
    }

    pub fn reset(&mut self) {
        self.compares.set(0);
        self.swaps = 0;
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Mutable access to the backing sequence. Changing an element through it
    /// requires a `fix` afterwards.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: HeapSeq> HeapSeq for Counted<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.compares.set(self.compares.get() + 1);
        self.inner.less(i, j)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.swaps += 1;
        self.inner.swap(i, j)
    }

    fn push(&mut self, value: S::Item) {
        self.inner.push(value)
    }

    fn pop(&mut self) -> Option<S::Item> {
        self.inner.pop()
    }
}
