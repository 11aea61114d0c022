// 一个双端优先队列
// 底层是一个min-max堆, front是最小值, back是最大值

use std::fmt::{self, Debug};

use crate::heap;

pub struct PriorityDeque<T: Ord> {
    arr: Vec<T>,
}

impl<T> PriorityDeque<T>
where
    T: Ord,
{
    pub fn new() -> PriorityDeque<T> {
        PriorityDeque { arr: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> PriorityDeque<T> {
        PriorityDeque {
            arr: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.arr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arr.is_empty()
    }

    pub fn clear(&mut self) {
        self.arr.clear()
    }

    pub fn push(&mut self, v: T) {
        heap::push(&mut self.arr, v)
    }

    /// Smallest element.
    pub fn front(&self) -> Option<&T> {
        self.arr.first()
    }

    /// Largest element.
    pub fn back(&self) -> Option<&T> {
        let i = heap::max_index(&self.arr).ok()?;
        self.arr.get(i)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        heap::pop(&mut self.arr).ok()
    }

    pub fn pop_back(&mut self) -> Option<T> {
        heap::pop_max(&mut self.arr).ok()
    }

    /// Replaces the smallest element with `v` and returns it. On an empty
    /// deque `v` is pushed and `None` returned.
    pub fn replace_front(&mut self, v: T) -> Option<T> {
        if self.arr.is_empty() {
            self.push(v);
            return None;
        }
        let old = std::mem::replace(&mut self.arr[0], v);
        heap::fix(&mut self.arr, 0).ok()?;
        Some(old)
    }

    /// Replaces the largest element with `v` and returns it.
    pub fn replace_back(&mut self, v: T) -> Option<T> {
        let i = match heap::max_index(&self.arr) {
            Ok(i) => i,
            Err(_) => {
                self.push(v);
                return None;
            }
        };
        let old = std::mem::replace(&mut self.arr[i], v);
        heap::fix(&mut self.arr, i).ok()?;
        Some(old)
    }

    /// Elements in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.arr.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.arr
    }

    /// Elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.arr.len());
        while let Some(v) = self.pop_front() {
            out.push(v);
        }
        out
    }
}

impl<T: Ord> Default for PriorityDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> Clone for PriorityDeque<T> {
    fn clone(&self) -> Self {
        PriorityDeque {
            arr: self.arr.clone(),
        }
    }
}

impl<T: Ord + Debug> Debug for PriorityDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.arr.iter()).finish()
    }
}

impl<T: Ord> From<Vec<T>> for PriorityDeque<T> {
    fn from(mut arr: Vec<T>) -> Self {
        heap::init(&mut arr);
        debug_assert!(heap::is_heap(&arr));
        PriorityDeque { arr }
    }
}

impl<T: Ord> FromIterator<T> for PriorityDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Ord> Extend<T> for PriorityDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

impl<'a, T: Ord> IntoIterator for &'a PriorityDeque<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.arr.iter()
    }
}

#[cfg(test)]
mod test_prioritydeque {
    use super::*;

    use crate::bench::new_biheap;

    #[test]
    fn empty() {
        let mut m: PriorityDeque<i32> = PriorityDeque::new();
        assert!(m.is_empty());
        assert_eq!(m.front(), None);
        assert_eq!(m.back(), None);
        assert_eq!(m.pop_front(), None);
        assert_eq!(m.pop_back(), None);
    }

    #[test]
    fn both_ends() {
        let mut m = PriorityDeque::new();
        m.push(222);
        m.push(333);
        m.push(111);
        m.push(111);
        assert_eq!(Some(&111), m.front());
        assert_eq!(Some(&333), m.back());
        m.pop_front();
        assert_eq!(Some(&111), m.front());
        m.pop_front();
        assert_eq!(Some(&222), m.front());
        assert_eq!(Some(333), m.pop_back());
        assert_eq!(Some(&222), m.back());
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn same_as_biheap() {
        let mut m = PriorityDeque::new();
        let mut b = new_biheap(200);
        for i in 0..200u32 {
            let v = (i * 7919) % 263;
            m.push(v);
            b.push(v);
        }
        for i in 0..200 {
            if i % 3 == 0 {
                assert_eq!(m.pop_back(), b.pop_max());
            } else {
                assert_eq!(m.pop_front(), b.pop_min());
            }
        }
        assert!(m.is_empty());
    }

    #[test]
    fn replace_ends() {
        let mut m: PriorityDeque<i32> = vec![4, 8, 1, 6].into();
        assert_eq!(m.replace_front(5), Some(1));
        assert_eq!(m.front(), Some(&4));
        assert_eq!(m.replace_back(0), Some(8));
        assert_eq!(m.back(), Some(&6));
        assert_eq!(m.into_sorted_vec(), vec![0, 4, 5, 6]);

        let mut e = PriorityDeque::new();
        assert_eq!(e.replace_back(3), None);
        assert_eq!(e.replace_front(2), Some(3));
        assert_eq!(e.into_vec(), vec![2]);
    }

    #[test]
    fn collect_and_extend() {
        let mut m: PriorityDeque<i32> = (0..10).rev().collect();
        m.extend(vec![-1, 20]);
        assert_eq!(m.len(), 12);
        assert_eq!(m.iter().count(), 12);
        assert_eq!((&m).into_iter().max(), Some(&20));
        let c = m.clone();
        assert_eq!(format!("{:?}", c).chars().next(), Some('['));
        assert_eq!(c.into_sorted_vec(), {
            let mut v: Vec<i32> = (0..10).collect();
            v.insert(0, -1);
            v.push(20);
            v
        });
        assert_eq!(PriorityDeque::<i32>::default().len(), 0);
    }
}
