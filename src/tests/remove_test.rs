use super::*;
use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn remove_max_repeatedly() {
    let mut h: Vec<i32> = (0..10).collect();
    init(&mut h);
    verify(&h);

    let mut exp = 9;
    while !h.is_empty() {
        let i = max_index(&h).unwrap();
        let x = remove(&mut h, i).unwrap();
        assert_eq!(x, exp, "remove({})", i);
        verify(&h);
        exp -= 1;
    }
    assert!(h.is_empty());
}

#[test]
fn remove_root_repeatedly() {
    let mut h: Vec<i32> = (0..10).collect();
    init(&mut h);
    verify(&h);

    for i in 0..10 {
        let x = remove(&mut h, 0).unwrap();
        assert_eq!(x, i, "remove(0)");
        verify(&h);
    }
}

#[test]
fn remove_middle() {
    let n = 10;
    let mut h: Vec<i32> = (0..n).collect();
    init(&mut h);
    verify(&h);

    let mut m = HashSet::new();
    while !h.is_empty() {
        let i = (h.len() - 1) / 2;
        m.insert(remove(&mut h, i).unwrap());
        verify(&h);
    }
    assert_eq!(m.len(), n as usize);
    for i in 0..n {
        assert!(m.contains(&i), "m[{}] doesn't exist", i);
    }
}

#[test]
fn remove_returns_value_at_index() {
    let base: Vec<i32> = vec![13, 2, 40, 7, 7, 19, 0, 25, 31, 5, 11, 8, 3];
    for i in 0..base.len() {
        let mut h = base.clone();
        init(&mut h);
        let expect = h[i];
        let len = h.len();
        assert_eq!(remove(&mut h, i), Ok(expect));
        assert_eq!(h.len(), len - 1);
        verify(&h);

        let mut rest = h.clone();
        rest.push(expect);
        rest.sort();
        let mut all = base.clone();
        all.sort();
        assert_eq!(rest, all);
    }
}

#[test]
fn remove_last_only_pops() {
    let mut h = crate::seq::Counted::new(vec![1, 9, 8, 2]);
    assert_eq!(remove(&mut h, 3), Ok(2));
    assert_eq!(h.stats().swaps, 0);
    assert_eq!(h.get_ref(), &vec![1, 9, 8]);
}

#[test]
fn remove_moves_up() {
    // the tail of the right subtree replaces a leaf on the left and outgrows its max grandparent
    let mut h = vec![0, 10, 20, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 19];
    verify(&h);
    assert_eq!(remove(&mut h, 7), Ok(5));
    verify(&h);
    assert_eq!(h[1], 19);
    assert_eq!(h[7], 10);
}

#[test]
fn remove_small_tail_below_max_node() {
    // the tail value 91 lands under the max node 83 and has to climb past it
    let mut h = vec![8, 83, 93, 26, 23, 15, 68, 44, 31, 52, 43, 72, 24, 91];
    init(&mut h);
    verify(&h);
    let at = h[4];
    assert_eq!(remove(&mut h, 4), Ok(at));
    verify(&h);
    assert_eq!(h[max_index(&h).unwrap()], 93);
}

#[test]
fn remove_random_index_keeps_heap() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..2000 {
        let len = rng.gen_range(1..40);
        let mut h: Vec<i32> = (0..len).map(|_| rng.gen_range(-50..50)).collect();
        init(&mut h);
        verify(&h);
        while !h.is_empty() {
            let i = rng.gen_range(0..h.len());
            let at = h[i];
            assert_eq!(remove(&mut h, i), Ok(at));
            verify(&h);
        }
    }
}
