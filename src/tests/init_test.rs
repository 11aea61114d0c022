use super::*;

#[test]
fn init_all_equal() {
    let mut h = vec![0; 20];
    init(&mut h);
    verify(&h);
    for i in 1..=20 {
        let x = pop(&mut h).unwrap();
        verify(&h);
        assert_eq!(x, 0, "{}.th pop", i);
    }
}

#[test]
fn init_descending_pops_ascending() {
    let mut h: Vec<i32> = (1..=20).rev().collect();
    init(&mut h);
    verify(&h);
    for i in 1..=20 {
        let x = pop(&mut h).unwrap();
        verify(&h);
        assert_eq!(x, i, "{}.th pop", i);
    }
    assert!(h.is_empty());
}

#[test]
fn init_small_sizes() {
    for n in 0..40 {
        let mut h: Vec<u32> = (0..n).map(|i| (i * 37 + 11) % 17).collect();
        init(&mut h);
        verify(&h);
        if n > 0 {
            assert_eq!(Some(h[0]), h.iter().copied().min());
            assert_eq!(Some(h[max_index(&h).unwrap()]), max_of(&h));
        }
    }
}

#[test]
fn init_valid_heap_untouched() {
    let mut h = vec![1, 9, 8, 2, 3, 4, 5];
    let before = h.clone();
    init(&mut h);
    assert_eq!(h, before);
}
