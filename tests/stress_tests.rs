//! Stress tests that push the heap through long operation sequences
//!
//! These perform large numbers of operations in various patterns to catch
//! edge cases and verify correctness under load. Randomized tests use a
//! fixed seed so failures reproduce.

use binomial_meld::binomial::BinomialHeap;
use binomial_meld::{ItemHandle, Key};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_massive_operations() {
    let mut heap = BinomialHeap::new();

    for i in 0..1000 {
        heap.insert(i, i).unwrap();
    }
    assert_eq!(heap.len(), 1000);
    assert_eq!(heap.num_trees(), 1000usize.count_ones() as usize);
    assert_eq!(heap.verify_structure(), Ok(()));

    for i in 0..1000 {
        assert_eq!(heap.delete_min(), Some((i, i)));
    }
    assert!(heap.is_empty());
    assert_eq!(heap.num_trees(), 0);
}

#[test]
fn test_reverse_order_inserts() {
    let mut heap = BinomialHeap::new();
    for i in (0..777).rev() {
        heap.insert(i, ()).unwrap();
        assert_eq!(heap.peek().map(|(k, _)| *k), Some(i));
    }
    assert_eq!(heap.verify_structure(), Ok(()));
    let keys: Vec<Key> = heap.into_sorted_vec().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, (0..777).collect::<Vec<_>>());
}

#[test]
fn test_many_decrease_keys() {
    let mut heap = BinomialHeap::new();
    let handles: Vec<ItemHandle<Key>> = (0..500)
        .map(|i| heap.insert(10_000 + i, i).unwrap())
        .collect();

    // Element i ends at key 499 - i, reversing the order
    for (i, handle) in handles.iter().enumerate() {
        let i = i as Key;
        heap.decrease_key(handle, 9_501 + 2 * i).unwrap();
    }
    assert_eq!(heap.verify_structure(), Ok(()));

    for key in 0..500 {
        assert_eq!(heap.delete_min(), Some((key, 499 - key)));
    }
}

#[test]
fn test_alternating_ops() {
    let mut heap = BinomialHeap::new();

    for i in 0..200 {
        heap.insert(i * 2, i).unwrap();
        heap.insert(i * 2 + 1, i + 1000).unwrap();
        assert!(heap.delete_min().is_some());
        assert_eq!(heap.num_trees(), heap.len().count_ones() as usize);
    }
    assert_eq!(heap.len(), 200);
    assert_eq!(heap.verify_structure(), Ok(()));

    let mut last = Key::MIN;
    while let Some((key, _)) = heap.delete_min() {
        assert!(key >= last);
        last = key;
    }
}

#[test]
fn test_large_merge() {
    let mut heap1 = BinomialHeap::new();
    let mut heap2 = BinomialHeap::new();

    let mut handles = Vec::new();
    for i in 0..500 {
        handles.push(heap1.insert(i * 2, i).unwrap());
        handles.push(heap2.insert(i * 2 + 1, i + 500).unwrap());
    }

    heap1.meld(&mut heap2);
    assert_eq!(heap1.len(), 1000);
    assert_eq!(heap1.num_trees(), 1000usize.count_ones() as usize);
    assert!(heap2.is_empty());
    assert_eq!(heap1.verify_structure(), Ok(()));

    // Handles from both sides resolve against the receiver
    assert!(handles.iter().all(|h| heap1.contains(h)));

    for i in 0..1000 {
        assert_eq!(heap1.delete_min().map(|(k, _)| k), Some(i));
    }
}

#[test]
fn test_chain_of_melds() {
    let mut acc = BinomialHeap::new();
    let mut handles = Vec::new();

    for round in 0..64 {
        let mut part = BinomialHeap::new();
        for j in 0..round {
            handles.push(part.insert(round * 100 + j, (round, j)).unwrap());
        }
        acc.meld(&mut part);
        assert_eq!(acc.num_trees(), acc.len().count_ones() as usize);
    }
    assert_eq!(acc.verify_structure(), Ok(()));

    // Every handle still reaches its element after all the melds
    for handle in &handles {
        let (key, &(round, j)) = acc.get(handle).unwrap();
        assert_eq!(key, round * 100 + j);
    }
    for handle in handles.iter().step_by(3) {
        acc.delete(handle).unwrap();
    }
    assert_eq!(acc.verify_structure(), Ok(()));
}

#[test]
fn test_random_mixed_workload() {
    let mut rng = StdRng::seed_from_u64(0x5EED_B10C);
    let mut heap = BinomialHeap::new();
    let mut live: Vec<(ItemHandle<i32>, Key)> = Vec::new();

    for step in 0..5000 {
        match rng.gen_range(0..10) {
            0..=3 => {
                let key = rng.gen_range(0..10_000);
                live.push((heap.insert(key, step).unwrap(), key));
            }
            4..=5 => {
                let expected = live.iter().map(|&(_, k)| k).min();
                let popped = heap.delete_min().map(|(k, _)| k);
                assert_eq!(popped, expected);
                if let Some(key) = popped {
                    let pos = live.iter().position(|(h, k)| *k == key && !heap.contains(h));
                    live.swap_remove(pos.expect("popped element is tracked"));
                }
            }
            6..=7 if !live.is_empty() => {
                let idx = rng.gen_range(0..live.len());
                let (handle, key) = (live[idx].0.clone(), live[idx].1);
                if key > 0 {
                    let diff = rng.gen_range(1..=key);
                    heap.decrease_key(&handle, diff).unwrap();
                    live[idx].1 = key - diff;
                }
            }
            8..=9 if !live.is_empty() => {
                let idx = rng.gen_range(0..live.len());
                let (handle, key) = live.swap_remove(idx);
                assert_eq!(heap.delete(&handle).map(|(k, _)| k), Ok(key));
            }
            _ => {}
        }

        assert_eq!(heap.len(), live.len());
        assert_eq!(heap.num_trees(), heap.len().count_ones() as usize);
        if step % 250 == 0 {
            assert_eq!(heap.verify_structure(), Ok(()));
        }
    }
    assert_eq!(heap.verify_structure(), Ok(()));
}

#[test]
fn test_delete_everything_by_handle() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut heap = BinomialHeap::new();
    let mut handles: Vec<_> = (0..300)
        .map(|i| heap.insert(rng.gen_range(0..50), i).unwrap())
        .collect();

    while !handles.is_empty() {
        let idx = rng.gen_range(0..handles.len());
        let handle = handles.swap_remove(idx);
        let before = heap.len();
        assert!(heap.delete(&handle).is_ok());
        assert_eq!(heap.len(), before - 1);
        assert!(!heap.contains(&handle));
    }
    assert!(heap.is_empty());
    assert_eq!(heap.verify_structure(), Ok(()));
}

#[test]
fn test_meld_of_heaps_built_from_singletons() {
    fn from_singletons(keys: impl Iterator<Item = Key>) -> (BinomialHeap<Key>, Vec<ItemHandle<Key>>) {
        let mut acc = BinomialHeap::new();
        let mut handles = Vec::new();
        for key in keys {
            let mut single = BinomialHeap::new();
            handles.push(single.insert(key, key).unwrap());
            acc.meld(&mut single);
            assert!(single.is_empty());
        }
        (acc, handles)
    }

    let (mut left, left_handles) = from_singletons((0..4096).map(|i| i * 2));
    let (mut right, right_handles) = from_singletons((0..4096).map(|i| i * 2 + 1));

    left.meld(&mut right);
    assert_eq!(left.len(), 8192);
    assert_eq!(left.num_trees(), 1);
    assert_eq!(left.verify_structure(), Ok(()));

    // Donor-side handles are usable against the receiver
    for handle in right_handles.iter().step_by(7) {
        let key = left.key(handle).unwrap();
        if key > 0 {
            left.decrease_key(handle, 1).unwrap();
        }
    }
    for handle in left_handles.iter().step_by(5) {
        assert!(left.delete(handle).is_ok());
    }
    assert_eq!(left.verify_structure(), Ok(()));

    let mut last = Key::MIN;
    while let Some((key, _)) = left.delete_min() {
        assert!(key >= last);
        last = key;
    }
}
