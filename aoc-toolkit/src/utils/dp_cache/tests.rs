//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;
use crate::utils::error::DpCacheError;

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

/// Counts how many times `compute` runs
struct Diamond {
    count: Rc<Cell<u32>>,
}

impl DpProblem<usize, i32> for Diamond {
    fn deps(&self, n: &usize) -> Vec<usize> {
        match *n {
            0 => vec![1, 2],
            1 | 2 => vec![3],
            _ => vec![],
        }
    }

    fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
        self.count.set(self.count.get() + 1);
        match *n {
            0 => deps[0] + deps[1],
            1 => deps[0] * 2,
            2 => deps[0] * 3,
            _ => 10,
        }
    }
}

#[test]
fn test_fibonacci_chain() {
    let cache = DpCache::builder()
        .backend(VecBackend::new())
        .problem(Fibonacci)
        .build();

    assert_eq!(cache.get(&0).unwrap(), 0);
    assert_eq!(cache.get(&1).unwrap(), 1);
    assert_eq!(cache.get(&10).unwrap(), 55);
    assert_eq!(cache.get(&90).unwrap(), 2_880_067_194_370_816_120);
    assert_eq!(cache.len(), 91);
}

#[test]
fn test_diamond_computes_each_index_once() {
    let count = Rc::new(Cell::new(0));
    let cache = DpCache::with_problem(
        VecBackend::new(),
        Diamond {
            count: count.clone(),
        },
    );

    assert!(cache.is_empty());
    assert_eq!(cache.get(&0).unwrap(), 50);
    assert_eq!(count.get(), 4);

    assert_eq!(cache.get(&0).unwrap(), 50);
    assert_eq!(cache.get(&3).unwrap(), 10);
    assert_eq!(count.get(), 4);
}

/// Ways to split a string into dictionary words
struct Segmentations<'w> {
    words: &'w [&'w str],
}

impl<'a> DpProblem<&'a str, u64> for Segmentations<'_> {
    fn deps(&self, rest: &&'a str) -> Vec<&'a str> {
        self.words
            .iter()
            .filter_map(|word| rest.strip_prefix(*word))
            .collect()
    }

    fn compute(&self, rest: &&'a str, deps: Vec<u64>) -> u64 {
        if rest.is_empty() { 1 } else { deps.iter().sum() }
    }
}

#[test]
fn test_borrowed_str_indices() {
    let words = ["ab", "abc", "b", "bc", "c"];
    let cache = DpCache::builder()
        .backend(HashMapBackend::new())
        .problem(Segmentations { words: &words })
        .build();

    assert_eq!(cache.get(&"abc").unwrap(), 2);
    assert_eq!(cache.get(&"abcbc").unwrap(), 4);
    assert_eq!(cache.get(&"x").unwrap(), 0);
    assert_eq!(cache.problem().words.len(), 5);
}

#[test]
fn test_self_dependency_is_a_cycle() {
    let looping = ClosureProblem::new(
        |n: &u8| vec![(n + 1) % 3],
        |_: &u8, deps: Vec<u32>| deps[0] + 1,
    );
    let cache = DpCache::with_problem(HashMapBackend::new(), looping);
    assert_eq!(cache.get(&0), Err(DpCacheError::Cycle));
    assert!(cache.is_empty());
    // State is clean after the failure
    assert_eq!(cache.get(&1), Err(DpCacheError::Cycle));
}

#[test]
fn test_vec_backend_storage() {
    let mut backend: VecBackend<i32> = VecBackend::with_capacity(4);
    assert!(backend.is_empty());
    backend.insert(5, 42);
    assert_eq!(backend.get(&5), Some(&42));
    assert_eq!(backend.get(&2), None);
    assert_eq!(backend.get(&10), None);
    assert_eq!(backend.len(), 1);

    backend.insert(5, 7);
    assert_eq!(backend.get(&5), Some(&7));
    assert_eq!(backend.len(), 1);
}

#[test]
fn test_hashmap_backend_storage() {
    let mut backend: HashMapBackend<(u64, usize), u64> = HashMapBackend::new();
    backend.insert((125, 3), 9);
    assert_eq!(backend.get(&(125, 3)), Some(&9));
    assert_eq!(backend.get(&(125, 4)), None);
    assert_eq!(backend.len(), 1);
}

proptest! {
    #[test]
    fn prop_fibonacci_matches_iterative(n in 0usize..90) {
        let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);
        let (mut a, mut b) = (0u64, 1u64);
        for _ in 0..n {
            (a, b) = (b, a + b);
        }
        prop_assert_eq!(cache.get(&n).unwrap(), a);
    }

    #[test]
    fn prop_backends_agree(n in 0usize..60) {
        let dense = DpCache::with_problem(VecBackend::new(), Fibonacci);
        let sparse = DpCache::with_problem(HashMapBackend::new(), Fibonacci);
        prop_assert_eq!(dense.get(&n).unwrap(), sparse.get(&n).unwrap());
        prop_assert_eq!(dense.len(), sparse.len());
    }
}
