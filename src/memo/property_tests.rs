//! Property-Based Tests for the Memo Module
//!
//! Uses proptest to check the memoizer against simple reference models.

use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::memo::{memoize, MemoOptions, PolicyKind};

// == Strategies ==
/// Small key space so calls repeat often
fn key_strategy() -> impl Strategy<Value = u8> {
    0u8..16
}

fn bounded_policy_strategy() -> impl Strategy<Value = PolicyKind> {
    prop_oneof![
        Just(PolicyKind::Lru),
        Just(PolicyKind::Lfu),
        Just(PolicyKind::Time),
    ]
}

fn triple(n: &u8) -> u32 {
    *n as u32 * 3
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Memoized results always equal a direct call.
    #[test]
    fn prop_results_match_direct_calls(keys in prop::collection::vec(key_strategy(), 1..100)) {
        let mut memo = memoize(triple);

        for key in keys {
            prop_assert_eq!(memo.call(key), triple(&key));
        }
    }

    // The cache never holds more than max_size entries under the built-in policies.
    #[test]
    fn prop_capacity_enforcement(
        policy in bounded_policy_strategy(),
        max_size in 1usize..8,
        keys in prop::collection::vec(key_strategy(), 1..200)
    ) {
        let mut memo = MemoOptions::new()
            .max_size(max_size)
            .policy(policy)
            .max_age(Duration::from_secs(60))
            .build(triple)
            .unwrap();

        for key in keys {
            memo.call(key);
            prop_assert!(
                memo.len() <= max_size,
                "Cache size {} exceeds max {}",
                memo.len(),
                max_size
            );
        }
    }

    // Every miss invokes the function exactly once and every hit skips it.
    #[test]
    fn prop_statistics_accuracy(
        policy in bounded_policy_strategy(),
        keys in prop::collection::vec(key_strategy(), 1..100)
    ) {
        let calls = Rc::new(Cell::new(0u64));
        let counter = calls.clone();
        let mut memo = MemoOptions::new()
            .max_size(4)
            .policy(policy)
            .max_age(Duration::from_secs(60))
            .build(move |n: &u8| {
                counter.set(counter.get() + 1);
                triple(n)
            })
            .unwrap();

        let total = keys.len() as u64;
        for key in keys {
            memo.call(key);
        }

        let stats = memo.stats();
        prop_assert_eq!(stats.misses, calls.get());
        prop_assert_eq!(stats.hits + stats.misses, total);
        prop_assert_eq!(stats.total_entries, memo.len());
    }

    // LRU residency matches a plain recency list.
    #[test]
    fn prop_lru_matches_model(
        max_size in 1usize..6,
        keys in prop::collection::vec(key_strategy(), 1..150)
    ) {
        let mut memo = MemoOptions::new().max_size(max_size).build(triple).unwrap();
        let mut model: Vec<u8> = Vec::new();

        for key in keys {
            memo.call(key);

            if let Some(pos) = model.iter().position(|k| *k == key) {
                model.remove(pos);
            } else if model.len() >= max_size {
                model.remove(0);
            }
            model.push(key);

            let ledger: Vec<u8> = memo.entries().map(|(k, _)| *k).collect();
            prop_assert_eq!(&ledger, &model);
        }
    }

    // Hit counters track exactly how many calls each resident entry served.
    #[test]
    fn prop_hits_count_calls(keys in prop::collection::vec(key_strategy(), 1..100)) {
        let mut memo = memoize(triple);

        for key in &keys {
            memo.call(*key);
        }

        for (key, entry) in memo.entries() {
            let expected = keys.iter().filter(|k| *k == key).count() as u64;
            prop_assert_eq!(entry.hits, expected);
        }
    }
}
