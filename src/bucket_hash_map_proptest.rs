#![cfg(test)]

// Property tests for BucketHashMap kept inside the crate so they can audit
// slot-level invariants the public API does not expose.

use crate::BucketHashMap;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, String),
    Erase(usize),
    Find(usize),
    Contains(String),
    Clear,
    Dump,
}

fn key_from(pool: &[String], i: usize) -> &str {
    &pool[i]
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    // Keys may be empty (exercises the degenerate-input no-op) and may
    // contain spaces.
    proptest::collection::vec("[a-z ]{0,6}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            (idx.clone(), "[a-z0-9]{0,5}").prop_map(|(i, v)| OpI::Insert(i, v)),
            idx.clone().prop_map(OpI::Erase),
            idx.clone().prop_map(OpI::Find),
            "[a-z ]{0,6}".prop_map(OpI::Contains),
            Just(OpI::Clear),
            Just(OpI::Dump),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Drives one scenario against a `std::collections::HashMap` model.
// Invariants exercised across random operation sequences:
// - Insert is an upsert; an empty key is a silent no-op on every path.
// - `find`/`contains_key` parity with the model, hit or miss.
// - `erase` removes exactly the named key; absent keys are no-ops.
// - `clear` empties the table and it stays usable.
// - The dump lists exactly the live pairs.
// - After every op: `len`/`is_empty` parity and structural consistency
//   (no retained empty bucket, count matches live entries, slot residency).
fn run_scenario(
    mut sut: BucketHashMap,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, String> = HashMap::new();

    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = key_from(pool, i);
                sut.insert(k, &v);
                if !k.is_empty() {
                    model.insert(k.to_string(), v);
                }
            }
            OpI::Erase(i) => {
                let k = key_from(pool, i);
                sut.erase(k);
                model.remove(k);
            }
            OpI::Find(i) => {
                let k = key_from(pool, i);
                prop_assert_eq!(sut.find(k), model.get(k).map(String::as_str));
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
            OpI::Clear => {
                sut.clear();
                model.clear();
            }
            OpI::Dump => {
                let dump = sut.debug_dump();
                for (k, v) in &model {
                    let pair = format!("[key: {}, value: {}]", k, v);
                    prop_assert!(dump.contains(&pair), "dump missing {}", pair);
                }
            }
        }

        // Post-conditions after each op
        sut.check_consistency();
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
    }
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap
// under the default slot count.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_scenario(BucketHashMap::new(), &pool, ops)?;
    }
}

// Property: Same invariants with a single slot, forcing every key into one
// bucket. This stresses linear-scan equality resolution, swap-remove
// compaction, and bucket teardown under worst-case collisions.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_single_slot((pool, ops) in arb_scenario()) {
        run_scenario(BucketHashMap::with_slots(1), &pool, ops)?;
    }
}
