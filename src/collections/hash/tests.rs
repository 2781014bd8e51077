#![cfg(test)]

use std::collections::HashMap;

use proptest::prelude::*;

use super::*;
use crate::util::hash::{BadHasherBuilder, ManualHash};

fn check_chaining<S: SlotIndex>(mut table: ChainingHashTable<&str, &str, S>) {
    table.insert("name", "mike");
    table.insert("school", "McMaster");
    table.insert("city", "Hamilton");

    assert_eq!(table.get("name"), Some(&"mike"), "Inserted values should be retrievable.");
    assert_eq!(table.get("school"), Some(&"McMaster"), "Inserted values should be retrievable.");
    assert_eq!(table.get("city"), Some(&"Hamilton"), "Inserted values should be retrievable.");

    assert_eq!(
        table.insert("city", "123"),
        Some("Hamilton"),
        "Inserting an existing key should return the old value."
    );
    assert_eq!(table.get("city"), Some(&"123"), "Inserting an existing key should overwrite it.");
    assert_eq!(table.len(), 3, "Overwriting a key shouldn't add an entry.");

    assert_eq!(table.get("agz"), None, "Keys which were never inserted should be missing.");
    assert_eq!(table.get("zzz"), None, "Keys which were never inserted should be missing.");

    assert_eq!(table.remove("name"), Some("mike"));
    assert_eq!(table.get("name"), None, "Removed keys should be missing.");
    assert_eq!(table.remove("school"), Some("McMaster"));
    assert_eq!(table.get("school"), None, "Removed keys should be missing.");
    assert_eq!(table.remove("city"), Some("123"));
    assert_eq!(table.get("city"), None, "Removed keys should be missing.");

    assert!(table.is_empty(), "Removing every key should leave the table empty.");
    assert_eq!(table.remove("city"), None, "Removing a missing key should do nothing.");
}

fn check_probing<S: SlotIndex>(mut table: ProbingHashTable<&str, &str, S>) {
    table.insert("name", "mike");
    table.insert("school", "McMaster");
    table.insert("city", "Hamilton");

    assert_eq!(table.get("name"), Some(&"mike"), "Inserted values should be retrievable.");
    assert_eq!(table.get("school"), Some(&"McMaster"), "Inserted values should be retrievable.");
    assert_eq!(table.get("city"), Some(&"Hamilton"), "Inserted values should be retrievable.");

    assert_eq!(
        table.insert("city", "123"),
        Some("Hamilton"),
        "Inserting an existing key should return the old value."
    );
    assert_eq!(table.get("city"), Some(&"123"), "Inserting an existing key should overwrite it.");
    assert_eq!(table.len(), 3, "Overwriting a key shouldn't add an entry.");

    assert_eq!(table.get("agz"), None, "Keys which were never inserted should be missing.");
    assert_eq!(table.get("zzz"), None, "Keys which were never inserted should be missing.");

    assert_eq!(table.remove("name"), Some("mike"));
    assert_eq!(table.get("name"), None, "Removed keys should be missing.");
    assert_eq!(table.remove("school"), Some("McMaster"));
    assert_eq!(table.get("school"), None, "Removed keys should be missing.");
    assert_eq!(table.remove("city"), Some("123"));
    assert_eq!(table.get("city"), None, "Removed keys should be missing.");

    assert!(table.is_empty(), "Removing every key should leave the table empty.");
    assert_eq!(table.remove("city"), None, "Removing a missing key should do nothing.");
}

#[test]
fn test_chaining_strategies() {
    check_chaining(ChainingHashTable::with_slots(10));
    check_chaining(ChainingHashTable::with_slots_and_strategy(10, MultiplyAddMethod::new()));
    check_chaining(ChainingHashTable::with_strategy(DivisionMethod::new()));
}

#[test]
fn test_probing_strategies() {
    check_probing(ProbingHashTable::with_slots(10));
    check_probing(ProbingHashTable::with_slots_and_strategy(10, MultiplyAddMethod::new()));
    check_probing(ProbingHashTable::with_strategy(DivisionMethod::new()));
}

#[test]
fn test_chaining_collisions() {
    let mut table = ChainingHashTable::with_slots_and_strategy(
        8,
        DivisionMethod::with_hasher(BadHasherBuilder)
    );
    table.insert(ManualHash::new(0, "zero"), "zero");
    table.insert(ManualHash::new(0, "one"), "one");
    table.insert(ManualHash::new(2, "two"), "two");
    table.insert(ManualHash::new(0, "three"), "three");

    assert_eq!(table.collisions(), 2, "Each new key in a non-empty chain is a collision.");
    assert_eq!(table.slots(), 8, "The table shouldn't grow below its load factor.");

    assert_eq!(table.remove(&ManualHash::new(0, "one")), Some("one"));

    assert_eq!(
        table.iter().map(|(_, v)| *v).collect::<Vec<_>>(),
        ["three", "zero", "two"],
        "Chains should hold newer keys first and lose nothing when an entry is removed."
    );
    assert_eq!(table.get(&ManualHash::new(0, "zero")), Some(&"zero"));
    assert_eq!(table.get(&ManualHash::new(0, "one")), None);
}

#[test]
fn test_probing_collisions() {
    let mut table = ProbingHashTable::with_slots_and_strategy(
        8,
        DivisionMethod::with_hasher(BadHasherBuilder)
    );
    table.insert(ManualHash::new(0, "zero"), "zero");
    table.insert(ManualHash::new(0, "one"), "one");
    table.insert(ManualHash::new(2, "two"), "two");
    table.insert(ManualHash::new(0, "three"), "three");

    assert_eq!(table.collisions(), 2, "Each key placed away from its ideal slot is a collision.");

    assert_eq!(table.remove(&ManualHash::new(0, "zero")), Some("zero"));

    assert_eq!(
        table.iter().map(|(_, v)| *v).collect::<Vec<_>>(),
        ["one", "three", "two"],
        "Removal should shift later entries of the cluster back without passing their ideal slot."
    );
    for key in ["one", "three"] {
        assert_eq!(
            table.get(&ManualHash::new(0, key)),
            Some(&key),
            "Entries after a removed entry should still be reachable."
        );
    }
    assert_eq!(table.get(&ManualHash::new(2, "two")), Some(&"two"));
}

#[test]
fn test_probing_wraps() {
    let mut table = ProbingHashTable::with_slots_and_strategy(
        8,
        DivisionMethod::with_hasher(BadHasherBuilder)
    );
    table.insert(ManualHash::new(7, "a"), "a");
    table.insert(ManualHash::new(7, "b"), "b");
    table.insert(ManualHash::new(1, "c"), "c");
    table.insert(ManualHash::new(7, "d"), "d");

    let values: Vec<_> = table.slots.iter().map(|s| s.as_ref().map(|(_, v)| *v)).collect();
    assert_eq!(
        format!("{values:?}"),
        r#"[Some("b"), Some("c"), Some("d"), None, None, None, None, Some("a")]"#,
        "Probing should wrap around to the first slot."
    );

    table.remove(&ManualHash::new(7, "a"));

    assert_eq!(
        table.iter().map(|(_, v)| *v).collect::<Vec<_>>(),
        ["d", "c", "b"],
        "Removal should shift entries back across the wrap-around."
    );
    assert_eq!(table.get(&ManualHash::new(7, "d")), Some(&"d"));
    assert_eq!(table.get(&ManualHash::new(7, "b")), Some(&"b"));
    assert_eq!(table.get(&ManualHash::new(1, "c")), Some(&"c"));
}

#[test]
fn test_growth() {
    let mut chaining = ChainingHashTable::new();
    let mut probing = ProbingHashTable::new();
    assert_eq!(chaining.slots(), 0);
    assert_eq!(probing.slots(), 0);

    for i in 0..100 {
        chaining.insert(i, i * 2);
        probing.insert(i, i * 2);
    }

    assert_eq!(chaining.len(), 100);
    assert_eq!(probing.len(), 100);
    assert!(chaining.len() <= chaining.slots() / 2, "Tables should stay at most half full.");
    assert!(probing.len() <= probing.slots() / 2, "Tables should stay at most half full.");

    for i in 0..100 {
        assert_eq!(chaining.get(&i), Some(&(i * 2)), "Growing should keep every entry.");
        assert_eq!(probing.get(&i), Some(&(i * 2)), "Growing should keep every entry.");
    }
    assert_eq!(chaining.iter().len(), 100);
    assert_eq!(probing.iter().count(), 100);
}

#[test]
fn test_empty_tables() {
    let mut chaining: ChainingHashTable<i32, i32> = ChainingHashTable::default();
    let mut probing: ProbingHashTable<i32, i32> = ProbingHashTable::default();

    assert_eq!(chaining.get(&1), None, "Lookups in a table with no slots should be missing.");
    assert_eq!(probing.get(&1), None, "Lookups in a table with no slots should be missing.");
    assert_eq!(chaining.remove(&1), None);
    assert_eq!(probing.remove(&1), None);
    assert!(!chaining.contains_key(&1));
    assert!(!probing.contains_key(&1));

    let mut zero_slots = ProbingHashTable::with_slots(0);
    zero_slots.insert("key", 1);
    assert_eq!(zero_slots.get("key"), Some(&1), "A table with 0 slots should grow on insert.");
}

#[test]
fn test_clear_and_get_mut() {
    let mut table: ProbingHashTable<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
    if let Some(value) = table.get_mut("a") {
        *value += 10;
    }
    assert_eq!(table.get("a"), Some(&11), "get_mut should modify the value in place.");

    let slots = table.slots();
    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.slots(), slots, "Clearing should keep the allocated slots.");
    assert_eq!(table.get("b"), None);

    let mut table: ChainingHashTable<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(table.get_entry("b"), Some((&"b", &2)));
    table.clear();
    assert!(table.is_empty());
    assert!(!table.contains_key("a"));
}

#[test]
fn test_probing_debug() {
    let mut table = ProbingHashTable::with_slots_and_strategy(
        4,
        DivisionMethod::with_hasher(BadHasherBuilder)
    );
    table.insert(ManualHash::new(1, 1), 'x');

    let debug = format!("{table:?}");
    assert!(
        debug.contains(r#"slots: [-, ("#) && debug.contains("'x'), -, -]"),
        "Empty slots should be shown as a dash, got {debug}."
    );
}

#[test]
fn test_collisions_are_cumulative() {
    let mut chaining = ChainingHashTable::with_slots_and_strategy(
        4,
        DivisionMethod::with_hasher(BadHasherBuilder)
    );
    let mut probing = ProbingHashTable::with_slots_and_strategy(
        4,
        DivisionMethod::with_hasher(BadHasherBuilder)
    );

    for (hash, key) in [(0, "a"), (0, "b"), (4, "c")] {
        chaining.insert(ManualHash::new(hash, key), ());
        probing.insert(ManualHash::new(hash, key), ());
    }
    assert_eq!(chaining.slots(), 8, "The third key should have grown the table.");
    assert_eq!(probing.slots(), 8, "The third key should have grown the table.");
    assert_eq!(chaining.collisions(), 1, "Entries moved by growing aren't collisions.");
    assert_eq!(probing.collisions(), 1, "Entries moved by growing aren't collisions.");

    chaining.clear();
    probing.clear();
    assert_eq!(chaining.collisions(), 1, "Clearing shouldn't reset the collision count.");
    assert_eq!(probing.collisions(), 1, "Clearing shouldn't reset the collision count.");

    for key in ["d", "e"] {
        chaining.insert(ManualHash::new(0, key), ());
        probing.insert(ManualHash::new(0, key), ());
    }
    assert_eq!(chaining.collisions(), 2);
    assert_eq!(probing.collisions(), 2);
}

/// Keys share only four hashes, so almost every insert collides and every removal lands inside a
/// cluster.
fn colliding_key(key: u8) -> ManualHash<u8> {
    ManualHash::new(u64::from(key % 4), key)
}

proptest! {
    #[test]
    fn tables_match_std_under_collisions(
        ops in prop::collection::vec((any::<bool>(), 0u8..32, any::<u32>()), 0..300)
    ) {
        let mut chaining = ChainingHashTable::with_strategy(
            DivisionMethod::with_hasher(BadHasherBuilder)
        );
        let mut probing = ProbingHashTable::with_strategy(
            DivisionMethod::with_hasher(BadHasherBuilder)
        );
        let mut model = HashMap::new();

        for (insert, key, value) in ops {
            if insert {
                let expected = model.insert(key, value);
                prop_assert_eq!(chaining.insert(colliding_key(key), value), expected);
                prop_assert_eq!(probing.insert(colliding_key(key), value), expected);
            } else {
                let expected = model.remove(&key);
                prop_assert_eq!(chaining.remove(&colliding_key(key)), expected);
                prop_assert_eq!(probing.remove(&colliding_key(key)), expected);
            }

            prop_assert_eq!(chaining.len(), model.len());
            prop_assert_eq!(probing.len(), model.len());
        }

        for key in 0..32 {
            let expected = model.get(&key);
            prop_assert_eq!(chaining.get(&colliding_key(key)), expected);
            prop_assert_eq!(probing.get(&colliding_key(key)), expected);
        }
        prop_assert_eq!(probing.iter().count(), model.len());
    }
}
