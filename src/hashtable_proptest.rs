#![cfg(test)]

// Property tests for Hashtable kept inside the crate so they can inspect
// slot internals (sentinel key, entry order) directly.

use crate::entry::Status;
use crate::hashtable::Hashtable;
use crate::key::{is_valid_key, BUCKETS};
use proptest::prelude::*;

// Pool-indexed operations: indices shrink to earlier keys and op lists
// shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize),
    Delete(usize),
    Search(usize),
}

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        // Few letters so buckets collide and values repeat.
        4 => "[a-d]{1,4}",
        1 => "[a-dA!]{0,12}",
    ]
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec(arb_key(), 1..=10).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            3 => idx.clone().prop_map(OpI::Insert),
            2 => idx.clone().prop_map(OpI::Delete),
            1 => idx.clone().prop_map(OpI::Search),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Reference model: per bucket, the non-sentinel entries in sequence order.
struct Model {
    buckets: Vec<Vec<(String, Status)>>,
}

impl Model {
    fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); BUCKETS],
        }
    }

    fn bucket(v: &str) -> Option<usize> {
        if is_valid_key(v) {
            Some((v.as_bytes()[v.len() - 1] - b'a') as usize)
        } else {
            None
        }
    }

    fn insert(&mut self, v: &str) -> bool {
        let Some(b) = Self::bucket(v) else { return false };
        let entries = &mut self.buckets[b];
        match entries.iter_mut().find(|(s, _)| s == v) {
            Some((_, Status::Occupied)) => false,
            Some((_, st)) => {
                *st = Status::Occupied;
                true
            }
            None => {
                entries.push((v.to_owned(), Status::Occupied));
                true
            }
        }
    }

    fn delete(&mut self, v: &str) -> bool {
        let Some(b) = Self::bucket(v) else { return false };
        match self.buckets[b].iter_mut().find(|(s, _)| s == v) {
            Some((_, st)) => {
                *st = Status::Tombstone;
                true
            }
            None => false,
        }
    }

    fn search(&self, v: &str) -> Option<Status> {
        let b = Self::bucket(v)?;
        self.buckets[b]
            .iter()
            .find(|(s, _)| s == v)
            .map(|&(_, st)| st)
    }

    fn dump(&self) -> String {
        let mut parts = Vec::new();
        for (i, entries) in self.buckets.iter().enumerate() {
            let occ = entries.iter().filter(|(_, s)| *s == Status::Occupied).count();
            let tomb = entries.len() - occ;
            if !entries.is_empty() {
                parts.push(format!("{}{}{}1", (b'a' + i as u8) as char, occ, tomb));
            }
        }
        parts.join(" ")
    }
}

// Property: state-machine equivalence against the model.
// Invariants exercised across random operation sequences:
// - insert/delete/search outcomes match, including tombstone matches.
// - Each slot is its model entries plus exactly one trailing sentinel.
// - dump output matches and never panics.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut = Hashtable::new();
        let mut model = Model::new();

        for op in ops {
            match op {
                OpI::Insert(i) => {
                    let v = &pool[i];
                    prop_assert_eq!(sut.insert(v), model.insert(v), "insert {:?}", v);
                }
                OpI::Delete(i) => {
                    let v = &pool[i];
                    prop_assert_eq!(sut.delete(v), model.delete(v), "delete {:?}", v);
                }
                OpI::Search(i) => {
                    let v = &pool[i];
                    let got = sut.search(v);
                    prop_assert_eq!(got.map(|e| e.status()), model.search(v));
                    if let Some(e) = got {
                        prop_assert_eq!(e.value(), v.as_str());
                    }
                }
            }

            for (b, expected) in model.buckets.iter().enumerate() {
                let slot = &sut.slots[b];
                prop_assert_eq!(slot.len(), expected.len() + 1);
                let last = slot.entries().last().expect("slot never empty");
                prop_assert_eq!(last.status(), Status::NeverUsed);
                prop_assert_eq!(slot.get(slot.sentinel_key()).map(|e| e.status()), Some(Status::NeverUsed));
            }
        }

        prop_assert_eq!(sut.dump(), model.dump());
        let occupied = model.buckets.iter().flatten().filter(|(_, s)| *s == Status::Occupied).count();
        prop_assert_eq!(sut.len(), occupied);
    }
}

// Property: handles minted by `find` keep resolving to the same value
// through any later sequence of operations.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_handles_stay_valid((pool, ops) in arb_scenario()) {
        let mut t = Hashtable::new();
        let mut handles = Vec::new();
        for op in ops {
            match op {
                OpI::Insert(i) => { t.insert(&pool[i]); }
                OpI::Delete(i) => { t.delete(&pool[i]); }
                OpI::Search(_) => {}
            }
            for v in &pool {
                if let Some(h) = t.find(v) {
                    handles.push((h, v.clone()));
                }
            }
            for (h, v) in &handles {
                let e = h.entry(&t).expect("entries are never removed");
                prop_assert_eq!(e.value(), v.as_str());
            }
        }
    }
}
