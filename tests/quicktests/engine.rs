use linked_bst::{Bst, Node};

use std::collections::{HashMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a hashmap counting keys.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys, with the same multiplicity.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Bst<K, V>, counts: &mut HashMap<K, usize>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
    V: Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                bst.insert(Node::new(k.clone(), v.clone()));
                *counts.entry(k.clone()).or_default() += 1;
            }
            Op::Remove(k) => {
                if bst.delete_key(k).is_some() {
                    let count = counts.get_mut(k).unwrap();
                    *count -= 1;
                    if *count == 0 {
                        counts.remove(k);
                    }
                }
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut bst = Bst::new();
    let mut counts = HashMap::new();

    do_ops(&ops, &mut bst, &mut counts);
    bst.check_invariants().is_ok()
        && bst.len() == counts.values().sum::<usize>()
        && counts.keys().all(|key| bst.contains_key(key))
}

#[quickcheck]
fn in_order_walk_is_sorted(xs: Vec<i32>) -> bool {
    let mut bst = Bst::new();
    for x in &xs {
        bst.insert(Node::new(*x, ()));
    }

    let mut sorted = xs.clone();
    sorted.sort();
    bst.in_order_walk().into_iter().copied().eq(sorted)
}

#[quickcheck]
fn search_returns_the_inserted_node(xs: Vec<i8>) -> bool {
    let mut bst = Bst::new();
    let unique: HashSet<_> = xs.into_iter().collect();
    let ids: Vec<_> = unique
        .iter()
        .map(|x| (*x, bst.insert(Node::new(*x, ())).unwrap()))
        .collect();

    // Without duplicates the match is the very node that was inserted.
    ids.into_iter().all(|(x, id)| bst.search(&x) == Some(id))
}

#[quickcheck]
fn search_with_duplicates_finds_an_equal_key(xs: Vec<i8>) -> bool {
    let mut bst = Bst::new();
    for x in &xs {
        bst.insert(Node::new(*x, ()));
    }

    xs.iter()
        .all(|x| bst.search(x).and_then(|id| bst.tree().key(id)) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut bst = Bst::new();
    for x in &xs {
        bst.insert(Node::new(*x, *x));
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| bst.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut bst = Bst::new();
    for x in &xs {
        bst.insert(Node::new(*x, *x));
    }
    let mut deleted = 0;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while bst.delete_key(delete).is_some() {
            deleted += 1;
        }
    }

    let still_present: Vec<_> = xs.iter().filter(|x| !deletes.contains(*x)).collect();

    bst.len() == xs.len() - deleted
        && deletes.iter().all(|x| bst.search(x).is_none())
        && still_present.iter().all(|x| bst.search(x).is_some())
        && bst.check_invariants().is_ok()
}

#[quickcheck]
fn deleting_every_node_empties_the_tree(xs: Vec<i16>) -> bool {
    let mut bst = Bst::new();
    let ids: Vec<_> = xs.iter().map(|x| bst.insert_entry(*x, ())).collect();

    for (deleted, id) in ids.iter().enumerate() {
        if bst.delete(*id).is_none() || bst.len() != ids.len() - deleted - 1 {
            return false;
        }
        if bst.check_invariants().is_err() {
            return false;
        }
    }
    bst.is_empty() && bst.tree().root().is_none()
}
