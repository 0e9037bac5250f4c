#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod engine;
mod navigation;

/// A mutation applied through the public API. `engine::do_ops` mirrors each
/// one into a `HashMap<K, usize>` of key counts, and the properties compare
/// the tree against that multiset once the sequence has run.
#[derive(Copy, Clone, Debug)]
pub enum Op<K, V> {
    /// Insert the K, V into the tree and bump the count for K
    Insert(K, V),
    /// Delete the node `search` finds for K; the count drops only on success
    Remove(K),
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1]).unwrap() {
            0 => Op::Insert(K::arbitrary(g), V::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
