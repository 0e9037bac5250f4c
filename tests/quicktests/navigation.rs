use linked_bst::Bst;

fn build(xs: &[i16]) -> Bst<i16, ()> {
    xs.iter().map(|x| (*x, ())).collect()
}

#[quickcheck]
fn minimum_and_maximum_match_extremes(xs: Vec<i16>) -> bool {
    let bst = build(&xs);
    let tree = bst.tree();

    tree.minimum().and_then(|id| tree.key(id)) == xs.iter().min()
        && tree.maximum().and_then(|id| tree.key(id)) == xs.iter().max()
}

#[quickcheck]
fn successor_chain_is_in_order_walk(xs: Vec<i16>) -> bool {
    let bst = build(&xs);
    let tree = bst.tree();

    let mut chain = Vec::new();
    let mut current = tree.minimum();
    while let Some(id) = current {
        chain.push(tree.key(id).unwrap());
        current = tree.successor(id);
    }
    chain == tree.in_order_walk()
}

#[quickcheck]
fn predecessor_chain_is_reversed_walk(xs: Vec<i16>) -> bool {
    let bst = build(&xs);
    let tree = bst.tree();

    let mut chain = Vec::new();
    let mut current = tree.maximum();
    while let Some(id) = current {
        chain.push(tree.key(id).unwrap());
        current = tree.predecessor(id);
    }
    chain.reverse();
    chain == tree.in_order_walk()
}

#[quickcheck]
fn walks_visit_every_node_once(xs: Vec<i16>) -> bool {
    let bst = build(&xs);
    let tree = bst.tree();

    let mut sorted: Vec<_> = xs.iter().collect();
    sorted.sort();
    let mut pre = tree.pre_order_walk();
    pre.sort();
    let mut post = tree.post_order_walk();
    post.sort();

    pre == sorted && post == sorted && tree.in_order_walk() == sorted
}

#[quickcheck]
fn balance_matches_depths(xs: Vec<i16>) -> bool {
    let bst = build(&xs);
    let expected = !xs.is_empty() && bst.max_depth() - bst.min_depth() <= 1;

    bst.is_balanced() == expected && bst.max_depth() <= xs.len()
}

#[test]
fn single_node_is_balanced() {
    assert!(build(&[7]).is_balanced());
    assert!(!build(&[]).is_balanced());
}

#[test]
fn strictly_increasing_keys() {
    let keys: Vec<i16> = (0..10_000).collect();
    let bst = build(&keys);

    assert_eq!(bst.max_depth(), 10_000);
    assert!(!bst.is_balanced());
}
