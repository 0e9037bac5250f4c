use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use linked_bst::Bst;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: u32) -> usize {
    2usize.pow(num_levels) - 1
}

/// Builds a tree by inserting values in ascending order. Nothing rebalances,
/// so this is a linked list in disguise.
fn get_degenerate_tree(num_levels: u32) -> Bst<i32, i32> {
    let mut bst = Bst::new();
    for x in 0..num_nodes_in_full_tree(num_levels) as i32 {
        bst.insert_entry(x, x);
    }
    bst
}

/// Builds a tree by inserting values in a balanced manner. This adds elements so that the
/// resultant tree has `num_levels` of nodes, all full.
fn get_balanced_tree(num_levels: u32) -> Bst<i32, i32> {
    let mut bst = Bst::new();
    let xs = (0..num_nodes_in_full_tree(num_levels) as i32).collect::<Vec<_>>();
    fill_balanced_tree(&mut bst, &xs);
    bst
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(bst: &mut Bst<i32, i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        bst.insert_entry(xs[mid], xs[mid]);
        fill_balanced_tree(bst, &xs[..mid]);
        fill_balanced_tree(bst, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group. Each iteration gets a fresh clone of the tree
/// so mutating closures always start from the same shape.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Bst<i32, i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // For trees of size 2^3, 2^7, etc....
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("degenerate", get_degenerate_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        for (name, bst) in tree_tests {
            let largest = bst
                .maximum()
                .and_then(|id| bst.tree().key(id))
                .copied()
                .unwrap_or_default();
            let id = BenchmarkId::new(name, largest);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut bst = black_box(bst.clone());
                        let instant = std::time::Instant::now();
                        f(&mut bst, black_box(largest));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |bst, i| {
        let _id = black_box(bst.search(&i));
    });
    bench_helper(c, "search-miss", |bst, i| {
        let _id = black_box(bst.search(&(i + 1)));
    });
    bench_helper(c, "insert", |bst, i| {
        bst.insert_entry(i + 1, i + 1);
    });
    bench_helper(c, "delete", |bst, i| {
        bst.delete_key(&i);
    });
    bench_helper(c, "delete-root", |bst, _| {
        let root = bst.tree().root();
        bst.delete(root);
    });
    bench_helper(c, "in-order-walk", |bst, _| {
        let _keys = black_box(bst.in_order_walk());
    });
    bench_helper(c, "is-balanced", |bst, _| {
        let _balanced = black_box(bst.is_balanced());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
