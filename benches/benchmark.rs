use bintree_collections::list::{ArrayList, List, UnorderedList};
use bintree_collections::model::{BinaryTree, LinkedBinaryTree};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const TREE_DEPTHS: &[(&str, u32)] = &[("depth-8", 8), ("depth-12", 12)];

const LIST_SIZES: &[(&str, usize)] = &[("n1k", 1_000), ("n10k", 10_000)];

fn complete_tree(depth: u32, next: &mut u64) -> LinkedBinaryTree<u64> {
    *next += 1;
    let element = *next;
    if depth == 0 {
        return LinkedBinaryTree::with_root(element);
    }
    let left = complete_tree(depth - 1, next);
    let right = complete_tree(depth - 1, next);
    LinkedBinaryTree::with_subtrees(element, Some(left), Some(right))
}

fn tree_traversals(c: &mut Criterion) {
    for (name, depth) in TREE_DEPTHS {
        let tree = complete_tree(*depth, &mut 0);
        c.bench_function(&format!("in-order {name}"), |b| {
            b.iter(|| black_box(tree.iter_in_order().count()));
        });
        c.bench_function(&format!("level-order {name}"), |b| {
            b.iter(|| black_box(tree.iter_level_order().count()));
        });
        c.bench_function(&format!("height {name}"), |b| {
            b.iter(|| black_box(tree.get_height()));
        });
    }
}

fn list_growth(c: &mut Criterion) {
    for (name, size) in LIST_SIZES {
        c.bench_function(&format!("add to rear {name}"), |b| {
            b.iter(|| {
                let mut list = ArrayList::with_capacity(1);
                for i in 0..*size {
                    list.add_to_rear(i);
                }
                black_box(list.size())
            });
        });
        c.bench_function(&format!("drain from front {name}"), |b| {
            b.iter(|| {
                let mut list: ArrayList<usize> = (0..*size).collect();
                while let Ok(element) = list.remove_first() {
                    black_box(element);
                }
            });
        });
    }
}

criterion_group!(traversals, tree_traversals);
criterion_group! {
    name = lists;
    config = Criterion::default().sample_size(10);
    targets = list_growth
}
criterion_main!(traversals, lists);
