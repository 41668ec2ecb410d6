mod common;

use bintree_collections::model::{BinaryTree, DepthFirstOrder, LinkedBinaryTree};
use bintree_collections::CollectionErrorKind;
use rstest::rstest;

fn collect<'a>(iter: impl Iterator<Item = &'a i32>) -> Vec<i32> {
    iter.copied().collect()
}

// ============= Depth-First Tests =============
#[test]
fn test_in_order() {
    common::init_test_logging();
    let tree = common::normal_tree();
    assert_eq!(collect(tree.iter_in_order()), [20, 10, 40, 61, 20, 20]);
}

#[test]
fn test_default_iteration_is_in_order() {
    let tree = common::pyramid_tree();
    assert_eq!(collect(tree.iter()), collect(tree.iter_in_order()));

    let mut seen = Vec::new();
    for element in &tree {
        seen.push(*element);
    }
    assert_eq!(seen, [10, 40, 61, 10, 20]);
}

#[test]
fn test_pre_order() {
    let tree = common::normal_tree();
    assert_eq!(collect(tree.iter_pre_order()), [61, 10, 20, 40, 20, 20]);
}

#[test]
fn test_post_order() {
    let tree = common::normal_tree();
    assert_eq!(collect(tree.iter_post_order()), [20, 40, 10, 20, 20, 61]);
}

#[rstest]
#[case::in_order(DepthFirstOrder::InOrder, vec![40, 10, 20, 10])]
#[case::pre_order(DepthFirstOrder::PreOrder, vec![10, 40, 20, 10])]
#[case::post_order(DepthFirstOrder::PostOrder, vec![10, 20, 40, 10])]
fn test_depth_first_orders_on_zig_zag(
    #[case] order: DepthFirstOrder,
    #[case] expected: Vec<i32>,
) {
    let tree = common::zig_zag_tree();
    assert_eq!(collect(tree.iter_depth_first(order)), expected);
}

#[test]
fn test_default_depth_first_order_is_in_order() {
    assert_eq!(DepthFirstOrder::default(), DepthFirstOrder::InOrder);
}

#[rstest]
#[case::normal(common::normal_tree())]
#[case::line(common::line_tree())]
#[case::zig_zag(common::zig_zag_tree())]
#[case::pyramid(common::pyramid_tree())]
fn test_in_order_of_composition(#[case] left: LinkedBinaryTree<i32>) {
    let right = common::line_tree();
    let mut expected = collect(left.iter_in_order());
    expected.push(0);
    expected.extend(collect(right.iter_in_order()));

    let tree = LinkedBinaryTree::with_subtrees(0, Some(left), Some(right));
    assert_eq!(collect(tree.iter_in_order()), expected);
}

#[test]
fn test_depth_first_on_empty_tree() {
    let tree: LinkedBinaryTree<i32> = LinkedBinaryTree::new();
    assert_eq!(tree.iter_in_order().count(), 0);
    assert_eq!(tree.iter_pre_order().count(), 0);
    assert_eq!(tree.iter_post_order().count(), 0);
}

#[test]
fn test_traversal_of_view() {
    let tree = common::normal_tree();
    let left = tree.get_left();
    assert_eq!(collect(left.iter_pre_order()), [10, 20, 40]);
}

// ============= Level-Order Tests =============
#[test]
fn test_level_order_marks_absent_children() {
    let tree = common::normal_tree();
    let levels: Vec<Option<i32>> = tree.iter_level_order().map(|e| e.copied()).collect();
    assert_eq!(
        levels,
        [
            Some(61),
            Some(10),
            Some(20),
            Some(20),
            Some(40),
            None,
            Some(20),
            None,
            None,
            None,
            None,
            None,
            None,
        ]
    );
}

#[rstest]
#[case::normal(common::normal_tree())]
#[case::line(common::line_tree())]
#[case::zig_zag(common::zig_zag_tree())]
#[case::pyramid(common::pyramid_tree())]
fn test_level_order_has_one_marker_per_absent_link(#[case] tree: LinkedBinaryTree<i32>) {
    let size = tree.size().unwrap();
    let levels: Vec<_> = tree.iter_level_order().collect();
    assert_eq!(levels.len(), 2 * size + 1);
    assert_eq!(levels.iter().filter(|e| e.is_none()).count(), size + 1);
}

#[test]
fn test_level_order_single_and_empty() {
    let single = LinkedBinaryTree::with_root(7);
    let levels: Vec<_> = single.iter_level_order().collect();
    assert_eq!(levels, [Some(&7), None, None]);

    let empty: LinkedBinaryTree<i32> = LinkedBinaryTree::new();
    let levels: Vec<_> = empty.iter_level_order().collect();
    assert_eq!(levels, [None]);
}

#[test]
fn test_level_order_present_elements_by_level() {
    let tree = common::pyramid_tree();
    let present: Vec<i32> = tree.iter_level_order().flatten().copied().collect();
    assert_eq!(present, [61, 40, 10, 10, 20]);
}

// ============= Fail-Fast Contract Tests =============
#[test]
fn test_try_next_past_end_fails() {
    let tree = LinkedBinaryTree::with_root(1);
    let mut iter = tree.iter();

    assert!(iter.has_next().unwrap());
    assert_eq!(*iter.try_next().unwrap(), 1);
    assert!(!iter.has_next().unwrap());

    let err = iter.try_next().unwrap_err();
    assert_eq!(err.kind(), CollectionErrorKind::NoSuchElement);
    assert_eq!(err.collection(), "LinkedBinaryTree");
}

#[test]
fn test_traversal_remove_is_unsupported() {
    let tree = common::line_tree();
    let mut iter = tree.iter_post_order();
    let err = iter.remove().unwrap_err();
    assert_eq!(err.kind(), CollectionErrorKind::UnsupportedOperation);
    // The traversal itself is unaffected
    assert_eq!(iter.remaining(), 4);
}

#[test]
fn test_traversal_is_materialized() {
    let tree = common::normal_tree();
    let mut iter = tree.iter_level_order();
    assert_eq!(iter.remaining(), 13);
    assert_eq!(iter.size_hint(), (13, Some(13)));
    iter.next();
    assert_eq!(iter.remaining(), 12);
}

#[test]
fn test_independent_iterators() {
    let tree = common::line_tree();
    let mut first = tree.iter();
    let second = tree.iter();
    first.next();
    first.next();
    assert_eq!(collect(second), [40, 20, 10, 61]);
    assert_eq!(collect(first), [10, 61]);
}
