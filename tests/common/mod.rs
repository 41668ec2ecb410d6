#![allow(dead_code)]

use bintree_collections::model::{BinaryTreeNode, LinkedBinaryTree};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

pub const ROOT_ELM: i32 = 61;
pub const TEN: i32 = 10;
pub const TWENTY: i32 = 20;
pub const FORTY: i32 = 40;

static TEST_LOGGING: Once = Once::new();

/// Installs a fmt subscriber for the tracing events of the library, once per test binary.
pub fn init_test_logging() {
    TEST_LOGGING.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}

fn leaf(element: i32) -> Option<LinkedBinaryTree<i32>> {
    Some(LinkedBinaryTree::with_root(element))
}

/// `61(10(20, 40), 20(-, 20))`
pub fn normal_tree() -> LinkedBinaryTree<i32> {
    let left = LinkedBinaryTree::with_subtrees(TEN, leaf(TWENTY), leaf(FORTY));
    let right = LinkedBinaryTree::with_subtrees(TWENTY, None, leaf(TWENTY));
    LinkedBinaryTree::with_subtrees(ROOT_ELM, Some(left), Some(right))
}

/// `61(10(20(40, -), -), -)`
pub fn line_tree() -> LinkedBinaryTree<i32> {
    let lower = LinkedBinaryTree::with_subtrees(TWENTY, leaf(FORTY), None);
    let upper = LinkedBinaryTree::with_subtrees(TEN, Some(lower), None);
    LinkedBinaryTree::with_subtrees(ROOT_ELM, Some(upper), None)
}

/// `10(40(-, 20(10, -)), -)`
pub fn zig_zag_tree() -> LinkedBinaryTree<i32> {
    let lower = LinkedBinaryTree::with_subtrees(TWENTY, leaf(TEN), None);
    let upper = LinkedBinaryTree::with_subtrees(FORTY, None, Some(lower));
    LinkedBinaryTree::with_subtrees(TEN, Some(upper), None)
}

/// `61(40(10, -), 10(-, 20))`
pub fn pyramid_tree() -> LinkedBinaryTree<i32> {
    let left = LinkedBinaryTree::with_subtrees(FORTY, leaf(TEN), None);
    let right = LinkedBinaryTree::with_subtrees(TEN, None, leaf(TWENTY));
    LinkedBinaryTree::with_subtrees(ROOT_ELM, Some(left), Some(right))
}

/// Counts nodes with two children by walking the node graph directly.
pub fn count_two_child_nodes<T>(node: Option<&BinaryTreeNode<T>>) -> usize {
    match node {
        None => 0,
        Some(node) => {
            let own = usize::from(node.left().is_some() && node.right().is_some());
            own + count_two_child_nodes(node.left()) + count_two_child_nodes(node.right())
        }
    }
}
