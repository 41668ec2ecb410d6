//! Traversals of a binary tree node graph.
//!
//! Every traversal is *eager*: the complete ordered sequence is first
//! materialized into an [ArrayList], which a [TraversalIter] then walks.
//! The depth-first orders collect `&T`; level-order collects `Option<&T>`,
//! with `None` marking each absent child taken from the queue.

use crate::error::{CollectionError, CollectionResult};
use crate::iter::{Cursor, ModCount, check_mod_count};
use crate::list::{ArrayList, List, UnorderedList};
use crate::model::node::BinaryTreeNode;
use crate::model::tree::TREE;
use tracing::trace;

// =#========================================================================#=
// DEPTH-FIRST ORDER
// =#========================================================================#=
/// Position at which a node is emitted relative to its subtrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DepthFirstOrder {
    /// Left subtree, node, right subtree
    #[default]
    InOrder,
    /// Node, left subtree, right subtree
    PreOrder,
    /// Left subtree, right subtree, node
    PostOrder,
}

/// Materializes the elements below `root` in the given depth-first order.
pub(crate) fn depth_first<T>(
    root: Option<&BinaryTreeNode<T>>,
    order: DepthFirstOrder,
) -> ArrayList<&T> {
    let mut elements = ArrayList::new();
    collect_depth_first(root, order, &mut elements);
    trace!(?order, items = elements.size(), "materialized depth-first traversal");
    elements
}

fn collect_depth_first<'a, T>(
    node: Option<&'a BinaryTreeNode<T>>,
    order: DepthFirstOrder,
    elements: &mut ArrayList<&'a T>,
) {
    let Some(node) = node else {
        return;
    };

    if order == DepthFirstOrder::PreOrder {
        elements.add_to_rear(node.element());
    }
    collect_depth_first(node.left(), order, elements);
    if order == DepthFirstOrder::InOrder {
        elements.add_to_rear(node.element());
    }
    collect_depth_first(node.right(), order, elements);
    if order == DepthFirstOrder::PostOrder {
        elements.add_to_rear(node.element());
    }
}

/// Materializes the elements below `root` breadth-first in linear time.
///
/// The queue is seeded with `root` even if it is absent. Each dequeued node
/// emits its element and enqueues both child links, present or not; each
/// dequeued absent link emits `None`.
pub(crate) fn level_order<T>(root: Option<&BinaryTreeNode<T>>) -> ArrayList<Option<&T>> {
    let mut nodes = ArrayList::new();
    let mut elements = ArrayList::new();
    nodes.add_to_rear(root);

    // The queue only grows; `head` marks the next link to dequeue
    let mut head = 0;
    while let Some(&current) = nodes.get(head) {
        head += 1;
        match current {
            Some(node) => {
                elements.add_to_rear(Some(node.element()));
                nodes.add_to_rear(node.left());
                nodes.add_to_rear(node.right());
            }
            None => elements.add_to_rear(None),
        }
    }

    trace!(items = elements.size(), "materialized level-order traversal");
    elements
}

// =#========================================================================#=
// TRAVERSAL ITERATOR
// =#========================================================================#=
/// Fail-fast iterator over a materialized traversal of a tree.
///
/// Captures the tree's modification count at creation and checks it on every
/// call. The materialized sequence itself never changes.
pub struct TraversalIter<'a, I> {
    items: ArrayList<I>,
    cursor: Cursor,
    expected_mods: ModCount,
    tree_mods: &'a ModCount,
}

impl<'a, I> TraversalIter<'a, I> {
    pub(crate) fn new(items: ArrayList<I>, tree_mods: &'a ModCount) -> Self {
        let cursor = items.cursor();
        TraversalIter {
            items,
            cursor,
            expected_mods: *tree_mods,
            tree_mods,
        }
    }

    /// Returns whether at least one more item can be delivered.
    ///
    /// # Errors
    /// `ConcurrentModification` if the tree changed since creation.
    pub fn has_next(&self) -> CollectionResult<bool> {
        check_mod_count(self.expected_mods, *self.tree_mods, TREE)?;
        self.cursor.has_next(&self.items)
    }

    /// Returns the next item of the traversal.
    ///
    /// # Errors
    /// * `ConcurrentModification` if the tree changed since creation
    /// * `NoSuchElement` if all items have been delivered
    pub fn try_next(&mut self) -> CollectionResult<I>
    where
        I: Clone,
    {
        if !self.has_next()? {
            return Err(CollectionError::no_such_element(TREE));
        }
        self.cursor.next(&self.items).cloned()
    }

    /// Removal through a traversal is not supported.
    ///
    /// # Errors
    /// Always fails with `UnsupportedOperation`.
    pub fn remove(&mut self) -> CollectionResult<()> {
        Err(CollectionError::unsupported_operation(TREE))
    }

    /// Returns the number of items not yet delivered.
    pub fn remaining(&self) -> usize {
        self.items.size() - self.cursor.position()
    }
}

impl<I: Clone> Iterator for TraversalIter<'_, I> {
    type Item = I;

    /// # Panics
    /// Panics if the tree was modified since this iterator was created.
    fn next(&mut self) -> Option<Self::Item> {
        match self.has_next() {
            Ok(true) => self.try_next().ok(),
            Ok(false) => None,
            Err(err) => panic!("{err}"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}
