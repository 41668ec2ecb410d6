//! Provides the linked binary tree and its structural queries.
//!
//! * [BinaryTree] - query and traversal operations over a node graph
//! * [LinkedBinaryTree] - tree owning its node graph
//! * [TreeView] - borrowed view of a subtree of another tree

use crate::error::{CollectionError, CollectionResult};
use crate::iter::ModCount;
use crate::model::node::BinaryTreeNode;
use crate::model::traversal::{self, DepthFirstOrder, TraversalIter};
use std::fmt;
use tracing::trace;

/// Name reported by errors raised from a tree or its iterators.
pub(crate) const TREE: &str = "LinkedBinaryTree";

// =#========================================================================#=
// BINARY TREE (Trait)
// =#========================================================================T=
/// Query and traversal operations of a binary tree.
///
/// Implementors only expose their root node and modification count; all
/// operations are provided on top of these by walking the node graph.
pub trait BinaryTree<T> {
    /// Returns the root node, or `None` if the tree is empty.
    fn root_node(&self) -> Option<&BinaryTreeNode<T>>;

    /// Returns the modification count checked by traversal iterators.
    fn mod_count(&self) -> &ModCount;

    /// Returns a reference to the element at the root.
    ///
    /// # Errors
    /// `EmptyCollection` if the tree is empty.
    fn get_root_element(&self) -> CollectionResult<&T> {
        self.root_node()
            .map(BinaryTreeNode::element)
            .ok_or_else(|| CollectionError::empty_collection(TREE))
    }

    /// Returns `true` if this tree has no root.
    fn is_empty(&self) -> bool {
        self.root_node().is_none()
    }

    /// Returns the number of nodes, i.e. the root plus all of its descendants.
    ///
    /// # Errors
    /// `EmptyCollection` if the tree is empty.
    fn size(&self) -> CollectionResult<usize> {
        self.root_node()
            .map(|root| root.num_children() + 1)
            .ok_or_else(|| CollectionError::empty_collection(TREE))
    }

    /// Returns the height of this tree (`0` for a single node, `-1` if empty).
    fn get_height(&self) -> isize {
        height(self.root_node())
    }

    /// Returns the number of nodes without children.
    fn count_leaf_nodes(&self) -> usize {
        count_leaves(self.root_node())
    }

    /// Returns the number of nodes with exactly one child.
    fn count_one_child_nodes(&self) -> usize {
        count_one_child(self.root_node())
    }

    /// Returns whether some node holds an element equal to `target`.
    fn contains(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        find_node(self.root_node(), target).is_some()
    }

    /// Returns a reference to the first element equal to `target`,
    /// searching depth-first (node, left subtree, right subtree).
    ///
    /// # Errors
    /// `ElementNotFound` if no node holds such an element.
    fn find(&self, target: &T) -> CollectionResult<&T>
    where
        T: PartialEq,
    {
        find_node(self.root_node(), target)
            .map(BinaryTreeNode::element)
            .ok_or_else(|| CollectionError::element_not_found(TREE))
    }

    /// Returns a view of the left subtree of the root (empty if absent).
    fn get_left(&self) -> TreeView<'_, T> {
        TreeView::new(self.root_node().and_then(BinaryTreeNode::left), self.mod_count())
    }

    /// Returns a view of the right subtree of the root (empty if absent).
    fn get_right(&self) -> TreeView<'_, T> {
        TreeView::new(self.root_node().and_then(BinaryTreeNode::right), self.mod_count())
    }

    /// Returns an iterator over the elements in the default order (in-order).
    fn iter(&self) -> TraversalIter<'_, &T> {
        self.iter_in_order()
    }

    /// Returns an iterator over the elements in the given depth-first order.
    fn iter_depth_first(&self, order: DepthFirstOrder) -> TraversalIter<'_, &T> {
        TraversalIter::new(
            traversal::depth_first(self.root_node(), order),
            self.mod_count(),
        )
    }

    /// Returns an iterator over the elements in-order
    /// (left subtree, node, right subtree).
    fn iter_in_order(&self) -> TraversalIter<'_, &T> {
        self.iter_depth_first(DepthFirstOrder::InOrder)
    }

    /// Returns an iterator over the elements in pre-order
    /// (node, left subtree, right subtree).
    fn iter_pre_order(&self) -> TraversalIter<'_, &T> {
        self.iter_depth_first(DepthFirstOrder::PreOrder)
    }

    /// Returns an iterator over the elements in post-order
    /// (left subtree, right subtree, node).
    fn iter_post_order(&self) -> TraversalIter<'_, &T> {
        self.iter_depth_first(DepthFirstOrder::PostOrder)
    }

    /// Returns an iterator over the tree level by level.
    ///
    /// Yields `None` for each absent child link reached, including the
    /// missing children of leaves, so the output records the tree's shape.
    /// An empty tree yields a single `None`.
    ///
    /// # Example
    /// ```
    /// use bintree_collections::model::{BinaryTree, LinkedBinaryTree};
    ///
    /// let tree = LinkedBinaryTree::with_subtrees(
    ///     1,
    ///     Some(LinkedBinaryTree::with_root(2)),
    ///     None,
    /// );
    /// let levels: Vec<_> = tree.iter_level_order().collect();
    /// assert_eq!(levels, [Some(&1), Some(&2), None, None, None]);
    /// ```
    fn iter_level_order(&self) -> TraversalIter<'_, Option<&T>> {
        TraversalIter::new(traversal::level_order(self.root_node()), self.mod_count())
    }
}

// ============================================================================
// Recursive queries (private)
// ============================================================================
fn height<T>(node: Option<&BinaryTreeNode<T>>) -> isize {
    match node {
        None => -1,
        Some(node) => {
            let height_left = 1 + height(node.left());
            let height_right = 1 + height(node.right());
            height_left.max(height_right)
        }
    }
}

fn count_leaves<T>(node: Option<&BinaryTreeNode<T>>) -> usize {
    match node {
        None => 0,
        Some(node) if node.is_leaf() => 1,
        Some(node) => count_leaves(node.left()) + count_leaves(node.right()),
    }
}

fn count_one_child<T>(node: Option<&BinaryTreeNode<T>>) -> usize {
    match node {
        None => 0,
        Some(node) => {
            let below = count_one_child(node.left()) + count_one_child(node.right());
            if node.has_one_child() { below + 1 } else { below }
        }
    }
}

fn find_node<'a, T: PartialEq>(
    node: Option<&'a BinaryTreeNode<T>>,
    target: &T,
) -> Option<&'a BinaryTreeNode<T>> {
    let node = node?;
    if node.element() == target {
        return Some(node);
    }
    find_node(node.left(), target).or_else(|| find_node(node.right(), target))
}

/// Writes the in-order traversal as `[e1 e2 ... en]`.
fn fmt_in_order<T: fmt::Display>(
    root: Option<&BinaryTreeNode<T>>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let elements = traversal::depth_first(root, DepthFirstOrder::InOrder);
    write!(f, "[")?;
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{element}")?;
    }
    write!(f, "]")
}

// =$========================================================================$=
// LINKED BINARY TREE
// =$========================================================================$=
/// A binary tree owning its node graph through boxed child links.
///
/// # Construction
/// Trees are built bottom-up: start from single-element trees and compose
/// them with [LinkedBinaryTree::with_subtrees], which *moves* the root nodes
/// of the given trees into the new one. Clone a tree first to keep using it
/// independently.
///
/// # Example
/// ```
/// use bintree_collections::model::{BinaryTree, LinkedBinaryTree};
///
/// let left = LinkedBinaryTree::with_subtrees(
///     10,
///     Some(LinkedBinaryTree::with_root(20)),
///     Some(LinkedBinaryTree::with_root(40)),
/// );
/// let right = LinkedBinaryTree::with_subtrees(20, None, Some(LinkedBinaryTree::with_root(20)));
/// let tree = LinkedBinaryTree::with_subtrees(61, Some(left), Some(right));
///
/// assert_eq!(tree.size().unwrap(), 6);
/// assert_eq!(tree.get_height(), 2);
/// assert_eq!(tree.to_string(), "[20 10 40 61 20 20]");
/// ```
#[derive(Debug, Clone)]
pub struct LinkedBinaryTree<T> {
    /// Root node; `None` for the empty tree
    root: Option<Box<BinaryTreeNode<T>>>,

    /// Structural modifications of the node graph so far
    mod_count: ModCount,
}

// ============================================================================
// New, Composition, etc. (pub)
// ============================================================================
impl<T> LinkedBinaryTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        LinkedBinaryTree {
            root: None,
            mod_count: ModCount::new(),
        }
    }

    /// Creates a tree holding only `element` as its root.
    pub fn with_root(element: T) -> Self {
        LinkedBinaryTree {
            root: Some(Box::new(BinaryTreeNode::new(element))),
            mod_count: ModCount::new(),
        }
    }

    /// Creates a tree with `element` at its root and the given trees
    /// as its left and right subtrees.
    ///
    /// Takes ownership of `left` and `right`; their node graphs become part
    /// of the new tree. `None` and empty trees both leave the child absent.
    pub fn with_subtrees(element: T, left: Option<Self>, right: Option<Self>) -> Self {
        let mut tree = Self::with_root(element);
        tree.attach_left(left.and_then(|subtree| subtree.root));
        tree.attach_right(right.and_then(|subtree| subtree.root));
        trace!(mods = tree.mod_count.value(), "composed tree from subtrees");
        tree
    }

    /// Splits this tree into its root element and its left and right subtrees.
    ///
    /// # Returns
    /// `None` if the tree is empty, else `(element, left, right)`, where an
    /// absent child becomes an empty tree.
    pub fn into_parts(self) -> Option<(T, Self, Self)> {
        let root = self.root?;
        let (element, left, right) = (*root).into_parts();
        Some((element, Self::from_node(left), Self::from_node(right)))
    }

    fn from_node(root: Option<Box<BinaryTreeNode<T>>>) -> Self {
        LinkedBinaryTree {
            root,
            mod_count: ModCount::new(),
        }
    }

    fn attach_left(&mut self, node: Option<Box<BinaryTreeNode<T>>>) {
        if let Some(root) = self.root.as_mut() {
            root.set_left(node);
            self.mod_count.bump();
        }
    }

    fn attach_right(&mut self, node: Option<Box<BinaryTreeNode<T>>>) {
        if let Some(root) = self.root.as_mut() {
            root.set_right(node);
            self.mod_count.bump();
        }
    }
}

impl<T> BinaryTree<T> for LinkedBinaryTree<T> {
    fn root_node(&self) -> Option<&BinaryTreeNode<T>> {
        self.root.as_deref()
    }

    fn mod_count(&self) -> &ModCount {
        &self.mod_count
    }
}

impl<T> Default for LinkedBinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Trees are equal if their node graphs have the same shape and elements.
impl<T: PartialEq> PartialEq for LinkedBinaryTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl<T: fmt::Display> fmt::Display for LinkedBinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_in_order(self.root_node(), f)
    }
}

impl<'a, T> IntoIterator for &'a LinkedBinaryTree<T> {
    type Item = &'a T;
    type IntoIter = TraversalIter<'a, &'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =$========================================================================$=
// TREE VIEW
// =$========================================================================$=
/// Borrowed view of a subtree owned by another tree.
///
/// Obtained via [BinaryTree::get_left] and [BinaryTree::get_right]. A view
/// never owns nodes and cannot outlive nor modify the tree it borrows from.
pub struct TreeView<'a, T> {
    root: Option<&'a BinaryTreeNode<T>>,
    mod_count: &'a ModCount,
}

impl<'a, T> TreeView<'a, T> {
    fn new(root: Option<&'a BinaryTreeNode<T>>, mod_count: &'a ModCount) -> Self {
        TreeView { root, mod_count }
    }

    /// Copies the viewed subtree into a new, independently owned tree.
    pub fn to_owned_tree(&self) -> LinkedBinaryTree<T>
    where
        T: Clone,
    {
        LinkedBinaryTree::from_node(self.root.map(|node| Box::new(node.clone())))
    }
}

impl<T> Clone for TreeView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TreeView<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for TreeView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeView").field("root", &self.root).finish()
    }
}

impl<T> BinaryTree<T> for TreeView<'_, T> {
    fn root_node(&self) -> Option<&BinaryTreeNode<T>> {
        self.root
    }

    fn mod_count(&self) -> &ModCount {
        self.mod_count
    }
}

impl<T: fmt::Display> fmt::Display for TreeView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_in_order(self.root, f)
    }
}
