//! Node module for the linked binary tree.

// =#========================================================================#=
// BINARY TREE NODE
// =#========================================================================#=
/// A node of a binary tree holding one element and owning up to two children.
///
/// # Invariants
/// - Each node is owned by exactly one parent link (or by a tree as root),
///   so a node graph is always acyclic.
/// - No order is maintained among elements; this is not a search tree.
/// - Child links change only while a tree is composed from subtrees.
///
/// `Clone` copies the whole subtree below this node.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct BinaryTreeNode<T> {
    /// Element stored at this node
    element: T,
    /// Root of the left subtree, if any
    left: Option<Box<BinaryTreeNode<T>>>,
    /// Root of the right subtree, if any
    right: Option<Box<BinaryTreeNode<T>>>,
}

impl<T> BinaryTreeNode<T> {
    /// Creates a new node without children.
    pub fn new(element: T) -> Self {
        BinaryTreeNode {
            element,
            left: None,
            right: None,
        }
    }

    /// Creates a new node taking ownership of the given child nodes.
    ///
    /// # Arguments
    /// * `element` - The element stored at the new node
    /// * `left` - Root of the left subtree, or `None`
    /// * `right` - Root of the right subtree, or `None`
    pub fn with_children(element: T, left: Option<Self>, right: Option<Self>) -> Self {
        BinaryTreeNode {
            element,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Returns a reference to the element stored at this node.
    pub fn element(&self) -> &T {
        &self.element
    }

    /// Returns the left child, or `None` if absent.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child, or `None` if absent.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns the number of descendants of this node.
    ///
    /// Each present child contributes one plus its own number of
    /// descendants, so the result covers the entire subtree below this node
    /// and not only the direct children.
    pub fn num_children(&self) -> usize {
        let mut children = 0;
        if let Some(left) = self.left() {
            children += 1 + left.num_children();
        }
        if let Some(right) = self.right() {
            children += 1 + right.num_children();
        }
        children
    }

    /// Returns `true` if this node has neither a left nor a right child.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns `true` if exactly one of the two children is present.
    pub fn has_one_child(&self) -> bool {
        self.left.is_some() != self.right.is_some()
    }

    /// Replaces the left subtree.
    pub(crate) fn set_left(&mut self, node: Option<Box<Self>>) {
        self.left = node;
    }

    /// Replaces the right subtree.
    pub(crate) fn set_right(&mut self, node: Option<Box<Self>>) {
        self.right = node;
    }

    /// Splits this node into its element and its two subtrees.
    pub(crate) fn into_parts(self) -> (T, Option<Box<Self>>, Option<Box<Self>>) {
        (self.element, self.left, self.right)
    }
}
