//! Data model for linked binary trees.
//!
//! # Tree representation
//! A tree is a graph of [BinaryTreeNode]s, each owning its optional left and
//! right child through a boxed link. Two tree handles are provided:
//!
//! | Type | Ownership | Obtained from |
//! |------|-----------|---------------|
//! | [LinkedBinaryTree] | owns its root node | constructors, composition |
//! | [TreeView] | borrows a subtree | [BinaryTree::get_left], [BinaryTree::get_right] |
//!
//! Both implement [BinaryTree], which provides all queries and traversals.
//!
//! # Building trees
//! Trees are built bottom-up:
//! 1. [LinkedBinaryTree::with_root] for a single node
//! 2. [LinkedBinaryTree::with_subtrees] to put a new root above two trees,
//!    moving their nodes into the new tree
//!
//! [LinkedBinaryTree::into_parts] undoes the last composition step.
//!
//! # Traversals
//! Each traversal is materialized into an
//! [ArrayList](crate::list::ArrayList) before a [TraversalIter] is returned:
//!
//! | Method | Order | Item |
//! |--------|-------|------|
//! | [iter](BinaryTree::iter) | in-order | `&T` |
//! | [iter_in_order](BinaryTree::iter_in_order) | left, node, right | `&T` |
//! | [iter_pre_order](BinaryTree::iter_pre_order) | node, left, right | `&T` |
//! | [iter_post_order](BinaryTree::iter_post_order) | left, right, node | `&T` |
//! | [iter_level_order](BinaryTree::iter_level_order) | breadth-first | `Option<&T>` |

pub mod node;
pub mod traversal;
pub mod tree;

pub use node::BinaryTreeNode;
pub use traversal::DepthFirstOrder;
pub use traversal::TraversalIter;
pub use tree::BinaryTree;
pub use tree::LinkedBinaryTree;
pub use tree::TreeView;
