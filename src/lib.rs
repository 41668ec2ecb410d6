//! Bintree-collections is a small library of generic collections:
//! an array-backed unordered list and a linked binary tree.
//!
//! Core functionality provided:
//! - List: [ArrayList] with insertion at front, rear, or after a target,
//!   removal at front, rear, or by value, and order-preserving shifts.
//!   See [crate::list] for details.
//! - Tree: [LinkedBinaryTree] built bottom-up from subtrees, with
//!   structural queries (size, height, leaf and one-child counts),
//!   containment and search.
//! - Traversals: in-order (default), pre-order, post-order, and level-order
//!   iterators. See [crate::model] for details.
//! - Fail-fast iteration: iterators capture the modification count of their
//!   collection and report a concurrent modification instead of returning
//!   stale results. See [crate::iter].
//!
//! Limitations:
//! - Trees provide no insertion or removal after construction
//! - No balancing; this is not a search tree
//! - Not thread-safe
//!
//! # Ownership
//! Composing a tree with [LinkedBinaryTree::with_subtrees] moves the given
//! subtrees into the new tree. [get_left](BinaryTree::get_left) and
//! [get_right](BinaryTree::get_right) return [TreeView]s borrowing the tree,
//! so a view can never outlive the nodes it shows.
//!
//! # Example
//! ```
//! use bintree_collections::{BinaryTree, LinkedBinaryTree};
//!
//! let tree = LinkedBinaryTree::with_subtrees(
//!     "Kiwi",
//!     Some(LinkedBinaryTree::with_root("Kakapo")),
//!     Some(LinkedBinaryTree::with_root("Tui")),
//! );
//!
//! assert_eq!(tree.size()?, 3);
//! assert_eq!(tree.count_leaf_nodes(), 2);
//! assert_eq!(tree.to_string(), "[Kakapo Kiwi Tui]");
//!
//! let pre_order: Vec<_> = tree.iter_pre_order().collect();
//! assert_eq!(pre_order, [&"Kiwi", &"Kakapo", &"Tui"]);
//! # Ok::<(), bintree_collections::CollectionError>(())
//! ```

pub mod error;
pub mod iter;
pub mod list;
pub mod model;

pub use error::{CollectionError, CollectionErrorKind, CollectionResult};
pub use list::{ArrayList, List, UnorderedList};
pub use model::{BinaryTree, BinaryTreeNode, DepthFirstOrder, LinkedBinaryTree, TreeView};
