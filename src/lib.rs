//! This crate exposes an unbalanced Binary Search Tree, [`OrderedTree`], mostly for educational
//! purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree does nothing to limit its
//! height, so inserting sorted values builds a path of height `N - 1`. BSTs also
//! naturally support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree. [`OrderedTree`] offers that walk and five others
//! (see [`traversal`]) along with a drawing of its shape (see [`render`]).
//!
//! ## Removal
//!
//! [`OrderedTree::remove`] deletes a single node. [`OrderedTree::kill`] deletes the
//! matched node *and its entire subtree*.
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree: OrderedTree<_> = [50, 25, 75, 15, 30, 60, 80].into_iter().collect();
//! assert_eq!(tree.size(), 7);
//! assert_eq!(tree.height(), 2);
//!
//! let mut killed = tree.clone();
//! assert!(killed.kill(&25));
//! assert_eq!(killed.size(), 4);
//!
//! assert!(tree.remove(&25));
//! assert_eq!(tree.size(), 6);
//! ```

#![deny(missing_docs)]

pub mod degree;
pub mod error;
pub mod path;
pub mod render;
pub mod traversal;
mod tree;

pub use degree::Degree;
pub use error::InvariantError;
pub use path::{Direction, Path};
pub use render::{Diagram, RenderConfig};
pub use traversal::{Order, Side, Traversal};
pub use tree::OrderedTree;
