//! A parentless Binary Search Tree (BST) over plain integers, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! ## Parentless
//!
//! The `Node`s in this crate only know about their children. There is no pointer back up to a
//! parent, so deletion and the lowest common ancestor query are both driven purely by walking
//! down from the root and comparing values. Searching takes `O(height)` and, because the tree
//! never rebalances, the height depends entirely on insertion order.
//!
//! ## Threads
//!
//! A [`Tree`] has no internal locking. It is `Send` and `Sync` like any other owned data, but
//! mutation needs `&mut Tree`, so callers sharing a tree between threads have to serialize access
//! themselves (a `Mutex`, for example).
//!
//! # Examples
//!
//! ```
//! use parentless::Tree;
//!
//! let tree: Tree = [5, 3, 2, 4, 7, 6, 8].iter().copied().collect();
//!
//! assert!(tree.contains(4));
//! assert_eq!(tree.ancestor(6, 8).map(|n| n.value()), Some(7));
//! assert_eq!(tree.ancestor(2, 8).map(|n| n.value()), Some(5));
//! assert!(tree.ancestor(2, 20).is_none());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod tree;


pub use tree::{Node, Tree};
