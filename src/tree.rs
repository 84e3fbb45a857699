//! A parentless, unbalanced BST over `i32` values. Every `Node` owns its children through a
//! `Box` and nothing points back up the tree, so every operation is a walk down from the root.
//!
//! # Examples
//!
//! ```
//! use parentless::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(1));
//!
//! // Inserting the same value again changes nothing.
//! assert!(!tree.insert(1));
//!
//! // Removing a value reports whether it was there.
//! assert!(tree.remove(1));
//! assert!(!tree.remove(1));
//! assert!(!tree.contains(1));
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

/// An owning pointer to a subtree. `None` is the empty slot at the bottom of a subtree.
type Link = Option<Box<Node>>;

/// An unbalanced Binary Search Tree of distinct `i32` values. This can be used for inserting,
/// finding, and removing values, and for finding the lowest common ancestor of two values.
///
/// Lookups, mutation and `Drop` are loops, so any height is fine for them. `Clone` and `Debug`
/// recurse once per level and need a stack deep enough for the tree's height.
pub struct Tree {
    root: Link,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Tree {
    // The derived drop recurses once per level which overflows the stack on a long, one-sided
    // tree, so nodes are unlinked onto a heap stack and dropped childless instead.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Clone for Tree {
    fn clone(&self) -> Self {
        Self {
            root: clone_link(&self.root),
        }
    }
}

fn clone_link(link: &Link) -> Link {
    link.as_deref().map(|node| {
        Box::new(Node {
            value: node.value,
            left: clone_link(&node.left),
            right: clone_link(&node.right),
        })
    })
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

impl Extend<i32> for Tree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<i32> for Tree {
    /// Builds a tree by inserting the values in iteration order, so the order decides the shape.
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Tree {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the value into the tree as a new leaf. Returns `false` (and leaves the tree alone)
    /// if the value was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use parentless::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    ///
    /// assert!(tree.contains(1));
    /// assert!(tree.contains(2));
    /// ```
    pub fn insert(&mut self, value: i32) -> bool {
        let slot = locate(&mut self.root, value);
        if slot.is_some() {
            return false;
        }

        trace!(value, "attaching leaf");
        *slot = Some(Node::new_boxed(value));
        true
    }

    /// Returns `true` if a node holding exactly this value is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use parentless::Tree;
    ///
    /// let tree: Tree = vec![5, 3, 7].into_iter().collect();
    ///
    /// assert!(tree.contains(3));
    /// assert!(!tree.contains(4));
    /// ```
    pub fn contains(&self, value: i32) -> bool {
        self.find(value).is_some()
    }

    /// Removes the node holding the value. Returns `false` if there was no such node, in which
    /// case nothing happens.
    ///
    /// A node with two children isn't unlinked itself. It takes the value of its in-order
    /// successor (the smallest value in its right subtree) and that successor is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use parentless::Tree;
    ///
    /// let mut tree: Tree = vec![5, 3, 7].into_iter().collect();
    ///
    /// assert!(tree.remove(5));
    /// assert!(!tree.contains(5));
    /// assert!(tree.contains(3));
    /// assert!(tree.contains(7));
    ///
    /// assert!(!tree.remove(42));
    /// ```
    pub fn remove(&mut self, value: i32) -> bool {
        remove_from(&mut self.root, value)
    }

    /// Finds the deepest node that is an ancestor of both the node holding `a` and the node
    /// holding `b`. A node counts as its own ancestor, so if `a` is above `b` the node holding `a`
    /// is returned, and `ancestor(a, a)` is the node holding `a`.
    ///
    /// Returns `None` unless both values are in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use parentless::Tree;
    ///
    /// let tree: Tree = vec![5, 3, 2, 4, 7, 6, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.ancestor(6, 8).map(|n| n.value()), Some(7));
    /// assert_eq!(tree.ancestor(2, 8).map(|n| n.value()), Some(5));
    /// assert_eq!(tree.ancestor(3, 4).map(|n| n.value()), Some(3));
    /// assert!(tree.ancestor(2, 20).is_none());
    /// ```
    pub fn ancestor(&self, a: i32, b: i32) -> Option<&Node> {
        // The split point below is only meaningful for values that are really in the tree.
        if !self.contains(a) || !self.contains(b) {
            return None;
        }

        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let mut node = self.root.as_deref()?;
        loop {
            node = if high < node.value {
                node.left.as_deref()?
            } else if low > node.value {
                node.right.as_deref()?
            } else {
                return Some(node);
            };
        }
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<i32> {
        self.root.as_deref().map(|n| n.leftmost().value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<i32> {
        self.root.as_deref().map(|n| n.rightmost().value)
    }

    fn find(&self, value: i32) -> Option<&Node> {
        let mut node = self.root.as_deref()?;
        loop {
            node = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref()?,
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.as_deref()?,
            };
        }
    }
}

/// Walks down from `link` and returns the slot that holds `value`, or the empty slot where it
/// would be attached if it isn't in the subtree.
fn locate(mut link: &mut Link, value: i32) -> &mut Link {
    // Compare under a shared borrow, then move `link` into the match so only one mutable
    // borrow of the slot is ever live.
    while let Some(next) = link.as_ref().map(|n| value.cmp(&n.value)) {
        link = match (next, link) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
    link
}

fn remove_from(link: &mut Link, value: i32) -> bool {
    let slot = locate(link, value);
    let mut target = match slot.take() {
        Some(target) => target,
        None => return false,
    };

    *slot = match (target.left.take(), target.right.take()) {
        (None, None) => {
            trace!(value, "detaching leaf");
            None
        }
        (Some(child), None) | (None, Some(child)) => {
            trace!(value, child = child.value, "splicing child into parent slot");
            Some(child)
        }
        (left, right @ Some(_)) => {
            target.left = left;
            target.right = right;

            // The successor has no left child so this second removal is a leaf or a splice.
            if let Some(successor) = target.right.as_deref().map(|n| n.leftmost().value) {
                trace!(value, successor, "promoting in-order successor");
                target.value = successor;
                remove_from(&mut target.right, successor);
            }
            Some(target)
        }
    };
    true
}

/// A `Node` holds a value and up to two children. The handle is read only: callers can look at
/// the value of a `Node` returned by [`Tree::ancestor`] but can't change the tree through it, or
/// copy a subtree out of it.
pub struct Node {
    value: i32,
    left: Link,
    right: Link,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl Node {
    fn new_boxed(value: i32) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> i32 {
        self.value
    }

    fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }
}

/// In-order walk of the whole tree. Test only: the crate deliberately has no traversal API.
#[cfg(test)]
pub(crate) fn in_order(tree: &Tree) -> Vec<i32> {
    let mut values = Vec::new();
    let mut stack = Vec::new();
    let mut current = tree.root.as_deref();
    while current.is_some() || !stack.is_empty() {
        while let Some(node) = current {
            stack.push(node);
            current = node.left.as_deref();
        }
        if let Some(node) = stack.pop() {
            values.push(node.value);
            current = node.right.as_deref();
        }
    }
    values
}

/// Values on the way from the root down to `value`, inclusive. Empty if `value` is missing.
#[cfg(test)]
pub(crate) fn path_to(tree: &Tree, value: i32) -> Vec<i32> {
    let mut path = Vec::new();
    let mut current = tree.root.as_deref();
    while let Some(node) = current {
        path.push(node.value);
        current = match value.cmp(&node.value) {
            Ordering::Less => node.left.as_deref(),
            Ordering::Equal => return path,
            Ordering::Greater => node.right.as_deref(),
        };
    }
    Vec::new()
}
