//! # rbt-rs
//!
//! An ordered set backed by a red-black tree.
//!
//! Insertion descends like a plain binary search tree, hangs a new red node at
//! the bottom, and repairs the colouring on the way back up. The repair runs
//! once per level of the recursion, so the whole path from the new node to the
//! root is fixed in a single pass without a parent pointer or an explicit stack.
//!
//! ## Example
//!
//! ```rust
//! use rbt_rs::RbTree;
//!
//! let mut tree = RbTree::new();
//! tree.insert(10);
//! tree.insert(12);
//! tree.insert(11);
//!
//! assert!(tree.contains(&11));
//! assert!(!tree.contains(&13));
//! assert_eq!(tree.serialize(), vec![10, 11, 12]);
//! assert_eq!(tree.max_height(), 2);
//! ```

#![deny(unsafe_code)]

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

mod node;
#[cfg(feature = "serde")]
mod serde_impl;

pub use node::{is_red, Color, Link, Node};

macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

// =============================================================================
// Structural primitives
// =============================================================================

//              h                           top
//             / \                          / \
//            a   top         =>           h   c
//               /   \                    / \
//              b     c                  a   b
//
/// Rotates the subtree at `h` to the left and returns the new top. Colours are
/// left alone; the caller reattaches the returned node in `h`'s old slot.
fn rotate_left<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut top) = h.take_right() else {
        return h;
    };
    h.set_right(top.take_left());
    top.set_left(Some(h));
    top
}

//              h                       top
//             / \                      / \
//           top  c         =>         a   h
//           / \                          / \
//          a   b                        b   c
//
/// Mirror of [`rotate_left`].
fn rotate_right<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut top) = h.take_left() else {
        return h;
    };
    h.set_left(top.take_right());
    top.set_right(Some(h));
    top
}

/// Inverts the colour of `h` and of both its children.
fn flip_colors<K>(h: &mut Node<K>) {
    h.set_color(h.color().flip());
    if let Some(left) = h.left_mut() {
        left.set_color(left.color().flip());
    }
    if let Some(right) = h.right_mut() {
        right.set_color(right.color().flip());
    }
}

// The promoted child inherits `h`'s colour and `h` turns red, so black height
// through the subtree is unchanged by the rotation that follows.

fn promote_right<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    let color = h.color();
    if let Some(child) = h.right_mut() {
        child.set_color(color);
    }
    h.set_color(Color::Red);
    trace_event!("rotate left");
    rotate_left(h)
}

fn promote_left<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    let color = h.color();
    if let Some(child) = h.left_mut() {
        child.set_color(color);
    }
    h.set_color(Color::Red);
    trace_event!("rotate right");
    rotate_right(h)
}

/// Repairs the subtree at `h` after one of its children was rebuilt by an
/// insertion. Every rule is re-checked against the current top, so a single
/// call may fire several of them.
fn fix_up<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    // Right lean.
    if is_red(h.right()) && !is_red(h.left()) {
        h = promote_right(h);
    }
    // Left lean.
    if is_red(h.left()) && !is_red(h.right()) {
        h = promote_left(h);
    }
    // Two reds in a row on the left.
    if is_red(h.left()) && is_red(h.left().and_then(Node::left)) {
        h = promote_left(h);
    }
    // Two reds in a row on the right.
    if is_red(h.right()) && is_red(h.right().and_then(Node::right)) {
        h = promote_right(h);
    }
    // Both children red: push the red up to the caller's level.
    if is_red(h.left()) && is_red(h.right()) {
        trace_event!("color flip");
        flip_colors(&mut h);
    }
    h
}

fn height<K>(node: Option<&Node<K>>) -> usize {
    match node {
        None => 0,
        Some(n) => 1 + height(n.left()).max(height(n.right())),
    }
}

// =============================================================================
// RbTree
// =============================================================================

/// An ordered set of keys kept in a red-black tree.
///
/// Keys are compared with their [`Ord`] implementation. The tree holds no
/// internal synchronisation; share it across threads behind a lock.
#[derive(Clone)]
pub struct RbTree<K> {
    root: Link<K>,
    count: usize,
}

impl<K> RbTree<K> {
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
        }
    }

    /// Number of distinct keys stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Read-only view of the root node, `None` for an empty tree.
    #[inline]
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Number of nodes on the longest root-to-leaf path. An empty tree has
    /// height 0 and a single node has height 1.
    pub fn max_height(&self) -> usize {
        height(self.root())
    }

    /// In-order iterator over the keys, smallest first.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.count,
        };
        iter.push_left_spine(self.root());
        iter
    }

    /// All keys in ascending order.
    pub fn serialize(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<K: Ord> RbTree<K> {
    /// Returns `true` if `key` is stored in the tree.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Adds `key` to the tree. Returns `false`, leaving the tree untouched,
    /// if an equal key is already present.
    pub fn insert(&mut self, key: K) -> bool {
        let mut inserted = false;
        let mut root = Self::insert_at(self.root.take(), key, &mut inserted);
        root.set_color(Color::Black);
        self.root = Some(root);

        if inserted {
            self.count += 1;
            debug_event!(len = self.count, "inserted key");
        }
        inserted
    }

    fn insert_at(link: Link<K>, key: K, inserted: &mut bool) -> Box<Node<K>> {
        let Some(mut node) = link else {
            *inserted = true;
            trace_event!("new red node");
            return Box::new(Node::new(key, Color::Red));
        };

        match key.cmp(node.key()) {
            Ordering::Less => {
                let left = node.take_left();
                node.set_left(Some(Self::insert_at(left, key, inserted)));
            }
            Ordering::Greater => {
                let right = node.take_right();
                node.set_right(Some(Self::insert_at(right, key, inserted)));
            }
            Ordering::Equal => return node,
        }

        if *inserted {
            fix_up(node)
        } else {
            node
        }
    }
}

impl<K> Default for RbTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for RbTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> FromIterator<K> for RbTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for RbTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a RbTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

/// In-order iterator returned by [`RbTree::iter`].
pub struct Iter<'a, K> {
    /// Nodes whose key is still to be yielded; the top is the next smallest.
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}
