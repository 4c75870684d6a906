//! Node model shared by the tree engine and external checkers.
//!
//! A node is a passive record: a colour tag, a key and two owning child links.
//! An absent child is `None` and counts as black wherever colour is queried.

/// Owning link from a parent (or the tree's root slot) to a child.
pub type Link<K> = Option<Box<Node<K>>>;

/// Colour tag carried by every node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns the opposite colour.
    #[inline]
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// `true` only for a present node coloured red. Absent children are black.
#[inline]
pub fn is_red<K>(node: Option<&Node<K>>) -> bool {
    matches!(node, Some(n) if n.color == Color::Red)
}

/// A single tree node. Keys smaller than `key` live under `left`, larger under `right`.
#[derive(Clone, Debug)]
pub struct Node<K> {
    color: Color,
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    /// Creates a childless node with the requested colour.
    pub fn new(key: K, color: Color) -> Self {
        Self {
            color,
            key,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    #[inline]
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    #[inline]
    pub fn left_mut(&mut self) -> Option<&mut Node<K>> {
        self.left.as_deref_mut()
    }

    #[inline]
    pub fn right_mut(&mut self) -> Option<&mut Node<K>> {
        self.right.as_deref_mut()
    }

    /// Replaces the left link, returning the previous one.
    #[inline]
    pub fn set_left(&mut self, child: Link<K>) -> Link<K> {
        std::mem::replace(&mut self.left, child)
    }

    /// Replaces the right link, returning the previous one.
    #[inline]
    pub fn set_right(&mut self, child: Link<K>) -> Link<K> {
        std::mem::replace(&mut self.right, child)
    }

    #[inline]
    pub fn take_left(&mut self) -> Link<K> {
        self.left.take()
    }

    #[inline]
    pub fn take_right(&mut self) -> Link<K> {
        self.right.take()
    }
}
