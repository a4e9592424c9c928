//! Fixed-order walks over a tree. Each walk is a lazy [`Traversal`] iterator that keeps an
//! explicit stack, so it can be cloned part way through and resumed from either copy.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
//!
//! assert_eq!(tree.in_order_lr().collect::<Vec<_>>(), [&1, &2, &3]);
//! assert_eq!(tree.pre_order_rl().collect::<Vec<_>>(), [&2, &3, &1]);
//!
//! let mut out = Vec::new();
//! tree.post_order_lr().write_to(&mut out).unwrap();
//! assert_eq!(out, b"1 3 2 ");
//! ```

use std::fmt;
use std::io;

use crate::tree::{Node, OrderedTree};

/// When a node's own value is yielded relative to its children.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Before both children.
    Pre,
    /// Between the two children.
    In,
    /// After both children.
    Post,
}

/// Which child is walked first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// Left subtree, then right subtree.
    LeftRight,
    /// Right subtree, then left subtree.
    RightLeft,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Stage {
    Enter,
    FirstChild,
    Between,
    SecondChild,
    Exit,
}

struct Frame<'a, T> {
    node: &'a Node<T>,
    stage: Stage,
}

impl<T> Clone for Frame<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Frame<'_, T> {}

impl<'a, T> Frame<'a, T> {
    fn new(node: &'a Node<T>) -> Self {
        Self {
            node,
            stage: Stage::Enter,
        }
    }
}

/// A lazy walk over the values of a tree in one of the six fixed orders.
pub struct Traversal<'a, T> {
    stack: Vec<Frame<'a, T>>,
    order: Order,
    side: Side,
}

impl<T> Clone for Traversal<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            order: self.order,
            side: self.side,
        }
    }
}

impl<T> fmt::Debug for Traversal<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("order", &self.order)
            .field("side", &self.side)
            .field("pending", &self.stack.len())
            .finish()
    }
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, order: Order, side: Side) -> Self {
        Self {
            stack: root.into_iter().map(Frame::new).collect(),
            order,
            side,
        }
    }

    /// Writes every remaining value to `sink`, each followed by a single space.
    pub fn write_to<W>(self, mut sink: W) -> io::Result<()>
    where
        W: io::Write,
        T: fmt::Display,
    {
        for value in self {
            write!(sink, "{value} ")?;
        }
        Ok(())
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            let frame = self.stack.last_mut()?;
            let node = frame.node;
            let (first, second) = match self.side {
                Side::LeftRight => (node.left(), node.right()),
                Side::RightLeft => (node.right(), node.left()),
            };

            match frame.stage {
                Stage::Enter => {
                    frame.stage = Stage::FirstChild;
                    if self.order == Order::Pre {
                        return Some(&node.value);
                    }
                }
                Stage::FirstChild => {
                    frame.stage = Stage::Between;
                    if let Some(child) = first {
                        self.stack.push(Frame::new(child));
                    }
                }
                Stage::Between => {
                    frame.stage = Stage::SecondChild;
                    if self.order == Order::In {
                        return Some(&node.value);
                    }
                }
                Stage::SecondChild => {
                    frame.stage = Stage::Exit;
                    if let Some(child) = second {
                        self.stack.push(Frame::new(child));
                    }
                }
                Stage::Exit => {
                    self.stack.pop();
                    if self.order == Order::Post {
                        return Some(&node.value);
                    }
                }
            }
        }
    }
}

impl<T> OrderedTree<T> {
    /// Walks the tree in the given order.
    pub fn traverse(&self, order: Order, side: Side) -> Traversal<'_, T> {
        Traversal::new(self.root_node(), order, side)
    }

    /// Root, left subtree, right subtree.
    pub fn pre_order_lr(&self) -> Traversal<'_, T> {
        self.traverse(Order::Pre, Side::LeftRight)
    }

    /// Root, right subtree, left subtree.
    pub fn pre_order_rl(&self) -> Traversal<'_, T> {
        self.traverse(Order::Pre, Side::RightLeft)
    }

    /// Left subtree, root, right subtree. This yields values in ascending order.
    pub fn in_order_lr(&self) -> Traversal<'_, T> {
        self.traverse(Order::In, Side::LeftRight)
    }

    /// Right subtree, root, left subtree. This yields values in descending order.
    pub fn in_order_rl(&self) -> Traversal<'_, T> {
        self.traverse(Order::In, Side::RightLeft)
    }

    /// Left subtree, right subtree, root.
    pub fn post_order_lr(&self) -> Traversal<'_, T> {
        self.traverse(Order::Post, Side::LeftRight)
    }

    /// Right subtree, left subtree, root.
    pub fn post_order_rl(&self) -> Traversal<'_, T> {
        self.traverse(Order::Post, Side::RightLeft)
    }
}
