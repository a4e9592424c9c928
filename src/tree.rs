//! The mutable, owning BST. Every node is owned by exactly one link (`Option<Box<Node>>`), so
//! copying is a deep clone and dropping frees each node once.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.search(&1), Some(&1));
//!
//! // Values are stored at most once.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.size(), 1);
//!
//! assert!(tree.remove(&1));
//! assert_eq!(tree.search(&1), None);
//! assert!(!tree.remove(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::degree::Degree;
use crate::error::InvariantError;
use crate::path::{Direction, Path};

type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced Binary Search Tree holding each value at most once.
///
/// The tree is not synchronised. Sharing one between threads needs an outer lock.
#[derive(Clone)]
pub struct OrderedTree<T> {
    root: Link<T>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("root", &self.root_node())
            .finish()
    }
}

impl<T> OrderedTree<T> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in the tree. This walks every node.
    pub fn size(&self) -> usize {
        self.root_node().map_or(0, Node::size)
    }

    /// The number of links on the longest root-to-leaf path. A single node has height 0 and an
    /// empty tree has height -1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        self.root_node().map_or(-1, Node::height)
    }

    /// Drops every node, children before parents.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Moves all nodes into a new tree, leaving this one empty.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// The value at the end of `path`, if a node is there.
    pub fn get(&self, path: &Path) -> Option<&T> {
        self.node_at(path).map(|node| &node.value)
    }

    pub(crate) fn root_node(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub(crate) fn node_at(&self, path: &Path) -> Option<&Node<T>> {
        let mut node = self.root_node()?;
        for &direction in path.directions() {
            node = node.child(direction)?;
        }
        Some(node)
    }

    /// The link at the end of `path`. Paths come from [`OrderedTree::locate`] on the current
    /// shape, so every step but the last lands on a node.
    fn link_mut(&mut self, path: &Path) -> &mut Link<T> {
        let mut link = &mut self.root;
        for &direction in path.directions() {
            match link {
                Some(node) => link = node.child_link_mut(direction),
                None => break,
            }
        }
        link
    }

    /// Removes the node held by `link` according to its [`Degree`].
    fn unlink(link: &mut Link<T>) {
        let Some(node) = link.as_mut() else {
            return;
        };
        let degree = node.degree();
        trace!(?degree, "removing node");

        match degree {
            Degree::Leaf => *link = None,
            Degree::Unary => {
                let child = node.left.take().or_else(|| node.right.take());
                *link = child;
            }
            Degree::Binary => {
                // The successor takes over this node's value. Whatever it held before leaves
                // with the detached successor node.
                if let Some(mut successor) = Node::detach_leftmost(&mut node.right) {
                    mem::swap(&mut node.value, &mut successor.value);
                }
            }
        }
    }

    /// Empties `link`, freeing its subtree children before parents. Returns how many nodes were
    /// removed.
    fn tear_down(link: &mut Link<T>) -> usize {
        let Some(subtree) = link.take() else {
            return 0;
        };
        let removed = subtree.size();
        drop(subtree);
        removed
    }
}

impl<T> OrderedTree<T>
where
    T: Ord,
{
    /// Finds the stored value equal to `target`. If no node holds it, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, target: &T) -> Option<&T> {
        self.root_node().and_then(|n| n.find(target))
    }

    /// Whether some node holds `target`.
    pub fn contains(&self, target: &T) -> bool {
        self.search(target).is_some()
    }

    /// Walks towards `target`. Returns `Ok` with the path to the node holding it, or `Err` with
    /// the path to the empty link where it would be inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::path::Direction;
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let found = tree.locate(&3).unwrap();
    /// assert_eq!(found.directions(), &[Direction::Right]);
    /// assert_eq!(tree.get(&found), Some(&3));
    ///
    /// let missing = tree.locate(&0).unwrap_err();
    /// assert_eq!(missing.directions(), &[Direction::Left, Direction::Left]);
    /// ```
    pub fn locate(&self, target: &T) -> Result<Path, Path> {
        let mut path = Path::root();
        let mut link = self.root_node();
        while let Some(node) = link {
            let direction = match target.cmp(&node.value) {
                Ordering::Equal => return Ok(path),
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
            };
            path.push(direction);
            link = node.child(direction);
        }
        Err(path)
    }

    /// How many children the node holding `target` has.
    pub fn degree(&self, target: &T) -> Option<Degree> {
        let path = self.locate(target).ok()?;
        self.node_at(&path).map(Node::degree)
    }

    /// Inserts `value` as a new leaf. Returns `false`, leaving the tree untouched, when an equal
    /// value is already stored.
    pub fn insert(&mut self, value: T) -> bool {
        match self.locate(&value) {
            Ok(path) => {
                debug!(depth = path.depth(), "duplicate value rejected");
                false
            }
            Err(path) => {
                trace!(depth = path.depth(), "attaching leaf");
                *self.link_mut(&path) = Some(Node::new_boxed(value));
                true
            }
        }
    }

    /// Removes the single node holding `value`. Returns `false` if no node holds it.
    ///
    /// A node with two children keeps its place in the tree and takes on the value of its in-order
    /// successor. The successor's node is the one that is freed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::path::Path;
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [50, 25, 75, 60].into_iter().collect();
    ///
    /// assert!(tree.remove(&50));
    /// assert_eq!(tree.get(&Path::root()), Some(&60));
    /// assert_eq!(tree.size(), 3);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let Ok(path) = self.locate(value) else {
            return false;
        };
        Self::unlink(self.link_mut(&path));
        true
    }

    /// Removes the node holding `value` together with its whole subtree. Returns `false` if no
    /// node holds it.
    ///
    /// Descendants are removed one by one, children before parents, and the matched node last.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [50, 25, 75, 15, 30].into_iter().collect();
    ///
    /// assert!(tree.kill(&25));
    /// assert_eq!(tree.size(), 2);
    /// assert!(!tree.contains(&15));
    /// assert!(!tree.contains(&30));
    /// ```
    pub fn kill(&mut self, value: &T) -> bool {
        let Ok(path) = self.locate(value) else {
            return false;
        };
        let removed = Self::tear_down(self.link_mut(&path));
        debug!(removed, depth = path.depth(), "subtree removed");
        true
    }

    /// [`kill`](Self::kill) when `recursive` is set, [`remove`](Self::remove) otherwise.
    pub fn remove_with(&mut self, value: &T, recursive: bool) -> bool {
        if recursive {
            self.kill(value)
        } else {
            self.remove(value)
        }
    }

    /// Verifies that every node is strictly between the values of the ancestors it hangs under.
    /// Trees built only through this API always pass.
    pub fn check(&self) -> Result<(), InvariantError> {
        match self.root_node() {
            Some(root) => root.check(),
            None => Ok(()),
        }
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    /// Inserts each value in turn. Repeats after the first are ignored.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

pub(crate) struct Node<T> {
    pub(crate) value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Drop for Node<T> {
    /// Frees the subtree post-order with a heap stack, so a path-shaped tree cannot overflow the
    /// call stack. `value` drops last, after this returns.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Self>> = Vec::new();
        stack.extend(self.right.take());
        stack.extend(self.left.take());

        while let Some(mut node) = stack.pop() {
            if node.left.is_none() && node.right.is_none() {
                // Childless, so its own `drop` returns at once.
                continue;
            }
            let (left, right) = (node.left.take(), node.right.take());
            stack.push(node);
            stack.extend(right);
            stack.extend(left);
        }
    }
}

impl<T> Clone for Node<T>
where
    T: Clone,
{
    /// Copies the subtree bottom-up: each copy is built once both of its children's copies are.
    fn clone(&self) -> Self {
        let mut pending: Vec<(&Self, bool)> = Vec::new();
        let mut built: Vec<Box<Self>> = Vec::new();
        pending.extend(self.right().map(|node| (node, false)));
        pending.extend(self.left().map(|node| (node, false)));

        while let Some((node, children_built)) = pending.pop() {
            if children_built {
                let (left, right) = node.adopt_copies(&mut built);
                built.push(Box::new(Self {
                    value: node.value.clone(),
                    left,
                    right,
                }));
            } else {
                pending.push((node, true));
                pending.extend(node.right().map(|node| (node, false)));
                pending.extend(node.left().map(|node| (node, false)));
            }
        }

        let (left, right) = self.adopt_copies(&mut built);
        Self {
            value: self.value.clone(),
            left,
            right,
        }
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn child(&self, direction: Direction) -> Option<&Self> {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    fn child_link_mut(&mut self, direction: Direction) -> &mut Link<T> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    fn degree(&self) -> Degree {
        Degree::of(self.left.is_some(), self.right.is_some())
    }

    fn size(&self) -> usize {
        let mut stack = vec![self];
        let mut size = 0;
        while let Some(node) = stack.pop() {
            size += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        size
    }

    fn height(&self) -> isize {
        let mut stack = vec![(self, 0)];
        let mut height = 0;
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }
        height
    }

    /// Pops the copies of this node's children off `built`. The right copy sits on top.
    fn adopt_copies(&self, built: &mut Vec<Box<Self>>) -> (Link<T>, Link<T>) {
        let right = if self.right.is_some() { built.pop() } else { None };
        let left = if self.left.is_some() { built.pop() } else { None };
        (left, right)
    }

    /// Unhooks the leftmost node under `link`, splicing its right child into its place.
    fn detach_leftmost(mut link: &mut Link<T>) -> Option<Box<Self>> {
        while link.as_ref().is_some_and(|node| node.left.is_some()) {
            link = &mut link.as_mut()?.left;
        }
        let mut leftmost = link.take()?;
        *link = leftmost.right.take();
        Some(leftmost)
    }

    fn find(&self, target: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut node = self;
        loop {
            node = match target.cmp(&node.value) {
                Ordering::Less => node.left()?,
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => node.right()?,
            };
        }
    }

    /// Checks every node under this one against the bounds its ancestors set, left subtrees
    /// first.
    fn check(&self) -> Result<(), InvariantError>
    where
        T: Ord,
    {
        let mut stack: Vec<(&Self, Path, Option<&T>, Option<&T>)> =
            vec![(self, Path::root(), None, None)];
        while let Some((node, path, lower, upper)) = stack.pop() {
            if lower.is_some_and(|lower| node.value <= *lower) {
                return Err(InvariantError::NotAboveLowerBound { path });
            }
            if upper.is_some_and(|upper| node.value >= *upper) {
                return Err(InvariantError::NotBelowUpperBound { path });
            }
            if let Some(right) = node.right() {
                stack.push((right, path.child(Direction::Right), Some(&node.value), upper));
            }
            if let Some(left) = node.left() {
                stack.push((left, path.child(Direction::Left), lower, Some(&node.value)));
            }
        }
        Ok(())
    }
}
