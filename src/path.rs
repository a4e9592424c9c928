//! Cursors into a tree. A [`Path`] records the turns taken from the root to reach a link, so a
//! mutator can find that link again and rewrite it without holding a borrow across the search.

use std::fmt;

/// Which child link to follow from a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Follow the link to the smaller values.
    Left,
    /// Follow the link to the larger values.
    Right,
}

/// The sequence of [`Direction`]s leading from the root to a link. The empty path is the root
/// link itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Direction>);

impl Path {
    /// The path to the root link.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// How many links below the root this path ends. The root is at depth 0.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The turns taken, from the root downwards.
    pub fn directions(&self) -> &[Direction] {
        &self.0
    }

    pub(crate) fn push(&mut self, direction: Direction) {
        self.0.push(direction);
    }

    /// A copy of this path extended by one step.
    pub(crate) fn child(&self, direction: Direction) -> Self {
        let mut path = self.clone();
        path.push(direction);
        path
    }
}

impl FromIterator<Direction> for Path {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Path {
    /// Writes `root` followed by one `L` or `R` per step, e.g. `root/L/R`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for direction in &self.0 {
            match direction {
                Direction::Left => f.write_str("/L")?,
                Direction::Right => f.write_str("/R")?,
            }
        }
        Ok(())
    }
}
