//! Node classification by child count.

/// How many children a node has. Removal picks its strategy from this.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Degree {
    /// No children. The node can simply be dropped.
    Leaf,
    /// Exactly one child. That child takes the node's place.
    Unary,
    /// Both children present. The node's value is replaced by its in-order successor's.
    Binary,
}

impl Degree {
    /// Classifies a node from whether each of its children is present.
    pub(crate) fn of(has_left: bool, has_right: bool) -> Self {
        match (has_left, has_right) {
            (false, false) => Self::Leaf,
            (true, true) => Self::Binary,
            _ => Self::Unary,
        }
    }
}
