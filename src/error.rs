//! Errors reported when a tree fails its ordering check.

use thiserror::Error;

use crate::path::Path;

/// Ways a tree can fail [`OrderedTree::check`](crate::OrderedTree::check).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A node's value is not strictly greater than every value it was placed to the right of.
    #[error("node at {path} is not greater than an ancestor it sits right of")]
    NotAboveLowerBound {
        /// Where the offending node sits.
        path: Path,
    },

    /// A node's value is not strictly less than every value it was placed to the left of.
    #[error("node at {path} is not less than an ancestor it sits left of")]
    NotBelowUpperBound {
        /// Where the offending node sits.
        path: Path,
    },
}
