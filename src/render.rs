//! A text diagram of a tree's shape.
//!
//! Every node is drawn as `◉ value` and every empty child link as `x`, so each node shows both of
//! its child slots. Right children are drawn above left children.
//!
//! ```text
//! .
//! └──◉ 2
//!    ├──◉ 3
//!    │  ├──x
//!    │  └──x
//!    └──◉ 1
//!       ├──x
//!       └──x
//! ```

use std::fmt;

use colored::Color;

use crate::tree::{Node, OrderedTree};

/// Options for drawing a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderConfig {
    /// Draw nodes in green and empty links in red with ANSI escapes. This alone decides whether
    /// escapes are written; the environment and the output stream are not consulted.
    pub colorize: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::colored()
    }
}

impl RenderConfig {
    /// No escape codes.
    pub fn plain() -> Self {
        Self { colorize: false }
    }

    /// Terminal colours.
    pub fn colored() -> Self {
        Self { colorize: true }
    }
}

/// Where a subtree hangs off its parent. This decides the connector drawn in front of it and the
/// indent handed to its own children.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Branch {
    Root,
    /// The right child. A sibling is still drawn below it.
    Upper,
    /// The left child, the last one drawn for its parent.
    Lower,
}

impl Branch {
    fn connector(self) -> &'static str {
        match self {
            Self::Root => ".\n└──",
            Self::Upper => "├──",
            Self::Lower => "└──",
        }
    }

    fn indent(self) -> &'static str {
        match self {
            Self::Upper => "│  ",
            Self::Root | Self::Lower => "   ",
        }
    }
}

/// A tree paired with the options to draw it. Formatting it with `{}` writes the diagram.
pub struct Diagram<'a, T> {
    tree: &'a OrderedTree<T>,
    config: RenderConfig,
}

impl<T> Diagram<'_, T>
where
    T: fmt::Display,
{
    fn draw(
        &self,
        f: &mut fmt::Formatter<'_>,
        node: Option<&Node<T>>,
        prefix: &str,
        branch: Branch,
    ) -> fmt::Result {
        write!(f, "{prefix}{}", branch.connector())?;

        let Some(node) = node else {
            return self.paint(f, "x", Color::Red);
        };
        self.paint(f, &format!("◉ {}", node.value), Color::Green)?;

        let prefix = format!("{prefix}{}", branch.indent());
        self.draw(f, node.right(), &prefix, Branch::Upper)?;
        self.draw(f, node.left(), &prefix, Branch::Lower)
    }
}

impl<T> Diagram<'_, T> {
    /// Writes `text` and ends the line, wrapped in `color` when colouring is on.
    fn paint(&self, f: &mut fmt::Formatter<'_>, text: &str, color: Color) -> fmt::Result {
        if self.config.colorize {
            writeln!(f, "\x1b[{}m{text}\x1b[0m", color.to_fg_str())
        } else {
            writeln!(f, "{text}")
        }
    }
}

impl<T> fmt::Display for Diagram<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.draw(f, self.tree.root_node(), "", Branch::Root)
    }
}

impl<T> OrderedTree<T>
where
    T: fmt::Display,
{
    /// Pairs the tree with drawing options without rendering anything yet.
    pub fn diagram(&self, config: RenderConfig) -> Diagram<'_, T> {
        Diagram { tree: self, config }
    }

    /// Draws the tree with the default (coloured) options.
    pub fn render(&self) -> String {
        self.render_with(&RenderConfig::default())
    }

    /// Draws the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::render::RenderConfig;
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(7);
    ///
    /// assert_eq!(
    ///     tree.render_with(&RenderConfig::plain()),
    ///     ".\n└──◉ 7\n   ├──x\n   └──x\n"
    /// );
    /// ```
    pub fn render_with(&self, config: &RenderConfig) -> String {
        self.diagram(*config).to_string()
    }
}

impl<T> fmt::Display for OrderedTree<T>
where
    T: fmt::Display,
{
    /// The diagram without colours.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.diagram(RenderConfig::plain()), f)
    }
}
