use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::control::ShouldColorize;
use ordered_tree::{Order, OrderedTree, RenderConfig, Side};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "tree-demo",
    about = "Build a binary search tree step by step and print its shape after each change"
)]
struct Cli {
    /// Values to insert, in order. Insertion stops at the first duplicate.
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "50,25,75,15,30,60,80,10,20,26,34,55,70,79,92"
    )]
    insert: Vec<i64>,

    /// Values to remove afterwards, one node each.
    #[arg(long, value_delimiter = ',', default_value = "10,15,80,50")]
    remove: Vec<i64>,

    /// Remove each value's whole subtree instead of a single node.
    #[arg(long)]
    kill: bool,

    /// Leave out terminal colours. They are also left out when stdout is not a terminal or
    /// `NO_COLOR` is set.
    #[arg(long)]
    plain: bool,

    /// Also print the values in this order after each step.
    #[arg(long, value_enum)]
    order: Option<Walk>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Walk {
    PreLr,
    PreRl,
    InLr,
    InRl,
    PostLr,
    PostRl,
}

impl Walk {
    fn split(self) -> (Order, Side) {
        match self {
            Self::PreLr => (Order::Pre, Side::LeftRight),
            Self::PreRl => (Order::Pre, Side::RightLeft),
            Self::InLr => (Order::In, Side::LeftRight),
            Self::InRl => (Order::In, Side::RightLeft),
            Self::PostLr => (Order::Post, Side::LeftRight),
            Self::PostRl => (Order::Post, Side::RightLeft),
        }
    }
}

/// Prints a heading followed by the tree's size, height and diagram.
fn report(
    out: &mut impl Write,
    tree: &OrderedTree<i64>,
    heading: &str,
    config: &RenderConfig,
    walk: Option<Walk>,
) -> io::Result<()> {
    writeln!(out, "{heading}\n")?;
    writeln!(out, "Tree:")?;
    writeln!(out, "Size (# nodes) -> {}", tree.size())?;
    writeln!(out, "Height -> {}", tree.height())?;
    write!(out, "{}", tree.diagram(*config))?;
    if let Some(walk) = walk {
        let (order, side) = walk.split();
        tree.traverse(order, side).write_to(&mut *out)?;
        writeln!(out)?;
    }
    writeln!(out)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = if !cli.plain && ShouldColorize::from_env().should_colorize() {
        RenderConfig::colored()
    } else {
        RenderConfig::plain()
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut tree = OrderedTree::new();

    report(&mut out, &tree, "Initial tree structure:", &config, cli.order)
        .context("writing initial tree")?;

    for value in cli.insert {
        if !tree.insert(value) {
            info!(value, "duplicate value, stopping insertion");
            break;
        }
        report(&mut out, &tree, &format!("Inserted {value}..."), &config, cli.order)
            .with_context(|| format!("writing tree after inserting {value}"))?;
    }

    for value in cli.remove {
        let removed = tree.remove_with(&value, cli.kill);
        if !removed {
            info!(value, "value not present");
        }
        report(&mut out, &tree, &format!("Removed {value}..."), &config, cli.order)
            .with_context(|| format!("writing tree after removing {value}"))?;
    }

    report(&mut out, &tree, "Final tree structure:", &config, cli.order)
        .context("writing final tree")?;
    Ok(())
}
