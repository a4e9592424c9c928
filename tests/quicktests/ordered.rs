use ordered_tree::OrderedTree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut OrderedTree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Remove(v) => {
                bst.remove(v);
                set.remove(v);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.check().is_ok() && tree.size() == set.len() && tree.in_order_lr().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<i16> = xs.iter().copied().collect();
    let ascending: Vec<_> = tree.in_order_lr().copied().collect();
    let descending: Vec<_> = tree.in_order_rl().copied().collect();

    ascending.windows(2).all(|w| w[0] < w[1])
        && ascending.iter().rev().eq(descending.iter())
        && ascending.len() == tree.size()
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree: OrderedTree<i8> = xs.iter().copied().collect();
    let size = tree.size();

    xs.iter().all(|x| !tree.insert(*x)) && tree.size() == size
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: OrderedTree<i8> = xs.iter().copied().collect();
    for delete in &deletes {
        let before = tree.size();
        let removed = tree.remove(delete);
        let expected = if removed { before - 1 } else { before };
        if tree.size() != expected || tree.check().is_err() {
            return false;
        }
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.search(x).is_none())
        && still_present.iter().all(|x| tree.search(x).is_some())
}

#[quickcheck]
fn kill_drops_whole_subtree(xs: Vec<i8>, target: i8) -> bool {
    let mut tree: OrderedTree<i8> = xs.iter().copied().collect();
    let before = tree.size();

    let subtree: Vec<i8> = match tree.locate(&target) {
        Ok(path) => {
            // Everything that sits under `path` shares its prefix.
            let depth = path.depth();
            tree.pre_order_lr()
                .copied()
                .filter(|v| {
                    tree.locate(v)
                        .map(|p| p.directions().get(..depth) == Some(path.directions()))
                        .unwrap_or(false)
                })
                .collect()
        }
        Err(_) => Vec::new(),
    };

    let killed = tree.kill(&target);

    killed == !subtree.is_empty()
        && tree.size() == before - subtree.len()
        && subtree.iter().all(|v| !tree.contains(v))
        && tree.check().is_ok()
}

#[quickcheck]
fn clones_are_independent(xs: Vec<i8>, extra: i8) -> bool {
    let original: OrderedTree<i8> = xs.iter().copied().collect();
    let mut copy = original.clone();
    let had_extra = original.contains(&extra);

    if had_extra {
        copy.remove(&extra);
    } else {
        copy.insert(extra);
    }

    original.contains(&extra) == had_extra && copy.contains(&extra) != had_extra
}

#[quickcheck]
fn copies_survive_changes_to_the_original(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let mut original: OrderedTree<i8> = xs.iter().copied().collect();
    let copy = original.clone();
    let before: Vec<i8> = copy.pre_order_lr().copied().collect();

    let mut set = original.in_order_lr().copied().collect();
    do_ops(&ops, &mut original, &mut set);
    if let Some(&first) = xs.first() {
        original.kill(&first);
    }

    copy.size() == before.len() && copy.check().is_ok() && copy.pre_order_lr().copied().eq(before)
}
