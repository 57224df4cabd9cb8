//! Traversal, restriction, composition and satisfying-assignment search
//! over a [`NodeStore`].
//!
//! Everything here is expressed in terms of [`NodeStore::ite`] and
//! [`NodeStore::negate`] plus direct structural recursion; nothing adds
//! new node-reduction logic.

use std::collections::{HashMap, HashSet};

use super::{NodeId, NodeStore, VarId, FALSE, TRUE};

/// Restricts `n` by the partial variable assignment `valuation` (`true`
/// sets the high edge, `false` the low edge). Variables absent from
/// `valuation` are left free.
///
/// Memoized on `n` alone: `valuation` is fixed for the whole call, as in
/// the BDD substitution this mirrors.
pub fn restrict(store: &mut NodeStore, n: NodeId, valuation: &HashMap<VarId, bool>) -> NodeId {
    let mut memo = HashMap::new();
    restrict_rec(store, n, valuation, &mut memo)
}

fn restrict_rec(
    store: &mut NodeStore,
    n: NodeId,
    valuation: &HashMap<VarId, bool>,
    memo: &mut HashMap<NodeId, NodeId>,
) -> NodeId {
    if store.is_terminal(n) {
        return n;
    }
    if let Some(&cached) = memo.get(&n) {
        return cached;
    }
    let var = store.var_of(n).expect("checked non-terminal above");
    let (lo, hi) = store.children(n).expect("checked non-terminal above");
    let result = match valuation.get(&var) {
        Some(true) => restrict_rec(store, hi, valuation, memo),
        Some(false) => restrict_rec(store, lo, valuation, memo),
        None => {
            let new_lo = restrict_rec(store, lo, valuation, memo);
            let new_hi = restrict_rec(store, hi, valuation, memo);
            store.make_node(var, new_lo, new_hi)
        }
    };
    memo.insert(n, result);
    result
}

/// Substitutes, for every `(var, replacement)` pair in `subst`, the BDD
/// `replacement` for `var` in `f`, applied one variable at a time via
/// `ite(var_node, f|_{var=1}, f|_{var=0})`.
pub fn compose(store: &mut NodeStore, f: NodeId, subst: &[(VarId, NodeId)]) -> NodeId {
    let mut result = f;
    for &(var, replacement) in subst {
        let mut pos = HashMap::new();
        pos.insert(var, true);
        let hi = restrict(store, result, &pos);
        let mut neg = HashMap::new();
        neg.insert(var, false);
        let lo = restrict(store, result, &neg);
        result = store.ite(replacement, hi, lo);
    }
    result
}

/// Depth-first preorder traversal (node visited before its children),
/// each node visited once.
pub fn dfs_preorder(store: &NodeStore, root: NodeId) -> Vec<NodeId> {
    let mut order = Vec::new();
    let mut seen = HashSet::new();
    dfs_pre_rec(store, root, &mut seen, &mut order);
    order
}

fn dfs_pre_rec(store: &NodeStore, n: NodeId, seen: &mut HashSet<NodeId>, order: &mut Vec<NodeId>) {
    if !seen.insert(n) {
        return;
    }
    order.push(n);
    if let Some((lo, hi)) = store.children(n) {
        dfs_pre_rec(store, lo, seen, order);
        dfs_pre_rec(store, hi, seen, order);
    }
}

/// Depth-first postorder traversal (children visited before their
/// parent), each node visited once.
pub fn dfs_postorder(store: &NodeStore, root: NodeId) -> Vec<NodeId> {
    let mut order = Vec::new();
    let mut seen = HashSet::new();
    dfs_post_rec(store, root, &mut seen, &mut order);
    order
}

fn dfs_post_rec(store: &NodeStore, n: NodeId, seen: &mut HashSet<NodeId>, order: &mut Vec<NodeId>) {
    if !seen.insert(n) {
        return;
    }
    if let Some((lo, hi)) = store.children(n) {
        dfs_post_rec(store, lo, seen, order);
        dfs_post_rec(store, hi, seen, order);
    }
    order.push(n);
}

/// Breadth-first traversal, each node visited once.
pub fn bfs(store: &NodeStore, root: NodeId) -> Vec<NodeId> {
    let mut order = Vec::new();
    let mut seen = HashSet::new();
    let mut queue = std::collections::VecDeque::new();
    queue.push_back(root);
    seen.insert(root);
    while let Some(n) = queue.pop_front() {
        order.push(n);
        if let Some((lo, hi)) = store.children(n) {
            for child in [lo, hi] {
                if seen.insert(child) {
                    queue.push_back(child);
                }
            }
        }
    }
    order
}

/// One satisfying assignment for `n`, as a list of signed literals
/// (positive for `true`, negative for `false`), or `None` if `n` is
/// `FALSE`.
///
/// At each decision node, the `lo` edge is followed unless it is the
/// `FALSE` terminal, in which case `hi` is followed instead.
pub fn satisfy_one(store: &NodeStore, n: NodeId) -> Option<Vec<i64>> {
    if store.is_false(n) {
        return None;
    }
    let mut path = Vec::new();
    let mut cur = n;
    while let Some(var) = store.var_of(cur) {
        let (lo, hi) = store.children(cur).expect("var_of returned Some");
        if lo == FALSE {
            path.push(var as i64);
            cur = hi;
        } else {
            path.push(-(var as i64));
            cur = lo;
        }
    }
    Some(path)
}

/// Every satisfying assignment for `n`, each as a list of signed
/// literals. Empty if `n` is `FALSE`; a single empty assignment if `n`
/// is `TRUE`.
pub fn satisfy_all(store: &NodeStore, n: NodeId) -> Vec<Vec<i64>> {
    if store.is_false(n) {
        return Vec::new();
    }
    if store.is_true(n) {
        return vec![Vec::new()];
    }
    let (lo, hi) = store.children(n).expect("checked terminal cases above");
    let var = store.var_of(n).expect("checked terminal cases above");

    let mut out = Vec::new();
    for mut assignment in satisfy_all(store, lo) {
        assignment.push(-(var as i64));
        out.push(assignment);
    }
    for mut assignment in satisfy_all(store, hi) {
        assignment.push(var as i64);
        out.push(assignment);
    }
    out
}
