//! Reduced Ordered Binary Decision Diagrams (ROBDDs)
//!
//! [`NodeStore`] is the hash-consed unique table: it owns every BDD node
//! ever created (in a growth-only arena) and guarantees that structurally
//! equal `(var, lo, hi)` triples always resolve to the same [`NodeId`], so
//! two roots denote the same Boolean function iff they are the same
//! `NodeId`. There is no implicit global table: callers own a
//! `NodeStore` and pass it to every operation; the unique table is the
//! only shared mutable state in an otherwise purely functional engine.
//!
//! This module provides the store itself plus the two primitives,
//! [`NodeStore::ite`] and [`NodeStore::negate`], that every other
//! Boolean operation on BDDs is built from. Traversals, restriction,
//! composition and the cube-list bridge live in [`ops`] and [`build`].

pub mod build;
pub mod ops;

use std::collections::HashMap;

/// Index into a [`NodeStore`]'s arena. Stable for the store's lifetime:
/// nodes are only ever appended, never removed or reordered.
pub type NodeId = usize;

/// A positive variable index, ascending along any root-to-terminal path.
pub type VarId = usize;

/// The canonical `false` terminal.
pub const FALSE: NodeId = 0;
/// The canonical `true` terminal.
pub const TRUE: NodeId = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum BddNode {
    Terminal(bool),
    Decision { var: VarId, lo: NodeId, hi: NodeId },
}

/// The hash-consed unique table plus the memo tables its recursive
/// operators rely on.
#[derive(Debug)]
pub struct NodeStore {
    nodes: Vec<BddNode>,
    unique: HashMap<(VarId, NodeId, NodeId), NodeId>,
    ite_cache: HashMap<(NodeId, NodeId, NodeId), NodeId>,
    neg_cache: HashMap<NodeId, NodeId>,
}

impl Default for NodeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeStore {
    pub fn new() -> Self {
        NodeStore {
            nodes: vec![BddNode::Terminal(false), BddNode::Terminal(true)],
            unique: HashMap::new(),
            ite_cache: HashMap::new(),
            neg_cache: HashMap::new(),
        }
    }

    fn node(&self, id: NodeId) -> BddNode {
        self.nodes[id]
    }

    /// The decision variable of `id`, or `None` for a terminal.
    pub fn var_of(&self, id: NodeId) -> Option<VarId> {
        match self.node(id) {
            BddNode::Terminal(_) => None,
            BddNode::Decision { var, .. } => Some(var),
        }
    }

    /// The low (variable = 0) and high (variable = 1) children of a
    /// decision node. `None` for a terminal.
    pub fn children(&self, id: NodeId) -> Option<(NodeId, NodeId)> {
        match self.node(id) {
            BddNode::Terminal(_) => None,
            BddNode::Decision { lo, hi, .. } => Some((lo, hi)),
        }
    }

    pub fn is_terminal(&self, id: NodeId) -> bool {
        matches!(self.node(id), BddNode::Terminal(_))
    }

    pub fn is_true(&self, id: NodeId) -> bool {
        id == TRUE
    }

    pub fn is_false(&self, id: NodeId) -> bool {
        id == FALSE
    }

    /// Looks up or creates the node `(var, lo, hi)`.
    ///
    /// Reduction is applied before hash-consing: if `lo == hi`, no node is
    /// created and `lo` is returned directly.
    pub fn make_node(&mut self, var: VarId, lo: NodeId, hi: NodeId) -> NodeId {
        if lo == hi {
            return lo;
        }
        let key = (var, lo, hi);
        if let Some(&id) = self.unique.get(&key) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(BddNode::Decision { var, lo, hi });
        self.unique.insert(key, id);
        id
    }

    /// The BDD for a single variable: `(var, FALSE, TRUE)`.
    pub fn var_node(&mut self, var: VarId) -> NodeId {
        self.make_node(var, FALSE, TRUE)
    }

    /// Structural negation, memoized.
    pub fn negate(&mut self, n: NodeId) -> NodeId {
        match self.node(n) {
            BddNode::Terminal(b) => {
                if b {
                    FALSE
                } else {
                    TRUE
                }
            }
            BddNode::Decision { var, lo, hi } => {
                if let Some(&cached) = self.neg_cache.get(&n) {
                    return cached;
                }
                let lo = self.negate(lo);
                let hi = self.negate(hi);
                let result = self.make_node(var, lo, hi);
                self.neg_cache.insert(n, result);
                result
            }
        }
    }

    /// `ite(f, g, h) = (f ∧ g) ∨ (¬f ∧ h)`, the single primitive every
    /// other Boolean BDD operation derives from.
    ///
    /// Terminal simplifications are tried before any recursion, in the
    /// order of spec.md §4.4: `ite(f, ⊤, ⊥) = f`, `ite(f, ⊥, ⊤) = ¬f`,
    /// `ite(⊤, g, h) = g`, `ite(⊥, g, h) = h`, `ite(f, g, g) = g`.
    pub fn ite(&mut self, f: NodeId, g: NodeId, h: NodeId) -> NodeId {
        if g == TRUE && h == FALSE {
            return f;
        }
        if g == FALSE && h == TRUE {
            return self.negate(f);
        }
        if f == TRUE {
            return g;
        }
        if f == FALSE {
            return h;
        }
        if g == h {
            return g;
        }

        let key = (f, g, h);
        if let Some(&cached) = self.ite_cache.get(&key) {
            return cached;
        }

        let top = [f, g, h]
            .into_iter()
            .filter_map(|n| self.var_of(n))
            .min()
            .expect("at least one of f, g, h is non-terminal here");

        let (f0, f1) = self.cofactors_on(f, top);
        let (g0, g1) = self.cofactors_on(g, top);
        let (h0, h1) = self.cofactors_on(h, top);

        let lo = self.ite(f0, g0, h0);
        let hi = self.ite(f1, g1, h1);
        let result = self.make_node(top, lo, hi);
        self.ite_cache.insert(key, result);
        result
    }

    /// `f ∨ g`.
    pub fn or(&mut self, f: NodeId, g: NodeId) -> NodeId {
        self.ite(f, TRUE, g)
    }

    /// `f ∧ g`.
    pub fn and(&mut self, f: NodeId, g: NodeId) -> NodeId {
        self.ite(f, g, FALSE)
    }

    /// `f ⊕ g`.
    pub fn xor(&mut self, f: NodeId, g: NodeId) -> NodeId {
        let not_g = self.negate(g);
        self.ite(f, not_g, g)
    }

    /// `f ⇒ g`.
    pub fn implies(&mut self, f: NodeId, g: NodeId) -> NodeId {
        let not_f = self.negate(f);
        self.ite(not_f, TRUE, g)
    }

    /// The negative (`var = 0`) and positive (`var = 1`) restrictions of
    /// `n` on `var`. If `n`'s top variable differs from `var`, both
    /// cofactors are `n` itself (the variable doesn't appear above `n`).
    fn cofactors_on(&self, n: NodeId, var: VarId) -> (NodeId, NodeId) {
        match self.node(n) {
            BddNode::Terminal(_) => (n, n),
            BddNode::Decision { var: v, lo, hi } if v == var => (lo, hi),
            BddNode::Decision { .. } => (n, n),
        }
    }
}
