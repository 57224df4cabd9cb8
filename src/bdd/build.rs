//! Bridge between cube-list [`Expression`]s and [`NodeStore`] BDDs.
//!
//! Building a BDD from a cube list walks the variable order top-down:
//! at each step the first ordering variable still present in the
//! current cube list is cofactored on, both cofactors are built
//! recursively, and the two results are combined with
//! [`NodeStore::make_node`] (which reduces and hash-conses as usual),
//! rather than folding cubes one at a time through repeated `or`/`and`.
//!
//! The reverse direction, a BDD back to a cube list, does not walk the
//! DAG structurally; it enumerates satisfying paths with
//! [`super::ops::satisfy_all`], since each root-to-`TRUE` path already
//! *is* a cube (assigned variables become literals, unvisited variables
//! are left as don't-cares for that cube).

use crate::expression::Expression;
use crate::pcn::{Cube, CubeList};
use crate::urp;

use super::ops::satisfy_all;
use super::{NodeId, NodeStore, VarId, FALSE, TRUE};

/// Builds a BDD for `expr` under the variable order `order` (ascending
/// significance, duplicates and variables absent from `expr` are
/// harmless).
pub fn from_expression(store: &mut NodeStore, expr: &Expression, order: &[VarId]) -> NodeId {
    build(store, expr.cubes(), order)
}

fn build(store: &mut NodeStore, cubes: &CubeList, order: &[VarId]) -> NodeId {
    if cubes.is_empty() {
        return FALSE;
    }
    if cubes.iter().any(|c| c.is_dont_care()) {
        return TRUE;
    }

    let Some((&var, rest)) = order.split_first().map(|(v, r)| (v, r)) else {
        // No more ordering variables but the cube list is non-empty and
        // none of its cubes is the don't-care cube: every cube still
        // mentions a variable outside `order`, which is a caller error
        // (the order must cover every variable in the expression).
        panic!("variable order does not cover every variable present in the expression");
    };

    if !cubes.iter().any(|c| c.mentions(var)) {
        return build(store, cubes, rest);
    }

    let pos = urp::positive_cofactor(cubes, var);
    let neg = urp::negative_cofactor(cubes, var);
    let hi = build(store, &pos, rest);
    let lo = build(store, &neg, rest);
    store.make_node(var, lo, hi)
}

/// Recovers the cube-list expression a BDD denotes, over `num_vars`
/// variables, via satisfying-path enumeration.
pub fn to_expression(store: &NodeStore, n: NodeId, num_vars: usize) -> Expression {
    let cubes: CubeList = satisfy_all(store, n)
        .into_iter()
        .map(|literals| Cube::new(literals.into_iter().map(|l| l as i32).collect()))
        .collect();
    Expression::from_cubes(cubes, num_vars)
}
