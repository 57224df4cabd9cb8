//! # urp-bdd
//!
//! A Boolean function manipulation engine built from three layers:
//!
//! - [`urp`] - the Unate Recursive Paradigm: pure cube-list algebra
//!   (cofactor, complement, the derived AND/OR/XOR/consensus/smoothing
//!   operators).
//! - [`bdd`] - a canonical, hash-consed Reduced Ordered Binary Decision
//!   Diagram (ROBDD) store, built on a single `ite` primitive.
//! - [`driver`] - a line-oriented batch command interpreter that ties
//!   cube-list expressions to `.pcn` files on disk.
//!
//! [`expression`] provides the [`Expression`](expression::Expression)
//! façade most callers want: a cube list paired with its variable count,
//! offering the URP operations as checked methods. [`pcn`] is the file
//! format codec both `Expression` and the driver are built on.
//! [`registry`] is an optional helper for callers who want to name
//! variables instead of working with bare positive integers.
//!
//! ## Example
//!
//! ```
//! use urp_bdd::expression::Expression;
//! use urp_bdd::pcn::Cube;
//!
//! let f = Expression::from_cubes(vec![Cube::new(vec![1, -2])], 2);
//! let not_f = f.complement();
//! assert!(!not_f.is_false());
//! ```

pub mod bdd;
pub mod driver;
pub mod error;
pub mod expression;
pub mod pcn;
pub mod registry;
pub mod urp;

pub use error::{DriverError, ExpressionError, PcnError};
pub use expression::Expression;
pub use pcn::{Cube, CubeList};
pub use registry::{VarKey, VariableRegistry};
