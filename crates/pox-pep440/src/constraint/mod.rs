//! Constraint types for version matching

pub mod constraint;
mod constraint_interface;
mod constraint_types;
mod coverage;
mod match_all;
mod match_none;
mod multi_constraint;
mod operator;
mod union_constraint;

pub use constraint::{Constraint, ConstraintError};
pub use constraint_interface::ConstraintInterface;
pub use constraint_types::ConstraintTypes;
pub use match_all::MatchAllConstraint;
pub use match_none::MatchNoneConstraint;
pub use multi_constraint::{MultiConstraint, MultiConstraintError};
pub use operator::{InvalidOperatorError, Operator};
pub use union_constraint::{UnionConstraint, UnionConstraintError};
