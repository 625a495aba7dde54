//! PEP 440 versions and equality constraints
//!
//! This crate provides version parsing, a total ordering over versions and an
//! algebra over `==`/`!=` constraints for use by a dependency resolver.

pub mod constraint;
mod comparator;
mod pep440;
mod segments;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use constraint::{
    Constraint, ConstraintError, ConstraintInterface, ConstraintTypes, MatchAllConstraint,
    MatchNoneConstraint, MultiConstraint, MultiConstraintError, Operator, UnionConstraint,
    UnionConstraintError,
};
pub use pep440::Pep440;
pub use segments::{LocalSegment, Phase, Release, ReleaseTag};
pub use version::{Version, VersionBuilder};
pub use version_parser::{VersionParser, VersionParserError};
