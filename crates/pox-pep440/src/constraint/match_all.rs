//! MatchAllConstraint - matches any version

use std::fmt;

use super::coverage::Coverage;
use super::{Constraint, ConstraintInterface, ConstraintTypes};

/// A constraint that matches any version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchAllConstraint;

impl MatchAllConstraint {
    /// Create a new MatchAllConstraint
    pub fn new() -> Self {
        MatchAllConstraint
    }
}

impl ConstraintInterface for MatchAllConstraint {
    fn allows(&self, _other: &Constraint) -> bool {
        true
    }

    fn allows_all(&self, _other: &ConstraintTypes) -> bool {
        true
    }

    fn allows_any(&self, other: &ConstraintTypes) -> bool {
        !other.is_empty()
    }

    fn intersect(&self, other: &ConstraintTypes) -> ConstraintTypes {
        other.clone()
    }

    fn union(&self, _other: &ConstraintTypes) -> ConstraintTypes {
        self.clone().into()
    }

    fn difference(&self, other: &ConstraintTypes) -> ConstraintTypes {
        Coverage::of(other).complement().into_constraint()
    }

    fn is_any(&self) -> bool {
        true
    }
}

impl fmt::Display for MatchAllConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*")
    }
}
