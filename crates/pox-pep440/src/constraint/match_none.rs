//! MatchNoneConstraint - matches no version

use std::fmt;

use super::{Constraint, ConstraintInterface, ConstraintTypes};

/// A constraint that matches no version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchNoneConstraint;

impl MatchNoneConstraint {
    /// Create a new MatchNoneConstraint
    pub fn new() -> Self {
        MatchNoneConstraint
    }
}

impl ConstraintInterface for MatchNoneConstraint {
    fn allows(&self, _other: &Constraint) -> bool {
        false
    }

    fn allows_all(&self, other: &ConstraintTypes) -> bool {
        other.is_empty()
    }

    fn allows_any(&self, _other: &ConstraintTypes) -> bool {
        false
    }

    fn intersect(&self, _other: &ConstraintTypes) -> ConstraintTypes {
        self.clone().into()
    }

    fn union(&self, other: &ConstraintTypes) -> ConstraintTypes {
        other.clone()
    }

    fn difference(&self, _other: &ConstraintTypes) -> ConstraintTypes {
        self.clone().into()
    }

    fn is_empty(&self) -> bool {
        true
    }
}

impl fmt::Display for MatchNoneConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<empty>")
    }
}
