//! The closed set of constraint variants

use std::fmt;

use super::{
    Constraint, ConstraintInterface, MatchAllConstraint, MatchNoneConstraint, MultiConstraint,
    UnionConstraint,
};

/// Any member of the constraint family
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintTypes {
    /// Matches every version
    Any(MatchAllConstraint),
    /// Matches no version
    Empty(MatchNoneConstraint),
    /// `==version` or `!=version`
    Constraint(Constraint),
    /// All of several exclusions
    Multi(MultiConstraint),
    /// Any of several constraints
    Union(UnionConstraint),
}

macro_rules! dispatch {
    ($self:ident, $inner:ident => $body:expr) => {
        match $self {
            ConstraintTypes::Any($inner) => $body,
            ConstraintTypes::Empty($inner) => $body,
            ConstraintTypes::Constraint($inner) => $body,
            ConstraintTypes::Multi($inner) => $body,
            ConstraintTypes::Union($inner) => $body,
        }
    };
}

impl ConstraintInterface for ConstraintTypes {
    fn allows(&self, other: &Constraint) -> bool {
        dispatch!(self, c => c.allows(other))
    }

    fn allows_all(&self, other: &ConstraintTypes) -> bool {
        dispatch!(self, c => c.allows_all(other))
    }

    fn allows_any(&self, other: &ConstraintTypes) -> bool {
        dispatch!(self, c => c.allows_any(other))
    }

    fn intersect(&self, other: &ConstraintTypes) -> ConstraintTypes {
        dispatch!(self, c => c.intersect(other))
    }

    fn union(&self, other: &ConstraintTypes) -> ConstraintTypes {
        dispatch!(self, c => c.union(other))
    }

    fn difference(&self, other: &ConstraintTypes) -> ConstraintTypes {
        dispatch!(self, c => c.difference(other))
    }

    fn is_any(&self) -> bool {
        dispatch!(self, c => c.is_any())
    }

    fn is_empty(&self) -> bool {
        dispatch!(self, c => c.is_empty())
    }
}

impl fmt::Display for ConstraintTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, c => fmt::Display::fmt(c, f))
    }
}

impl From<MatchAllConstraint> for ConstraintTypes {
    fn from(constraint: MatchAllConstraint) -> Self {
        ConstraintTypes::Any(constraint)
    }
}

impl From<MatchNoneConstraint> for ConstraintTypes {
    fn from(constraint: MatchNoneConstraint) -> Self {
        ConstraintTypes::Empty(constraint)
    }
}

impl From<Constraint> for ConstraintTypes {
    fn from(constraint: Constraint) -> Self {
        ConstraintTypes::Constraint(constraint)
    }
}

impl From<MultiConstraint> for ConstraintTypes {
    fn from(constraint: MultiConstraint) -> Self {
        ConstraintTypes::Multi(constraint)
    }
}

impl From<UnionConstraint> for ConstraintTypes {
    fn from(constraint: UnionConstraint) -> Self {
        ConstraintTypes::Union(constraint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_dispatch() {
        let any: ConstraintTypes = MatchAllConstraint::new().into();
        let empty: ConstraintTypes = MatchNoneConstraint::new().into();
        let ne: ConstraintTypes = Constraint::not_equal("1.0").into();

        assert_eq!(any.to_string(), "*");
        assert_eq!(empty.to_string(), "<empty>");
        assert_eq!(ne.to_string(), "!=1.0");
    }

    #[test]
    fn test_predicates_dispatch() {
        let any: ConstraintTypes = MatchAllConstraint::new().into();
        let empty: ConstraintTypes = MatchNoneConstraint::new().into();
        let eq: ConstraintTypes = Constraint::equal("1.0").into();

        assert!(any.is_any() && !any.is_empty());
        assert!(empty.is_empty() && !empty.is_any());
        assert!(!eq.is_any() && !eq.is_empty());
    }
}
