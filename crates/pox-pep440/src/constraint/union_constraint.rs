//! UnionConstraint - disjunction of constraints

use std::fmt;
use thiserror::Error;

use super::coverage::Coverage;
use super::{Constraint, ConstraintInterface, ConstraintTypes};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnionConstraintError {
    #[error("Must provide at least two constraints for a UnionConstraint")]
    TooFewConstraints,
}

/// A constraint matching whatever any of its members matches (`1.0 || 2.0`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionConstraint {
    constraints: Vec<Constraint>,
}

impl UnionConstraint {
    /// Create a new UnionConstraint from at least two constraints
    pub fn new(constraints: Vec<Constraint>) -> Result<Self, UnionConstraintError> {
        if constraints.len() < 2 {
            return Err(UnionConstraintError::TooFewConstraints);
        }

        Ok(Self::new_unchecked(constraints))
    }

    pub(crate) fn new_unchecked(constraints: Vec<Constraint>) -> Self {
        UnionConstraint { constraints }
    }

    /// Get the constraints
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    fn coverage(&self) -> Coverage {
        Coverage::any_of(&self.constraints)
    }
}

impl ConstraintInterface for UnionConstraint {
    fn allows(&self, other: &Constraint) -> bool {
        self.constraints.iter().any(|constraint| constraint.allows(other))
    }

    fn allows_all(&self, other: &ConstraintTypes) -> bool {
        Coverage::of(other).is_subset(&self.coverage())
    }

    fn allows_any(&self, other: &ConstraintTypes) -> bool {
        self.coverage().overlaps(&Coverage::of(other))
    }

    fn intersect(&self, other: &ConstraintTypes) -> ConstraintTypes {
        self.coverage().intersection(&Coverage::of(other)).into_constraint()
    }

    fn union(&self, other: &ConstraintTypes) -> ConstraintTypes {
        self.coverage().union(&Coverage::of(other)).into_constraint()
    }

    fn difference(&self, other: &ConstraintTypes) -> ConstraintTypes {
        self.coverage().difference(&Coverage::of(other)).into_constraint()
    }
}

impl fmt::Display for UnionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let constraints_str: Vec<String> = self.constraints.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", constraints_str.join(" || "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any_of(versions: &[&str]) -> UnionConstraint {
        UnionConstraint::new(versions.iter().map(|v| Constraint::equal(*v)).collect()).unwrap()
    }

    #[test]
    fn test_union_constraint_too_few() {
        let result = UnionConstraint::new(vec![Constraint::equal("1.0")]);
        assert_eq!(result.unwrap_err(), UnionConstraintError::TooFewConstraints);
    }

    #[test]
    fn test_union_constraint_display() {
        assert_eq!(any_of(&["1.0", "2.0"]).to_string(), "1.0 || 2.0");
    }

    #[test]
    fn test_allows() {
        let union = any_of(&["1.0", "2.0"]);
        assert!(union.allows(&Constraint::equal("1.0")));
        assert!(union.allows(&Constraint::equal("2.0")));
        assert!(!union.allows(&Constraint::equal("3.0")));
    }

    #[test]
    fn test_allows_all() {
        let union = any_of(&["1.0", "2.0", "3.0"]);
        assert!(union.allows_all(&any_of(&["1.0", "3.0"]).into()));
        assert!(union.allows_all(&Constraint::equal("2.0").into()));
        assert!(!union.allows_all(&Constraint::equal("4.0").into()));
        assert!(!union.allows_all(&Constraint::not_equal("4.0").into()));
    }

    #[test]
    fn test_mixed_members_cover_everything() {
        let union = UnionConstraint::new(vec![Constraint::not_equal("1.0"), Constraint::not_equal("2.0")]).unwrap();
        assert!(union.allows(&Constraint::equal("1.0")));
        assert!(union.allows_all(&ConstraintTypes::Any(Default::default())));
        assert!(!union.is_any());
    }

    #[test]
    fn test_intersect() {
        let union = any_of(&["1.0", "2.0", "3.0"]);
        assert_eq!(
            union.intersect(&any_of(&["2.0", "3.0", "4.0"]).into()),
            any_of(&["2.0", "3.0"]).into()
        );
        assert_eq!(
            union.intersect(&Constraint::equal("2.0").into()),
            Constraint::equal("2.0").into()
        );
        assert_eq!(
            union.intersect(&Constraint::not_equal("2.0").into()),
            any_of(&["1.0", "3.0"]).into()
        );
        assert!(union.intersect(&Constraint::equal("4.0").into()).is_empty());
    }

    #[test]
    fn test_union() {
        let union = any_of(&["1.0", "2.0"]);
        assert_eq!(
            union.union(&Constraint::equal("3.0").into()),
            any_of(&["1.0", "2.0", "3.0"]).into()
        );
        assert_eq!(
            union.union(&Constraint::not_equal("1.0").into()),
            ConstraintTypes::Any(Default::default())
        );
    }

    #[test]
    fn test_difference() {
        let union = any_of(&["1.0", "2.0"]);
        assert_eq!(
            union.difference(&Constraint::equal("1.0").into()),
            Constraint::equal("2.0").into()
        );
        assert!(union.difference(&Constraint::not_equal("3.0").into()).is_empty());
    }
}
