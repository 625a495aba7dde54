//! MultiConstraint - conjunction of exclusions

use std::fmt;
use thiserror::Error;

use super::coverage::Coverage;
use super::{Constraint, ConstraintInterface, ConstraintTypes, Operator};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MultiConstraintError {
    #[error("Must provide at least two constraints for a MultiConstraint")]
    TooFewConstraints,
    #[error("A MultiConstraint can only be made of != constraints, got {0}")]
    NonNegativeConstraint(String),
}

/// A constraint matching every version except the excluded ones (`!=1.0, !=2.0`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiConstraint {
    constraints: Vec<Constraint>,
}

impl MultiConstraint {
    /// Create a new MultiConstraint from at least two `!=` constraints
    pub fn new(constraints: Vec<Constraint>) -> Result<Self, MultiConstraintError> {
        if constraints.len() < 2 {
            return Err(MultiConstraintError::TooFewConstraints);
        }

        if let Some(constraint) = constraints.iter().find(|c| c.operator() != Operator::NotEqual) {
            return Err(MultiConstraintError::NonNegativeConstraint(constraint.to_string()));
        }

        Ok(Self::new_unchecked(constraints))
    }

    pub(crate) fn new_unchecked(constraints: Vec<Constraint>) -> Self {
        MultiConstraint { constraints }
    }

    /// Get the constraints
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    fn coverage(&self) -> Coverage {
        Coverage::all_of(&self.constraints)
    }
}

impl ConstraintInterface for MultiConstraint {
    fn allows(&self, other: &Constraint) -> bool {
        self.constraints.iter().all(|constraint| constraint.allows(other))
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

impl fmt::Display for MultiConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let constraints_str: Vec<String> = self.constraints.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", constraints_str.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn excluding(versions: &[&str]) -> MultiConstraint {
        MultiConstraint::new(versions.iter().map(|v| Constraint::not_equal(*v)).collect()).unwrap()
    }

    #[test]
    fn test_multi_constraint_too_few() {
        let result = MultiConstraint::new(vec![Constraint::not_equal("1.0")]);
        assert_eq!(result.unwrap_err(), MultiConstraintError::TooFewConstraints);
    }

    #[test]
    fn test_multi_constraint_rejects_equality() {
        let result = MultiConstraint::new(vec![Constraint::not_equal("1.0"), Constraint::equal("2.0")]);
        assert_eq!(
            result.unwrap_err(),
            MultiConstraintError::NonNegativeConstraint("2.0".to_string())
        );
    }

    #[test]
    fn test_multi_constraint_display() {
        assert_eq!(excluding(&["1.0", "2.0"]).to_string(), "!=1.0, !=2.0");
    }

    #[test]
    fn test_allows() {
        let multi = excluding(&["1.0", "2.0"]);
        assert!(multi.allows(&Constraint::equal("3.0")));
        assert!(!multi.allows(&Constraint::equal("1.0")));
        assert!(!multi.allows(&Constraint::equal("2.0")));
    }

    #[test]
    fn test_allows_all() {
        let multi = excluding(&["1.0", "2.0"]);
        assert!(multi.allows_all(&excluding(&["1.0", "2.0", "3.0"]).into()));
        assert!(!multi.allows_all(&excluding(&["1.0", "3.0"]).into()));
        assert!(multi.allows_all(&Constraint::equal("3.0").into()));
        assert!(!multi.allows_all(&Constraint::not_equal("1.0").into()));
        assert!(!multi.allows_all(&ConstraintTypes::Any(Default::default())));
        assert!(multi.allows_all(&ConstraintTypes::Empty(Default::default())));
    }

    #[test]
    fn test_allows_any() {
        let multi = excluding(&["1.0", "2.0"]);
        assert!(multi.allows_any(&excluding(&["3.0", "4.0"]).into()));
        assert!(multi.allows_any(&Constraint::not_equal("1.0").into()));
        assert!(!multi.allows_any(&Constraint::equal("1.0").into()));
        assert!(!multi.allows_any(&ConstraintTypes::Empty(Default::default())));
    }

    #[test]
    fn test_intersect() {
        let multi = excluding(&["1.0", "2.0"]);
        assert_eq!(
            multi.intersect(&Constraint::not_equal("3.0").into()),
            excluding(&["1.0", "2.0", "3.0"]).into()
        );
        assert_eq!(
            multi.intersect(&Constraint::equal("3.0").into()),
            Constraint::equal("3.0").into()
        );
        assert!(multi.intersect(&Constraint::equal("1.0").into()).is_empty());
    }

    #[test]
    fn test_union() {
        let multi = excluding(&["1.0", "2.0"]);
        assert_eq!(
            multi.union(&Constraint::equal("1.0").into()),
            Constraint::not_equal("2.0").into()
        );
        assert!(multi.union(&Constraint::not_equal("3.0").into()).is_any());
        assert_eq!(
            multi.union(&excluding(&["2.0", "3.0"]).into()),
            Constraint::not_equal("2.0").into()
        );
    }

    #[test]
    fn test_difference() {
        let multi = excluding(&["1.0", "2.0"]);
        assert_eq!(
            multi.difference(&Constraint::not_equal("3.0").into()),
            Constraint::equal("3.0").into()
        );
        assert_eq!(
            multi.difference(&Constraint::equal("3.0").into()),
            excluding(&["1.0", "2.0", "3.0"]).into()
        );
    }
}
