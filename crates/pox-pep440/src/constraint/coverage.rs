//! Set model behind the compound constraints
//!
//! Every member of the family accepts either a finite set of versions or
//! everything except a finite set. The version space itself is treated as
//! infinite, so an "everything except" set is never empty and never a subset
//! of a finite one.

use std::collections::BTreeSet;

use super::{
    Constraint, ConstraintTypes, MatchAllConstraint, MatchNoneConstraint, MultiConstraint,
    Operator, UnionConstraint,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Coverage {
    /// Exactly these versions
    Only(BTreeSet<String>),
    /// Every version except these
    AllBut(BTreeSet<String>),
}

impl Coverage {
    pub(crate) fn of(constraint: &ConstraintTypes) -> Coverage {
        match constraint {
            ConstraintTypes::Any(_) => Coverage::AllBut(BTreeSet::new()),
            ConstraintTypes::Empty(_) => Coverage::Only(BTreeSet::new()),
            ConstraintTypes::Constraint(constraint) => Coverage::of_constraint(constraint),
            ConstraintTypes::Multi(multi) => Coverage::all_of(multi.constraints()),
            ConstraintTypes::Union(union) => Coverage::any_of(union.constraints()),
        }
    }

    pub(crate) fn of_constraint(constraint: &Constraint) -> Coverage {
        let versions = BTreeSet::from([constraint.version().to_string()]);
        match constraint.operator() {
            Operator::Equal => Coverage::Only(versions),
            Operator::NotEqual => Coverage::AllBut(versions),
        }
    }

    pub(crate) fn all_of(constraints: &[Constraint]) -> Coverage {
        constraints
            .iter()
            .fold(Coverage::AllBut(BTreeSet::new()), |acc, constraint| {
                acc.intersection(&Coverage::of_constraint(constraint))
            })
    }

    pub(crate) fn any_of(constraints: &[Constraint]) -> Coverage {
        constraints
            .iter()
            .fold(Coverage::Only(BTreeSet::new()), |acc, constraint| {
                acc.union(&Coverage::of_constraint(constraint))
            })
    }

    pub(crate) fn complement(&self) -> Coverage {
        match self {
            Coverage::Only(versions) => Coverage::AllBut(versions.clone()),
            Coverage::AllBut(versions) => Coverage::Only(versions.clone()),
        }
    }

    pub(crate) fn intersection(&self, other: &Coverage) -> Coverage {
        match (self, other) {
            (Coverage::Only(a), Coverage::Only(b)) => Coverage::Only(a.intersection(b).cloned().collect()),
            (Coverage::Only(a), Coverage::AllBut(b)) | (Coverage::AllBut(b), Coverage::Only(a)) => {
                Coverage::Only(a.difference(b).cloned().collect())
            }
            (Coverage::AllBut(a), Coverage::AllBut(b)) => Coverage::AllBut(a.union(b).cloned().collect()),
        }
    }

    pub(crate) fn union(&self, other: &Coverage) -> Coverage {
        match (self, other) {
            (Coverage::Only(a), Coverage::Only(b)) => Coverage::Only(a.union(b).cloned().collect()),
            (Coverage::Only(a), Coverage::AllBut(b)) | (Coverage::AllBut(b), Coverage::Only(a)) => {
                Coverage::AllBut(b.difference(a).cloned().collect())
            }
            (Coverage::AllBut(a), Coverage::AllBut(b)) => {
                Coverage::AllBut(a.intersection(b).cloned().collect())
            }
        }
    }

    pub(crate) fn difference(&self, other: &Coverage) -> Coverage {
        self.intersection(&other.complement())
    }

    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, Coverage::Only(versions) if versions.is_empty())
    }

    pub(crate) fn is_subset(&self, other: &Coverage) -> bool {
        match (self, other) {
            (Coverage::Only(a), Coverage::Only(b)) => a.is_subset(b),
            (Coverage::Only(a), Coverage::AllBut(b)) => a.is_disjoint(b),
            (Coverage::AllBut(_), Coverage::Only(_)) => false,
            (Coverage::AllBut(a), Coverage::AllBut(b)) => b.is_subset(a),
        }
    }

    pub(crate) fn overlaps(&self, other: &Coverage) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Smallest constraint accepting exactly this set
    pub(crate) fn into_constraint(self) -> ConstraintTypes {
        match self {
            Coverage::Only(versions) => {
                let mut constraints: Vec<Constraint> = versions.into_iter().map(Constraint::equal).collect();
                match constraints.len() {
                    0 => MatchNoneConstraint::new().into(),
                    1 => constraints.remove(0).into(),
                    _ => UnionConstraint::new_unchecked(constraints).into(),
                }
            }
            Coverage::AllBut(versions) => {
                let mut constraints: Vec<Constraint> = versions.into_iter().map(Constraint::not_equal).collect();
                match constraints.len() {
                    0 => MatchAllConstraint::new().into(),
                    1 => constraints.remove(0).into(),
                    _ => MultiConstraint::new_unchecked(constraints).into(),
                }
            }
        }
    }
}
