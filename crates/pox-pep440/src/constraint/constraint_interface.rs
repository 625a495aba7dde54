//! Constraint interface trait

use std::fmt;

use super::{Constraint, ConstraintTypes};

/// Operations shared by every member of the constraint family
///
/// Arguments and results are [`ConstraintTypes`], so a variant handles every
/// other variant either directly or by handing the operation to the other
/// side. Any new variant has to cover all of these to take part in the
/// delegation.
pub trait ConstraintInterface: fmt::Debug + fmt::Display {
    /// Check whether the single-version constraint `other` is accepted
    fn allows(&self, other: &Constraint) -> bool;

    /// Check whether every version `other` accepts is accepted here
    fn allows_all(&self, other: &ConstraintTypes) -> bool;

    /// Check whether at least one version is accepted by both
    fn allows_any(&self, other: &ConstraintTypes) -> bool;

    /// Versions accepted by both
    fn intersect(&self, other: &ConstraintTypes) -> ConstraintTypes;

    /// Versions accepted by either
    fn union(&self, other: &ConstraintTypes) -> ConstraintTypes;

    /// Versions accepted here but not by `other`
    fn difference(&self, other: &ConstraintTypes) -> ConstraintTypes;

    /// Check if this constraint accepts every version
    fn is_any(&self) -> bool {
        false
    }

    /// Check if this constraint accepts no version
    fn is_empty(&self) -> bool {
        false
    }
}
