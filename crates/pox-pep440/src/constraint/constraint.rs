//! Single version constraint implementation

use std::fmt;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{
    ConstraintInterface, ConstraintTypes, MatchNoneConstraint, MultiConstraint, Operator,
    UnionConstraint,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Invalid operator \"{operator}\", expected one of: {expected}")]
    InvalidOperator { operator: String, expected: String },
}

/// A constraint matching exactly one version (`==1.0`) or every version but
/// one (`!=1.0`)
///
/// Versions are compared as opaque tokens, only ever for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constraint {
    version: String,
    operator: Operator,
}

impl Constraint {
    /// Create a constraint from an operator token (`=`, `==` or `!=`)
    pub fn new(version: impl Into<String>, operator: &str) -> Result<Self, ConstraintError> {
        let operator = Operator::from_str(operator).map_err(|_| ConstraintError::InvalidOperator {
            operator: operator.to_string(),
            expected: Operator::supported_operators().join(", "),
        })?;

        Ok(Constraint {
            version: version.into(),
            operator,
        })
    }

    /// `==version`
    pub fn equal(version: impl Into<String>) -> Self {
        Constraint {
            version: version.into(),
            operator: Operator::Equal,
        }
    }

    /// `!=version`
    pub fn not_equal(version: impl Into<String>) -> Self {
        Constraint {
            version: version.into(),
            operator: Operator::NotEqual,
        }
    }

    /// Get the version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    fn is_equal_op(&self) -> bool {
        self.operator == Operator::Equal
    }

    fn is_non_equal_op(&self) -> bool {
        self.operator == Operator::NotEqual
    }
}

impl ConstraintInterface for Constraint {
    fn allows(&self, other: &Constraint) -> bool {
        if self.is_equal_op() && other.is_equal_op() {
            return self.version == other.version;
        }

        // At least one side is a `!=`.
        self.version != other.version
    }

    fn allows_all(&self, other: &ConstraintTypes) -> bool {
        match other {
            ConstraintTypes::Constraint(other) => other == self,
            other => other.is_empty(),
        }
    }

    fn allows_any(&self, other: &ConstraintTypes) -> bool {
        if let ConstraintTypes::Constraint(other) = other {
            // The version space is infinite, so two exclusions always leave
            // something in common unless they are the same exclusion.
            if self.is_non_equal_op() && other.is_non_equal_op() {
                return self.version != other.version;
            }
        }

        other.allows(self)
    }

    fn intersect(&self, other: &ConstraintTypes) -> ConstraintTypes {
        let other = match other {
            ConstraintTypes::Constraint(other) => other,
            other => {
                log::trace!("Delegating intersection of {} with {}", self, other);
                return other.intersect(&self.clone().into());
            }
        };

        if other == self {
            return self.clone().into();
        }

        if self.is_non_equal_op() && other.is_equal_op() && self.allows(other) {
            return other.clone().into();
        }

        if other.is_non_equal_op() && self.is_equal_op() && other.allows(self) {
            return self.clone().into();
        }

        if self.is_non_equal_op() && other.is_non_equal_op() {
            return MultiConstraint::new_unchecked(vec![self.clone(), other.clone()]).into();
        }

        MatchNoneConstraint::new().into()
    }

    fn union(&self, other: &ConstraintTypes) -> ConstraintTypes {
        match other {
            ConstraintTypes::Constraint(other) => {
                UnionConstraint::new_unchecked(vec![self.clone(), other.clone()]).into()
            }
            other => {
                log::trace!("Delegating union of {} with {}", self, other);
                other.union(&self.clone().into())
            }
        }
    }

    fn difference(&self, other: &ConstraintTypes) -> ConstraintTypes {
        if matches!(other, ConstraintTypes::Constraint(other) if other == self) {
            return MatchNoneConstraint::new().into();
        }

        if other.allows(self) {
            return MatchNoneConstraint::new().into();
        }

        self.clone().into()
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator {
            Operator::Equal => write!(f, "{}", self.version),
            Operator::NotEqual => write!(f, "{}{}", self.operator, self.version),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Constraint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Constraint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let text = text.trim();
        if let Some(version) = text.strip_prefix("!=") {
            return Ok(Constraint::not_equal(version.trim()));
        }

        let version = text
            .strip_prefix("==")
            .or_else(|| text.strip_prefix('='))
            .unwrap_or(text);
        Ok(Constraint::equal(version.trim()))
    }
}
