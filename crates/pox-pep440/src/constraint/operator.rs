//! Operator types for equality constraints

use std::fmt;
use thiserror::Error;

/// Comparison operators for equality constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (==)
    Equal,
    /// Not equal (!=)
    NotEqual,
}

#[derive(Error, Debug)]
#[error("Invalid operator: {0}")]
pub struct InvalidOperatorError(pub String);

impl Operator {
    /// Parse operator from string, `=` is read as `==`
    pub fn from_str(s: &str) -> Result<Self, InvalidOperatorError> {
        match s {
            "=" | "==" => Ok(Operator::Equal),
            "!=" => Ok(Operator::NotEqual),
            _ => Err(InvalidOperatorError(s.to_string())),
        }
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
        }
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &["=", "==", "!="]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Operator::from_str("=").unwrap(), Operator::Equal);
        assert_eq!(Operator::from_str("==").unwrap(), Operator::Equal);
        assert_eq!(Operator::from_str("!=").unwrap(), Operator::NotEqual);
        assert!(Operator::from_str("<>").is_err());
        assert!(Operator::from_str(">=").is_err());
        assert!(Operator::from_str("").is_err());
    }
}
