//! Version comparison utilities

use std::cmp::Ordering;

use crate::version_parser::VersionParser;

/// Comparator for comparing version strings
///
/// Every comparison is false when either side is not a valid version.
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, ">", version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, ">=", version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "<", version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "<=", version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "==", version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "!=", version2)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare(version1: &str, operator: &str, version2: &str) -> bool {
        let parser = VersionParser::new();
        let (Ok(a), Ok(b)) = (parser.parse(version1), parser.parse(version2)) else {
            return false;
        };

        let ordering = a.cmp(&b);
        match operator {
            ">" => ordering == Ordering::Greater,
            ">=" => ordering != Ordering::Less,
            "<" => ordering == Ordering::Less,
            "<=" => ordering != Ordering::Greater,
            "=" | "==" => ordering == Ordering::Equal,
            "!=" => ordering != Ordering::Equal,
            _ => false,
        }
    }
}
