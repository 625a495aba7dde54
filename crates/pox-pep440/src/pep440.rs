//! Pep440 facade providing high-level version operations

use crate::constraint::{Constraint, ConstraintInterface, ConstraintTypes};
use crate::version::Version;
use crate::version_parser::{VersionParser, VersionParserError};

/// Main facade for version operations
pub struct Pep440;

impl Pep440 {
    /// Check if a version satisfies a constraint expression
    pub fn satisfies(version: &str, constraints: &str) -> bool {
        let parser = VersionParser::new();

        let normalized = match parser.normalize(version) {
            Ok(v) => v,
            Err(_) => return false,
        };

        let parsed_constraints = match parser.parse_constraints(constraints) {
            Ok(c) => c,
            Err(_) => return false,
        };

        parsed_constraints.allows(&Constraint::equal(normalized))
    }

    /// Return all versions that satisfy the given constraints
    pub fn satisfied_by(versions: &[&str], constraints: &str) -> Vec<String> {
        let parser = VersionParser::new();
        let parsed_constraints = match parser.parse_constraints(constraints) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter_map(|v| {
                let normalized = parser.normalize(v).ok()?;
                if parsed_constraints.allows(&Constraint::equal(normalized)) {
                    Some(v.to_string())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Parse constraints and return a reusable representation
    pub fn parse_constraints(constraints: &str) -> Result<ConstraintTypes, VersionParserError> {
        VersionParser::new().parse_constraints(constraints)
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let parser = VersionParser::new();

        // Invalid versions are dropped
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((parser.parse(v).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
