//! Version parsing and normalization module

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::constraint::{Constraint, ConstraintInterface, ConstraintTypes, MatchAllConstraint};
use crate::segments::{LocalSegment, Phase, Release, ReleaseTag};
use crate::version::Version;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("Invalid version string \"{0}\"")]
    InvalidVersion(String),
    #[error("Could not parse version constraint {constraint}: {reason}")]
    ConstraintParseError { constraint: String, reason: String },
    #[error("{0}")]
    ConstraintError(String),
}

impl From<crate::constraint::ConstraintError> for VersionParserError {
    fn from(err: crate::constraint::ConstraintError) -> Self {
        VersionParserError::ConstraintError(err.to_string())
    }
}

lazy_static! {
    // Longer spellings come first, the regex alternation is leftmost-first.
    static ref VERSION_RE: Regex = Regex::new(
        r"(?xi)
        ^\s*
        v?
        (?:(?P<epoch>[0-9]+)!)?
        (?P<release>[0-9]+(?:\.[0-9]+)*)
        (?P<pre>
            [-_.]?
            (?P<pre_l>alpha|a|beta|b|preview|pre|c|rc)
            [-_.]?
            (?P<pre_n>[0-9]+)?
        )?
        (?P<post>
            (?:-(?P<post_n1>[0-9]+))
            |
            (?:
                [-_.]?
                (?P<post_l>post|rev|r)
                [-_.]?
                (?P<post_n2>[0-9]+)?
            )
        )?
        (?P<dev>
            [-_.]?
            (?P<dev_l>dev)
            [-_.]?
            (?P<dev_n>[0-9]+)?
        )?
        (?:\+(?P<local>[a-z0-9]+(?:[-_.][a-z0-9]+)*))?
        \s*$"
    ).unwrap();

    static ref LOCAL_SEPARATOR_RE: Regex = Regex::new(r"[-_.]").unwrap();

    // OR constraint splitter
    static ref OR_CONSTRAINT_RE: Regex = Regex::new(r"\s*\|\|\s*").unwrap();

    // Basic comparator
    static ref BASIC_COMPARATOR_RE: Regex = Regex::new(r"^(==|!=|=)?\s*(\S+)$").unwrap();
}

/// Parses PEP 440 version strings and equality constraint expressions
#[derive(Debug, Clone, Default)]
pub struct VersionParser;

impl VersionParser {
    pub fn new() -> Self {
        VersionParser
    }

    /// Check whether a string is a valid version
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    /// Parse a version string into a [`Version`]
    ///
    /// The input (minus surrounding whitespace) is kept as the version's text.
    pub fn parse(&self, version: &str) -> Result<Version, VersionParserError> {
        let invalid = || VersionParserError::InvalidVersion(version.to_string());
        let caps = VERSION_RE.captures(version).ok_or_else(invalid)?;

        let number = |name: &str| -> Result<Option<u64>, VersionParserError> {
            caps.name(name)
                .map(|m| m.as_str().parse::<u64>().map_err(|_| invalid()))
                .transpose()
        };

        let epoch = number("epoch")?.unwrap_or(0);

        let release = caps
            .name("release")
            .map(|m| m.as_str())
            .unwrap_or_default()
            .split('.')
            .map(|part| part.parse::<u64>().map_err(|_| invalid()))
            .collect::<Result<Vec<u64>, _>>()?;

        let pre = tag(&caps, "pre_l", number("pre_n")?);
        let post = if caps.name("post_n1").is_some() {
            Some(ReleaseTag::new(Phase::Post, number("post_n1")?.unwrap_or(0)))
        } else {
            tag(&caps, "post_l", number("post_n2")?)
        };
        let dev = tag(&caps, "dev_l", number("dev_n")?);

        let local = caps
            .name("local")
            .map(|m| {
                LOCAL_SEPARATOR_RE
                    .split(m.as_str())
                    .map(|segment| local_segment(segment).ok_or_else(invalid))
                    .collect::<Result<Vec<LocalSegment>, _>>()
            })
            .transpose()?;

        let parsed = Version::builder()
            .epoch(epoch)
            .release(Release::from_parts(&release))
            .pre(pre)
            .post(post)
            .dev(dev)
            .local(local)
            .text(version.trim())
            .build();

        log::trace!("Parsed version {} as {:?}", version, parsed);

        Ok(parsed)
    }

    /// Normalize a version string into its canonical form
    ///
    /// Two strings normalize to the same value exactly when the versions they
    /// denote compare equal: trailing zero release components are dropped,
    /// tags are spelled as in [`Version::to_normalized_string`] and local
    /// segments are canonicalized.
    pub fn normalize(&self, version: &str) -> Result<String, VersionParserError> {
        let parsed = self.parse(version)?;

        let local = parsed.local().map(|segments| {
            segments
                .iter()
                .map(|segment| match segment.as_number() {
                    Some(number) => LocalSegment::Number(number),
                    None => segment.clone(),
                })
                .collect()
        });

        let canonical = parsed
            .replace()
            .release(Release::from_parts(parsed.release().significant_parts()))
            .local(local)
            .build();

        Ok(canonical.to_normalized_string())
    }

    /// Parse a constraint expression
    ///
    /// `*` (or nothing) matches everything, `||` separates alternatives and
    /// `,` separates requirements that must all hold. Each requirement is a
    /// version optionally prefixed with `==`, `=` or `!=`.
    pub fn parse_constraints(&self, constraints: &str) -> Result<ConstraintTypes, VersionParserError> {
        let constraints = constraints.trim();
        if constraints.is_empty() || constraints == "*" {
            return Ok(MatchAllConstraint::new().into());
        }

        let mut or_constraints: Option<ConstraintTypes> = None;
        for or_part in OR_CONSTRAINT_RE.split(constraints) {
            let mut and_constraints: Option<ConstraintTypes> = None;
            for and_part in or_part.split(',') {
                let constraint = self.parse_constraint(and_part.trim(), constraints)?;
                and_constraints = Some(match and_constraints {
                    Some(previous) => previous.intersect(&constraint),
                    None => constraint,
                });
            }

            if let Some(and_constraints) = and_constraints {
                or_constraints = Some(match or_constraints {
                    Some(previous) => previous.union(&and_constraints),
                    None => and_constraints,
                });
            }
        }

        let parsed = or_constraints.unwrap_or_else(|| MatchAllConstraint::new().into());
        log::debug!("Parsed constraints \"{}\" as {}", constraints, parsed);

        Ok(parsed)
    }

    fn parse_constraint(&self, constraint: &str, full: &str) -> Result<ConstraintTypes, VersionParserError> {
        if constraint == "*" {
            return Ok(MatchAllConstraint::new().into());
        }

        let caps = BASIC_COMPARATOR_RE.captures(constraint).ok_or_else(|| {
            VersionParserError::ConstraintParseError {
                constraint: full.to_string(),
                reason: format!("empty requirement in \"{}\"", full),
            }
        })?;

        let operator = caps.get(1).map_or("==", |m| m.as_str());
        let version = caps.get(2).map_or("", |m| m.as_str());

        let normalized = self.normalize(version).map_err(|err| {
            VersionParserError::ConstraintParseError {
                constraint: full.to_string(),
                reason: err.to_string(),
            }
        })?;

        Ok(Constraint::new(normalized, operator)?.into())
    }
}

fn tag(caps: &Captures<'_>, label: &str, number: Option<u64>) -> Option<ReleaseTag> {
    let phase = caps.name(label).and_then(|m| Phase::from_name(m.as_str()))?;
    Some(ReleaseTag::new(phase, number.unwrap_or(0)))
}

/// `None` for an all-digit segment too large for a number
fn local_segment(segment: &str) -> Option<LocalSegment> {
    if segment.bytes().all(|b| b.is_ascii_digit()) {
        return segment.parse::<u64>().ok().map(LocalSegment::Number);
    }
    Some(LocalSegment::Text(segment.to_lowercase()))
}
