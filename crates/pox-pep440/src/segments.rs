//! Building blocks of a version: release numbers, release tags and local segments

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The dot-separated numeric core of a version, such as `1.4.2`
///
/// Comparison pads the shorter release with zeros, so `1.0` == `1.0.0`.
#[derive(Debug, Clone)]
pub struct Release {
    parts: Vec<u64>,
}

impl Release {
    /// Create a release from its numeric components
    ///
    /// An empty component list is treated as `0`.
    pub fn from_parts(parts: &[u64]) -> Self {
        if parts.is_empty() {
            return Release { parts: vec![0] };
        }

        Release {
            parts: parts.to_vec(),
        }
    }

    /// Create a release from named components
    ///
    /// `patch` is ignored when `minor` is absent.
    pub fn new(major: u64, minor: Option<u64>, patch: Option<u64>, extra: &[u64]) -> Self {
        let mut parts = vec![major];
        if let Some(minor) = minor {
            parts.push(minor);
            if let Some(patch) = patch {
                parts.push(patch);
                parts.extend_from_slice(extra);
            }
        }
        Release { parts }
    }

    pub fn major(&self) -> u64 {
        self.parts[0]
    }

    pub fn minor(&self) -> Option<u64> {
        self.parts.get(1).copied()
    }

    pub fn patch(&self) -> Option<u64> {
        self.parts.get(2).copied()
    }

    /// Components beyond major.minor.patch
    pub fn extra(&self) -> &[u64] {
        self.parts.get(3..).unwrap_or(&[])
    }

    /// All components in order
    pub fn parts(&self) -> &[u64] {
        &self.parts
    }

    /// Number of components the release was written with
    pub fn precision(&self) -> usize {
        self.parts.len()
    }

    pub fn next_major(&self) -> Release {
        let mut parts = vec![0; self.parts.len()];
        parts[0] = self.major().saturating_add(1);
        Release { parts }
    }

    pub fn next_minor(&self) -> Release {
        let mut parts = vec![0; self.parts.len().max(2)];
        parts[0] = self.major();
        parts[1] = self.minor().map_or(1, |minor| minor.saturating_add(1));
        Release { parts }
    }

    pub fn next_patch(&self) -> Release {
        let mut parts = vec![0; self.parts.len().max(3)];
        parts[0] = self.major();
        parts[1] = self.minor().unwrap_or(0);
        parts[2] = self.patch().map_or(1, |patch| patch.saturating_add(1));
        Release { parts }
    }

    /// Components with trailing zeros removed, keeping at least one
    pub(crate) fn significant_parts(&self) -> &[u64] {
        let len = self
            .parts
            .iter()
            .rposition(|part| *part != 0)
            .map_or(1, |pos| pos + 1);
        &self.parts[..len]
    }
}

impl Default for Release {
    fn default() -> Self {
        Release { parts: vec![0] }
    }
}

impl PartialEq for Release {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Release {}

impl Hash for Release {
    // Must agree with the zero-padded equality.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_parts().hash(state);
    }
}

impl PartialOrd for Release {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Release {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        for i in 0..len {
            let a = self.parts.get(i).copied().unwrap_or(0);
            let b = other.parts.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }
        Ordering::Equal
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.parts.iter().map(|part| part.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Phase of a release tag
///
/// Pre-release phases order alpha < beta < rc. Post and dev tags only ever
/// compare against tags of their own phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Alpha,
    Beta,
    ReleaseCandidate,
    Post,
    Dev,
}

impl Phase {
    /// Resolve a phase name or one of its spellings (`a`, `preview`, `rev`, ...)
    pub fn from_name(name: &str) -> Option<Phase> {
        match name.to_ascii_lowercase().as_str() {
            "a" | "alpha" => Some(Phase::Alpha),
            "b" | "beta" => Some(Phase::Beta),
            "c" | "rc" | "pre" | "preview" => Some(Phase::ReleaseCandidate),
            "post" | "rev" | "r" => Some(Phase::Post),
            "dev" => Some(Phase::Dev),
            _ => None,
        }
    }

    /// Full phase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Alpha => "alpha",
            Phase::Beta => "beta",
            Phase::ReleaseCandidate => "rc",
            Phase::Post => "post",
            Phase::Dev => "dev",
        }
    }

    /// Abbreviation used when rendering a version
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Phase::Alpha => "a",
            Phase::Beta => "b",
            Phase::ReleaseCandidate => "rc",
            Phase::Post => "post",
            Phase::Dev => "dev",
        }
    }

    pub fn is_prerelease(&self) -> bool {
        matches!(self, Phase::Alpha | Phase::Beta | Phase::ReleaseCandidate)
    }

    fn next(&self) -> Option<Phase> {
        match self {
            Phase::Alpha => Some(Phase::Beta),
            Phase::Beta => Some(Phase::ReleaseCandidate),
            _ => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A (phase, number) pair marking pre, post or dev status, e.g. alpha-0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseTag {
    phase: Phase,
    number: u64,
}

impl ReleaseTag {
    pub fn new(phase: Phase, number: u64) -> Self {
        ReleaseTag { phase, number }
    }

    /// First tag of a phase
    pub fn first(phase: Phase) -> Self {
        ReleaseTag { phase, number: 0 }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    /// Same phase, next number; stays put at `u64::MAX`
    pub fn next(&self) -> ReleaseTag {
        ReleaseTag {
            phase: self.phase,
            number: self.number.saturating_add(1),
        }
    }

    /// First tag of the following pre-release phase, `None` past rc
    pub fn next_phase(&self) -> Option<ReleaseTag> {
        self.phase.next().map(ReleaseTag::first)
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.phase.abbreviation(), self.number)
    }
}

/// One `.`-separated piece of a local version label
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocalSegment {
    Number(u64),
    Text(String),
}

impl LocalSegment {
    /// Numeric value of the segment, if it is (or reads as) a number
    pub fn as_number(&self) -> Option<u64> {
        match self {
            LocalSegment::Number(number) => Some(*number),
            LocalSegment::Text(text) => {
                if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
                    text.parse().ok()
                } else {
                    None
                }
            }
        }
    }
}

impl From<u64> for LocalSegment {
    fn from(number: u64) -> Self {
        LocalSegment::Number(number)
    }
}

impl From<&str> for LocalSegment {
    fn from(text: &str) -> Self {
        LocalSegment::Text(text.to_string())
    }
}

impl fmt::Display for LocalSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalSegment::Number(number) => write!(f, "{}", number),
            LocalSegment::Text(text) => write!(f, "{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_accessors() {
        let release = Release::from_parts(&[1, 4, 2, 7, 9]);
        assert_eq!(release.major(), 1);
        assert_eq!(release.minor(), Some(4));
        assert_eq!(release.patch(), Some(2));
        assert_eq!(release.extra(), &[7, 9]);
        assert_eq!(release.precision(), 5);

        let short = Release::from_parts(&[3]);
        assert_eq!(short.minor(), None);
        assert_eq!(short.patch(), None);
        assert!(short.extra().is_empty());
    }

    #[test]
    fn test_release_zero_padding() {
        assert_eq!(Release::from_parts(&[1, 0]), Release::from_parts(&[1, 0, 0]));
        assert!(Release::from_parts(&[1, 0]) < Release::from_parts(&[1, 0, 1]));
        assert!(Release::from_parts(&[1, 10]) > Release::from_parts(&[1, 9, 9]));
        assert_eq!(Release::from_parts(&[]), Release::from_parts(&[0]));
    }

    #[test]
    fn test_release_new_drops_orphan_patch() {
        let release = Release::new(1, None, Some(5), &[]);
        assert_eq!(release.to_string(), "1");
    }

    #[test]
    fn test_release_next() {
        let release = Release::from_parts(&[1, 2, 3]);
        assert_eq!(release.next_major().to_string(), "2.0.0");
        assert_eq!(release.next_minor().to_string(), "1.3.0");
        assert_eq!(release.next_patch().to_string(), "1.2.4");

        let short = Release::from_parts(&[1]);
        assert_eq!(short.next_major().to_string(), "2");
        assert_eq!(short.next_minor().to_string(), "1.1");
        assert_eq!(short.next_patch().to_string(), "1.0.1");

        let long = Release::from_parts(&[1, 2, 3, 4]);
        assert_eq!(long.next_minor().to_string(), "1.3.0.0");
    }

    #[test]
    fn test_release_next_at_u64_max() {
        let max = u64::MAX;
        let release = Release::from_parts(&[max, max, max]);
        assert_eq!(release.next_major().parts(), &[max, 0, 0]);
        assert_eq!(release.next_minor().parts(), &[max, max, 0]);
        assert_eq!(release.next_patch().parts(), &[max, max, max]);
    }

    #[test]
    fn test_phase_aliases() {
        assert_eq!(Phase::from_name("a"), Some(Phase::Alpha));
        assert_eq!(Phase::from_name("BETA"), Some(Phase::Beta));
        assert_eq!(Phase::from_name("c"), Some(Phase::ReleaseCandidate));
        assert_eq!(Phase::from_name("preview"), Some(Phase::ReleaseCandidate));
        assert_eq!(Phase::from_name("rev"), Some(Phase::Post));
        assert_eq!(Phase::from_name("dev"), Some(Phase::Dev));
        assert_eq!(Phase::from_name("gamma"), None);
    }

    #[test]
    fn test_release_tag_ordering() {
        let a1 = ReleaseTag::new(Phase::Alpha, 1);
        let a2 = ReleaseTag::new(Phase::Alpha, 2);
        let b0 = ReleaseTag::first(Phase::Beta);
        let rc0 = ReleaseTag::first(Phase::ReleaseCandidate);
        assert!(a1 < a2);
        assert!(a2 < b0);
        assert!(b0 < rc0);
    }

    #[test]
    fn test_release_tag_next() {
        let alpha = ReleaseTag::new(Phase::Alpha, 3);
        assert_eq!(alpha.next(), ReleaseTag::new(Phase::Alpha, 4));
        assert_eq!(alpha.next_phase(), Some(ReleaseTag::first(Phase::Beta)));
        assert_eq!(
            ReleaseTag::first(Phase::Beta).next_phase(),
            Some(ReleaseTag::first(Phase::ReleaseCandidate))
        );
        assert_eq!(ReleaseTag::first(Phase::ReleaseCandidate).next_phase(), None);
        assert_eq!(ReleaseTag::first(Phase::Post).next_phase(), None);

        let last = ReleaseTag::new(Phase::Alpha, u64::MAX);
        assert_eq!(last.next(), last);
    }

    #[test]
    fn test_release_tag_display() {
        assert_eq!(ReleaseTag::new(Phase::Alpha, 1).to_string(), "a1");
        assert_eq!(ReleaseTag::new(Phase::ReleaseCandidate, 2).to_string(), "rc2");
        assert_eq!(ReleaseTag::first(Phase::Post).to_string(), "post0");
        assert_eq!(ReleaseTag::new(Phase::Dev, 5).to_string(), "dev5");
    }

    #[test]
    fn test_local_segment_as_number() {
        assert_eq!(LocalSegment::Number(4).as_number(), Some(4));
        assert_eq!(LocalSegment::from("007").as_number(), Some(7));
        assert_eq!(LocalSegment::from("abc").as_number(), None);
        assert_eq!(LocalSegment::from("").as_number(), None);
    }
}
