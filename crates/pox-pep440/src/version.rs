//! PEP 440 version value and its total ordering

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::segments::{LocalSegment, Phase, Release, ReleaseTag};
use crate::version_parser::{VersionParser, VersionParserError};

/// Tag position in the comparison key
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum TagKey {
    NegativeInfinity,
    Tag(ReleaseTag),
    Infinity,
}

/// Sorts before every real tag of any phase
const NEG_INF_TAG: TagKey = TagKey::NegativeInfinity;
/// Sorts after every real tag of any phase
const INF_TAG: TagKey = TagKey::Infinity;

/// Local segment position in the comparison key
///
/// Text sorts before numbers, text compares lexicographically and numbers
/// numerically. `NegativeInfinity` stands in for an absent local label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum LocalKey {
    NegativeInfinity,
    Text(String),
    Number(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct ComparisonKey {
    epoch: u64,
    release: Release,
    pre: TagKey,
    post: TagKey,
    dev: TagKey,
    local: Vec<LocalKey>,
}

/// A version such as `1.0`, `2!1.4.2rc1.post3.dev0` or `1.0+ubuntu.1`
///
/// Equality, ordering and hashing only look at the structured fields. Two
/// versions written differently (`v1.0` and `1.0.0`) are equal.
#[derive(Debug, Clone)]
pub struct Version {
    epoch: u64,
    release: Release,
    pre: Option<ReleaseTag>,
    post: Option<ReleaseTag>,
    dev: Option<ReleaseTag>,
    local: Option<Vec<LocalSegment>>,
    text: String,
    key: ComparisonKey,
}

/// Field-by-field construction of a [`Version`]
///
/// The text and comparison key are always derived in [`VersionBuilder::build`],
/// unless a literal text is given explicitly.
#[derive(Debug, Clone, Default)]
pub struct VersionBuilder {
    epoch: u64,
    release: Release,
    pre: Option<ReleaseTag>,
    post: Option<ReleaseTag>,
    dev: Option<ReleaseTag>,
    local: Option<Vec<LocalSegment>>,
    text: Option<String>,
}

impl VersionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn epoch(mut self, epoch: u64) -> Self {
        self.epoch = epoch;
        self
    }

    pub fn release(mut self, release: Release) -> Self {
        self.release = release;
        self
    }

    pub fn pre(mut self, pre: Option<ReleaseTag>) -> Self {
        self.pre = pre;
        self
    }

    pub fn post(mut self, post: Option<ReleaseTag>) -> Self {
        self.post = post;
        self
    }

    pub fn dev(mut self, dev: Option<ReleaseTag>) -> Self {
        self.dev = dev;
        self
    }

    /// Local label; an empty list means no label
    pub fn local(mut self, local: Option<Vec<LocalSegment>>) -> Self {
        self.local = local.filter(|segments| !segments.is_empty());
        self
    }

    /// Keep `text` verbatim as the version's string form
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into()).filter(|text| !text.is_empty());
        self
    }

    pub fn build(self) -> Version {
        let key = make_compare_key(
            self.epoch,
            &self.release,
            self.pre,
            self.post,
            self.dev,
            self.local.as_deref(),
        );
        let text = match self.text {
            Some(text) => text,
            None => render(
                self.epoch,
                &self.release,
                [self.pre, self.post, self.dev],
                self.local.as_deref(),
                false,
            ),
        };

        Version {
            epoch: self.epoch,
            release: self.release,
            pre: self.pre,
            post: self.post,
            dev: self.dev,
            local: self.local,
            text,
            key,
        }
    }
}

fn make_compare_key(
    epoch: u64,
    release: &Release,
    pre: Option<ReleaseTag>,
    post: Option<ReleaseTag>,
    dev: Option<ReleaseTag>,
    local: Option<&[LocalSegment]>,
) -> ComparisonKey {
    // A dev-only release has to sort before every pre-release of the
    // same release: 1.0.dev0 < 1.0a0. With a pre or post segment present
    // the regular rules already get this right.
    let pre = match (pre, post, dev) {
        (None, None, Some(_)) => NEG_INF_TAG,
        (None, _, _) => INF_TAG,
        (Some(pre), _, _) => TagKey::Tag(pre),
    };

    let post = post.map_or(NEG_INF_TAG, TagKey::Tag);
    let dev = dev.map_or(INF_TAG, TagKey::Tag);

    let local = match local {
        None => vec![LocalKey::NegativeInfinity],
        Some(segments) => segments
            .iter()
            .map(|segment| match (segment.as_number(), segment) {
                (Some(number), _) => LocalKey::Number(number),
                (None, LocalSegment::Text(text)) => LocalKey::Text(text.clone()),
                (None, LocalSegment::Number(number)) => LocalKey::Number(*number),
            })
            .collect(),
    };

    ComparisonKey {
        epoch,
        release: release.clone(),
        pre,
        post,
        dev,
        local,
    }
}

fn render(
    epoch: u64,
    release: &Release,
    tags: [Option<ReleaseTag>; 3],
    local: Option<&[LocalSegment]>,
    short: bool,
) -> String {
    let dash = if short { "" } else { "-" };

    let mut pieces = vec![release.to_string()];
    pieces.extend(tags.iter().flatten().map(|tag| tag.to_string()));
    let mut version = pieces.join(dash);

    if epoch != 0 {
        version = format!("{}!{}", epoch, version);
    }

    if let Some(local) = local {
        let segments: Vec<String> = local.iter().map(|segment| segment.to_string()).collect();
        version.push('+');
        version.push_str(&segments.join("."));
    }

    version
}

impl Version {
    pub fn builder() -> VersionBuilder {
        VersionBuilder::new()
    }

    /// A plain final release in epoch 0
    pub fn from_release(release: Release) -> Self {
        VersionBuilder::new().release(release).build()
    }

    /// Parse a version string, see [`VersionParser::parse`]
    pub fn parse(text: &str) -> Result<Self, VersionParserError> {
        VersionParser::new().parse(text)
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn release(&self) -> &Release {
        &self.release
    }

    pub fn major(&self) -> u64 {
        self.release.major()
    }

    pub fn minor(&self) -> Option<u64> {
        self.release.minor()
    }

    pub fn patch(&self) -> Option<u64> {
        self.release.patch()
    }

    /// Release components beyond major.minor.patch
    pub fn non_semver_parts(&self) -> &[u64] {
        self.release.extra()
    }

    pub fn pre(&self) -> Option<ReleaseTag> {
        self.pre
    }

    pub fn post(&self) -> Option<ReleaseTag> {
        self.post
    }

    pub fn dev(&self) -> Option<ReleaseTag> {
        self.dev
    }

    pub fn local(&self) -> Option<&[LocalSegment]> {
        self.local.as_deref()
    }

    /// The string this version was created from, or its derived long form
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render from the structured fields
    ///
    /// The long form separates release, pre, post and dev with `-`
    /// (`1.0-a1-post2`), the short form concatenates them (`1.0a1post2`).
    pub fn to_version_string(&self, short: bool) -> String {
        render(
            self.epoch,
            &self.release,
            [self.pre, self.post, self.dev],
            self.local.as_deref(),
            short,
        )
    }

    /// PEP 440 normalized spelling of the structured fields
    ///
    /// The pre tag follows the release directly, post and dev tags are
    /// dot-separated: `1!1.0rc1.post2.dev3+ubuntu.1`.
    pub fn to_normalized_string(&self) -> String {
        let mut version = self.release.to_string();
        if self.epoch != 0 {
            version = format!("{}!{}", self.epoch, version);
        }
        if let Some(pre) = self.pre {
            version.push_str(&pre.to_string());
        }
        for tag in [self.post, self.dev].into_iter().flatten() {
            version.push('.');
            version.push_str(&tag.to_string());
        }
        if let Some(local) = &self.local {
            let segments: Vec<String> = local.iter().map(|segment| segment.to_string()).collect();
            version.push('+');
            version.push_str(&segments.join("."));
        }
        version
    }

    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }

    pub fn is_postrelease(&self) -> bool {
        self.post.is_some()
    }

    pub fn is_devrelease(&self) -> bool {
        self.dev.is_some()
    }

    pub fn is_local(&self) -> bool {
        self.local.is_some()
    }

    /// No pre, post or dev segment
    pub fn is_no_suffix_release(&self) -> bool {
        self.pre.is_none() && self.post.is_none() && self.dev.is_none()
    }

    pub fn is_unstable(&self) -> bool {
        self.is_prerelease() || self.is_devrelease()
    }

    pub fn is_stable(&self) -> bool {
        !self.is_unstable()
    }

    /// Builder seeded with this version's fields, but not its text
    pub fn replace(&self) -> VersionBuilder {
        VersionBuilder {
            epoch: self.epoch,
            release: self.release.clone(),
            pre: self.pre,
            post: self.post,
            dev: self.dev,
            local: self.local.clone(),
            text: None,
        }
    }

    fn with_release(&self, release: Release) -> VersionBuilder {
        VersionBuilder::new().epoch(self.epoch).release(release)
    }

    /// Next major release
    ///
    /// A pre-release of an already bumped major (`2.0.0a1`) becomes that
    /// major's final release instead of skipping ahead.
    pub fn next_major(&self) -> Version {
        let baseline = Release::new(self.major(), Some(0), Some(0), &[]);
        let release = if self.is_stable() || baseline < self.release {
            self.release.next_major()
        } else {
            self.release.clone()
        };
        self.with_release(release).build()
    }

    pub fn next_minor(&self) -> Version {
        let baseline = Release::new(self.major(), Some(self.minor().unwrap_or(0)), Some(0), &[]);
        let release = if self.is_stable() || baseline < self.release {
            self.release.next_minor()
        } else {
            self.release.clone()
        };
        self.with_release(release).build()
    }

    pub fn next_patch(&self) -> Version {
        let release = if self.is_stable() {
            self.release.next_patch()
        } else {
            self.release.clone()
        };
        self.with_release(release).build()
    }

    /// Next pre-release
    ///
    /// Stable versions start at alpha 0. With `next_phase` an alpha moves to
    /// beta 0, a beta to rc 0 and an rc to the final release.
    pub fn next_prerelease(&self, next_phase: bool) -> Version {
        let pre = match self.pre {
            Some(pre) if next_phase => pre.next_phase(),
            Some(pre) => Some(pre.next()),
            None => Some(ReleaseTag::first(Phase::Alpha)),
        };
        self.with_release(self.release.clone()).pre(pre).build()
    }

    pub fn next_postrelease(&self) -> Version {
        let post = match self.post {
            Some(post) => post.next(),
            None => ReleaseTag::first(Phase::Post),
        };
        self.replace().post(Some(post)).build()
    }

    pub fn next_devrelease(&self) -> Version {
        let dev = match self.dev {
            Some(dev) => dev.next(),
            None => ReleaseTag::first(Phase::Dev),
        };
        self.replace().dev(Some(dev)).build()
    }

    pub fn first_prerelease(&self) -> Version {
        self.replace()
            .pre(Some(ReleaseTag::first(Phase::Alpha)))
            .build()
    }

    pub fn without_local(&self) -> Version {
        self.replace().local(None).build()
    }

    pub fn without_postrelease(&self) -> Version {
        self.replace().post(None).build()
    }

    pub fn without_devrelease(&self) -> Version {
        self.replace().dev(None).build()
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for Version {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionParser::new().parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        VersionParser::new().parse(&text).map_err(de::Error::custom)
    }
}
