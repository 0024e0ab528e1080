//! Semantic version values.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::charsets::{BUILD_METADATA_PREFIX, PRE_RELEASE_PREFIX, SEPARATOR};
use crate::error::IdentifierPart;
use crate::identifier::{cmp_identifiers, validate_identifiers};
use crate::{Features, Identifier, ParseError, ValidationError};

/// Semantic version, in the form `major.minor.patch[-pre.release][+build.metadata]`.
///
/// Fields are private so that every `Version` upholds these invariants:
///
/// - A pre-release, if present, has at least one identifier, and none of its
///   identifiers is empty.
/// - Build metadata, if present, has at least one identifier.
/// - Textual identifiers are never digit-only and only contain `[0-9A-Za-z-]`.
///
/// ## Equality and ordering
///
/// Equality and hashing are structural over all five fields, so two versions
/// that differ only in build metadata are **not** equal. SemVer precedence
/// ignores build metadata; use [`Version::cmp_precedence()`],
/// [`Version::precedence()`], or [`compare()`] for that.
///
/// [`Ord`] sorts by precedence first and breaks ties using build metadata, so
/// that it agrees with [`Eq`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<Vec<Identifier>>,
    build_metadata: Option<Vec<Identifier>>,
}

impl Default for Version {
    fn default() -> Self {
        Self::PLACEHOLDER
    }
}

impl Version {
    /// Placeholder version `0.0.0`
    pub const PLACEHOLDER: Version = Version::new(0, 0, 0);

    /// Constructs a release version with no pre-release or build metadata.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
            build_metadata: None,
        }
    }

    /// Constructs a version from its fields.
    ///
    /// Returns an error if `pre_release` or `build_metadata` is present but
    /// empty, or contains an invalid textual identifier.
    pub fn construct(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<Vec<Identifier>>,
        build_metadata: Option<Vec<Identifier>>,
    ) -> Result<Self, ValidationError> {
        Self::new(major, minor, patch)
            .with_pre_release(pre_release)?
            .with_build_metadata(build_metadata)
    }

    /// Parses a version string using the default [`Features`].
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        Self::parse_with_features(s, Features::default())
    }

    /// Parses a version string.
    ///
    /// The whole string must match; surrounding whitespace is not allowed.
    pub fn parse_with_features(s: &str, features: Features) -> Result<Self, ParseError> {
        let result = match crate::parse::parse_raw(s, features) {
            Ok(raw) => crate::normalize::normalize(raw, features),
            Err(errors) => Err(match errors.into_iter().next() {
                Some(e) => ParseError::from(e),
                None => ParseError::Syntax {
                    span: (0..s.len()).into(),
                    message: "invalid version".to_owned(),
                },
            }),
        };
        if let Err(e) = &result {
            log::trace!("rejected version string {s:?}: {e}");
        }
        result
    }

    /// Returns a copy of the version with a different pre-release.
    pub fn with_pre_release(
        self,
        pre_release: Option<Vec<Identifier>>,
    ) -> Result<Self, ValidationError> {
        if let Some(ids) = &pre_release {
            validate_identifiers(ids, IdentifierPart::PreRelease)
                .inspect_err(|e| log::trace!("rejected pre-release {ids:?}: {e}"))?;
        }
        Ok(Self {
            pre_release,
            ..self
        })
    }

    /// Returns a copy of the version with different build metadata.
    pub fn with_build_metadata(
        self,
        build_metadata: Option<Vec<Identifier>>,
    ) -> Result<Self, ValidationError> {
        if let Some(ids) = &build_metadata {
            validate_identifiers(ids, IdentifierPart::BuildMetadata)
                .inspect_err(|e| log::trace!("rejected build metadata {ids:?}: {e}"))?;
        }
        Ok(Self {
            build_metadata,
            ..self
        })
    }

    /// Major version number.
    pub fn major(&self) -> u64 {
        self.major
    }
    /// Minor version number.
    pub fn minor(&self) -> u64 {
        self.minor
    }
    /// Patch version number.
    pub fn patch(&self) -> u64 {
        self.patch
    }
    /// Pre-release identifiers, if any. Never empty.
    pub fn pre_release(&self) -> Option<&[Identifier]> {
        self.pre_release.as_deref()
    }
    /// Build metadata identifiers, if any. Never empty.
    pub fn build_metadata(&self) -> Option<&[Identifier]> {
        self.build_metadata.as_deref()
    }

    /// Returns `[major, minor, patch]`.
    pub fn core(&self) -> [u64; 3] {
        [self.major, self.minor, self.patch]
    }

    /// Returns whether the version has a pre-release.
    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    /// Compares two versions by SemVer precedence, ignoring build metadata.
    ///
    /// 1. `major`, `minor`, and `patch` are compared numerically, in that
    ///    order.
    /// 2. A version with a pre-release has lower precedence than the same
    ///    version without one.
    /// 3. Pre-releases are compared identifier by identifier. See
    ///    [`Identifier`] for how identifiers compare. If one pre-release is a
    ///    prefix of the other, the shorter one has lower precedence.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.core()
            .cmp(&other.core())
            .then_with(|| match (&self.pre_release, &other.pre_release) {
                (None, None) => Ordering::Equal,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => cmp_identifiers(a, b),
            })
    }

    /// Returns a view of the version that compares, tests equality, and hashes
    /// by precedence alone.
    pub fn precedence(&self) -> Precedence<'_> {
        Precedence(self)
    }

    /// Returns a value that displays the version, optionally omitting the
    /// pre-release and build metadata.
    pub fn display(&self, with_pre_release: bool, with_build_metadata: bool) -> VersionDisplay<'_> {
        VersionDisplay {
            version: self,
            with_pre_release,
            with_build_metadata,
        }
    }

    /// Formats the version, optionally omitting the pre-release and build
    /// metadata.
    ///
    /// `to_string_with(false, false)` produces only `major.minor.patch`.
    pub fn to_string_with(&self, with_pre_release: bool, with_build_metadata: bool) -> String {
        self.display(with_pre_release, with_build_metadata).to_string()
    }
}

/// Compares two versions by SemVer precedence, ignoring build metadata.
///
/// This is the same as [`Version::cmp_precedence()`].
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp_precedence(b)
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other).then_with(|| {
            match (&self.build_metadata, &other.build_metadata) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(a), Some(b)) => cmp_identifiers(a, b),
            }
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(true, true), f)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Display adapter returned by [`Version::display()`].
#[derive(Debug, Copy, Clone)]
pub struct VersionDisplay<'a> {
    version: &'a Version,
    with_pre_release: bool,
    with_build_metadata: bool,
}

impl fmt::Display for VersionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Version {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        } = self.version;
        write!(f, "{major}{SEPARATOR}{minor}{SEPARATOR}{patch}")?;
        if self.with_pre_release
            && let Some(ids) = pre_release
        {
            write!(f, "{PRE_RELEASE_PREFIX}")?;
            write_identifiers(f, ids)?;
        }
        if self.with_build_metadata
            && let Some(ids) = build_metadata
        {
            write!(f, "{BUILD_METADATA_PREFIX}")?;
            write_identifiers(f, ids)?;
        }
        Ok(())
    }
}

fn write_identifiers(f: &mut fmt::Formatter<'_>, ids: &[Identifier]) -> fmt::Result {
    let mut is_first = true;
    for id in ids {
        if is_first {
            is_first = false;
        } else {
            write!(f, "{SEPARATOR}")?;
        }
        write!(f, "{id}")?;
    }
    Ok(())
}

/// View of a [`Version`] that compares by SemVer precedence alone.
///
/// All comparison operators on this type, including `==`, are defined by
/// [`Version::cmp_precedence()`], so `1.0.0+a` and `1.0.0+b` are equal here
/// even though the [`Version`]s are not.
#[derive(Debug, Copy, Clone)]
pub struct Precedence<'a>(pub &'a Version);

impl PartialEq for Precedence<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Precedence<'_> {}

impl PartialOrd for Precedence<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Precedence<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_precedence(other.0)
    }
}

impl Hash for Precedence<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.core().hash(state);
        self.0.pre_release.hash(state);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Version {
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        let number = || prop_oneof![0..4_u64, any::<u64>()];
        let identifiers = || {
            prop::option::of(prop::collection::vec(Identifier::arbitrary(), 1..5))
        };

        (number(), number(), number(), identifiers(), identifiers())
            .prop_map(|(major, minor, patch, pre_release, build_metadata)| Version {
                major,
                minor,
                patch,
                pre_release,
                build_metadata,
            })
            .boxed()
    }

    type Strategy = proptest::strategy::BoxedStrategy<Self>;
}
