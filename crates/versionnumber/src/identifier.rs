//! Pre-release and build metadata identifiers.

use std::cmp::Ordering;
use std::fmt;

use crate::charsets::{is_digit_only, is_identifier_char};
use crate::error::{IdentifierPart, ValidationError};
use crate::Str;

/// Dot-separated component of a pre-release or build metadata.
///
/// Numeric identifiers have lower precedence than textual identifiers, so
/// `1.0.0-1 < 1.0.0-alpha`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Identifier made only of digits, such as `11` in `beta.11`.
    Numeric(u64),
    /// Identifier containing at least one letter or `-`, such as `beta`.
    ///
    /// In build metadata, this may also be empty.
    Textual(Str),
}

impl Identifier {
    /// Constructs a numeric identifier.
    pub const fn numeric(n: u64) -> Self {
        Self::Numeric(n)
    }

    /// Constructs a textual identifier, valid in both pre-releases and build
    /// metadata.
    ///
    /// Returns an error if `s` is empty, consists only of digits, or contains
    /// a character other than `[0-9A-Za-z-]`. Empty build metadata
    /// identifiers can be constructed directly using [`Identifier::Textual`].
    pub fn textual(s: impl Into<Str>) -> Result<Self, ValidationError> {
        let ret = Self::Textual(s.into());
        ret.validate(IdentifierPart::PreRelease)?;
        Ok(ret)
    }

    /// Returns whether the identifier is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    /// Returns the number, if the identifier is numeric.
    pub fn as_numeric(&self) -> Option<u64> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Textual(_) => None,
        }
    }

    /// Returns the string, if the identifier is textual.
    pub fn as_textual(&self) -> Option<&str> {
        match self {
            Self::Numeric(_) => None,
            Self::Textual(s) => Some(s.as_str()),
        }
    }

    /// Checks that the identifier can appear in `part` of a version.
    pub(crate) fn validate(&self, part: IdentifierPart) -> Result<(), ValidationError> {
        let Self::Textual(s) = self else {
            return Ok(());
        };
        if s.is_empty() {
            return match part {
                IdentifierPart::PreRelease => Err(ValidationError::EmptyPreReleaseIdentifier),
                IdentifierPart::BuildMetadata => Ok(()),
            };
        }
        if is_digit_only(s) {
            return Err(ValidationError::DigitOnlyTextualIdentifier {
                part,
                identifier: s.clone(),
            });
        }
        if let Some(ch) = s.chars().find(|&c| !is_identifier_char(c)) {
            return Err(ValidationError::InvalidIdentifierChar {
                part,
                identifier: s.clone(),
                ch,
            });
        }
        Ok(())
    }
}

/// Checks a whole identifier list for `part` of a version.
pub(crate) fn validate_identifiers(
    identifiers: &[Identifier],
    part: IdentifierPart,
) -> Result<(), ValidationError> {
    if identifiers.is_empty() {
        return Err(match part {
            IdentifierPart::PreRelease => ValidationError::EmptyPreRelease,
            IdentifierPart::BuildMetadata => ValidationError::EmptyBuildMetadata,
        });
    }
    identifiers.iter().try_for_each(|id| id.validate(part))
}

/// Compares two identifier lists by SemVer precedence. The first differing
/// identifier decides; otherwise the shorter list is lesser.
pub(crate) fn cmp_identifiers(a: &[Identifier], b: &[Identifier]) -> Ordering {
    a.iter().cmp(b.iter())
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Numeric(a), Self::Numeric(b)) => a.cmp(b),
            (Self::Numeric(_), Self::Textual(_)) => Ordering::Less,
            (Self::Textual(_), Self::Numeric(_)) => Ordering::Greater,
            (Self::Textual(a), Self::Textual(b)) => a.as_str().cmp(b.as_str()),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Textual(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for Identifier {
    fn from(value: u64) -> Self {
        Self::Numeric(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Numeric(n) => serializer.serialize_u64(*n),
            Self::Textual(s) => serializer.serialize_str(s),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Numeric(u64),
            Textual(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Numeric(n) => Ok(Self::Numeric(n)),
            // Build metadata may hold empty textual identifiers.
            Repr::Textual(s) if s.is_empty() => Ok(Self::Textual(Str::default())),
            Repr::Textual(s) => Self::textual(s).map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Identifier {
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        prop_oneof![
            prop_oneof![0..20_u64, any::<u64>()].prop_map(Identifier::Numeric),
            crate::charsets::TEXTUAL_IDENTIFIER_REGEX
                .prop_map(|s| Identifier::Textual(s.into())),
        ]
        .boxed()
    }

    type Strategy = proptest::strategy::BoxedStrategy<Self>;
}
