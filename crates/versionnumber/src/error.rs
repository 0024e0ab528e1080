//! Error types.

use std::fmt;

use thiserror::Error;

use crate::Str;

/// Part of a version that holds an identifier list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IdentifierPart {
    /// Pre-release identifiers, after `-`.
    PreRelease,
    /// Build metadata identifiers, after `+`.
    BuildMetadata,
}

impl fmt::Display for IdentifierPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierPart::PreRelease => write!(f, "pre-release"),
            IdentifierPart::BuildMetadata => write!(f, "build metadata"),
        }
    }
}

/// Error produced when constructing a [`crate::Version`] or
/// [`crate::Identifier`] from values that violate a version invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Pre-release is present but has no identifiers
    #[error("pre-release cannot be empty")]
    EmptyPreRelease,
    /// Build metadata is present but has no identifiers
    #[error("build metadata cannot be empty")]
    EmptyBuildMetadata,
    /// Empty textual pre-release identifier
    #[error("pre-release identifier cannot be empty")]
    EmptyPreReleaseIdentifier,
    /// Textual identifier consisting only of digits
    ///
    /// Such identifiers must be [`crate::Identifier::Numeric`] so that each
    /// identifier has exactly one representation.
    #[error("{part} identifier `{identifier}` is digit-only and must be numeric")]
    DigitOnlyTextualIdentifier {
        /// Part of the version containing the identifier.
        part: IdentifierPart,
        /// Offending identifier.
        identifier: Str,
    },
    /// Textual identifier containing a character other than `[0-9A-Za-z-]`
    #[error("{part} identifier `{identifier}` contains invalid character {ch:?}")]
    InvalidIdentifierChar {
        /// Part of the version containing the identifier.
        part: IdentifierPart,
        /// Offending identifier.
        identifier: Str,
        /// First invalid character.
        ch: char,
    },
}

/// Error produced when parsing a version string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// String does not match the version grammar
    #[error("invalid version syntax at {}..{}: {message}", span.start, span.end)]
    Syntax {
        /// Location of the first mismatch in the input.
        span: crate::Span,
        /// Description of what was expected.
        message: String,
    },
    /// Numeric pre-release identifier with a leading zero
    #[error("leading zero in numeric pre-release identifier `{0}`")]
    LeadingZero(Str),
    /// Numeric build metadata identifier with a leading zero
    ///
    /// This is only produced when [`crate::Features::lossy_build_numbers`] is
    /// disabled.
    #[error("leading zero in numeric build metadata identifier `{0}`")]
    LeadingZeroInBuild(Str),
    /// Number too large to store
    #[error("number `{0}` is too large")]
    NumberTooLarge(Str),
    /// Parsed fields violate a version invariant
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl<'src> From<chumsky::error::Rich<'src, char>> for ParseError {
    fn from(value: chumsky::error::Rich<'src, char>) -> Self {
        Self::Syntax {
            span: *value.span(),
            message: value.to_string(),
        }
    }
}
