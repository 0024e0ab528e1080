//! [Semantic Versioning 2.0.0](https://semver.org/) version numbers.
//!
//! A [`Version`] is an immutable value made of a `major.minor.patch` core, an
//! optional pre-release identifier list, and optional build metadata. Versions
//! can be parsed from text, constructed directly, formatted back to canonical
//! text, and ordered by SemVer precedence.
//!
//! ```
//! use versionnumber::Version;
//!
//! let rc = Version::parse("1.0.0-rc.1+build.7").unwrap();
//! let release = Version::parse("1.0.0").unwrap();
//! assert!(rc.precedence() < release.precedence());
//! assert_eq!(rc.to_string_with(true, false), "1.0.0-rc.1");
//! ```

pub mod charsets;
pub mod error;
pub mod identifier;
mod normalize;
mod parse;
pub mod version;

pub use error::{ParseError, ValidationError};
pub use identifier::Identifier;
pub use version::{Precedence, Version, VersionDisplay, compare};

/// String type used for textual identifiers.
pub type Str = lean_string::LeanString;

/// Span in a version string, as a byte range.
pub type Span = chumsky::span::SimpleSpan;

/// Set of grammar extensions to enable when parsing version strings.
///
/// Both extensions only affect build metadata, which never participates in
/// precedence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Features {
    /// Whether to allow empty build metadata identifiers.
    ///
    /// Example: `1.0.0+`, `1.0.0+exp..sha`
    pub empty_build_identifiers: bool,

    /// Whether to allow digit-only build metadata identifiers with leading
    /// zeros.
    ///
    /// Digit-only build identifiers are always stored as
    /// [`Identifier::Numeric`], so `1.0.0+007` is read as build metadata `7`
    /// and formats back as `1.0.0+7`. When this is `false`, such identifiers
    /// are rejected with [`ParseError::LeadingZeroInBuild`] instead.
    pub lossy_build_numbers: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self::LENIENT
    }
}

impl Features {
    /// Accepts only strings that format back to themselves byte-for-byte.
    pub const STRICT: Self = Self {
        empty_build_identifiers: false,
        lossy_build_numbers: false,
    };

    /// Accepts empty build identifiers and leading zeros in numeric build
    /// identifiers.
    pub const LENIENT: Self = Self {
        empty_build_identifiers: true,
        lossy_build_numbers: true,
    };
}
