//! Conversion of matched version text into typed fields.

use crate::charsets::{has_leading_zero, is_digit_only};
use crate::error::IdentifierPart;
use crate::parse::RawVersion;
use crate::{Features, Identifier, ParseError, Version};

/// Converts grammar output into a [`Version`], validating it the same way as
/// [`Version::construct()`].
pub(crate) fn normalize(raw: RawVersion<'_>, features: Features) -> Result<Version, ParseError> {
    let pre_release = raw
        .pre_release
        .map(|ids| normalize_identifiers(&ids, IdentifierPart::PreRelease, features))
        .transpose()?;
    let build_metadata = raw
        .build_metadata
        .map(|ids| normalize_identifiers(&ids, IdentifierPart::BuildMetadata, features))
        .transpose()?;

    Ok(Version::construct(
        parse_number(raw.major)?,
        parse_number(raw.minor)?,
        parse_number(raw.patch)?,
        pre_release,
        build_metadata,
    )?)
}

fn normalize_identifiers(
    identifiers: &[&str],
    part: IdentifierPart,
    features: Features,
) -> Result<Vec<Identifier>, ParseError> {
    identifiers
        .iter()
        .map(|&s| normalize_identifier(s, part, features))
        .collect()
}

/// Promotes a digit-only identifier to [`Identifier::Numeric`]. Any other
/// identifier stays textual.
fn normalize_identifier(
    s: &str,
    part: IdentifierPart,
    features: Features,
) -> Result<Identifier, ParseError> {
    if !is_digit_only(s) {
        return Ok(Identifier::Textual(s.into()));
    }
    if has_leading_zero(s) {
        match part {
            IdentifierPart::PreRelease => return Err(ParseError::LeadingZero(s.into())),
            IdentifierPart::BuildMetadata if !features.lossy_build_numbers => {
                return Err(ParseError::LeadingZeroInBuild(s.into()));
            }
            // `007` becomes `7`
            IdentifierPart::BuildMetadata => (),
        }
    }
    parse_number(s).map(Identifier::Numeric)
}

fn parse_number(s: &str) -> Result<u64, ParseError> {
    // the grammar only passes digit strings here, so overflow is the only
    // possible failure
    s.parse().map_err(|_| ParseError::NumberTooLarge(s.into()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_identifier_promotion() {
        let f = Features::LENIENT;
        let pre = IdentifierPart::PreRelease;
        let build = IdentifierPart::BuildMetadata;

        assert_eq!(normalize_identifier("0", pre, f), Ok(Identifier::Numeric(0)));
        assert_eq!(normalize_identifier("42", pre, f), Ok(Identifier::Numeric(42)));
        assert_eq!(
            normalize_identifier("0a", pre, f),
            Ok(Identifier::Textual("0a".into())),
        );
        assert_eq!(
            normalize_identifier("01", pre, f),
            Err(ParseError::LeadingZero("01".into())),
        );
        assert_eq!(normalize_identifier("007", build, f), Ok(Identifier::Numeric(7)));
        assert_eq!(
            normalize_identifier("007", build, Features::STRICT),
            Err(ParseError::LeadingZeroInBuild("007".into())),
        );
        assert_eq!(
            normalize_identifier("", build, f),
            Ok(Identifier::Textual("".into())),
        );
    }

    #[test]
    fn test_number_overflow() {
        assert_eq!(parse_number("18446744073709551615"), Ok(u64::MAX));
        assert_eq!(
            parse_number("18446744073709551616"),
            Err(ParseError::NumberTooLarge("18446744073709551616".into())),
        );
    }
}
