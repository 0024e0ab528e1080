use chumsky::prelude::*;

use crate::Features;
use crate::charsets::{BUILD_METADATA_PREFIX, PRE_RELEASE_PREFIX, SEPARATOR, is_identifier_char};

/// Error produced by the grammar.
///
/// Only the first error is reported to callers; see
/// [`crate::ParseError::Syntax`].
pub(crate) type GrammarError<'src> = Rich<'src, char>;
type ParseExtra<'src> = extra::Err<GrammarError<'src>>;

/// Trait alias for parser.
pub(crate) trait VersionParser<'src, O>:
    Clone + Parser<'src, &'src str, O, ParseExtra<'src>>
{
}
impl<'src, O, T> VersionParser<'src, O> for T where
    T: Clone + Parser<'src, &'src str, O, ParseExtra<'src>>
{
}

/// Fields of a version string that matched the grammar, before any numbers
/// are converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawVersion<'src> {
    pub major: &'src str,
    pub minor: &'src str,
    pub patch: &'src str,
    pub pre_release: Option<Vec<&'src str>>,
    pub build_metadata: Option<Vec<&'src str>>,
}

/// Matches the whole of `s` against the version grammar.
pub(crate) fn parse_raw(
    s: &str,
    features: Features,
) -> Result<RawVersion<'_>, Vec<GrammarError<'_>>> {
    version(features).parse(s).into_result()
}

fn version<'src>(features: Features) -> impl VersionParser<'src, RawVersion<'src>> {
    let min_build_identifier_len = if features.empty_build_identifiers {
        0
    } else {
        1
    };

    let pre_release = just(PRE_RELEASE_PREFIX)
        .ignore_then(identifier_list(1))
        .labelled("pre-release");
    let build_metadata = just(BUILD_METADATA_PREFIX)
        .ignore_then(identifier_list(min_build_identifier_len))
        .labelled("build metadata");

    numeric_component()
        .labelled("major version")
        .then_ignore(just(SEPARATOR))
        .then(numeric_component().labelled("minor version"))
        .then_ignore(just(SEPARATOR))
        .then(numeric_component().labelled("patch version"))
        .then(pre_release.or_not())
        .then(build_metadata.or_not())
        .then_ignore(end())
        .map(
            |((((major, minor), patch), pre_release), build_metadata)| RawVersion {
                major,
                minor,
                patch,
                pre_release,
                build_metadata,
            },
        )
}

/// Dot-separated identifiers, each with at least `min_len` characters.
fn identifier_list<'src>(min_len: usize) -> impl VersionParser<'src, Vec<&'src str>> {
    identifier(min_len)
        .separated_by(just(SEPARATOR))
        .at_least(1)
        .collect()
}

fn identifier<'src>(min_len: usize) -> impl VersionParser<'src, &'src str> {
    any()
        .filter(|&c| is_identifier_char(c))
        .repeated()
        .at_least(min_len)
        .to_slice()
        .labelled("identifier")
}

/// `0` or a digit string without leading zeros.
fn numeric_component<'src>() -> impl VersionParser<'src, &'src str> {
    just('0')
        .ignored()
        .or(one_of('1'..='9').ignore_then(one_of('0'..='9').repeated()))
        .to_slice()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_raw_fields() {
        assert_eq!(
            parse_raw("10.0.3-rc.01+exp..sha", Features::LENIENT).ok(),
            Some(RawVersion {
                major: "10",
                minor: "0",
                patch: "3",
                pre_release: Some(vec!["rc", "01"]),
                build_metadata: Some(vec!["exp", "", "sha"]),
            }),
        );
        assert_eq!(
            parse_raw("1.2.3+", Features::LENIENT)
                .ok()
                .map(|raw| raw.build_metadata),
            Some(Some(vec![""])),
        );
    }

    #[test]
    fn test_grammar_rejects() {
        for s in [
            "", "1", "1.0", "1.0.", "1.0.0.0", "v1.0.0", " 1.0.0", "1.0.0 ", "01.0.0", "1.00.0",
            "1.0.01", "1.0.0-", "1.0.0-a..b", "1.0.0-a.", "1.0.0-é", "1.0.0+a+b", "1.0.0_a",
            "-1.0.0", "1.0.0-+",
        ] {
            assert!(parse_raw(s, Features::LENIENT).is_err(), "{s:?}");
        }
        for s in ["1.0.0+", "1.0.0+a..b", "1.0.0+a.", "1.0.0-a+"] {
            assert!(parse_raw(s, Features::LENIENT).is_ok(), "{s:?}");
            assert!(parse_raw(s, Features::STRICT).is_err(), "{s:?}");
        }
    }
}
