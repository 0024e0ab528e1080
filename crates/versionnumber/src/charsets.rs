//! Character sets allowed in version strings.

/// Returns whether `c` is allowed in a pre-release or build metadata
/// identifier: an ASCII letter, an ASCII digit, or `-`.
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Returns whether `s` is a non-empty string of ASCII digits.
///
/// Identifiers for which this returns true are numeric identifiers.
pub fn is_digit_only(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns whether `s` is a digit-only string with a redundant leading zero,
/// such as `01`. The string `0` on its own has no leading zero.
pub fn has_leading_zero(s: &str) -> bool {
    s.len() > 1 && s.starts_with('0') && is_digit_only(s)
}

/// Separator between the `major.minor.patch` numbers and between
/// identifiers.
pub const SEPARATOR: char = '.';
/// Prefix introducing the pre-release identifiers.
pub const PRE_RELEASE_PREFIX: char = '-';
/// Prefix introducing the build metadata identifiers.
pub const BUILD_METADATA_PREFIX: char = '+';

/// Regex character class (including the surrounding `[]`) matching all
/// characters for which [`is_identifier_char()`] returns true.
pub const IDENTIFIER_CHAR_CLASS: &str = "[0-9A-Za-z-]";

/// Regex character class (including the surrounding `[]`) matching all
/// characters for which [`is_identifier_char()`] returns true, **except for
/// digits**.
pub const NON_DIGIT_IDENTIFIER_CHAR_CLASS: &str = "[A-Za-z-]";

/// String containing all characters for which [`is_identifier_char()`]
/// returns true.
pub const IDENTIFIER_CHARS: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-";

#[cfg(test)]
lazy_static::lazy_static! {
    /// Textual identifier: at least one non-digit character.
    pub(crate) static ref TEXTUAL_IDENTIFIER_REGEX: &'static str = format!(
        "{IDENTIFIER_CHAR_CLASS}{{0,4}}{NON_DIGIT_IDENTIFIER_CHAR_CLASS}{IDENTIFIER_CHAR_CLASS}{{0,4}}"
    )
    .leak();
    /// Any non-empty identifier, numeric or not, possibly with leading zeros.
    pub(crate) static ref ANY_IDENTIFIER_REGEX: &'static str =
        format!("{IDENTIFIER_CHAR_CLASS}{{1,8}}").leak();
}
