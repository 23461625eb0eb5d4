//! Character-level classification for segmented tokens.

/// ASCII letter or digit.
pub fn is_ascii_alnum(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// A token that is exactly one ASCII letter or digit.
///
/// Such tokens are fused with adjacent ones on output, so digits of a number
/// or letters of a latin word come out as one token. The length check is
/// independent of the character test.
pub fn is_mergeable_fragment(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => is_ascii_alnum(c),
        _ => false,
    }
}
