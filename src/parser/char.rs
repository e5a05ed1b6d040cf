//! Helpers for characters.

/// Checks if the given character matches `reserved` rule.
#[inline]
pub(crate) fn is_reserved(c: char) -> bool {
    is_gen_delim(c) || is_sub_delim(c)
}

/// Checks if the given character matches `gen-delim` rule.
#[inline]
pub(crate) fn is_gen_delim(c: char) -> bool {
    matches!(c, ':' | '/' | '?' | '#' | '[' | ']' | '@')
}

/// Checks if the given character matches `sub-delim` rule.
#[inline]
pub(crate) fn is_sub_delim(c: char) -> bool {
    matches!(
        c,
        '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
    )
}

/// Checks if the given ASCII byte matches `unreserved` rule.
#[inline]
pub(crate) fn is_ascii_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// Checks if the given character may appear in a user, a password, or the
/// host of a scheme-less `host:port` DSN.
///
/// These are `unreserved`, `sub-delims`, and `%` of percent-encoded triplets.
#[inline]
pub(crate) fn is_userinfo_char(c: char) -> bool {
    c == '%' || is_sub_delim(c) || (c.is_ascii() && is_ascii_unreserved(c as u8))
}

/// Checks if the given character may appear in a scheme.
#[inline]
pub(crate) fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-')
}

/// Checks if the given string is a single RFC 952 hostname label.
///
/// A label is a letter, optionally followed by letters, digits, and hyphens,
/// ending with a letter or digit.
fn is_rfc952_label(s: &str) -> bool {
    let bytes = s.as_bytes();
    let (first, rest) = match bytes.split_first() {
        Some(v) => v,
        None => return false,
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }
    match rest.split_last() {
        None => true,
        Some((last, middle)) => {
            last.is_ascii_alphanumeric()
                && middle.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
    }
}

/// Checks if the given string matches the RFC 952 hostname grammar.
///
/// Length is not checked here.
pub(crate) fn is_rfc952_hostname(s: &str) -> bool {
    s.split('.').all(is_rfc952_label)
}
