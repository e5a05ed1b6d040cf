//! Percent-decoding of DSN components and form-encoding of parameters.

use core::fmt;
use core::str::Utf8Error;
use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::parser::char::is_reserved;
use crate::parser::str::{find, find_split_hole};

/// Characters written as-is in form-encoded keys and values.
///
/// These are the `unreserved` characters of RFC 3986. Spaces are handled
/// separately.
const FORM_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-decodes a user or a password.
///
/// Every triplet is decoded, and `+` is kept as is.
///
/// # Errors
///
/// Returns an error if the decoded bytes are not valid UTF-8.
///
/// # Examples
///
/// ```
/// use dsn_string::percent_encode::decode_userinfo;
///
/// assert_eq!(decode_userinfo("B3%26iX%5EiOCLN%2Ab")?, "B3&iX^iOCLN*b");
/// assert_eq!(decode_userinfo("a+b")?, "a+b");
/// assert!(decode_userinfo("%FF").is_err());
/// # Ok::<_, core::str::Utf8Error>(())
/// ```
pub fn decode_userinfo(s: &str) -> Result<Cow<'_, str>, Utf8Error> {
    percent_decode_str(s).decode_utf8()
}

/// Percent-decodes a host or a path, keeping escapes of reserved characters.
///
/// A triplet (or a sequence of triplets forming one UTF-8 character) is
/// decoded only if the decoded character is not a reserved character and not
/// `%`. Malformed triplets and invalid UTF-8 sequences are left as is.
///
/// # Examples
///
/// ```
/// use dsn_string::percent_encode::decode_path;
///
/// assert_eq!(decode_path("/%2f/messages"), "/%2f/messages");
/// assert_eq!(decode_path("/my%20db"), "/my db");
/// assert_eq!(decode_path("/%CE%B1"), "/\u{03B1}");
/// assert_eq!(decode_path("/%zz/%C3"), "/%zz/%C3");
/// ```
#[must_use]
pub fn decode_path(s: &str) -> Cow<'_, str> {
    if find(s, b'%').is_none() {
        return Cow::Borrowed(s);
    }

    let mut decoded = String::with_capacity(s.len());
    let mut rest = s;
    while let Some((before, after_percent)) = find_split_hole(rest, b'%') {
        decoded.push_str(before);
        match take_encoded_char(after_percent) {
            Some((c, len)) if c != '%' && !is_reserved(c) => {
                decoded.push(c);
                rest = &after_percent[len..];
            }
            _ => {
                decoded.push('%');
                rest = after_percent;
            }
        }
    }
    decoded.push_str(rest);
    Cow::Owned(decoded)
}

/// Decodes a key or a value of a form-encoded query.
///
/// `+` is decoded to a space and every triplet is decoded.
/// Invalid UTF-8 sequences are replaced with `U+FFFD`.
///
/// # Examples
///
/// ```
/// use dsn_string::percent_encode::decode_form;
///
/// assert_eq!(decode_form("host%5Bh1%5D"), "host[h1]");
/// assert_eq!(decode_form("dead+exchange"), "dead exchange");
/// ```
#[must_use]
pub fn decode_form(s: &str) -> Cow<'_, str> {
    if find(s, b'+').is_none() {
        return percent_decode_str(s).decode_utf8_lossy();
    }
    let replaced = s.replace('+', " ");
    Cow::Owned(percent_decode_str(&replaced).decode_utf8_lossy().into_owned())
}

/// Returns a proxy that writes the form-encoded key or value.
///
/// A space is written as `+`. Everything else other than `unreserved`
/// characters is percent-encoded, including brackets and `+` itself.
///
/// # Examples
///
/// ```
/// use dsn_string::percent_encode::encode_form;
///
/// assert_eq!(encode_form("host[h1]").to_string(), "host%5Bh1%5D");
/// assert_eq!(encode_form("x-delay").to_string(), "x-delay");
/// assert_eq!(encode_form("x y+z").to_string(), "x+y%2Bz");
/// ```
#[inline]
#[must_use]
pub fn encode_form(s: &str) -> FormEncode<'_> {
    FormEncode(s)
}

/// A proxy that writes a form-encoded string.
///
/// Created by [`encode_form`].
#[derive(Debug, Clone, Copy)]
pub struct FormEncode<'a>(&'a str);

impl fmt::Display for FormEncode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words = self.0.split(' ');
        if let Some(first) = words.next() {
            write!(f, "{}", utf8_percent_encode(first, FORM_COMPONENT))?;
        }
        for word in words {
            write!(f, "+{}", utf8_percent_encode(word, FORM_COMPONENT))?;
        }
        Ok(())
    }
}

/// Decodes two hex digits at the head of the string.
#[must_use]
fn take_xdigits2(s: &str) -> Option<u8> {
    let bytes = s.as_bytes();
    let upper = char::from(*bytes.first()?).to_digit(16)?;
    let lower = char::from(*bytes.get(1)?).to_digit(16)?;
    // Both digits are below 16.
    Some(((upper << 4) | lower) as u8)
}

/// Decodes one character from percent-encoded triplets.
///
/// The given string is the input right after the first `%`.
/// Returns the character and the number of bytes consumed from the string.
#[must_use]
fn take_encoded_char(after_percent: &str) -> Option<(char, usize)> {
    let first = take_xdigits2(after_percent)?;
    let char_len = match first {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => return None,
    };

    let mut buf = [first, 0, 0, 0];
    let mut consumed = 2;
    for dest in &mut buf[1..char_len] {
        let triplet = after_percent[consumed..].strip_prefix('%')?;
        *dest = take_xdigits2(triplet)?;
        consumed += 3;
    }
    let c = core::str::from_utf8(&buf[..char_len]).ok()?.chars().next()?;
    Some((c, consumed))
}
