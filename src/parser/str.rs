//! Functions for common string operations.

/// Returns the position of the first occurrence of the given byte.
#[inline]
#[must_use]
pub(crate) fn find(haystack: &str, needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr(needle, haystack.as_bytes())
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.bytes().position(|b| b == needle)
    }
}

/// Returns the position of the first occurrence of either of the given bytes.
#[inline]
#[must_use]
pub(crate) fn find2(haystack: &str, needle1: u8, needle2: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr2(needle1, needle2, haystack.as_bytes())
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.bytes().position(|b| b == needle1 || b == needle2)
    }
}

/// Returns the position of the first occurrence of any of the given bytes.
#[inline]
#[must_use]
pub(crate) fn find3(haystack: &str, needle1: u8, needle2: u8, needle3: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr3(needle1, needle2, needle3, haystack.as_bytes())
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack
            .bytes()
            .position(|b| b == needle1 || b == needle2 || b == needle3)
    }
}

/// Returns the position of the last occurrence of the given byte.
#[inline]
#[must_use]
pub(crate) fn rfind(haystack: &str, needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memrchr(needle, haystack.as_bytes())
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.bytes().rposition(|b| b == needle)
    }
}

/// Splits the string at the first occurrence of the byte, removing the byte.
///
/// Returns `(before, after)`.
#[inline]
#[must_use]
pub(crate) fn find_split_hole(s: &str, b: u8) -> Option<(&str, &str)> {
    find(s, b).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Splits the string at the first occurrence of either of the bytes, keeping
/// the found byte at the head of the second part.
///
/// Returns `(before, from_the_byte)`.
#[inline]
#[must_use]
pub(crate) fn find_split2(s: &str, b1: u8, b2: u8) -> Option<(&str, &str)> {
    find2(s, b1, b2).map(|pos| s.split_at(pos))
}

/// Splits the string at the first occurrence of any of the bytes, keeping the
/// found byte at the head of the second part.
///
/// Returns `(before, from_the_byte)`.
#[inline]
#[must_use]
pub(crate) fn find_split3(s: &str, b1: u8, b2: u8, b3: u8) -> Option<(&str, &str)> {
    find3(s, b1, b2, b3).map(|pos| s.split_at(pos))
}

/// Splits the string at the last occurrence of the byte, removing the byte.
///
/// Returns `(before, after)`.
#[inline]
#[must_use]
pub(crate) fn rfind_split_hole(s: &str, b: u8) -> Option<(&str, &str)> {
    rfind(s, b).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits() {
        assert_eq!(find_split_hole("user:pass", b':'), Some(("user", "pass")));
        assert_eq!(find_split_hole("user", b':'), None);
        assert_eq!(find_split3("host/a?b", b'/', b'?', b'#'), Some(("host", "/a?b")));
        assert_eq!(find_split3("host?b/c", b'/', b'?', b'#'), Some(("host", "?b/c")));
        assert_eq!(rfind_split_hole("[::1]:80", b':'), Some(("[::1]", "80")));
    }
}
