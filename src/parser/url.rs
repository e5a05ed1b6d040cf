//! Decomposition of the URL-like part of a DSN.
//!
//! Inputs here have already been stripped of the scheme and the userinfo.

use crate::parser::str::{find, find_split2, find_split3, find_split_hole, rfind_split_hole};

/// Components of `host[:port][/path][?query][#fragment]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HostComponents<'a> {
    /// Host.
    ///
    /// Note that this can be empty.
    pub(crate) host: &'a str,
    /// Port, without the leading colon.
    ///
    /// An empty port (`host:`) is reported as `None`.
    pub(crate) port: Option<&'a str>,
    /// Path, including the leading slash.
    ///
    /// An empty path is reported as `None`.
    pub(crate) path: Option<&'a str>,
    /// Query, without the leading `?`.
    pub(crate) query: Option<&'a str>,
}

/// Components of `/path[?query][#fragment]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PathComponents<'a> {
    /// Path.
    pub(crate) path: &'a str,
    /// Query, without the leading `?`.
    pub(crate) query: Option<&'a str>,
}

/// Eats a string until the query or fragment, and returns `(rest, before_query)`.
#[must_use]
fn until_query(i: &str) -> (&str, &str) {
    match find_split2(i, b'?', b'#') {
        Some((before_query, rest)) => (rest, before_query),
        None => ("", i),
    }
}

/// Extracts the query from a string that starts with `?`, `#`, or is empty.
///
/// The fragment is dropped.
#[must_use]
fn query_before_fragment(i: &str) -> Option<&str> {
    let rest = i.strip_prefix('?')?;
    match find_split_hole(rest, b'#') {
        Some((query, _fragment)) => Some(query),
        None => Some(rest),
    }
}

/// Decomposes an authority into `(host, port)`.
///
/// The leading `:` of the port is truncated. IP literals (`[::1]`) are kept
/// intact.
#[must_use]
pub(crate) fn decompose_authority(authority: &str) -> (&str, Option<&str>) {
    let (host, port) = if authority.starts_with('[') {
        match find(authority, b']') {
            Some(end) => {
                let (literal, rest) = authority.split_at(end + 1);
                match rest.strip_prefix(':') {
                    Some(port) => (literal, Some(port)),
                    None => (authority, None),
                }
            }
            None => (authority, None),
        }
    } else {
        match rfind_split_hole(authority, b':') {
            Some((host, port)) => (host, Some(port)),
            None => (authority, None),
        }
    };
    (host, port.filter(|port| !port.is_empty()))
}

/// Decomposes `host[:port][/path][?query][#fragment]`.
#[must_use]
pub(crate) fn decompose_host_form(i: &str) -> HostComponents<'_> {
    let (authority, i) = match find_split3(i, b'/', b'?', b'#') {
        Some((authority, rest)) => (authority, rest),
        None => (i, ""),
    };
    let (host, port) = decompose_authority(authority);
    let (i, path) = until_query(i);
    HostComponents {
        host,
        port,
        path: Some(path).filter(|path| !path.is_empty()),
        query: query_before_fragment(i),
    }
}

/// Decomposes `/path[?query][#fragment]`.
///
/// Everything before the query is the path, including doubled slashes.
#[must_use]
pub(crate) fn decompose_path_form(i: &str) -> PathComponents<'_> {
    let (i, path) = until_query(i);
    PathComponents {
        path,
        query: query_before_fragment(i),
    }
}
