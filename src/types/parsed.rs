//! Result of parsing.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::parse::StringParser;
use crate::types::{Credentials, Dsn, Parameters, PathDsn, UrlDsn, Value};

/// A parsed DSN of any shape.
///
/// ```
/// use dsn_string::ParsedDsn;
///
/// let dsn: ParsedDsn = "redis:///var/run/redis/redis.sock".parse()?;
/// match &dsn {
///     ParsedDsn::Path(path) => assert_eq!(path.path(), "/var/run/redis/redis.sock"),
///     _ => unreachable!("a path-addressed DSN"),
/// }
/// # Ok::<_, dsn_string::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum ParsedDsn {
    /// Scheme and parameters only.
    Bare(Dsn),
    /// Host-addressed.
    Url(UrlDsn),
    /// Path-addressed.
    Path(PathDsn),
}

impl ParsedDsn {
    /// Returns the scheme and parameters.
    #[inline]
    #[must_use]
    pub fn as_dsn(&self) -> &Dsn {
        match self {
            Self::Bare(v) => v,
            Self::Url(v) => v.as_dsn(),
            Self::Path(v) => v.as_dsn(),
        }
    }

    /// Returns the scheme.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.as_dsn().scheme()
    }

    /// Returns all parameters.
    #[inline]
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        self.as_dsn().parameters()
    }

    /// Returns the parameter `key`.
    #[inline]
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.as_dsn().parameter(key)
    }

    /// Returns the parameter `key`, or `default` if it is not set.
    #[inline]
    #[must_use]
    pub fn parameter_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.as_dsn().parameter_or(key, default)
    }

    /// Returns the credentials, if the DSN has a location and credentials.
    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        match self {
            Self::Bare(_) => None,
            Self::Url(v) => v.credentials(),
            Self::Path(v) => v.credentials(),
        }
    }

    /// Returns the host-addressed DSN.
    #[inline]
    #[must_use]
    pub fn as_url(&self) -> Option<&UrlDsn> {
        match self {
            Self::Url(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the path-addressed DSN.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> Option<&PathDsn> {
        match self {
            Self::Path(v) => Some(v),
            _ => None,
        }
    }

    /// Converts into the host-addressed DSN.
    ///
    /// # Errors
    ///
    /// Returns `self` back if it is not host-addressed.
    pub fn into_url(self) -> Result<UrlDsn, Self> {
        match self {
            Self::Url(v) => Ok(v),
            v => Err(v),
        }
    }

    /// Converts into the path-addressed DSN.
    ///
    /// # Errors
    ///
    /// Returns `self` back if it is not path-addressed.
    pub fn into_path(self) -> Result<PathDsn, Self> {
        match self {
            Self::Path(v) => Ok(v),
            v => Err(v),
        }
    }
}

impl AsRef<Dsn> for ParsedDsn {
    #[inline]
    fn as_ref(&self) -> &Dsn {
        self.as_dsn()
    }
}

impl From<Dsn> for ParsedDsn {
    #[inline]
    fn from(v: Dsn) -> Self {
        Self::Bare(v)
    }
}

impl From<UrlDsn> for ParsedDsn {
    #[inline]
    fn from(v: UrlDsn) -> Self {
        Self::Url(v)
    }
}

impl From<PathDsn> for ParsedDsn {
    #[inline]
    fn from(v: PathDsn) -> Self {
        Self::Path(v)
    }
}

impl fmt::Display for ParsedDsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bare(v) => v.fmt(f),
            Self::Url(v) => v.fmt(f),
            Self::Path(v) => v.fmt(f),
        }
    }
}

/// Parses with the default [`StringParser`].
impl FromStr for ParsedDsn {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StringParser::new().parse(s)
    }
}

/// Parses with the default [`StringParser`].
impl TryFrom<&str> for ParsedDsn {
    type Error = Error;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
