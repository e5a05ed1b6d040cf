//! Path-addressed DSN.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{Credentials, Dsn, Parameters, Value};

/// A DSN addressing an endpoint by filesystem path, e.g. `redis:///var/run/redis.sock`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathDsn {
    /// Scheme and parameters.
    #[cfg_attr(feature = "serde", serde(flatten))]
    dsn: Dsn,
    /// Path.
    path: String,
    /// Non-empty credentials.
    credentials: Option<Credentials>,
}

impl PathDsn {
    /// Creates a new `PathDsn`.
    ///
    /// Empty credentials are dropped.
    #[must_use]
    pub fn new(
        scheme: Option<impl Into<String>>,
        path: impl Into<String>,
        parameters: Parameters,
        credentials: Option<Credentials>,
    ) -> Self {
        Self {
            dsn: Dsn::new(scheme, parameters),
            path: path.into(),
            credentials: credentials.filter(|c| !c.is_empty()),
        }
    }

    /// Returns the scheme.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.dsn.scheme()
    }

    /// Returns the path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the credentials.
    #[inline]
    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns all parameters.
    #[inline]
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        self.dsn.parameters()
    }

    /// Returns the parameter `key`.
    #[inline]
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.dsn.parameter(key)
    }

    /// Returns the parameter `key`, or `default` if it is not set.
    #[inline]
    #[must_use]
    pub fn parameter_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.dsn.parameter_or(key, default)
    }

    /// Returns the scheme and parameters.
    #[inline]
    #[must_use]
    pub fn as_dsn(&self) -> &Dsn {
        &self.dsn
    }
}

impl AsRef<Dsn> for PathDsn {
    #[inline]
    fn as_ref(&self) -> &Dsn {
        &self.dsn
    }
}

impl From<PathDsn> for Dsn {
    #[inline]
    fn from(v: PathDsn) -> Self {
        v.dsn
    }
}

/// Renders `scheme://user:password@/path?query`.
impl fmt::Display for PathDsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.dsn.fmt_scheme(f)?;
        if let Some(credentials) = &self.credentials {
            write!(f, "{}@", credentials)?;
        }
        f.write_str(&self.path)?;
        self.dsn.fmt_query(f)
    }
}
