//! Scheme and parameters.

use core::fmt::{self, Write as _};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::percent_encode::encode_form;
use crate::types::{Parameters, Value};

/// A DSN with only a scheme and parameters, e.g. `null://` or `redis:?host[h1]`.
///
/// This is also the common part of [`UrlDsn`][`crate::UrlDsn`] and
/// [`PathDsn`][`crate::PathDsn`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dsn {
    /// Scheme.
    scheme: Option<String>,
    /// Parameters from the query string.
    #[cfg_attr(feature = "serde", serde(default))]
    parameters: Parameters,
}

impl Dsn {
    /// Creates a new `Dsn`.
    #[must_use]
    pub fn new(scheme: Option<impl Into<String>>, parameters: Parameters) -> Self {
        Self {
            scheme: scheme.map(Into::into),
            parameters,
        }
    }

    /// Returns the scheme.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns all parameters.
    #[inline]
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns the parameter `key`.
    #[inline]
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }

    /// Returns the parameter `key`, or `default` if it is not set.
    #[inline]
    #[must_use]
    pub fn parameter_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.parameter(key).unwrap_or(default)
    }

    /// Replaces the parameters, keeping the scheme.
    #[inline]
    #[must_use]
    pub(crate) fn with_parameters(self, parameters: Parameters) -> Self {
        Self { parameters, ..self }
    }

    /// Writes `scheme://`, or nothing if there is no scheme.
    pub(crate) fn fmt_scheme(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scheme() {
            Some(scheme) if !scheme.is_empty() => write!(f, "{}://", scheme),
            _ => Ok(()),
        }
    }

    /// Writes `?query`, or nothing if there are no parameters.
    pub(crate) fn fmt_query(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parameters.is_empty() {
            return Ok(());
        }
        f.write_char('?')?;
        let mut writer = QueryWriter { f, first: true };
        for (name, value) in &self.parameters {
            writer.write_value(&mut String::from(name.as_str()), value)?;
        }
        Ok(())
    }
}

/// Renders `scheme://?query`.
impl fmt::Display for Dsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_scheme(f)?;
        self.fmt_query(f)
    }
}

/// Writer of form-encoded `key=value` pairs.
struct QueryWriter<'a, 'b> {
    /// Destination.
    f: &'a mut fmt::Formatter<'b>,
    /// Whether no pair has been written yet.
    first: bool,
}

impl QueryWriter<'_, '_> {
    /// Writes the pairs for `value` under the (unencoded) key `key`.
    ///
    /// `key` is used as a scratch buffer and is restored before returning.
    fn write_value(&mut self, key: &mut String, value: &Value) -> fmt::Result {
        match value {
            Value::String(s) => {
                if !self.first {
                    self.f.write_char('&')?;
                }
                self.first = false;
                write!(self.f, "{}={}", encode_form(key), encode_form(s))
            }
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    self.write_nested(key, &i.to_string(), item)?;
                }
                Ok(())
            }
            Value::Map(map) => {
                for (name, item) in map {
                    self.write_nested(key, name, item)?;
                }
                Ok(())
            }
        }
    }

    /// Writes `value` under `key[name]`.
    fn write_nested(&mut self, key: &mut String, name: &str, value: &Value) -> fmt::Result {
        let len = key.len();
        key.push('[');
        key.push_str(name);
        key.push(']');
        let result = self.write_value(key, value);
        key.truncate(len);
        result
    }
}
