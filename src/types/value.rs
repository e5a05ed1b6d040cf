//! Parameter values.

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of a DSN, in the order they appeared in the query string.
///
/// Note that equality of two `Parameters` does not depend on the order.
pub type Parameters = IndexMap<String, Value>;

/// A parameter value.
///
/// Query strings use the form-encoding convention where bracketed keys
/// build nested structure:
///
/// | query               | value                          |
/// |---------------------|--------------------------------|
/// | `a=1`               | `{a: "1"}`                     |
/// | `a[b]=1&a[c]=2`     | `{a: {b: "1", c: "2"}}`        |
/// | `a[]=1&a[]=2`       | `{a: ["1", "2"]}`              |
/// | `a[b]`              | `{a: {b: ""}}`                 |
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// A plain string.
    String(String),
    /// A list built by `key[]=...` entries.
    List(Vec<Value>),
    /// A map built by `key[name]=...` entries.
    Map(Parameters),
}

impl Value {
    /// Returns the string if the value is a plain string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the items if the value is a list.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if the value is a map.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&Parameters> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the nested value under `key` if the value is a map.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Turns the value into a map in place and returns it.
    ///
    /// A string is discarded. List items are kept under their indices.
    pub(crate) fn make_map(&mut self) -> &mut Parameters {
        if let Self::List(items) = self {
            let map = core::mem::take(items)
                .into_iter()
                .enumerate()
                .map(|(i, item)| (i.to_string(), item))
                .collect();
            *self = Self::Map(map);
        } else if let Self::String(_) = self {
            *self = Self::Map(Parameters::new());
        }
        match self {
            Self::Map(map) => map,
            _ => unreachable!("[consistency] the value has just been turned into a map"),
        }
    }
}

impl Default for Value {
    #[inline]
    fn default() -> Self {
        Self::String(String::new())
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<Parameters> for Value {
    #[inline]
    fn from(map: Parameters) -> Self {
        Self::Map(map)
    }
}

impl PartialEq<str> for Value {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}
