//! Utilities.
#![allow(dead_code)]

use dsn_string::percent_encode::decode_userinfo;
use dsn_string::{Parameters, Value};

/// Asserts that the given value is displayed as the expected string.
macro_rules! assert_eq_display {
    ($left:expr, $right:expr $(,)?) => {{
        let left = &$left;
        let right = &$right;
        ::pretty_assertions::assert_eq!(left.to_string(), right.to_string());
    }};
    ($left:expr, $right:expr, $($args:tt)*) => {{
        let left = &$left;
        let right = &$right;
        ::pretty_assertions::assert_eq!(left.to_string(), right.to_string(), $($args)*);
    }};
}

/// Builds a nested parameter value from `key => value` entries.
macro_rules! params {
    () => { $crate::utils::Params::new().build() };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::utils::Params::new()$(.entry($key, $value))+.build()
    };
}

/// Builder of `Parameters`.
#[derive(Default)]
pub struct Params(Parameters);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_owned(), value.into());
        self
    }

    pub fn build(self) -> Parameters {
        self.0
    }
}

/// Percent-decodes the rendered DSN, so that it can be compared with a
/// human-written one.
pub fn decoded(rendered: impl ToString) -> String {
    let rendered = rendered.to_string();
    decode_userinfo(&rendered)
        .expect("rendered DSN should be valid UTF-8 once decoded")
        .into_owned()
}
