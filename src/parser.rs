//! Scanners used by the DSN parser.

pub(crate) mod char;
pub(crate) mod query;
pub(crate) mod str;
pub(crate) mod url;
