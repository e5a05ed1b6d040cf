//! DSN value types.
//!
//! The parser produces one of three shapes, wrapped in [`ParsedDsn`]:
//!
//! ```text
//! ParsedDsn
//! |-- Bare(Dsn)      scheme + parameters
//! |-- Url(UrlDsn)    Dsn + host, port, path, credentials
//! `-- Path(PathDsn)  Dsn + filesystem path, credentials
//! ```
//!
//! `UrlDsn` and `PathDsn` embed a [`Dsn`], so the conversions below are safe
//! and cheap:
//!
//! * `AsRef<Dsn> for UrlDsn`
//! * `AsRef<Dsn> for PathDsn`
//! * `AsRef<Dsn> for ParsedDsn`
//! * `From<UrlDsn> for Dsn` and `From<PathDsn> for Dsn` (dropping the
//!   location)
//!
//! All types are immutable once built.

pub use self::credentials::Credentials;
pub use self::dsn::Dsn;
pub use self::parsed::ParsedDsn;
pub use self::path::PathDsn;
pub use self::url::UrlDsn;
pub use self::value::{Parameters, Value};

mod credentials;
mod dsn;
mod parsed;
mod path;
mod url;
mod value;
