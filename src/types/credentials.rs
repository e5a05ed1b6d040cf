//! User and password.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// User and password of a DSN.
///
/// Both parts are stored percent-decoded.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Credentials {
    /// User.
    user: Option<String>,
    /// Password.
    password: Option<String>,
}

impl Credentials {
    /// Creates new credentials.
    #[must_use]
    pub fn new<U, P>(user: Option<U>, password: Option<P>) -> Self
    where
        U: Into<String>,
        P: Into<String>,
    {
        Self {
            user: user.map(Into::into),
            password: password.map(Into::into),
        }
    }

    /// Returns the user.
    #[inline]
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the password.
    #[inline]
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Returns a copy with the user replaced.
    #[must_use]
    pub fn with_user(&self, user: Option<impl Into<String>>) -> Self {
        Self {
            user: user.map(Into::into),
            password: self.password.clone(),
        }
    }

    /// Returns a copy with the password replaced.
    #[must_use]
    pub fn with_password(&self, password: Option<impl Into<String>>) -> Self {
        Self {
            user: self.user.clone(),
            password: password.map(Into::into),
        }
    }

    /// Returns true if neither a user nor a password is set.
    ///
    /// Empty strings count as unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.user().map_or(true, str::is_empty) && self.password().map_or(true, str::is_empty)
    }
}

/// Renders `user[:password]`.
///
/// The `:password` part is omitted only when the password is an empty
/// string. An unset password still renders the colon.
///
/// ```
/// use dsn_string::Credentials;
///
/// assert_eq!(Credentials::new(Some("user"), Some("pass")).to_string(), "user:pass");
/// assert_eq!(Credentials::new(Some("user"), Some("")).to_string(), "user");
/// assert_eq!(Credentials::new(Some("user"), None::<&str>).to_string(), "user:");
/// assert_eq!(Credentials::new(None::<&str>, Some("")).to_string(), "");
/// ```
impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        f.write_str(self.user().unwrap_or_default())?;
        match self.password() {
            Some("") => Ok(()),
            password => write!(f, ":{}", password.unwrap_or_default()),
        }
    }
}
