//! Secret types.
//!
//! Every secret exposes the same capability surface through the [`Secret`]
//! trait. Raw passwords live in [`Zeroizing`] buffers and are only reachable
//! through [`Secret::raw_password`]; `Display` and `Debug` show the masked
//! form.

use std::fmt;

use zeroize::Zeroizing;

use crate::core::constants::MASK_CHAR;

/// Capability surface shared by all secret variants.
pub trait Secret: fmt::Display + fmt::Debug + Send + Sync {
    /// Username the secret belongs to
    fn user(&self) -> &str;

    /// Password with every character replaced by `*`
    fn masked_password(&self) -> String {
        mask(self.raw_password())
    }

    /// Plaintext password
    fn raw_password(&self) -> &str;

    /// Variant type name, e.g. `GenericSecret`
    fn kind(&self) -> &'static str;
}

/// Mask a password, one `*` per character.
pub fn mask(password: &str) -> String {
    std::iter::repeat(MASK_CHAR)
        .take(password.chars().count())
        .collect()
}

/// A username and password pair
#[derive(Clone)]
pub struct GenericSecret {
    user: String,
    password: Zeroizing<String>,
}

impl GenericSecret {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: Zeroizing::new(password.into()),
        }
    }
}

impl Secret for GenericSecret {
    fn user(&self) -> &str {
        &self.user
    }

    fn raw_password(&self) -> &str {
        &self.password
    }

    fn kind(&self) -> &'static str {
        "GenericSecret"
    }
}

impl fmt::Display for GenericSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(user={}, password={})",
            self.kind(),
            self.user,
            self.masked_password()
        )
    }
}

impl fmt::Debug for GenericSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericSecret")
            .field("user", &self.user)
            .field("password", &self.masked_password())
            .finish()
    }
}

/// Database credentials: a generic secret plus a connection string
#[derive(Clone)]
pub struct DbSecret {
    inner: GenericSecret,
    connection_string: String,
}

impl DbSecret {
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        connection_string: impl Into<String>,
    ) -> Self {
        Self {
            inner: GenericSecret::new(user, password),
            connection_string: connection_string.into(),
        }
    }

    /// Database connection string, e.g. `host:5432`
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}

impl Secret for DbSecret {
    fn user(&self) -> &str {
        self.inner.user()
    }

    fn raw_password(&self) -> &str {
        self.inner.raw_password()
    }

    fn kind(&self) -> &'static str {
        "DbSecret"
    }
}

impl fmt::Display for DbSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(user={}, password={}, connection_string={})",
            self.kind(),
            self.user(),
            self.masked_password(),
            self.connection_string
        )
    }
}

impl fmt::Debug for DbSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbSecret")
            .field("user", &self.user())
            .field("password", &self.masked_password())
            .field("connection_string", &self.connection_string)
            .finish()
    }
}
