//! Secret store.
//!
//! An ordered, in-memory list of secrets. Each known secret variant gets an
//! `add_*` method generated by the `register_secrets!` macro below; adding a
//! variant means defining the type and writing one registration line.
//!
//! The store is not synchronised. Wrap it in a `Mutex` to share it.

use std::slice;

use tracing::debug;

use crate::core::secret::{DbSecret, GenericSecret, Secret};

/// Ordered collection of secrets, in insertion order.
#[derive(Debug, Default)]
pub struct SecretStore {
    secrets: Vec<Box<dyn Secret>>,
}

impl SecretStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append any secret implementation
    pub fn push<S: Secret + 'static>(&mut self, secret: S) {
        debug!(
            kind = secret.kind(),
            position = self.secrets.len(),
            "secret added"
        );
        self.secrets.push(Box::new(secret));
    }

    /// All secrets in insertion order
    pub fn secrets(&self) -> &[Box<dyn Secret>] {
        &self.secrets
    }

    pub fn iter(&self) -> slice::Iter<'_, Box<dyn Secret>> {
        self.secrets.iter()
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

impl<'a> IntoIterator for &'a SecretStore {
    type Item = &'a Box<dyn Secret>;
    type IntoIter = slice::Iter<'a, Box<dyn Secret>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Generate one `add_*` method per secret variant.
///
/// Each line names the variant, the method to generate and the variant's
/// constructor parameters in declared order. The generated method forwards
/// them to `Variant::new` and appends the result.
macro_rules! register_secrets {
    ($store:ident { $($kind:ident => fn $add:ident($($param:ident: $ty:ty),* $(,)?);)+ }) => {
        impl $store {
            $(
                #[doc = concat!("Construct a [`", stringify!($kind), "`] and append it.")]
                pub fn $add(&mut self, $($param: $ty),*) {
                    self.push($kind::new($($param),*));
                }
            )+

            /// Registered variant type names, in registration order
            pub fn registered_kinds() -> &'static [&'static str] {
                &[$(stringify!($kind)),+]
            }
        }
    };
}

register_secrets! {
    SecretStore {
        GenericSecret => fn add_generic_secret(
            user: impl Into<String>,
            password: impl Into<String>,
        );
        DbSecret => fn add_db_secret(
            user: impl Into<String>,
            password: impl Into<String>,
            connection_string: impl Into<String>,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = SecretStore::new();

        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.secrets().is_empty());
    }

    #[test]
    fn test_add_preserves_order() {
        let mut store = SecretStore::new();
        store.add_generic_secret("u", "p");
        store.add_db_secret("u2", "p2", "host:1");

        let secrets = store.secrets();
        assert_eq!(secrets.len(), 2);
        assert_eq!(secrets[0].kind(), "GenericSecret");
        assert_eq!(secrets[0].masked_password(), "*");
        assert_eq!(secrets[1].kind(), "DbSecret");
        assert_eq!(secrets[1].user(), "u2");
    }

    #[test]
    fn test_no_deduplication() {
        let mut store = SecretStore::new();
        store.add_generic_secret("u", "p");
        store.add_generic_secret("u", "p");

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_push_generic_entry_point() {
        let mut store = SecretStore::new();
        store.push(DbSecret::new("svc", "pw", "db:5432"));

        assert_eq!(store.iter().next().unwrap().user(), "svc");
    }

    #[test]
    fn test_registered_kinds() {
        assert_eq!(
            SecretStore::registered_kinds(),
            ["GenericSecret", "DbSecret"]
        );
    }

    #[test]
    fn test_store_debug_is_redacted() {
        let mut store = SecretStore::new();
        store.add_db_secret("svc", "hunter2", "db:5432");

        let debug = format!("{:?}", store);
        assert!(debug.contains("svc"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_iterate_by_reference() {
        let mut store = SecretStore::new();
        store.add_generic_secret("a", "1");
        store.add_generic_secret("b", "22");

        let users: Vec<&str> = (&store).into_iter().map(|s| s.user()).collect();
        assert_eq!(users, ["a", "b"]);
    }
}
