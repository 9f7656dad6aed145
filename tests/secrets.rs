//! Secret store tests.
//!
//! Generated add methods, ordering and password non-disclosure.

use std::fmt;
use std::sync::Mutex;

use stowage::{DbSecret, GenericSecret, Secret, SecretStore};

#[test]
fn test_new_store_has_no_secrets() {
    let store = SecretStore::new();

    assert!(store.secrets().is_empty());
}

#[test]
fn test_generic_then_db_secret() {
    let mut store = SecretStore::new();
    store.add_generic_secret("u", "p");
    store.add_db_secret("u2", "p2", "host:1");

    let secrets = store.secrets();
    assert_eq!(secrets.len(), 2);
    assert_eq!(secrets[0].masked_password(), "*");
    assert_eq!(secrets[0].user(), "u");
    assert_eq!(secrets[1].user(), "u2");
    assert_eq!(secrets[1].masked_password(), "**");
    assert_eq!(secrets[1].raw_password(), "p2");
}

#[test]
fn test_display_masks_every_secret() {
    let mut store = SecretStore::new();
    store.add_generic_secret("alice", "correct-horse");
    store.add_db_secret("bob", "battery-staple", "db.example:5432");

    let rendered: Vec<String> = store.iter().map(|s| s.to_string()).collect();

    assert_eq!(
        rendered,
        [
            "GenericSecret(user=alice, password=*************)",
            "DbSecret(user=bob, password=**************, connection_string=db.example:5432)",
        ]
    );
    for (secret, text) in store.iter().zip(&rendered) {
        assert!(!text.contains(secret.raw_password()));
    }
}

#[test]
fn test_store_debug_masks_passwords() {
    let mut store = SecretStore::new();
    store.add_generic_secret("alice", "correct-horse");

    let debug = format!("{:#?}", store);
    assert!(debug.contains("alice"));
    assert!(!debug.contains("correct-horse"));
}

#[test]
fn test_add_methods_match_direct_construction() {
    let mut generated = SecretStore::new();
    generated.add_db_secret("svc", "pw", "db:1");

    let mut pushed = SecretStore::new();
    pushed.push(DbSecret::new("svc", "pw", "db:1"));

    assert_eq!(
        generated.secrets()[0].to_string(),
        pushed.secrets()[0].to_string()
    );
}

#[test]
fn test_registered_kinds_cover_variants() {
    let mut store = SecretStore::new();
    store.add_generic_secret("a", "b");
    store.add_db_secret("a", "b", "c");

    let kinds: Vec<&str> = store.iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, SecretStore::registered_kinds());
}

/// A variant defined outside the crate, pushed through the generic entry point.
struct TokenSecret {
    user: String,
    token: String,
}

impl Secret for TokenSecret {
    fn user(&self) -> &str {
        &self.user
    }

    fn raw_password(&self) -> &str {
        &self.token
    }

    fn kind(&self) -> &'static str {
        "TokenSecret"
    }
}

impl fmt::Display for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenSecret(user={}, password={})", self.user, self.masked_password())
    }
}

impl fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[test]
fn test_push_custom_secret() {
    let mut store = SecretStore::new();
    store.add_generic_secret("a", "b");
    store.push(TokenSecret {
        user: "ci".to_string(),
        token: "ghp_abc".to_string(),
    });

    assert_eq!(store.len(), 2);
    assert_eq!(store.secrets()[1].masked_password(), "*******");
}

#[test]
fn test_store_behind_mutex() {
    let store = Mutex::new(SecretStore::new());

    std::thread::scope(|scope| {
        for i in 0..4 {
            let store = &store;
            scope.spawn(move || {
                store
                    .lock()
                    .unwrap()
                    .push(GenericSecret::new(format!("user{}", i), "pw"));
            });
        }
    });

    assert_eq!(store.lock().unwrap().len(), 4);
}
