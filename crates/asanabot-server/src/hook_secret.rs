//! Webhook secret storage.

use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::RwLock;

/// Secret used to check webhook signatures.
///
/// Seeded from configuration or captured from the first handshake. A
/// configured secret is never replaced; a captured one is only replaced
/// while a registration started by this server is in flight (see
/// [`HookSecretStore::open_handshake_window`]). Kept in memory only.
#[derive(Debug, Default)]
pub struct HookSecretStore {
    secret: RwLock<Option<String>>,
    configured: bool,
    open_windows: AtomicUsize,
}

/// Registration in flight, accepting a replacement secret until dropped.
pub struct HandshakeWindow<'a> {
    store: &'a HookSecretStore,
}

impl Drop for HandshakeWindow<'_> {
    fn drop(&mut self) {
        self.store.open_windows.fetch_sub(1, Ordering::SeqCst);
    }
}

impl HookSecretStore {
    /// Create a store, an empty secret meaning "unknown".
    pub fn new(initial: &str) -> Self {
        let secret = Some(initial.to_string()).filter(|s| !s.is_empty());

        Self {
            configured: secret.is_some(),
            secret: RwLock::new(secret),
            open_windows: AtomicUsize::new(0),
        }
    }

    /// Known secret, if any.
    pub async fn get(&self) -> Option<String> {
        self.secret.read().await.clone()
    }

    /// Accept replacement secrets until the returned window is dropped.
    pub fn open_handshake_window(&self) -> HandshakeWindow<'_> {
        self.open_windows.fetch_add(1, Ordering::SeqCst);
        HandshakeWindow { store: self }
    }

    /// Try to adopt the secret sent during a handshake.
    ///
    /// Returns `false` when the handshake must be rejected.
    pub async fn capture(&self, secret: &str) -> bool {
        if secret.is_empty() {
            return false;
        }

        let mut current = self.secret.write().await;
        match current.as_deref() {
            None => (),
            Some(known) if known == secret => return true,
            Some(_) if self.configured => return false,
            Some(_) if self.open_windows.load(Ordering::SeqCst) == 0 => return false,
            Some(_) => (),
        }

        *current = Some(secret.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::HookSecretStore;

    #[tokio::test]
    async fn test_first_handshake_is_captured() {
        let store = HookSecretStore::new("");
        assert_eq!(store.get().await, None);

        assert!(!store.capture("").await);
        assert!(store.capture("b6e3f1").await);
        assert_eq!(store.get().await.as_deref(), Some("b6e3f1"));

        // Same secret again is fine.
        assert!(store.capture("b6e3f1").await);
    }

    #[tokio::test]
    async fn test_captured_secret_is_kept_outside_registrations() {
        let store = HookSecretStore::new("");
        assert!(store.capture("b6e3f1").await);

        assert!(!store.capture("other").await);
        assert_eq!(store.get().await.as_deref(), Some("b6e3f1"));

        {
            let _window = store.open_handshake_window();
            assert!(store.capture("other").await);
        }
        assert_eq!(store.get().await.as_deref(), Some("other"));

        assert!(!store.capture("third").await);
        assert_eq!(store.get().await.as_deref(), Some("other"));
    }

    #[tokio::test]
    async fn test_configured_secret_is_never_replaced() {
        let store = HookSecretStore::new("configured");
        assert_eq!(store.get().await.as_deref(), Some("configured"));

        let _window = store.open_handshake_window();
        assert!(!store.capture("attacker").await);
        assert!(store.capture("configured").await);
        assert_eq!(store.get().await.as_deref(), Some("configured"));
    }
}
