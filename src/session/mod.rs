//! # Identity Bootstrap
//!
//! One-shot establishment of a session identifier at startup. The identifier
//! is display-only: nothing downstream depends on it, so every path here is
//! non-fatal and the UI never waits on it.
//!
//! ```text
//! no provider configured ──────────────► local id (factory), no notice
//! provider sign-in ok ─────────────────► provider uid, no notice
//! provider sign-in failed ─────────────► local id (factory) + degraded notice
//! ```

pub mod broker;
pub mod identity;

pub use broker::{IdentityToolkitBroker, SessionBroker, SessionError};
pub use identity::{IdFactory, Identity, IdentityOrigin, UuidFactory};

use log::{debug, warn};

/// Message surfaced when the configured provider rejects or drops the
/// sign-in. Non-fatal: the app keeps working with a local identity.
pub const SIGN_IN_FALLBACK_NOTICE: &str = "Sign-in failed. Some features may be degraded.";

/// Resolves the session identity, exactly once per run.
///
/// Returns the identity plus an optional user-facing notice; the notice is
/// only present when a configured provider failed and the local fallback
/// kicked in.
pub async fn establish_identity(
    broker: Option<&dyn SessionBroker>,
    ids: &dyn IdFactory,
    custom_token: Option<&str>,
) -> (Identity, Option<String>) {
    let Some(broker) = broker else {
        debug!("No session provider configured, using local identity");
        return (Identity::local(ids.generate()), None);
    };

    match broker.sign_in(custom_token).await {
        Ok(uid) => (Identity::provider(uid), None),
        Err(e) => {
            warn!("Session sign-in failed, falling back to local identity: {e}");
            (
                Identity::local(ids.generate()),
                Some(SIGN_IN_FALLBACK_NOTICE.to_string()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedFactory;

    impl IdFactory for FixedFactory {
        fn generate(&self) -> String {
            "fixed-id".to_string()
        }
    }

    struct StubBroker {
        result: Result<String, ()>,
    }

    #[async_trait]
    impl SessionBroker for StubBroker {
        async fn sign_in(&self, _custom_token: Option<&str>) -> Result<String, SessionError> {
            match &self.result {
                Ok(uid) => Ok(uid.clone()),
                Err(()) => Err(SessionError::Network("connection refused".to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_no_broker_yields_local_identity_without_notice() {
        let (identity, notice) = establish_identity(None, &FixedFactory, None).await;
        assert_eq!(identity, Identity::local("fixed-id".to_string()));
        assert!(notice.is_none());
    }

    #[tokio::test]
    async fn test_successful_sign_in_yields_provider_identity() {
        let broker = StubBroker {
            result: Ok("uid-1".to_string()),
        };
        let (identity, notice) = establish_identity(Some(&broker), &FixedFactory, None).await;
        assert_eq!(identity, Identity::provider("uid-1".to_string()));
        assert!(notice.is_none());
    }

    #[tokio::test]
    async fn test_failed_sign_in_falls_back_with_notice() {
        let broker = StubBroker { result: Err(()) };
        let (identity, notice) = establish_identity(Some(&broker), &FixedFactory, None).await;
        assert_eq!(identity, Identity::local("fixed-id".to_string()));
        assert_eq!(notice.as_deref(), Some(SIGN_IN_FALLBACK_NOTICE));
    }
}
