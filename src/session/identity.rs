//! Session identity types and the fallback identifier source.

/// Where a session identifier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityOrigin {
    /// Signed in against the configured session provider.
    Provider,
    /// Locally generated fallback (no provider, or sign-in failed).
    Local,
}

/// An opaque session identifier. Assigned once at startup, display-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub origin: IdentityOrigin,
}

impl Identity {
    pub fn provider(id: String) -> Self {
        Self {
            id,
            origin: IdentityOrigin::Provider,
        }
    }

    pub fn local(id: String) -> Self {
        Self {
            id,
            origin: IdentityOrigin::Local,
        }
    }

    /// Label for the title bar; local identities are marked so a degraded
    /// session is visible at a glance.
    pub fn display(&self) -> String {
        match self.origin {
            IdentityOrigin::Provider => self.id.clone(),
            IdentityOrigin::Local => format!("{} (local)", self.id),
        }
    }
}

/// Source of locally generated identifiers, injectable so tests can pin the
/// fallback id.
pub trait IdFactory: Send + Sync {
    fn generate(&self) -> String;
}

/// UUID v4 identifiers.
pub struct UuidFactory;

impl IdFactory for UuidFactory {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
