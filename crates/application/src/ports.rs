use async_trait::async_trait;

use wayfarer_core::Envelope;
use wayfarer_domain::MemberProfile;

/// Port for keeping the bearer credential between runs.
///
/// Implementations are best-effort: a store that cannot persist still
/// returns `None` from [`CredentialStore::load`] rather than failing.
pub trait CredentialStore: Send + Sync {
    /// Returns the stored credential, if any.
    fn load(&self) -> Option<String>;

    /// Replaces the stored credential.
    fn store(&self, token: &str);

    /// Removes the stored credential.
    fn clear(&self);
}

/// Port for checking whether the stored credential still identifies a
/// member.
#[async_trait]
pub trait CredentialValidator: Send + Sync {
    /// Exchanges the stored credential for the profile it belongs to.
    ///
    /// A stale or unknown credential comes back as a failure envelope,
    /// never as a transport error.
    async fn validate_credential(&self) -> Envelope<MemberProfile>;
}

/// Port for moving the embedding surface to another location.
pub trait Navigator: Send + Sync {
    /// Requests navigation to an app-relative target such as `/login`.
    fn navigate(&self, target: &str);
}
