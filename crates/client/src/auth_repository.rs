use std::sync::Arc;

use async_trait::async_trait;
use wayfarer_application::CredentialValidator;
use wayfarer_core::{Envelope, NoQuery};
use wayfarer_domain::{LoginForm, LoginGrant, MemberProfile, RegisterForm};

use crate::api_transport::{ApiTransport, AuthPolicy};

/// Calls under `/auth`: sign-in, registration, and session lifecycle.
#[derive(Clone)]
pub struct AuthRepository {
    transport: Arc<ApiTransport>,
}

impl AuthRepository {
    /// Creates the repository over a shared transport.
    #[must_use]
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Exchanges credentials for a bearer token and the member profile.
    pub async fn login(&self, form: &LoginForm) -> Envelope<LoginGrant> {
        self.transport
            .post("/auth/login", None, &NoQuery, form, AuthPolicy::Enforce)
            .await
    }

    /// Revalidates the stored credential against the backend session.
    pub async fn login_with_session(&self) -> Envelope<MemberProfile> {
        self.transport
            .post_empty("/auth/session", None, &NoQuery, AuthPolicy::Enforce)
            .await
    }

    /// Invalidates the server-side session.
    ///
    /// The auth check is skipped here: a reply to a logout request must
    /// not itself trigger another logout.
    pub async fn logout(&self) -> Envelope<String> {
        self.transport
            .post_empty("/auth/logout", None, &NoQuery, AuthPolicy::Skip)
            .await
    }

    /// Registers a new member account.
    pub async fn register(&self, form: &RegisterForm) -> Envelope<String> {
        self.transport
            .post("/auth/register", None, &NoQuery, form, AuthPolicy::Skip)
            .await
    }
}

#[async_trait]
impl CredentialValidator for AuthRepository {
    async fn validate_credential(&self) -> Envelope<MemberProfile> {
        self.login_with_session().await
    }
}
