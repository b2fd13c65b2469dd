use std::sync::Arc;

use wayfarer_application::{CredentialStore, Navigator, RouteGuard, Session};
use wayfarer_core::ClientResult;

use crate::accommodation_repository::AccommodationRepository;
use crate::admin_repository::AdminRepository;
use crate::api_transport::ApiTransport;
use crate::auth_repository::AuthRepository;
use crate::config::ClientConfig;
use crate::description_repository::DescriptionRepository;
use crate::destination_repository::DestinationRepository;
use crate::file_credential_store::FileCredentialStore;
use crate::file_repository::FileRepository;
use crate::in_memory_credential_store::InMemoryCredentialStore;
use crate::journey_repository::JourneyRepository;
use crate::member_repository::MemberRepository;
use crate::payment_repository::PaymentRepository;
use crate::tracing_navigator::TracingNavigator;

/// Assembled client: one session, one guard, and a repository per
/// backend resource area, all sharing a single transport.
#[derive(Clone)]
pub struct WayfarerClient {
    /// Resolved client configuration.
    pub config: ClientConfig,
    /// Shared sign-in session.
    pub session: Arc<Session>,
    /// Route guard bound to the default login and error paths.
    pub guard: RouteGuard,
    /// Sign-in, registration, and session lifecycle calls.
    pub auth: AuthRepository,
    /// The signed-in member's own account and authored content.
    pub members: MemberRepository,
    /// Member administration calls.
    pub admin: AdminRepository,
    /// Destination catalogue calls.
    pub destinations: DestinationRepository,
    /// Review edit calls.
    pub descriptions: DescriptionRepository,
    /// Uploaded-asset cleanup calls.
    pub files: FileRepository,
    /// Journey and journey-comment calls.
    pub journeys: JourneyRepository,
    /// Room and reservation calls.
    pub accommodations: AccommodationRepository,
    /// Wallet and credit-card calls.
    pub payments: PaymentRepository,
}

impl WayfarerClient {
    /// Assembles a client with an in-memory credential store and a
    /// logging navigator.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        Self::with_ports(
            config,
            Arc::new(InMemoryCredentialStore::new()),
            Arc::new(TracingNavigator::new()),
        )
    }

    /// Assembles a client from environment variables, persisting the
    /// credential under the user's configuration directory.
    pub fn from_env() -> ClientResult<Self> {
        let config = ClientConfig::from_env()?;
        let credentials = Arc::new(FileCredentialStore::from_env()?);
        Self::with_ports(config, credentials, Arc::new(TracingNavigator::new()))
    }

    /// Assembles a client over caller-supplied credential storage and
    /// navigation.
    pub fn with_ports(
        config: ClientConfig,
        credentials: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
    ) -> ClientResult<Self> {
        let session = Arc::new(Session::new(Arc::clone(&credentials), navigator));
        let transport = Arc::new(ApiTransport::new(&config, credentials, Arc::clone(&session))?);

        Ok(Self {
            config,
            session,
            guard: RouteGuard::default(),
            auth: AuthRepository::new(Arc::clone(&transport)),
            members: MemberRepository::new(Arc::clone(&transport)),
            admin: AdminRepository::new(Arc::clone(&transport)),
            destinations: DestinationRepository::new(Arc::clone(&transport)),
            descriptions: DescriptionRepository::new(Arc::clone(&transport)),
            files: FileRepository::new(Arc::clone(&transport)),
            journeys: JourneyRepository::new(Arc::clone(&transport)),
            accommodations: AccommodationRepository::new(Arc::clone(&transport)),
            payments: PaymentRepository::new(transport),
        })
    }

    /// Resolves any stored credential into the session state.
    ///
    /// Run once at startup, before the first guard evaluation. With no
    /// stored credential the session resolves without a network round
    /// trip; otherwise the credential is validated against the backend.
    pub async fn start(&self) {
        self.session.check_login(&self.auth).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use wayfarer_application::{CredentialStore, SessionStatus};

    use super::WayfarerClient;
    use crate::config::ClientConfig;
    use crate::in_memory_credential_store::InMemoryCredentialStore;
    use crate::tracing_navigator::TracingNavigator;

    fn config() -> ClientConfig {
        match ClientConfig::new("http://127.0.0.1:9") {
            Ok(config) => config,
            Err(error) => panic!("config rejected: {error}"),
        }
    }

    #[tokio::test]
    async fn start_resolves_without_credential() {
        let client = match WayfarerClient::new(config()) {
            Ok(client) => client,
            Err(error) => panic!("client rejected: {error}"),
        };

        assert_eq!(client.session.status(), SessionStatus::Pending);
        client.start().await;
        assert_eq!(client.session.status(), SessionStatus::Done);
        assert!(client.session.current_user().is_none());
    }

    #[tokio::test]
    async fn ports_are_shared_between_session_and_transport() {
        let credentials = Arc::new(InMemoryCredentialStore::new());
        credentials.store("token-1");

        let client = match WayfarerClient::with_ports(
            config(),
            Arc::clone(&credentials) as Arc<dyn CredentialStore>,
            Arc::new(TracingNavigator::new()),
        ) {
            Ok(client) => client,
            Err(error) => panic!("client rejected: {error}"),
        };

        client.session.logout();
        assert!(credentials.load().is_some());
    }
}
