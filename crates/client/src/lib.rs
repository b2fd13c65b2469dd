//! HTTP adapter for the travel-booking backend: configuration, the
//! envelope-aware transport, credential storage, and one typed
//! repository per backend resource area.

#![forbid(unsafe_code)]

mod accommodation_repository;
mod admin_repository;
mod api_transport;
mod auth_repository;
mod client;
mod config;
mod description_repository;
mod destination_repository;
mod file_credential_store;
mod file_repository;
mod in_memory_credential_store;
mod journey_repository;
mod member_repository;
mod payment_repository;
mod tracing_navigator;

pub use accommodation_repository::AccommodationRepository;
pub use admin_repository::AdminRepository;
pub use api_transport::{ApiTransport, AuthPolicy};
pub use auth_repository::AuthRepository;
pub use client::WayfarerClient;
pub use config::{ClientConfig, DEFAULT_REQUEST_TIMEOUT};
pub use description_repository::DescriptionRepository;
pub use destination_repository::DestinationRepository;
pub use file_credential_store::FileCredentialStore;
pub use file_repository::FileRepository;
pub use in_memory_credential_store::InMemoryCredentialStore;
pub use journey_repository::JourneyRepository;
pub use member_repository::MemberRepository;
pub use payment_repository::PaymentRepository;
pub use tracing_navigator::TracingNavigator;
