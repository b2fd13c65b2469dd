use std::sync::Arc;

use wayfarer_core::{Envelope, NoQuery, Page, PageQuery};
use wayfarer_domain::{
    Description, DescriptionForm, Destination, DestinationForm, DestinationSummary, ItemListQuery,
};

use crate::api_transport::{ApiTransport, AuthPolicy};

/// Calls under `/destinations`: the destination catalogue and the
/// reviews attached to each destination.
#[derive(Clone)]
pub struct DestinationRepository {
    transport: Arc<ApiTransport>,
}

impl DestinationRepository {
    /// Creates the repository over a shared transport.
    #[must_use]
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Lists destinations, optionally narrowed by category and search
    /// text. Open to guests.
    pub async fn list(&self, query: &ItemListQuery) -> Envelope<Page<DestinationSummary>> {
        self.transport
            .get("/destinations", None, query, AuthPolicy::Skip)
            .await
    }

    /// Fetches one destination with its full detail. Open to guests.
    pub async fn detail(&self, id: i64) -> Envelope<Destination> {
        self.transport
            .get(
                "/destinations/{pv}",
                Some(&id.to_string()),
                &NoQuery,
                AuthPolicy::Skip,
            )
            .await
    }

    /// Pages through a destination's stored thumbnail file names.
    pub async fn thumbnails(&self, id: i64, query: &PageQuery) -> Envelope<Page<String>> {
        self.transport
            .get(
                "/destinations/{pv}/thumbnails",
                Some(&id.to_string()),
                query,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Registers a new destination.
    pub async fn create(&self, form: &DestinationForm) -> Envelope<String> {
        self.transport
            .post("/destinations", None, &NoQuery, form, AuthPolicy::Enforce)
            .await
    }

    /// Rewrites an existing destination.
    pub async fn update(&self, id: i64, form: &DestinationForm) -> Envelope<String> {
        self.transport
            .post(
                "/destinations/{pv}",
                Some(&id.to_string()),
                &NoQuery,
                form,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Deletes a destination.
    pub async fn remove(&self, id: i64) -> Envelope<String> {
        self.transport
            .delete(
                "/destinations/{pv}",
                Some(&id.to_string()),
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Pages through the reviews attached to a destination.
    pub async fn descriptions(&self, id: i64, query: &PageQuery) -> Envelope<Page<Description>> {
        self.transport
            .get(
                "/destinations/{pv}/descriptions",
                Some(&id.to_string()),
                query,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Attaches a new review to a destination and returns it.
    pub async fn create_description(
        &self,
        id: i64,
        form: &DescriptionForm,
    ) -> Envelope<Description> {
        self.transport
            .post(
                "/destinations/{pv}/descriptions",
                Some(&id.to_string()),
                &NoQuery,
                form,
                AuthPolicy::Enforce,
            )
            .await
    }
}
