use std::sync::Arc;

use wayfarer_core::{Envelope, NoQuery};
use wayfarer_domain::{Description, DescriptionUpdateForm};

use crate::api_transport::{ApiTransport, AuthPolicy};

/// Calls under `/descriptions`: edits to individual reviews.
#[derive(Clone)]
pub struct DescriptionRepository {
    transport: Arc<ApiTransport>,
}

impl DescriptionRepository {
    /// Creates the repository over a shared transport.
    #[must_use]
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Rewrites a review and returns the stored version.
    pub async fn update(&self, id: i64, form: &DescriptionUpdateForm) -> Envelope<Description> {
        self.transport
            .post(
                "/descriptions/{pv}",
                Some(&id.to_string()),
                &NoQuery,
                form,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Deletes a review.
    pub async fn remove(&self, id: i64) -> Envelope<String> {
        self.transport
            .delete(
                "/descriptions/{pv}",
                Some(&id.to_string()),
                AuthPolicy::Enforce,
            )
            .await
    }
}
