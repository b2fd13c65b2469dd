use std::sync::Arc;

use wayfarer_core::{Envelope, NoQuery, Page, PageQuery};
use wayfarer_domain::{
    Journey, JourneyComment, JourneyCommentForm, JourneyCommentUpdateForm, JourneyContent,
    JourneyForm,
};

use crate::api_transport::{ApiTransport, AuthPolicy};

/// Calls under `/journeys`: multi-stop journey posts and their comment
/// threads.
#[derive(Clone)]
pub struct JourneyRepository {
    transport: Arc<ApiTransport>,
}

impl JourneyRepository {
    /// Creates the repository over a shared transport.
    #[must_use]
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Pages through the signed-in member's reviews eligible as journey
    /// stops.
    pub async fn contents(&self, query: &PageQuery) -> Envelope<Page<JourneyContent>> {
        self.transport
            .get("/journeys/contents", None, query, AuthPolicy::Enforce)
            .await
    }

    /// Pages through all published journeys.
    pub async fn list(&self, query: &PageQuery) -> Envelope<Page<Journey>> {
        self.transport
            .get("/journeys", None, query, AuthPolicy::Enforce)
            .await
    }

    /// Fetches one journey with its stops.
    pub async fn detail(&self, id: i64) -> Envelope<Journey> {
        self.transport
            .get(
                "/journeys/{pv}",
                Some(&id.to_string()),
                &NoQuery,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Publishes a new journey.
    pub async fn create(&self, form: &JourneyForm) -> Envelope<String> {
        self.transport
            .post("/journeys", None, &NoQuery, form, AuthPolicy::Enforce)
            .await
    }

    /// Rewrites an existing journey.
    pub async fn update(&self, id: i64, form: &JourneyForm) -> Envelope<String> {
        self.transport
            .post(
                "/journeys/{pv}",
                Some(&id.to_string()),
                &NoQuery,
                form,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Deletes a journey.
    pub async fn remove(&self, id: i64) -> Envelope<String> {
        self.transport
            .delete(
                "/journeys/{pv}",
                Some(&id.to_string()),
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Adds a comment to a journey.
    ///
    /// The stored comment comes back with its server-assigned id and
    /// timestamps, so callers can append it to a rendered thread without
    /// refetching the whole page.
    pub async fn create_comment(
        &self,
        journey_id: i64,
        form: &JourneyCommentForm,
    ) -> Envelope<JourneyComment> {
        self.transport
            .post(
                "/journeys/{pv}/comments",
                Some(&journey_id.to_string()),
                &NoQuery,
                form,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Pages through a journey's comment thread.
    pub async fn comments(
        &self,
        journey_id: i64,
        query: &PageQuery,
    ) -> Envelope<Page<JourneyComment>> {
        self.transport
            .get(
                "/journeys/{pv}/comments",
                Some(&journey_id.to_string()),
                query,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Rewrites a comment and returns the stored version.
    pub async fn update_comment(
        &self,
        comment_id: i64,
        form: &JourneyCommentUpdateForm,
    ) -> Envelope<JourneyComment> {
        self.transport
            .post(
                "/journeys/comments/{pv}",
                Some(&comment_id.to_string()),
                &NoQuery,
                form,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Deletes a comment.
    pub async fn remove_comment(&self, comment_id: i64) -> Envelope<String> {
        self.transport
            .delete(
                "/journeys/comments/{pv}",
                Some(&comment_id.to_string()),
                AuthPolicy::Enforce,
            )
            .await
    }
}
