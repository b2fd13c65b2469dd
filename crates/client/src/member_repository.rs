use std::sync::Arc;

use wayfarer_core::{Envelope, NoQuery, Page, PageQuery};
use wayfarer_domain::{
    Description, DestinationSummary, ItemListQuery, Journey, JourneyComment, UpdateNicknameForm,
    UpdatePasswordForm,
};

use crate::api_transport::{ApiTransport, AuthPolicy};

/// Calls under `/members`: the signed-in member's own account and
/// authored content.
#[derive(Clone)]
pub struct MemberRepository {
    transport: Arc<ApiTransport>,
}

impl MemberRepository {
    /// Creates the repository over a shared transport.
    #[must_use]
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Renames the signed-in member.
    pub async fn update_nickname(&self, form: &UpdateNicknameForm) -> Envelope<String> {
        self.transport
            .post("/members/nickname", None, &NoQuery, form, AuthPolicy::Enforce)
            .await
    }

    /// Changes the signed-in member's password.
    pub async fn update_password(&self, form: &UpdatePasswordForm) -> Envelope<String> {
        self.transport
            .post("/members/password", None, &NoQuery, form, AuthPolicy::Enforce)
            .await
    }

    /// Lists destinations registered by the signed-in member.
    pub async fn destinations(&self, query: &ItemListQuery) -> Envelope<Page<DestinationSummary>> {
        self.transport
            .get("/members/destinations", None, query, AuthPolicy::Skip)
            .await
    }

    /// Lists reviews written by the signed-in member.
    pub async fn descriptions(&self, query: &PageQuery) -> Envelope<Page<Description>> {
        self.transport
            .get("/members/descriptions", None, query, AuthPolicy::Enforce)
            .await
    }

    /// Lists journeys composed by the signed-in member.
    pub async fn journeys(&self, query: &PageQuery) -> Envelope<Page<Journey>> {
        self.transport
            .get("/members/journeys", None, query, AuthPolicy::Enforce)
            .await
    }

    /// Lists journey comments left by the signed-in member.
    pub async fn comments(&self, query: &PageQuery) -> Envelope<Page<JourneyComment>> {
        self.transport
            .get("/members/comments", None, query, AuthPolicy::Enforce)
            .await
    }
}
