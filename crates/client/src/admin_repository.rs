use std::sync::Arc;

use wayfarer_core::{Envelope, NoQuery, Page};
use wayfarer_domain::{BanForm, MemberListQuery, MemberProfile, RoleUpdateForm, UpdateNicknameForm};

use crate::api_transport::{ApiTransport, AuthPolicy};

/// Calls under `/admin`: member administration.
#[derive(Clone)]
pub struct AdminRepository {
    transport: Arc<ApiTransport>,
}

impl AdminRepository {
    /// Creates the repository over a shared transport.
    #[must_use]
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Lists member profiles filtered by role and nickname search.
    pub async fn members(&self, query: &MemberListQuery) -> Envelope<Page<MemberProfile>> {
        self.transport
            .get("/admin/members", None, query, AuthPolicy::Enforce)
            .await
    }

    /// Fetches one member's profile by nickname.
    pub async fn member_detail(&self, nickname: &str) -> Envelope<MemberProfile> {
        self.transport
            .get(
                "/admin/members/{pv}",
                Some(nickname),
                &NoQuery,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Renames a member on their behalf.
    pub async fn update_nickname(&self, form: &UpdateNicknameForm) -> Envelope<String> {
        self.transport
            .post(
                "/admin/members/nickname",
                None,
                &NoQuery,
                form,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Changes a member's role.
    pub async fn update_role(&self, form: &RoleUpdateForm) -> Envelope<String> {
        self.transport
            .post(
                "/admin/members/role",
                None,
                &NoQuery,
                form,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Bans a member.
    pub async fn ban(&self, form: &BanForm) -> Envelope<String> {
        self.transport
            .post(
                "/admin/members/ban",
                None,
                &NoQuery,
                form,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Lifts a member's ban by nickname.
    pub async fn unban(&self, nickname: &str) -> Envelope<String> {
        self.transport
            .post_empty(
                "/admin/members/unban/{pv}",
                Some(nickname),
                &NoQuery,
                AuthPolicy::Enforce,
            )
            .await
    }
}
