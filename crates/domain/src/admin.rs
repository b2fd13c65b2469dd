use serde::Serialize;
use wayfarer_core::ApiQuery;

use crate::role::Role;

/// Role change request for one member, issued by an administrator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdateForm {
    /// Nickname of the member to change.
    pub nickname: String,
    /// Role to assign.
    pub new_role: Role,
}

/// Suspension request for one member, issued by an administrator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BanForm {
    /// Nickname of the member to suspend.
    pub nickname: String,
    /// Reason recorded with the suspension.
    pub description: String,
}

/// Query for the administrative member list.
///
/// `roles` repeats its key on the wire; an empty keyword still serializes
/// so the backend sees a stable parameter set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberListQuery {
    /// 1-based page number.
    pub page: u32,
    /// Number of members per page.
    pub size: u32,
    /// Role filter; empty means no restriction.
    pub roles: Vec<Role>,
    /// Nickname search keyword.
    pub query: String,
}

impl ApiQuery for MemberListQuery {
    fn page(&self) -> Option<u32> {
        Some(self.page)
    }

    fn size(&self) -> Option<u32> {
        Some(self.size)
    }

    fn params(&self) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = self
            .roles
            .iter()
            .map(|role| ("roles".to_owned(), role.as_str().to_owned()))
            .collect();
        params.push(("query".to_owned(), self.query.clone()));
        params
    }
}

#[cfg(test)]
mod tests {
    use wayfarer_core::ApiQuery;

    use super::{MemberListQuery, Role};

    #[test]
    fn member_list_query_repeats_role_key() {
        let query = MemberListQuery {
            page: 1,
            size: 10,
            roles: vec![Role::Admin, Role::Manager],
            query: "roam".to_owned(),
        };

        let params = query.params();
        assert_eq!(
            params,
            vec![
                ("roles".to_owned(), "ADMIN".to_owned()),
                ("roles".to_owned(), "MANAGER".to_owned()),
                ("query".to_owned(), "roam".to_owned()),
            ]
        );
    }

    #[test]
    fn empty_keyword_still_serializes() {
        let query = MemberListQuery {
            page: 1,
            size: 10,
            roles: Vec::new(),
            query: String::new(),
        };

        assert_eq!(query.params(), vec![("query".to_owned(), String::new())]);
    }
}
