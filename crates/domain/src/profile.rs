use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use wayfarer_core::{ClientError, ClientResult};

use crate::role::Role;
use crate::validation::{validate_nickname, validate_password};

/// Creator information embedded in destination, description, journey and
/// order payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberBasicProfile {
    /// Display nickname, unique across members.
    pub nickname: String,
    /// Creation timestamp as reported by the backend (zone-less).
    pub created_at: NaiveDateTime,
    /// Last update timestamp as reported by the backend (zone-less).
    pub updated_at: NaiveDateTime,
}

/// Full member profile, held by the session and returned by admin member
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    /// Account identifier used to sign in.
    pub account: String,
    /// Display nickname, unique across members.
    pub nickname: String,
    /// Privilege role of the member.
    pub role: Role,
    /// Creation timestamp as reported by the backend (zone-less).
    pub created_at: NaiveDateTime,
    /// Last update timestamp as reported by the backend (zone-less).
    pub updated_at: NaiveDateTime,
}

impl MemberProfile {
    /// Returns whether this member may act on a resource owned by
    /// `owner_nickname` that requires at least `threshold` privilege.
    ///
    /// Ownership is nickname equality; otherwise the privilege order
    /// decides.
    #[must_use]
    pub fn may_act_on(&self, owner_nickname: &str, threshold: Role) -> bool {
        self.nickname == owner_nickname || self.role.has_at_least_privilege(threshold)
    }
}

/// Nickname change request for the signed-in member.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNicknameForm {
    nickname: String,
    new_nickname: String,
}

impl UpdateNicknameForm {
    /// Creates a nickname change request after validating the new value.
    pub fn new(
        nickname: impl Into<String>,
        new_nickname: impl Into<String>,
    ) -> ClientResult<Self> {
        let new_nickname = new_nickname.into();
        validate_nickname(&new_nickname)?;

        Ok(Self {
            nickname: nickname.into(),
            new_nickname,
        })
    }

    /// Returns the current nickname.
    #[must_use]
    pub fn nickname(&self) -> &str {
        self.nickname.as_str()
    }

    /// Returns the requested nickname.
    #[must_use]
    pub fn new_nickname(&self) -> &str {
        self.new_nickname.as_str()
    }
}

/// Password change request for the signed-in member.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordForm {
    prev_raw_password: String,
    new_raw_password: String,
}

impl UpdatePasswordForm {
    /// Creates a password change request after validating the new value.
    ///
    /// The current password is only required to be present; the backend
    /// verifies it.
    pub fn new(
        prev_raw_password: impl Into<String>,
        new_raw_password: impl Into<String>,
    ) -> ClientResult<Self> {
        let prev_raw_password = prev_raw_password.into();
        if prev_raw_password.is_empty() {
            return Err(ClientError::Validation(
                "current password is required".to_owned(),
            ));
        }

        let new_raw_password = new_raw_password.into();
        validate_password(&new_raw_password)?;

        Ok(Self {
            prev_raw_password,
            new_raw_password,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{MemberProfile, Role, UpdateNicknameForm, UpdatePasswordForm};

    fn profile(nickname: &str, role: Role) -> MemberProfile {
        serde_json::from_value(json!({
            "account": "traveler01",
            "nickname": nickname,
            "role": role.as_str(),
            "createdAt": "2024-03-01T09:30:00",
            "updatedAt": "2024-03-02T10:00:00",
        }))
        .unwrap_or_else(|error| panic!("decode failed: {error}"))
    }

    #[test]
    fn profile_decodes_role_token_and_timestamps() {
        let profile = profile("wanderer", Role::Manager);
        assert_eq!(profile.role, Role::Manager);
        assert_eq!(profile.nickname, "wanderer");
    }

    #[test]
    fn owner_may_act_on_own_resource() {
        let profile = profile("wanderer", Role::User);
        assert!(profile.may_act_on("wanderer", Role::Admin));
    }

    #[test]
    fn privileged_member_may_act_on_foreign_resource() {
        let profile = profile("staff", Role::Admin);
        assert!(profile.may_act_on("wanderer", Role::Manager));
    }

    #[test]
    fn unprivileged_member_may_not_act_on_foreign_resource() {
        let profile = profile("visitor", Role::User);
        assert!(!profile.may_act_on("wanderer", Role::Manager));
    }

    #[test]
    fn nickname_form_rejects_invalid_new_nickname() {
        assert!(UpdateNicknameForm::new("wanderer", "a b").is_err());
    }

    #[test]
    fn nickname_form_serializes_camel_case() {
        let form = match UpdateNicknameForm::new("wanderer", "roamer_2") {
            Ok(form) => form,
            Err(error) => panic!("form rejected: {error}"),
        };
        let value = serde_json::to_value(&form)
            .unwrap_or_else(|error| panic!("serialize failed: {error}"));
        assert_eq!(value["newNickname"], "roamer_2");
    }

    #[test]
    fn password_form_requires_current_password() {
        assert!(UpdatePasswordForm::new("", "pass1234!").is_err());
    }

    #[test]
    fn password_form_rejects_weak_new_password() {
        assert!(UpdatePasswordForm::new("old-secret", "short").is_err());
    }
}
