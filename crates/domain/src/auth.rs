use serde::{Deserialize, Serialize};
use wayfarer_core::{ClientError, ClientResult};

use crate::profile::MemberProfile;
use crate::validation::{
    ACCOUNT_MIN_LENGTH, PASSWORD_MIN_LENGTH, validate_account, validate_nickname,
    validate_password,
};

/// Credentials submitted to the login endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    account: String,
    raw_password: String,
}

impl LoginForm {
    /// Creates a login form after the pre-submit length check.
    ///
    /// Only lengths are checked before sign-in: values shorter than any
    /// registered credential are rejected without a round trip, while the
    /// full pattern rules stay server-side.
    pub fn new(account: impl Into<String>, raw_password: impl Into<String>) -> ClientResult<Self> {
        let account = account.into();
        let raw_password = raw_password.into();

        if account.chars().count() < ACCOUNT_MIN_LENGTH
            || raw_password.chars().count() < PASSWORD_MIN_LENGTH
        {
            return Err(ClientError::Validation(
                "account or password is too short to match a registered credential".to_owned(),
            ));
        }

        Ok(Self {
            account,
            raw_password,
        })
    }

    /// Returns the account identifier.
    #[must_use]
    pub fn account(&self) -> &str {
        self.account.as_str()
    }
}

/// Sign-up request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    account: String,
    raw_password: String,
    nickname: String,
}

impl RegisterForm {
    /// Creates a sign-up request after validating every field.
    pub fn new(
        account: impl Into<String>,
        raw_password: impl Into<String>,
        nickname: impl Into<String>,
    ) -> ClientResult<Self> {
        let account = account.into();
        validate_account(&account)?;

        let raw_password = raw_password.into();
        validate_password(&raw_password)?;

        let nickname = nickname.into();
        validate_nickname(&nickname)?;

        Ok(Self {
            account,
            raw_password,
            nickname,
        })
    }

    /// Returns the account identifier.
    #[must_use]
    pub fn account(&self) -> &str {
        self.account.as_str()
    }

    /// Returns the requested nickname.
    #[must_use]
    pub fn nickname(&self) -> &str {
        self.nickname.as_str()
    }
}

/// Payload returned by a successful login round trip: the credential to
/// persist plus the signed-in member's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginGrant {
    /// Bearer token to persist and attach to subsequent requests.
    pub access_token: String,
    /// Profile of the signed-in member.
    pub profile: MemberProfile,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{LoginForm, LoginGrant, RegisterForm};
    use crate::role::Role;

    #[test]
    fn login_form_rejects_short_credentials() {
        assert!(LoginForm::new("abc", "password1!").is_err());
        assert!(LoginForm::new("traveler", "short").is_err());
    }

    #[test]
    fn login_form_skips_pattern_rules() {
        // Sign-in only checks lengths; pattern rules apply at sign-up.
        let form = LoginForm::new("traveler", "password with spaces");
        assert!(form.is_ok());
    }

    #[test]
    fn login_form_serializes_camel_case() {
        let form = match LoginForm::new("traveler", "password1!") {
            Ok(form) => form,
            Err(error) => panic!("form rejected: {error}"),
        };
        let value = serde_json::to_value(&form)
            .unwrap_or_else(|error| panic!("serialize failed: {error}"));
        assert_eq!(value["account"], "traveler");
        assert_eq!(value["rawPassword"], "password1!");
    }

    #[test]
    fn register_form_applies_full_rules() {
        assert!(RegisterForm::new("traveler", "pass1234!", "roamer").is_ok());
        assert!(RegisterForm::new("tr av", "pass1234!", "roamer").is_err());
        assert!(RegisterForm::new("traveler", "nospecial1", "roamer").is_err());
        assert!(RegisterForm::new("traveler", "pass1234!", "ro am").is_err());
    }

    #[test]
    fn login_grant_decodes_token_and_profile() {
        let grant: LoginGrant = serde_json::from_value(json!({
            "accessToken": "token-123",
            "profile": {
                "account": "traveler01",
                "nickname": "roamer",
                "role": "USER",
                "createdAt": "2024-03-01T09:30:00",
                "updatedAt": "2024-03-02T10:00:00",
            },
        }))
        .unwrap_or_else(|error| panic!("decode failed: {error}"));

        assert_eq!(grant.access_token, "token-123");
        assert_eq!(grant.profile.role, Role::User);
    }
}
