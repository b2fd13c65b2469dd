use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wayfarer_core::ClientError;

/// Account roles, ordered by privilege.
///
/// Each role carries a numeric rank and a lower rank means more privilege;
/// the order is total. `Banned` sits at the bottom of the order but is an
/// ordinary member of the set, so a role filter that lists it admits
/// banned accounts like any other role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Matches every account regardless of privilege.
    All,
    /// Full administrative access.
    Admin,
    /// Operational management access.
    Manager,
    /// Regular signed-up member.
    User,
    /// Suspended account.
    Banned,
}

impl Role {
    /// Returns the privilege rank; lower values hold more privilege.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::All => 1,
            Self::Admin => 2,
            Self::Manager => 3,
            Self::User => 4,
            Self::Banned => 5,
        }
    }

    /// Returns the wire token for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::User => "USER",
            Self::Banned => "BANNED",
        }
    }

    /// Returns the display label for this role.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Admin => "Administrator",
            Self::Manager => "Manager",
            Self::User => "User",
            Self::Banned => "Suspended",
        }
    }

    /// Returns all known roles in privilege order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::All,
            Role::Admin,
            Role::Manager,
            Role::User,
            Role::Banned,
        ];

        ALL
    }

    /// Returns whether this role holds at least the privilege of
    /// `threshold`.
    ///
    /// This is the only place privilege ranks are compared; call sites
    /// must not compare ranks directly.
    #[must_use]
    pub fn has_at_least_privilege(self, threshold: Self) -> bool {
        self.rank() <= threshold.rank()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ClientError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ALL" => Ok(Self::All),
            "ADMIN" => Ok(Self::Admin),
            "MANAGER" => Ok(Self::Manager),
            "USER" => Ok(Self::User),
            "BANNED" => Ok(Self::Banned),
            _ => Err(ClientError::Validation(format!(
                "unknown role value '{value}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use proptest::prelude::*;

    use super::Role;

    #[test]
    fn role_roundtrip_wire_token() {
        for role in Role::all() {
            let restored = Role::from_str(role.as_str());
            assert!(restored.is_ok());
            assert_eq!(restored.unwrap_or(Role::Banned), *role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(Role::from_str("SUPERUSER").is_err());
    }

    #[test]
    fn role_decodes_from_wire_token() {
        let role: Role = serde_json::from_value(serde_json::json!("MANAGER"))
            .unwrap_or_else(|error| panic!("decode failed: {error}"));
        assert_eq!(role, Role::Manager);
    }

    #[test]
    fn admin_outranks_user() {
        assert!(Role::Admin.has_at_least_privilege(Role::User));
        assert!(!Role::User.has_at_least_privilege(Role::Admin));
    }

    #[test]
    fn banned_holds_least_privilege() {
        for role in Role::all() {
            assert!(role.has_at_least_privilege(Role::Banned));
        }
    }

    fn role_strategy() -> impl Strategy<Value = Role> {
        prop::sample::select(Role::all().to_vec())
    }

    proptest! {
        #[test]
        fn privilege_order_is_total(a in role_strategy(), b in role_strategy()) {
            prop_assert!(a.has_at_least_privilege(b) || b.has_at_least_privilege(a));
        }

        #[test]
        fn privilege_order_is_reflexive(role in role_strategy()) {
            prop_assert!(role.has_at_least_privilege(role));
        }

        #[test]
        fn privilege_order_is_transitive(
            a in role_strategy(),
            b in role_strategy(),
            c in role_strategy(),
        ) {
            if a.has_at_least_privilege(b) && b.has_at_least_privilege(c) {
                prop_assert!(a.has_at_least_privilege(c));
            }
        }
    }
}
