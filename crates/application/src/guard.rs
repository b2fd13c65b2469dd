use wayfarer_domain::Role;

use crate::session::{Session, SessionStatus};

/// Notice surfaced when a guest reaches a protected surface.
pub const SIGN_IN_REQUIRED_NOTICE: &str = "Sign-in is required to continue.";

/// Role restriction attached to a protected surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessRequirement {
    /// Roles that may enter; `None` means any signed-in member.
    pub roles: Option<Vec<Role>>,
    /// When set, a signed-in member enters even if `roles` does not list
    /// their role. Guests are still sent to login.
    pub allow_guest: bool,
}

impl AccessRequirement {
    /// Requires any signed-in member.
    #[must_use]
    pub const fn signed_in() -> Self {
        Self {
            roles: None,
            allow_guest: false,
        }
    }

    /// Requires a signed-in member holding one of the given roles.
    #[must_use]
    pub fn one_of(roles: Vec<Role>) -> Self {
        Self {
            roles: Some(roles),
            allow_guest: false,
        }
    }
}

/// Location the visitor asked for, kept so login can return them there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedLocation {
    path: String,
    query: String,
}

impl RequestedLocation {
    /// Creates a location from an app-relative path and its serialized
    /// query string without the leading `?`.
    #[must_use]
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: query.into(),
        }
    }

    /// Returns the app-relative path.
    #[must_use]
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    /// Returns the serialized query string without the leading `?`.
    #[must_use]
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Return-to parameter appended to the login path.
    ///
    /// The query separator is always present, even for an empty query;
    /// [`redirect_target_from_query`] strips the marker back off as-is.
    #[must_use]
    pub fn redirect_query(&self) -> String {
        format!("?redirect={}?{}", self.path, self.query)
    }
}

/// Decision produced by [`RouteGuard::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome<T> {
    /// The credential check has not resolved yet; show a neutral
    /// placeholder instead of deciding.
    Loading,
    /// Send the guest to the login screen.
    RedirectToLogin {
        /// Login path carrying the return-to parameter.
        target: String,
        /// Notice to surface alongside the redirect.
        notice: &'static str,
    },
    /// Send the member to the generic error screen.
    RedirectToError {
        /// Error path.
        target: String,
    },
    /// Show the protected element.
    Render(T),
}

/// Gates protected surfaces on session state and role restrictions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    login_path: String,
    error_path: String,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new("/login", "/error")
    }
}

impl RouteGuard {
    /// Creates a guard redirecting to the given login and error paths.
    #[must_use]
    pub fn new(login_path: impl Into<String>, error_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            error_path: error_path.into(),
        }
    }

    /// Decides whether `protected` may be shown for the current session.
    ///
    /// A pending session always resolves to [`GuardOutcome::Loading`]. A
    /// guest is redirected to login with the requested location encoded
    /// for the return trip. A signed-in member renders unless the
    /// requirement lists roles, `allow_guest` is unset, and their role is
    /// not listed, in which case they are redirected to the error page.
    ///
    /// [`Role::Banned`] is matched like any other value here: a filter
    /// that lists it admits a banned member.
    pub fn evaluate<T>(
        &self,
        session: &Session,
        location: &RequestedLocation,
        requirement: &AccessRequirement,
        protected: T,
    ) -> GuardOutcome<T> {
        let snapshot = session.snapshot();

        if snapshot.status == SessionStatus::Pending {
            return GuardOutcome::Loading;
        }

        let Some(user) = snapshot.user else {
            return GuardOutcome::RedirectToLogin {
                target: format!("{}{}", self.login_path, location.redirect_query()),
                notice: SIGN_IN_REQUIRED_NOTICE,
            };
        };

        if let Some(roles) = requirement.roles.as_ref()
            && !requirement.allow_guest
            && !roles.contains(&user.role)
        {
            return GuardOutcome::RedirectToError {
                target: self.error_path.clone(),
            };
        }

        GuardOutcome::Render(protected)
    }
}

/// Recovers the return-to target that the login screen receives.
///
/// Strips the first `?redirect=` marker from the raw query string; an
/// empty remainder falls back to the root path.
#[must_use]
pub fn redirect_target_from_query(search: &str) -> String {
    let target = search.replacen("?redirect=", "", 1);
    if target.is_empty() { "/".to_owned() } else { target }
}

#[cfg(test)]
mod tests;
