use std::sync::{Arc, PoisonError, RwLock};

use wayfarer_domain::{LoginGrant, MemberProfile};

use crate::ports::{CredentialStore, CredentialValidator, Navigator};

/// Progress of the initial credential check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// The stored credential has not been checked yet.
    Pending,
    /// The check finished; the session state is authoritative.
    Done,
}

/// Point-in-time view of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Progress of the initial credential check.
    pub status: SessionStatus,
    /// Signed-in member, if any.
    pub user: Option<MemberProfile>,
}

struct SessionState {
    status: SessionStatus,
    user: Option<MemberProfile>,
}

/// Tracks the signed-in member across the client.
///
/// The session starts in [`SessionStatus::Pending`] until the first
/// [`Session::check_login`] resolves, so guards can hold rendering
/// instead of redirecting on a state that is not known yet.
pub struct Session {
    credentials: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator>,
    state: RwLock<SessionState>,
}

impl Session {
    /// Creates a pending session over the given ports.
    #[must_use]
    pub fn new(credentials: Arc<dyn CredentialStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            credentials,
            navigator,
            state: RwLock::new(SessionState {
                status: SessionStatus::Pending,
                user: None,
            }),
        }
    }

    /// Returns the progress of the initial credential check.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.read_state().status
    }

    /// Returns the signed-in member, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<MemberProfile> {
        self.read_state().user.clone()
    }

    /// Returns whether a member is signed in.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.read_state().user.is_some()
    }

    /// Returns one consistent view of status and user.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.read_state();
        SessionSnapshot {
            status: state.status,
            user: state.user.clone(),
        }
    }

    /// Resolves the stored credential into a signed-in member.
    ///
    /// Without a stored credential the check finishes immediately as a
    /// guest. Otherwise the validator decides: a success envelope with a
    /// profile signs the member in, anything else leaves the session a
    /// guest. The status is [`SessionStatus::Done`] afterwards in every
    /// case.
    pub async fn check_login(&self, validator: &dyn CredentialValidator) {
        if self.credentials.load().is_none() {
            self.write_state(|state| state.status = SessionStatus::Done);
            return;
        }

        let envelope = validator.validate_credential().await;
        let user = if envelope.success { envelope.response } else { None };

        self.write_state(|state| {
            if let Some(profile) = user {
                state.user = Some(profile);
            }
            state.status = SessionStatus::Done;
        });
    }

    /// Establishes a session from a fresh login grant, then navigates to
    /// `redirect`.
    pub fn login(&self, grant: LoginGrant, redirect: &str) {
        self.credentials.store(&grant.access_token);
        self.write_state(|state| {
            state.user = Some(grant.profile);
            state.status = SessionStatus::Done;
        });
        self.navigator.navigate(redirect);
    }

    /// Signs the member out of this client.
    ///
    /// Only the in-memory user is dropped. The stored credential stays in
    /// place; the next [`Session::check_login`] decides whether it still
    /// identifies a member. Calling this as a guest is a no-op.
    pub fn logout(&self) {
        self.write_state(|state| state.user = None);
    }

    /// Applies a confirmed nickname change to the signed-in member.
    ///
    /// A guest session is left untouched.
    pub fn update_nickname(&self, nickname: &str) {
        self.write_state(|state| {
            if let Some(user) = state.user.as_mut() {
                user.nickname = nickname.to_owned();
            }
        });
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self, apply: impl FnOnce(&mut SessionState)) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        apply(&mut state);
    }
}
