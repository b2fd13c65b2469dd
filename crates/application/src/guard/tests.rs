use std::sync::Arc;

use serde_json::json;

use wayfarer_domain::{LoginGrant, MemberProfile, Role};

use crate::session::Session;
use crate::{CredentialStore, Navigator};

use super::{
    AccessRequirement, GuardOutcome, RequestedLocation, RouteGuard, SIGN_IN_REQUIRED_NOTICE,
    redirect_target_from_query,
};

struct NullStore;

impl CredentialStore for NullStore {
    fn load(&self) -> Option<String> {
        None
    }

    fn store(&self, _token: &str) {}

    fn clear(&self) {}
}

struct NullNavigator;

impl Navigator for NullNavigator {
    fn navigate(&self, _target: &str) {}
}

fn profile(role: Role) -> MemberProfile {
    serde_json::from_value(json!({
        "account": "traveler01",
        "nickname": "wanderer",
        "role": role.as_str(),
        "createdAt": "2024-03-01T09:30:00",
        "updatedAt": "2024-03-02T10:00:00",
    }))
    .unwrap_or_else(|error| panic!("decode failed: {error}"))
}

fn pending_session() -> Session {
    Session::new(Arc::new(NullStore), Arc::new(NullNavigator))
}

async fn guest_session() -> Session {
    let session = pending_session();
    // An empty store resolves the check without a validator round trip.
    session.check_login(&NeverValidator).await;
    session
}

fn signed_in_session(role: Role) -> Session {
    let session = pending_session();
    session.login(
        LoginGrant {
            access_token: "jwt-1".to_owned(),
            profile: profile(role),
        },
        "/",
    );
    session
}

struct NeverValidator;

#[async_trait::async_trait]
impl crate::CredentialValidator for NeverValidator {
    async fn validate_credential(&self) -> wayfarer_core::Envelope<MemberProfile> {
        panic!("credential validator must not be called")
    }
}

fn location() -> RequestedLocation {
    RequestedLocation::new("/admin/users", "page=2&size=20")
}

#[tokio::test]
async fn pending_session_holds_rendering() {
    let guard = RouteGuard::default();
    let outcome = guard.evaluate(
        &pending_session(),
        &location(),
        &AccessRequirement::signed_in(),
        "page",
    );

    assert_eq!(outcome, GuardOutcome::Loading);
}

#[tokio::test]
async fn guest_is_sent_to_login_with_return_target() {
    let guard = RouteGuard::default();
    let outcome = guard.evaluate(
        &guest_session().await,
        &location(),
        &AccessRequirement::signed_in(),
        "page",
    );

    assert_eq!(
        outcome,
        GuardOutcome::RedirectToLogin {
            target: "/login?redirect=/admin/users?page=2&size=20".to_owned(),
            notice: SIGN_IN_REQUIRED_NOTICE,
        }
    );
}

#[tokio::test]
async fn guest_redirect_keeps_separator_for_empty_query() {
    let guard = RouteGuard::default();
    let outcome = guard.evaluate(
        &guest_session().await,
        &RequestedLocation::new("/mypage", ""),
        &AccessRequirement::signed_in(),
        "page",
    );

    assert_eq!(
        outcome,
        GuardOutcome::RedirectToLogin {
            target: "/login?redirect=/mypage?".to_owned(),
            notice: SIGN_IN_REQUIRED_NOTICE,
        }
    );
}

#[tokio::test]
async fn signed_in_member_renders_without_restriction() {
    let guard = RouteGuard::default();
    let outcome = guard.evaluate(
        &signed_in_session(Role::User),
        &location(),
        &AccessRequirement::signed_in(),
        "page",
    );

    assert_eq!(outcome, GuardOutcome::Render("page"));
}

#[tokio::test]
async fn role_filter_blocks_unlisted_role() {
    let guard = RouteGuard::default();
    let outcome = guard.evaluate(
        &signed_in_session(Role::User),
        &location(),
        &AccessRequirement::one_of(vec![Role::Admin, Role::Manager]),
        "page",
    );

    assert_eq!(
        outcome,
        GuardOutcome::RedirectToError {
            target: "/error".to_owned(),
        }
    );
}

#[tokio::test]
async fn role_filter_admits_listed_role() {
    let guard = RouteGuard::default();
    let outcome = guard.evaluate(
        &signed_in_session(Role::Manager),
        &location(),
        &AccessRequirement::one_of(vec![Role::Admin, Role::Manager]),
        "page",
    );

    assert_eq!(outcome, GuardOutcome::Render("page"));
}

#[tokio::test]
async fn allow_guest_lets_signed_in_member_skip_role_filter() {
    let guard = RouteGuard::default();
    let requirement = AccessRequirement {
        roles: Some(vec![Role::Admin]),
        allow_guest: true,
    };
    let outcome = guard.evaluate(
        &signed_in_session(Role::User),
        &location(),
        &requirement,
        "page",
    );

    assert_eq!(outcome, GuardOutcome::Render("page"));
}

#[tokio::test]
async fn allow_guest_does_not_admit_guests() {
    let guard = RouteGuard::default();
    let requirement = AccessRequirement {
        roles: None,
        allow_guest: true,
    };
    let outcome = guard.evaluate(&guest_session().await, &location(), &requirement, "page");

    assert!(matches!(outcome, GuardOutcome::RedirectToLogin { .. }));
}

#[tokio::test]
async fn role_filter_listing_banned_admits_banned_member() {
    let guard = RouteGuard::default();
    let outcome = guard.evaluate(
        &signed_in_session(Role::Banned),
        &location(),
        &AccessRequirement::one_of(vec![Role::User, Role::Banned]),
        "page",
    );

    assert_eq!(outcome, GuardOutcome::Render("page"));
}

#[test]
fn custom_paths_are_used_in_redirects() {
    let guard = RouteGuard::new("/signin", "/denied");
    let session = signed_in_session(Role::User);
    let outcome = guard.evaluate(
        &session,
        &location(),
        &AccessRequirement::one_of(vec![Role::Admin]),
        "page",
    );

    assert_eq!(
        outcome,
        GuardOutcome::RedirectToError {
            target: "/denied".to_owned(),
        }
    );
}

#[test]
fn redirect_target_round_trips_through_login_query() {
    let location = RequestedLocation::new("/admin/users", "page=2");
    assert_eq!(
        redirect_target_from_query(&location.redirect_query()),
        "/admin/users?page=2"
    );
}

#[test]
fn redirect_target_falls_back_to_root() {
    assert_eq!(redirect_target_from_query(""), "/");
}
