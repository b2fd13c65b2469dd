//! Session state and access-guard services.
//!
//! The session tracks who is signed in; the guard decides whether a
//! protected surface may be shown to them. Both are transport-agnostic:
//! credential storage, credential validation and navigation are ports
//! implemented by the embedding client.

#![forbid(unsafe_code)]

mod guard;
mod ports;
mod session;

pub use guard::{
    AccessRequirement, GuardOutcome, RequestedLocation, RouteGuard, SIGN_IN_REQUIRED_NOTICE,
    redirect_target_from_query,
};
pub use ports::{CredentialStore, CredentialValidator, Navigator};
pub use session::{Session, SessionSnapshot, SessionStatus};
