//! Shared primitives for all Rust crates in Wayfarer.

#![forbid(unsafe_code)]

/// Response envelope shared by every backend endpoint.
pub mod envelope;
/// Pagination primitives for list endpoints.
pub mod page;
/// Typed query-string contract consumed by the transport.
pub mod query;

use thiserror::Error;

pub use envelope::{
    BindingError, Envelope, ErrorBody, SERVER_PROBLEM_MESSAGE, SERVER_PROBLEM_STATUS,
};
pub use page::{Page, PageQuery};
pub use query::{ApiQuery, NoQuery};

/// Result type used across Wayfarer crates.
pub type ClientResult<T> = Result<T, ClientError>;

/// Common client error categories.
///
/// Backend calls never surface these: every request resolves to an
/// [`Envelope`], including transport failures. `ClientError` covers the
/// work done before a request exists, such as configuration loading and
/// local form validation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),
}
