use serde::{Deserialize, Serialize};

/// Status carried by the envelope synthesized for transport failures.
pub const SERVER_PROBLEM_STATUS: u16 = 500;

/// Message carried by the envelope synthesized for transport failures.
pub const SERVER_PROBLEM_MESSAGE: &str = "A server problem occurred. Please try again later.";

/// Envelope returned by every backend endpoint.
///
/// A well-formed backend reply populates exactly one of `response` and
/// `error`. Transport failures are folded into the same shape via
/// [`Envelope::server_problem`], so callers branch on the envelope instead
/// of handling transport errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Whether the backend processed the request successfully.
    pub success: bool,
    /// Payload for successful requests.
    pub response: Option<T>,
    /// Failure details for unsuccessful requests.
    pub error: Option<ErrorBody>,
}

impl<T> Envelope<T> {
    /// Wraps a successful payload.
    #[must_use]
    pub fn success(response: T) -> Self {
        Self {
            success: true,
            response: Some(response),
            error: None,
        }
    }

    /// Wraps a failure body.
    #[must_use]
    pub fn failure(error: ErrorBody) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(error),
        }
    }

    /// The envelope synthesized when the backend cannot be reached or its
    /// reply cannot be decoded.
    #[must_use]
    pub fn server_problem() -> Self {
        Self::failure(ErrorBody::server_problem())
    }

    /// Applies a response converter to the payload.
    ///
    /// An absent payload passes through untouched; `success` and `error`
    /// are never altered.
    #[must_use]
    pub fn map<U>(self, convert: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            success: self.success,
            response: self.response.map(convert),
            error: self.error,
        }
    }

    /// Returns the error status when a failure body is present.
    #[must_use]
    pub fn error_status(&self) -> Option<u16> {
        self.error.as_ref().map(|error| error.status)
    }
}

/// Failure details carried by an unsuccessful envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// HTTP-style status describing the failure.
    pub status: u16,
    /// Human-readable failure message.
    pub message: String,
    /// Field-level validation failures, empty unless the backend rejected
    /// a submitted form.
    #[serde(default)]
    pub binding_errors: Vec<BindingError>,
}

impl ErrorBody {
    /// Creates a failure body without field-level detail.
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            binding_errors: Vec::new(),
        }
    }

    /// The failure body used when the backend cannot be reached.
    #[must_use]
    pub fn server_problem() -> Self {
        Self::new(SERVER_PROBLEM_STATUS, SERVER_PROBLEM_MESSAGE)
    }

    /// Message of the first field-level failure, if any.
    ///
    /// Form screens surface this next to the rejected input.
    #[must_use]
    pub fn first_binding_message(&self) -> Option<&str> {
        self.binding_errors
            .first()
            .map(|binding| binding.default_message.as_str())
    }
}

/// One field-level validation failure reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingError {
    /// Backend validation codes, most specific first.
    pub codes: Vec<String>,
    /// Fallback message shown when no code-specific text exists.
    pub default_message: String,
    /// Name of the submitted object that failed validation.
    pub object_name: String,
    /// Name of the rejected field.
    pub field: String,
}
