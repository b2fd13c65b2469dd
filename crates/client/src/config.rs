use std::env;
use std::time::Duration;

use url::Url;

use wayfarer_core::{ClientError, ClientResult};

/// Fallback request timeout, matching the backend's expected latency
/// envelope.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Client configuration resolved from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: String,
    image_url: Option<String>,
    request_timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration pointing at the given backend base URL.
    pub fn new(api_url: impl Into<String>) -> ClientResult<Self> {
        let api_url = api_url.into();
        Url::parse(&api_url)
            .map_err(|error| ClientError::Config(format!("invalid API base URL: {error}")))?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_owned(),
            image_url: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Loads configuration from the environment, reading a `.env` file
    /// first when one is present.
    ///
    /// `WAYFARER_API_URL` is required. `WAYFARER_IMAGE_URL` and
    /// `WAYFARER_TIMEOUT_MS` are optional.
    pub fn from_env() -> ClientResult<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::new(required_env("WAYFARER_API_URL")?)?;

        if let Ok(image_url) = env::var("WAYFARER_IMAGE_URL") {
            config = config.with_image_url(image_url)?;
        }
        if let Some(timeout_ms) = env::var("WAYFARER_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
        {
            config = config.with_request_timeout(Duration::from_millis(timeout_ms));
        }

        Ok(config)
    }

    /// Sets the base URL that image file names are resolved against.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> ClientResult<Self> {
        let image_url = image_url.into();
        Url::parse(&image_url)
            .map_err(|error| ClientError::Config(format!("invalid image base URL: {error}")))?;

        self.image_url = Some(image_url.trim_end_matches('/').to_owned());
        Ok(self)
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Backend base URL without a trailing slash.
    #[must_use]
    pub fn api_url(&self) -> &str {
        self.api_url.as_str()
    }

    /// Endpoint that accepts multipart image uploads.
    #[must_use]
    pub fn upload_url(&self) -> String {
        format!("{}/files", self.api_url)
    }

    /// Resolves a stored file name to its public image URL.
    ///
    /// Returns `None` when no image base URL is configured.
    #[must_use]
    pub fn image_url(&self, store_file_name: &str) -> Option<String> {
        self.image_url
            .as_deref()
            .map(|base| format!("{base}/{store_file_name}"))
    }

    /// Per-request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

fn required_env(name: &str) -> ClientResult<String> {
    env::var(name).map_err(|_| ClientError::Config(format!("{name} is required")))
}
