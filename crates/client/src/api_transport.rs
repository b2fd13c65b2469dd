use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use url::form_urlencoded;

use wayfarer_application::{CredentialStore, Session};
use wayfarer_core::{ApiQuery, ClientError, ClientResult, Envelope};

use crate::config::ClientConfig;

/// Whether an envelope-level 401 on this request expires the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPolicy {
    /// A 401 failure envelope signs the current member out.
    Enforce,
    /// The reply passes through without touching the session.
    Skip,
}

/// HTTP adapter shared by every repository.
///
/// Every failure is folded into the reply envelope: an unreachable
/// backend, a non-success HTTP status and an undecodable body all come
/// back as the synthetic server-problem envelope, so repository calls
/// never surface a transport error. Backend-reported failures, 401
/// included, arrive inside a success HTTP status.
pub struct ApiTransport {
    http_client: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialStore>,
    session: Arc<Session>,
}

impl ApiTransport {
    /// Creates a transport over the configured backend.
    ///
    /// The stored credential is attached as a bearer token to every
    /// request that has one at send time.
    pub fn new(
        config: &ClientConfig,
        credentials: Arc<dyn CredentialStore>,
        session: Arc<Session>,
    ) -> ClientResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|error| {
                ClientError::Config(format!("failed to build HTTP client: {error}"))
            })?;

        Ok(Self {
            http_client,
            base_url: config.api_url().to_owned(),
            credentials,
            session,
        })
    }

    /// Issues a GET request and decodes the reply envelope.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        path_var: Option<&str>,
        query: &dyn ApiQuery,
        policy: AuthPolicy,
    ) -> Envelope<T> {
        let url = self.templated_url(path, path_var, query);
        self.execute(self.http_client.get(url), policy).await
    }

    /// Issues a GET request and converts the decoded payload.
    pub async fn get_with<T, U>(
        &self,
        path: &str,
        path_var: Option<&str>,
        query: &dyn ApiQuery,
        policy: AuthPolicy,
        convert: impl FnOnce(T) -> U,
    ) -> Envelope<U>
    where
        T: DeserializeOwned,
    {
        self.get::<T>(path, path_var, query, policy)
            .await
            .map(convert)
    }

    /// Issues a POST request with a JSON body and decodes the reply
    /// envelope.
    pub async fn post<B, T>(
        &self,
        path: &str,
        path_var: Option<&str>,
        query: &dyn ApiQuery,
        body: &B,
        policy: AuthPolicy,
    ) -> Envelope<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.templated_url(path, path_var, query);
        self.execute(self.http_client.post(url).json(body), policy)
            .await
    }

    /// Issues a POST request without a body and decodes the reply
    /// envelope.
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        path_var: Option<&str>,
        query: &dyn ApiQuery,
        policy: AuthPolicy,
    ) -> Envelope<T> {
        let url = self.templated_url(path, path_var, query);
        self.execute(self.http_client.post(url), policy).await
    }

    /// Issues a POST request and converts the decoded payload.
    pub async fn post_with<B, T, U>(
        &self,
        path: &str,
        path_var: Option<&str>,
        query: &dyn ApiQuery,
        body: &B,
        policy: AuthPolicy,
        convert: impl FnOnce(T) -> U,
    ) -> Envelope<U>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post::<B, T>(path, path_var, query, body, policy)
            .await
            .map(convert)
    }

    /// Issues a DELETE request and decodes the reply envelope.
    ///
    /// Delete paths are resolved from the API root as-is: no query
    /// string is appended.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        path_var: Option<&str>,
        policy: AuthPolicy,
    ) -> Envelope<T> {
        let url = format!("{}{}", self.base_url, resolve_path(path, path_var));
        self.execute(self.http_client.delete(url), policy).await
    }

    /// Resolves a templated path and appends the serialized query.
    ///
    /// The query separator is always appended, even for an empty query,
    /// matching the URLs the backend has always been served.
    fn templated_url(&self, path: &str, path_var: Option<&str>, query: &dyn ApiQuery) -> String {
        format!(
            "{}{}?{}",
            self.base_url,
            resolve_path(path, path_var),
            encode_query(query)
        )
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        policy: AuthPolicy,
    ) -> Envelope<T> {
        let request = match self.credentials.load() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "request failed in transit");
                return Envelope::server_problem();
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "backend replied outside the envelope");
            return Envelope::server_problem();
        }

        let envelope = match response.json::<Envelope<T>>().await {
            Ok(envelope) => envelope,
            Err(error) => {
                warn!(%error, "failed to decode reply envelope");
                return Envelope::server_problem();
            }
        };

        if policy == AuthPolicy::Enforce
            && envelope.error_status() == Some(401)
            && self.session.is_signed_in()
        {
            info!("backend no longer accepts the stored credential, signing out");
            self.session.logout();
        }

        envelope
    }
}

/// Substitutes the first `{pv}` marker, leaving the path untouched when
/// no value is given.
fn resolve_path(path: &str, path_var: Option<&str>) -> String {
    match path_var {
        Some(value) => path.replacen("{pv}", value, 1),
        None => path.to_owned(),
    }
}

/// Serializes a query, shifting the 1-based `page` to the backend's
/// 0-based convention.
fn encode_query(query: &dyn ApiQuery) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if let Some(page) = query.page() {
        serializer.append_pair("page", &page.saturating_sub(1).to_string());
    }
    if let Some(size) = query.size() {
        serializer.append_pair("size", &size.to_string());
    }
    for (key, value) in query.params() {
        serializer.append_pair(&key, &value);
    }

    serializer.finish()
}
