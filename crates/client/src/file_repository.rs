use std::sync::Arc;

use wayfarer_core::Envelope;

use crate::api_transport::{ApiTransport, AuthPolicy};

/// Calls under `/files`: removal of uploaded assets by stored name.
///
/// Uploads themselves go through the multipart endpoint exposed at
/// [`ClientConfig::upload_url`](crate::ClientConfig::upload_url) and are
/// driven by the embedding application, so this repository only covers
/// the cleanup call.
#[derive(Clone)]
pub struct FileRepository {
    transport: Arc<ApiTransport>,
}

impl FileRepository {
    /// Creates the repository over a shared transport.
    #[must_use]
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Deletes an uploaded file by its stored name.
    pub async fn remove(&self, store_file_name: &str) -> Envelope<String> {
        self.transport
            .delete("/files/{pv}", Some(store_file_name), AuthPolicy::Enforce)
            .await
    }
}
