use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use wayfarer_application::CredentialStore;
use wayfarer_core::{ClientError, ClientResult};

const CREDENTIALS_FILE: &str = "credentials.json";

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCredential {
    access_token: String,
}

/// Credential store backed by a JSON file, so a login survives restarts.
///
/// Every operation is best-effort: an unreadable or unwritable file is
/// logged and treated as an absent credential rather than failing the
/// caller.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Creates a store writing `credentials.json` under the given
    /// directory.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            path: directory.into().join(CREDENTIALS_FILE),
        }
    }

    /// Creates a store under `WAYFARER_CONFIG_DIR`, falling back to
    /// `$HOME/.config/wayfarer`.
    pub fn from_env() -> ClientResult<Self> {
        if let Ok(directory) = env::var("WAYFARER_CONFIG_DIR") {
            return Ok(Self::new(directory));
        }

        let home = env::var("HOME")
            .map_err(|_| ClientError::Config("HOME environment variable not set".to_owned()))?;
        Ok(Self::new(
            PathBuf::from(home).join(".config").join("wayfarer"),
        ))
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "failed to read stored credential");
                return None;
            }
        };

        match serde_json::from_str::<StoredCredential>(&content) {
            Ok(stored) => Some(stored.access_token),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "stored credential is malformed");
                None
            }
        }
    }

    fn store(&self, token: &str) {
        if let Some(directory) = self.path.parent()
            && let Err(error) = fs::create_dir_all(directory)
        {
            warn!(path = %directory.display(), %error, "failed to create credential directory");
            return;
        }

        let stored = StoredCredential {
            access_token: token.to_owned(),
        };
        let content = match serde_json::to_string_pretty(&stored) {
            Ok(content) => content,
            Err(error) => {
                warn!(%error, "failed to encode credential");
                return;
            }
        };

        if let Err(error) = fs::write(&self.path, content) {
            warn!(path = %self.path.display(), %error, "failed to write credential");
        }
    }

    fn clear(&self) {
        if !self.path.exists() {
            return;
        }

        if let Err(error) = fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), %error, "failed to remove stored credential");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use wayfarer_application::CredentialStore;

    use super::FileCredentialStore;

    fn temp_directory(tag: &str) -> std::path::PathBuf {
        let directory = std::env::temp_dir().join(format!(
            "wayfarer-credentials-{tag}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&directory);
        directory
    }

    #[test]
    fn store_round_trips_through_disk() {
        let directory = temp_directory("round-trip");
        let store = FileCredentialStore::new(&directory);

        assert!(store.load().is_none());
        store.store("jwt-1");
        assert_eq!(store.load().as_deref(), Some("jwt-1"));

        // A second store instance sees the persisted credential.
        let reopened = FileCredentialStore::new(&directory);
        assert_eq!(reopened.load().as_deref(), Some("jwt-1"));

        store.clear();
        assert!(store.load().is_none());
        let _ = fs::remove_dir_all(&directory);
    }

    #[test]
    fn malformed_file_reads_as_absent() {
        let directory = temp_directory("malformed");
        let store = FileCredentialStore::new(&directory);
        store.store("jwt-1");

        let path = directory.join("credentials.json");
        fs::write(&path, "not json").unwrap_or_else(|error| panic!("write failed: {error}"));

        assert!(store.load().is_none());
        let _ = fs::remove_dir_all(&directory);
    }
}
