//! Configuration and credential stores for the MockFactory CLI.
//!
//! Two explicit stores live under a per-user directory (`~/.mockfactory` by
//! default): a JSON configuration file and a plain-text token file. Both are
//! rewritten wholesale on update via an atomic temp-file rename, so a
//! concurrently running invocation never observes a partial write. The store
//! root is injectable so tests and callers use explicit instances rather than
//! ambient globals.

#![forbid(unsafe_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Name of the per-user state directory under the home directory.
const STATE_DIR_NAME: &str = ".mockfactory";

/// Configuration file name inside the state directory.
const CONFIG_FILE: &str = "config.json";

/// Token file name inside the state directory.
const TOKEN_FILE: &str = "token";

/// Default backend base URL.
pub const DEFAULT_API_URL: &str = "https://mockfactory.io";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u32 = 30;

/// Accepted timeout range in seconds.
pub const TIMEOUT_RANGE: std::ops::RangeInclusive<u32> = 1..=300;

/// Errors from the configuration and credential stores.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The user's home directory could not be determined.
    #[error("could not determine home directory")]
    NoHomeDir,
    /// Filesystem access failed.
    #[error("config store I/O error at {path}: {source}")]
    Io {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Configuration file could not be serialized.
    #[error("config serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Unknown configuration key passed to `set`.
    #[error("unknown configuration key: {0} (available: api_url, timeout, session_id)")]
    UnknownKey(String),
    /// Configuration value rejected by validation.
    #[error("invalid value for {key}: {reason}")]
    InvalidValue {
        /// Key being set.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ConfigError {
    fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Client settings persisted in `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout in seconds (1..=300).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// Optional session identifier sent as `X-Session-Id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_timeout() -> u32 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            session_id: None,
        }
    }
}

impl ClientConfig {
    /// Set a configuration value by key.
    ///
    /// Accepted keys are `api_url`, `timeout`, and `session_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKey`] for an unrecognized key and
    /// [`ConfigError::InvalidValue`] for an out-of-range timeout.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "api_url" => {
                if !value.starts_with("http://") && !value.starts_with("https://") {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        reason: format!("{value} must start with http:// or https://"),
                    });
                }
                self.api_url = value.trim_end_matches('/').to_string();
            }
            "timeout" => {
                let secs: u32 = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    reason: format!("{value} is not a positive integer"),
                })?;
                if !TIMEOUT_RANGE.contains(&secs) {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        reason: format!(
                            "{secs} is outside the accepted range {}..={}",
                            TIMEOUT_RANGE.start(),
                            TIMEOUT_RANGE.end()
                        ),
                    });
                }
                self.timeout_secs = secs;
            }
            "session_id" => {
                self.session_id = Some(value.to_string());
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

/// An authenticated session held in the token file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer token issued by the backend.
    pub token: String,
    /// When the token file was written, if the filesystem reports it.
    pub issued_at: Option<DateTime<Utc>>,
}

/// Persistent store for [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    /// Create a store rooted at the default per-user directory.
    ///
    /// # Errors
    ///
    /// Fails if the home directory cannot be determined.
    pub fn open_default() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(Self::open(home.join(STATE_DIR_NAME)))
    }

    /// Create a store rooted at an explicit directory.
    #[must_use]
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the configuration file.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Load the configuration, falling back to defaults when the file is
    /// missing or unreadable.
    #[must_use]
    pub fn load(&self) -> ClientConfig {
        let path = self.config_path();
        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded configuration");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "corrupt configuration, using defaults");
                    ClientConfig::default()
                }
            },
            Err(_) => ClientConfig::default(),
        }
    }

    /// Persist the configuration, replacing the file atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the state directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self, config: &ClientConfig) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.root, &self.config_path(), json.as_bytes())
    }

    /// Restore defaults and persist them.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn reset(&self) -> Result<ClientConfig, ConfigError> {
        let config = ClientConfig::default();
        self.save(&config)?;
        Ok(config)
    }
}

/// Persistent store for the authentication token.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    root: PathBuf,
}

impl CredentialStore {
    /// Create a store rooted at the default per-user directory.
    ///
    /// # Errors
    ///
    /// Fails if the home directory cannot be determined.
    pub fn open_default() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(Self::open(home.join(STATE_DIR_NAME)))
    }

    /// Create a store rooted at an explicit directory.
    #[must_use]
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the token file.
    #[must_use]
    pub fn token_path(&self) -> PathBuf {
        self.root.join(TOKEN_FILE)
    }

    /// Load the current session, if a token is stored.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        let path = self.token_path();
        let raw = fs::read_to_string(&path).ok()?;
        let token = raw.trim().to_string();
        if token.is_empty() {
            return None;
        }
        let issued_at = fs::metadata(&path)
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Utc>::from);
        Some(Session { token, issued_at })
    }

    /// Store a token, overwriting any previous session.
    ///
    /// On unix the file is restricted to owner read/write.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn store(&self, token: &str) -> Result<(), ConfigError> {
        let path = self.token_path();
        write_atomic(&self.root, &path, token.as_bytes())?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&path, perms).map_err(|e| ConfigError::io(&path, e))?;
        }
        debug!(path = %path.display(), "stored session token");
        Ok(())
    }

    /// Delete the stored token. Clearing an absent token is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), ConfigError> {
        let path = self.token_path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConfigError::io(path, e)),
        }
    }
}

/// Write `contents` to `path` via a temp file in `root`, then rename.
fn write_atomic(root: &Path, path: &Path, contents: &[u8]) -> Result<(), ConfigError> {
    fs::create_dir_all(root).map_err(|e| ConfigError::io(root, e))?;
    let mut tmp = tempfile::NamedTempFile::new_in(root).map_err(|e| ConfigError::io(root, e))?;
    tmp.write_all(contents)
        .map_err(|e| ConfigError::io(path, e))?;
    tmp.persist(path)
        .map_err(|e| ConfigError::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "https://mockfactory.io");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.session_id.is_none());
    }

    #[test]
    fn config_store_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ConfigStore::open(dir.path());

        let mut config = ClientConfig::default();
        config.set("api_url", "https://staging.mockfactory.io").expect("set");
        config.set("timeout", "60").expect("set");
        store.save(&config).expect("save");

        let reloaded = store.load();
        assert_eq!(reloaded.api_url, "https://staging.mockfactory.io");
        assert_eq!(reloaded.timeout_secs, 60);
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ConfigStore::open(dir.path());
        assert_eq!(store.load(), ClientConfig::default());
    }

    #[test]
    fn load_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ConfigStore::open(dir.path());
        fs::create_dir_all(dir.path()).expect("mkdir");
        fs::write(store.config_path(), "{not json").expect("write");
        assert_eq!(store.load(), ClientConfig::default());
    }

    #[test]
    fn reset_restores_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ConfigStore::open(dir.path());

        let mut config = ClientConfig::default();
        config.set("timeout", "120").expect("set");
        store.save(&config).expect("save");

        let config = store.reset().expect("reset");
        assert_eq!(config, ClientConfig::default());
        assert_eq!(store.load(), ClientConfig::default());
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut config = ClientConfig::default();
        let err = config.set("colour", "blue").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(_)));
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn set_rejects_zero_timeout() {
        let mut config = ClientConfig::default();
        assert!(config.set("timeout", "0").is_err());
        assert!(config.set("timeout", "301").is_err());
        assert!(config.set("timeout", "-5").is_err());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn set_rejects_bad_api_url() {
        let mut config = ClientConfig::default();
        assert!(config.set("api_url", "ftp://example.com").is_err());
    }

    #[test]
    fn set_strips_trailing_slash_from_api_url() {
        let mut config = ClientConfig::default();
        config.set("api_url", "http://localhost:8000/").expect("set");
        assert_eq!(config.api_url, "http://localhost:8000");
    }

    #[test]
    fn credential_store_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CredentialStore::open(dir.path());

        assert!(store.load().is_none());
        store.store("tok_abc123").expect("store");

        let session = store.load().expect("session");
        assert_eq!(session.token, "tok_abc123");
        assert!(session.issued_at.is_some());
    }

    #[test]
    fn credential_store_overwrites_previous_token() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CredentialStore::open(dir.path());

        store.store("first").expect("store");
        store.store("second").expect("store");
        assert_eq!(store.load().expect("session").token, "second");
    }

    #[test]
    fn credential_store_clear_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CredentialStore::open(dir.path());

        store.clear().expect("clear without token");
        store.store("tok").expect("store");
        store.clear().expect("clear");
        store.clear().expect("clear again");
        assert!(store.load().is_none());
    }

    #[test]
    fn empty_token_file_is_no_session() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CredentialStore::open(dir.path());
        fs::create_dir_all(dir.path()).expect("mkdir");
        fs::write(store.token_path(), "  \n").expect("write");
        assert!(store.load().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn token_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let store = CredentialStore::open(dir.path());
        store.store("tok").expect("store");

        let mode = fs::metadata(store.token_path())
            .expect("metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
