use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Secret store key (and environment variable) holding the model API credential.
pub const MODEL_API_KEY: &str = "MODEL_API_KEY";
const DEFAULT_SECRETS_DIR: &str = "/run/secrets";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration, built once at startup and handed to the components that need it.
///
/// Unlike the other settings, a missing model credential does not abort startup:
/// the gateway reports it per operation as "service unavailable".
#[derive(Debug, Clone)]
pub struct Config {
    pub model_api_key: Option<String>,
    pub secrets_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let secrets_dir = std::env::var("SECRETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SECRETS_DIR));

        let secret_store = SecretsDir::new(&secrets_dir);
        let model_api_key = resolve_secret(MODEL_API_KEY, &[&secret_store, &EnvSource]);

        Ok(Config {
            model_api_key,
            secrets_dir,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a positive integer")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layered secret resolution
// ────────────────────────────────────────────────────────────────────────────

/// A place a credential can be looked up by key.
pub trait SecretSource {
    fn name(&self) -> &'static str;
    fn get(&self, key: &str) -> Option<String>;
}

/// Hosting-platform secret store: a mounted directory with one file per key.
pub struct SecretsDir {
    root: PathBuf,
}

impl SecretsDir {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl SecretSource for SecretsDir {
    fn name(&self) -> &'static str {
        "secret store"
    }

    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.root.join(key)).ok()
    }
}

/// Process environment (after `.env` has been loaded).
pub struct EnvSource;

impl SecretSource for EnvSource {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Returns the first non-blank value for `key`, checking `sources` in order.
pub fn resolve_secret(key: &str, sources: &[&dyn SecretSource]) -> Option<String> {
    sources.iter().find_map(|source| {
        let value = source.get(key)?;
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        debug!("Resolved {key} from {}", source.name());
        Some(value.to_string())
    })
}
