use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{env, fmt, io, time::Duration};

// Runtime settings. Precedence: defaults, then the TOML file named by
// AUTH_FLOW_CONFIG, then individual environment variables.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub auth_service_url: String,
    pub request_timeout_ms: u64,
    // None keeps tokens in memory only.
    pub token_store_path: Option<PathBuf>,
    pub http_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_service_url: "http://127.0.0.1:3002".to_string(),
            request_timeout_ms: 1500,
            token_store_path: None,
            http_port: 3000,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: io::Error },
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            ConfigError::Parse(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var("AUTH_FLOW_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(ConfigError::Parse)
    }

    // Unparseable numeric values are ignored rather than fatal.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("AUTH_SERVICE_URL") {
            self.auth_service_url = url;
        }
        if let Some(millis) = lookup("AUTH_REQUEST_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            self.request_timeout_ms = millis;
        }
        if let Some(path) = lookup("TOKEN_STORE_PATH").filter(|v| !v.is_empty()) {
            self.token_store_path = Some(PathBuf::from(path));
        }
        if let Some(port) = lookup("HTTP_PORT").and_then(|v| v.parse().ok()) {
            self.http_port = port;
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
