use crate::errors::LoadError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_DATA_SOURCE: &str = "data/rede_dh_data.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Dataset location, overridable through `REDE_DH_DATA_SOURCE`
pub static DATA_SOURCE: Lazy<String> = Lazy::new(|| {
    env::var("REDE_DH_DATA_SOURCE").unwrap_or_else(|_| DEFAULT_DATA_SOURCE.to_string())
});

/// HTTP timeout in seconds, overridable through `REDE_DH_TIMEOUT_SECS`
pub static TIMEOUT_SECS: Lazy<u64> = Lazy::new(|| {
    env::var("REDE_DH_TIMEOUT_SECS")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
});

/// Where the dataset asset is read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    Url(Url),
    File(PathBuf),
}

impl DataSource {
    /// `http(s)://` becomes a URL, `file://` a path; anything that does not
    /// parse as a URL is taken as a filesystem path.
    pub fn parse(raw: &str) -> Result<Self, LoadError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(LoadError::InvalidSource("empty data source".to_string()));
        }

        match Url::parse(raw) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(Self::Url(url)),
                "file" => url
                    .to_file_path()
                    .map(Self::File)
                    .map_err(|_| LoadError::InvalidSource(raw.to_string())),
                // Windows drive letters parse as a one-letter scheme
                scheme if scheme.len() == 1 => Ok(Self::File(PathBuf::from(raw))),
                other => Err(LoadError::InvalidSource(format!(
                    "unsupported scheme '{}' in {}",
                    other, raw
                ))),
            },
            Err(_) => Ok(Self::File(PathBuf::from(raw))),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{}", url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub source: DataSource,
    pub timeout: Duration,
}

impl LoaderConfig {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            timeout: Duration::from_secs(*TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        let source = DataSource::parse(&DATA_SOURCE)
            .unwrap_or_else(|_| DataSource::File(PathBuf::from(DEFAULT_DATA_SOURCE)));
        Self::new(source)
    }
}
