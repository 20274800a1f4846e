use crate::errors::{CoreResult, LoadError};
use crate::models::config::{DataSource, LoaderConfig};
use crate::models::dataset::Dataset;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Instant;
use url::Url;

/// Trait defining how the raw dataset body is fetched
#[async_trait]
pub trait SourceStrategy: Send + Sync {
    /// Fetches the raw JSON body
    async fn fetch(&self) -> CoreResult<String>;

    /// Human-readable location, used in log lines
    fn describe(&self) -> String;
}

/// Fetches the dataset over HTTP(S)
pub struct HttpSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: Url, config: &LoaderConfig) -> CoreResult<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl SourceStrategy for HttpSource {
    async fn fetch(&self) -> CoreResult<String> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Reads the dataset from the local filesystem
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SourceStrategy for FileSource {
    async fn fetch(&self) -> CoreResult<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Loads the institution dataset once per call; no retry, no caching.
///
/// # Example
/// ```
/// use rede_core::{DatasetLoader, FileSource};
///
/// # tokio_test::block_on(async {
/// let loader = DatasetLoader::new(Box::new(FileSource::new("/nonexistent/rede_dh_data.json")));
/// assert!(loader.load().await.is_err());
/// assert!(loader.load_or_empty().await.is_empty());
/// # });
/// ```
pub struct DatasetLoader {
    strategy: Box<dyn SourceStrategy>,
}

impl DatasetLoader {
    pub fn new(strategy: Box<dyn SourceStrategy>) -> Self {
        Self { strategy }
    }

    /// Picks the strategy matching the configured source
    pub fn from_config(config: &LoaderConfig) -> CoreResult<Self> {
        let strategy: Box<dyn SourceStrategy> = match &config.source {
            DataSource::Url(url) => Box::new(HttpSource::new(url.clone(), config)?),
            DataSource::File(path) => Box::new(FileSource::new(path.clone())),
        };
        Ok(Self::new(strategy))
    }

    pub async fn load(&self) -> CoreResult<Dataset> {
        let start_time = Instant::now();
        let body = self.strategy.fetch().await?;
        let dataset = Dataset::from_json(&body)?;

        log::info!(
            "Loaded {} institutions from {} in {:?} ({} rejected)",
            dataset.len(),
            self.strategy.describe(),
            start_time.elapsed(),
            dataset.rejected().len()
        );
        Ok(dataset)
    }

    /// Like [`load`](Self::load), but a failure is logged and degrades to
    /// the empty dataset.
    pub async fn load_or_empty(&self) -> Dataset {
        match self.load().await {
            Ok(dataset) => dataset,
            Err(e) => {
                log::error!("Error loading data from {}: {}", self.strategy.describe(), e);
                Dataset::empty()
            }
        }
    }

    pub async fn load_state(&self) -> LoadState {
        match self.load().await {
            Ok(dataset) => LoadState::Ready(dataset),
            Err(e) => {
                log::error!("Error loading data from {}: {}", self.strategy.describe(), e);
                LoadState::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Loading lifecycle as seen by the presentation shell
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Dataset),
    Failed { reason: String },
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    /// The loaded snapshot, or an empty one while loading or after a failure
    pub fn dataset(&self) -> Dataset {
        match self {
            Self::Ready(dataset) => dataset.clone(),
            Self::Loading | Self::Failed { .. } => Dataset::empty(),
        }
    }
}
