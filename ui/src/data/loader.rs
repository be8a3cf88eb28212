//! Startup fetch of the five datasets.
//!
//! All endpoints are requested concurrently and awaited jointly; each one
//! settles independently into [`DatasetState`], so a failing file only affects
//! the chart that reads it. Nothing is retried.

use std::sync::Arc;

use thiserror::Error;

use super::RawDataset;
use crate::core::config::DatasetSource;

/// The five static files the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Endpoint {
    ValueAdded,
    Profits,
    Employment,
    Enterprises,
    GdpShare,
}

impl Endpoint {
    pub const ALL: [Endpoint; 5] = [
        Endpoint::ValueAdded,
        Endpoint::GdpShare,
        Endpoint::Profits,
        Endpoint::Employment,
        Endpoint::Enterprises,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Endpoint::ValueAdded => "value_added.json",
            Endpoint::Profits => "profits.json",
            Endpoint::Employment => "employees.json",
            Endpoint::Enterprises => "enterprises_count.json",
            Endpoint::GdpShare => "gdp_share.json",
        }
    }

    /// Key position holding the year in this endpoint's observations.
    pub fn year_position(self) -> usize {
        match self {
            Endpoint::ValueAdded | Endpoint::Profits | Endpoint::Employment => 3,
            Endpoint::Enterprises => 2,
            Endpoint::GdpShare => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("request for {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("{url} answered with HTTP {status}")]
    Status { status: u16, url: String },
    #[error("{source_name} is not a valid dataset: {message}")]
    Parse { source_name: String, message: String },
    #[error("cannot read {path}: {message}")]
    Io { path: String, message: String },
}

/// Per-endpoint outcome of the startup fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DatasetState {
    #[default]
    Loading,
    Loaded(Arc<RawDataset>),
    Failed(LoadError),
}

impl DatasetState {
    pub fn dataset(&self) -> Option<&RawDataset> {
        match self {
            DatasetState::Loaded(ds) => Some(ds),
            _ => None,
        }
    }

    fn from_result(result: Result<RawDataset, LoadError>) -> Self {
        match result {
            Ok(ds) => DatasetState::Loaded(Arc::new(ds)),
            Err(err) => DatasetState::Failed(err),
        }
    }
}

/// Every endpoint's state, cached for the rest of the session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DatasetBundle {
    pub value_added: DatasetState,
    pub profits: DatasetState,
    pub employment: DatasetState,
    pub enterprises: DatasetState,
    pub gdp_share: DatasetState,
}

impl DatasetBundle {
    pub fn get(&self, endpoint: Endpoint) -> &DatasetState {
        match endpoint {
            Endpoint::ValueAdded => &self.value_added,
            Endpoint::Profits => &self.profits,
            Endpoint::Employment => &self.employment,
            Endpoint::Enterprises => &self.enterprises,
            Endpoint::GdpShare => &self.gdp_share,
        }
    }

    pub fn set(&mut self, endpoint: Endpoint, state: DatasetState) {
        let slot = match endpoint {
            Endpoint::ValueAdded => &mut self.value_added,
            Endpoint::Profits => &mut self.profits,
            Endpoint::Employment => &mut self.employment,
            Endpoint::Enterprises => &mut self.enterprises,
            Endpoint::GdpShare => &mut self.gdp_share,
        };
        *slot = state;
    }

    pub fn is_loading(&self) -> bool {
        Endpoint::ALL
            .iter()
            .any(|e| matches!(self.get(*e), DatasetState::Loading))
    }
}

fn parse(source_name: &str, text: &str) -> Result<RawDataset, LoadError> {
    RawDataset::from_json(text).map_err(|err| LoadError::Parse {
        source_name: source_name.to_string(),
        message: err.to_string(),
    })
}

/// Absolute URL of `endpoint` under `base_url`. Root-relative bases resolve
/// against the page origin in the browser.
fn endpoint_url(base_url: &str, endpoint: Endpoint) -> String {
    let base = base_url.trim_end_matches('/');
    #[cfg(target_arch = "wasm32")]
    {
        if base.starts_with('/') {
            if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
                return format!("{origin}{base}/{}", endpoint.file_name());
            }
        }
    }
    format!("{base}/{}", endpoint.file_name())
}

async fn fetch_http(base_url: &str, endpoint: Endpoint) -> Result<RawDataset, LoadError> {
    let url = endpoint_url(base_url, endpoint);
    let resp = reqwest::get(&url).await.map_err(|err| LoadError::Transport {
        url: url.clone(),
        message: err.to_string(),
    })?;
    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            status: status.as_u16(),
            url,
        });
    }
    let text = resp.text().await.map_err(|err| LoadError::Transport {
        url: url.clone(),
        message: err.to_string(),
    })?;
    parse(&url, &text)
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_file(dir: &std::path::Path, endpoint: Endpoint) -> Result<RawDataset, LoadError> {
    let path = dir.join(endpoint.file_name());
    let text = tokio::fs::read_to_string(&path)
        .await
        .map_err(|err| LoadError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
    parse(&path.display().to_string(), &text)
}

#[cfg(target_arch = "wasm32")]
async fn read_file(dir: &std::path::Path, endpoint: Endpoint) -> Result<RawDataset, LoadError> {
    Err(LoadError::Io {
        path: dir.join(endpoint.file_name()).display().to_string(),
        message: "local files are not reachable from the browser".to_string(),
    })
}

/// Fetch one endpoint from `source`.
pub async fn fetch(source: &DatasetSource, endpoint: Endpoint) -> Result<RawDataset, LoadError> {
    let result = match source {
        DatasetSource::Http { base_url } => fetch_http(base_url, endpoint).await,
        DatasetSource::Directory { path } => read_file(path, endpoint).await,
    };
    match &result {
        Ok(ds) => tracing::debug!(file = endpoint.file_name(), rows = ds.data.len(), "dataset loaded"),
        Err(err @ LoadError::Transport { .. }) => {
            tracing::error!(file = endpoint.file_name(), %err, "dataset fetch failed")
        }
        Err(err) => tracing::warn!(file = endpoint.file_name(), %err, "dataset unavailable"),
    }
    result
}

/// Fetch all five endpoints concurrently.
pub async fn load_all(source: &DatasetSource) -> DatasetBundle {
    let (value_added, profits, employment, enterprises, gdp_share) = futures::join!(
        fetch(source, Endpoint::ValueAdded),
        fetch(source, Endpoint::Profits),
        fetch(source, Endpoint::Employment),
        fetch(source, Endpoint::Enterprises),
        fetch(source, Endpoint::GdpShare),
    );
    DatasetBundle {
        value_added: DatasetState::from_result(value_added),
        profits: DatasetState::from_result(profits),
        employment: DatasetState::from_result(employment),
        enterprises: DatasetState::from_result(enterprises),
        gdp_share: DatasetState::from_result(gdp_share),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn directory_source_loads_present_files_and_isolates_failures() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("gdp_share.json"),
            r#"{"data":[{"key":["2022"],"values":["5.3"]}]}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("profits.json"), "not json").unwrap();

        let bundle = load_all(&DatasetSource::directory(dir.path())).await;

        assert_eq!(bundle.gdp_share.dataset().map(|d| d.data.len()), Some(1));
        assert!(matches!(bundle.profits, DatasetState::Failed(LoadError::Parse { .. })));
        assert!(matches!(bundle.value_added, DatasetState::Failed(LoadError::Io { .. })));
        assert!(!bundle.is_loading());
    }

    #[test]
    fn endpoint_urls_join_without_double_slashes() {
        assert_eq!(
            endpoint_url("https://stat.example/dataset/", Endpoint::Enterprises),
            "https://stat.example/dataset/enterprises_count.json"
        );
        assert_eq!(endpoint_url("/dataset", Endpoint::GdpShare), "/dataset/gdp_share.json");
    }

    #[tokio::test]
    async fn relative_http_base_fails_without_a_page_origin() {
        let err = fetch(&DatasetSource::http("/dataset"), Endpoint::Profits)
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Transport { ref url, .. } if url == "/dataset/profits.json"));
    }

    #[test]
    fn bundle_starts_loading() {
        let mut bundle = DatasetBundle::default();
        assert!(bundle.is_loading());
        for e in Endpoint::ALL {
            bundle.set(e, DatasetState::Loaded(Arc::new(RawDataset::default())));
        }
        assert!(!bundle.is_loading());
    }
}
