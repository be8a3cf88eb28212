//! Dashboard configuration supplied by each launcher through context.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the static JSON datasets come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DatasetSource {
    /// Plain unauthenticated GET of `<base_url>/<file>`.
    Http { base_url: String },
    /// Files read from a local directory (desktop bundle).
    Directory { path: PathBuf },
}

impl DatasetSource {
    pub fn http(base_url: impl Into<String>) -> Self {
        Self::Http {
            base_url: base_url.into(),
        }
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::Directory { path: path.into() }
    }
}

impl Default for DatasetSource {
    fn default() -> Self {
        Self::http("/dataset")
    }
}

/// Easing curves understood by the chart views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    EaseOutQuad,
    EaseOutQuart,
}

impl Easing {
    /// CSS `transition-timing-function` equivalent.
    pub fn css(self) -> &'static str {
        match self {
            Easing::EaseOutQuad => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Easing::EaseOutQuart => "cubic-bezier(0.165, 0.84, 0.44, 1)",
        }
    }
}

/// Redraw animation applied when a live chart is mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub fn css(self) -> String {
        format!("all {}ms {}", self.duration_ms, self.easing.css())
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration_ms: 800,
            easing: Easing::EaseOutQuad,
        }
    }
}

/// What a related-document link does when followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentAction {
    View,
    Download,
}

/// Entry of the related-documents list under the charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedDocument {
    pub title_en: String,
    pub title_lv: String,
    pub href: String,
    pub action: DocumentAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub source: DatasetSource,
    /// Year shown first when the datasets contain it.
    pub default_year: String,
    /// Delay between playback steps at 1x speed.
    pub base_interval_ms: u64,
    /// Icons drawn by the employment pictogram.
    pub icon_budget: u32,
    pub transition: Transition,
    /// Minimum upper bound of the profits axis (mln €).
    pub profit_axis_max: u64,
    /// Minimum upper bound of the enterprises axis.
    pub enterprise_axis_max: u64,
    /// Key of the persisted language preference.
    pub language_key: String,
    /// Target of the source attribution link.
    pub source_url: String,
    /// Empty hides the related-documents section.
    pub related_documents: Vec<RelatedDocument>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: DatasetSource::default(),
            default_year: "2023".to_string(),
            base_interval_ms: 1000,
            icon_budget: 200,
            transition: Transition::default(),
            profit_axis_max: 250,
            enterprise_axis_max: 8000,
            language_key: "preferredLanguage".to_string(),
            source_url: "https://data.stat.gov.lv/".to_string(),
            related_documents: Vec::new(),
        }
    }
}

impl DashboardConfig {
    pub fn with_source(source: DatasetSource) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }
}
