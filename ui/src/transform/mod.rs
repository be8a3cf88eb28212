//! Pure reshaping of raw observations into chart-ready, localized series.
//!
//! Every transformer has the shape `(raw, year, lang) -> Result<Series, _>`:
//! no state is carried between calls, so re-selecting a year always yields the
//! same series. An unmatched filter gives an empty series, never an error.

pub mod allocation;
mod bar;
mod bubble;
mod line;
mod pictogram;
mod treemap;

pub use bar::{profits, BarEntry, BarSeries};
pub use bubble::{gdp_share, BubbleSeries};
pub use line::{enterprises, LineDataset, LineSeries};
pub use pictogram::{employment, PictogramEntry, PictogramSeries};
pub use treemap::{value_added, TreemapEntry, TreemapGroup, TreemapSeries};

use crate::charts::ChartKind;
use crate::data::{DataContractError, RawDataset};
use crate::i18n::Language;

/// Run the transformer belonging to `kind`.
pub fn series_for(
    kind: ChartKind,
    raw: &RawDataset,
    year: &str,
    lang: Language,
    icon_budget: u32,
) -> Result<ChartSeries, DataContractError> {
    Ok(match kind {
        ChartKind::Treemap => ChartSeries::Treemap(value_added(raw, year, lang)?),
        ChartKind::Bar => ChartSeries::Bar(profits(raw, year, lang)?),
        ChartKind::Line => ChartSeries::Line(enterprises(raw, year, lang)?),
        ChartKind::Bubble => ChartSeries::Bubble(gdp_share(raw, year, lang)?),
        ChartKind::Pictogram => ChartSeries::Pictogram(employment(raw, year, lang, icon_budget)?),
    })
}

/// Chart-ready data for any of the five chart kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSeries {
    Treemap(TreemapSeries),
    Bar(BarSeries),
    Line(LineSeries),
    Bubble(BubbleSeries),
    Pictogram(PictogramSeries),
}

impl ChartSeries {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartSeries::Treemap(_) => ChartKind::Treemap,
            ChartSeries::Bar(_) => ChartKind::Bar,
            ChartSeries::Line(_) => ChartKind::Line,
            ChartSeries::Bubble(_) => ChartKind::Bubble,
            ChartSeries::Pictogram(_) => ChartKind::Pictogram,
        }
    }

    /// True when the filter matched nothing for the selected year.
    pub fn is_empty(&self) -> bool {
        match self {
            ChartSeries::Treemap(s) => s.entries.is_empty(),
            ChartSeries::Bar(s) => s.entries.is_empty(),
            ChartSeries::Line(s) => s.datasets.is_empty(),
            ChartSeries::Bubble(s) => s.percentage.is_none(),
            ChartSeries::Pictogram(s) => s.entries.is_empty(),
        }
    }

    /// Display labels in drawing order.
    pub fn labels(&self) -> Vec<String> {
        match self {
            ChartSeries::Treemap(s) => s.entries.iter().map(|e| e.label.clone()).collect(),
            ChartSeries::Bar(s) => s.entries.iter().map(|e| e.label.clone()).collect(),
            ChartSeries::Line(s) => s.years.clone(),
            ChartSeries::Bubble(s) => s.percentage.map(|_| vec![s.year.clone()]).unwrap_or_default(),
            ChartSeries::Pictogram(s) => s.entries.iter().map(|e| e.label.clone()).collect(),
        }
    }

    /// Primary values aligned with [`labels`](Self::labels). For line charts
    /// this is the overall total, or the first series when no total exists.
    pub fn values(&self) -> Vec<f64> {
        match self {
            ChartSeries::Treemap(s) => s.entries.iter().map(|e| e.value as f64).collect(),
            ChartSeries::Bar(s) => s.entries.iter().map(|e| e.value as f64).collect(),
            ChartSeries::Line(s) => s
                .primary()
                .map(|d| d.points.iter().map(|p| p.map_or(0.0, |v| v as f64)).collect())
                .unwrap_or_default(),
            ChartSeries::Bubble(s) => s.percentage.into_iter().collect(),
            ChartSeries::Pictogram(s) => s.entries.iter().map(|e| e.employees as f64).collect(),
        }
    }
}
