use std::collections::BTreeSet;

use crate::charts::palette::{color_for, ColorTriple};
use crate::data::{Category, DataContractError, RawDataset};
use crate::i18n::Language;

const MEASURE: &str = "ICT_S_NUMB_ENT";

/// Series drawn on the enterprises chart, in legend order.
const LINES: [Category; 4] = [
    Category::Manufacturing,
    Category::Wholesale,
    Category::ServicesTotal,
    Category::IctTotal,
];

#[derive(Debug, Clone, PartialEq)]
pub struct LineDataset {
    pub category: Category,
    pub label: String,
    /// One point per axis year; `None` past the selected year or where no
    /// observation exists.
    pub points: Vec<Option<u64>>,
    pub color: ColorTriple,
    /// The overall total is drawn dashed and thicker.
    pub dashed: bool,
}

impl LineDataset {
    pub fn stroke_width(&self) -> f32 {
        if self.dashed {
            3.0
        } else {
            2.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineSeries {
    /// Ascending year axis.
    pub years: Vec<String>,
    /// Year the series is cut at; the last axis year when the selection is absent.
    pub effective_year: Option<String>,
    pub datasets: Vec<LineDataset>,
}

impl LineSeries {
    /// "2018-2023", or a single year when the range is one year wide.
    pub fn year_range(&self) -> String {
        match (self.years.first(), &self.effective_year) {
            (Some(start), Some(end)) if start != end => format!("{start}-{end}"),
            (_, Some(end)) => end.clone(),
            _ => String::new(),
        }
    }

    pub fn primary(&self) -> Option<&LineDataset> {
        self.datasets
            .iter()
            .find(|d| d.category == Category::IctTotal)
            .or_else(|| self.datasets.first())
    }

    pub fn max_value(&self) -> u64 {
        self.datasets
            .iter()
            .flat_map(|d| d.points.iter().flatten())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Category codes of the drawn lines, used to decide whether a live chart
    /// can be updated in place.
    pub fn signature(&self) -> Vec<Category> {
        self.datasets.iter().map(|d| d.category).collect()
    }
}

/// Enterprise counts from the first axis year up to `year`.
pub fn enterprises(
    raw: &RawDataset,
    year: &str,
    lang: Language,
) -> Result<LineSeries, DataContractError> {
    for obs in &raw.data {
        obs.expect_arity(3)?;
    }
    let rows = || raw.data.iter().filter(|obs| obs.key_at(1) == MEASURE);

    let years: Vec<String> = rows()
        .filter(|obs| obs.key_at(0) == Category::IctTotal.code())
        .map(|obs| obs.key_at(2).to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if years.is_empty() {
        return Ok(LineSeries::default());
    }

    let cutoff = years
        .iter()
        .position(|y| y == year)
        .unwrap_or(years.len() - 1);

    let mut datasets = Vec::new();
    for category in LINES {
        let mut points = Vec::with_capacity(years.len());
        for (idx, axis_year) in years.iter().enumerate() {
            if idx > cutoff {
                points.push(None);
                continue;
            }
            let point = rows().find(|obs| obs.key_at(0) == category.code() && obs.key_at(2) == axis_year);
            points.push(point.map(|obs| obs.count()).transpose()?);
        }
        if points.iter().all(Option::is_none) {
            tracing::debug!(code = category.code(), "no enterprise counts for sector");
            continue;
        }
        datasets.push(LineDataset {
            category,
            label: category.label(lang),
            points,
            color: color_for(category),
            dashed: category == Category::IctTotal,
        });
    }

    Ok(LineSeries {
        effective_year: years.get(cutoff).cloned(),
        years,
        datasets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RawObservation;

    fn row(sector: &str, year: &str, value: &str) -> RawObservation {
        RawObservation::new([sector, MEASURE, year], [value])
    }

    fn sample() -> RawDataset {
        RawDataset {
            data: vec![
                row("ICT_S_TOTAL", "2021", "5000"),
                row("ICT_S_TOTAL", "2019", "4200"),
                row("ICT_S_TOTAL", "2020", "4600"),
                row("ICT_S_M", "2019", "120"),
                row("ICT_S_M", "2021", "130"),
                row("ICT_S_S_TOTAL", "2020", "4000"),
            ],
        }
    }

    #[test]
    fn years_ascend_and_points_after_selection_are_blank() {
        let series = enterprises(&sample(), "2020", Language::En).unwrap();
        assert_eq!(series.years, vec!["2019", "2020", "2021"]);
        assert_eq!(series.year_range(), "2019-2020");
        let total = series.primary().unwrap();
        assert_eq!(total.category, Category::IctTotal);
        assert_eq!(total.points, vec![Some(4200), Some(4600), None]);
        assert!(total.dashed);
        let manufacturing = &series.datasets[0];
        assert_eq!(manufacturing.points, vec![Some(120), None, None]);
    }

    #[test]
    fn sectors_without_points_are_omitted() {
        let series = enterprises(&sample(), "2021", Language::En).unwrap();
        assert_eq!(
            series.signature(),
            vec![Category::Manufacturing, Category::ServicesTotal, Category::IctTotal]
        );
        let early = enterprises(&sample(), "2019", Language::En).unwrap();
        assert_eq!(early.signature(), vec![Category::Manufacturing, Category::IctTotal]);
    }

    #[test]
    fn unknown_year_falls_back_to_last() {
        let series = enterprises(&sample(), "2030", Language::Lv).unwrap();
        assert_eq!(series.effective_year.as_deref(), Some("2021"));
        assert_eq!(series.primary().unwrap().points, vec![Some(4200), Some(4600), Some(5000)]);
        assert_eq!(series.max_value(), 5000);
    }

    #[test]
    fn single_year_range_is_one_year() {
        let raw = RawDataset {
            data: vec![row("ICT_S_TOTAL", "2019", "4200")],
        };
        assert_eq!(enterprises(&raw, "2019", Language::En).unwrap().year_range(), "2019");
    }

    #[test]
    fn no_totals_means_empty() {
        let raw = RawDataset {
            data: vec![row("ICT_S_M", "2019", "1")],
        };
        let series = enterprises(&raw, "2019", Language::En).unwrap();
        assert!(series.datasets.is_empty());
        assert!(series.years.is_empty());
    }
}
