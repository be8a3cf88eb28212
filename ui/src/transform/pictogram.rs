use super::allocation::allocate;
use crate::charts::palette::{color_for, ColorTriple};
use crate::core::format::round1;
use crate::data::{Category, DataContractError, RawDataset};
use crate::i18n::Language;

const MEASURE: &str = "ICT_S_NUMB_EMP";

#[derive(Debug, Clone, PartialEq)]
pub struct PictogramEntry {
    pub category: Category,
    pub label: String,
    pub employees: u64,
    /// Share of the drawn sectors' employment, one decimal.
    pub percentage: f64,
    pub icons: u32,
    pub color: ColorTriple,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PictogramSeries {
    pub entries: Vec<PictogramEntry>,
    pub icon_budget: u32,
}

impl PictogramSeries {
    pub fn icon_total(&self) -> u32 {
        self.entries.iter().map(|e| e.icons).sum()
    }

    /// Columns of the icon grid: `ceil(sqrt(budget))`.
    pub fn columns(&self) -> u32 {
        (f64::from(self.icon_budget).sqrt().ceil() as u32).max(1)
    }
}

/// Employment split of the seven leaf sectors for `year`, largest first,
/// with `icon_budget` person icons shared out by largest remainder.
pub fn employment(
    raw: &RawDataset,
    year: &str,
    lang: Language,
    icon_budget: u32,
) -> Result<PictogramSeries, DataContractError> {
    let mut rows = Vec::new();
    for obs in &raw.data {
        obs.expect_arity(4)?;
        if obs.key_at(2) != MEASURE || obs.key_at(3) != year {
            continue;
        }
        let Some(category) = Category::from_code(obs.key_at(1)).filter(|c| !c.is_aggregate())
        else {
            continue;
        };
        rows.push((category, obs.count()?));
    }

    let total = rows.iter().fold(0u64, |acc, (_, n)| acc.saturating_add(*n));
    if rows.is_empty() || total == 0 {
        return Ok(PictogramSeries {
            entries: Vec::new(),
            icon_budget,
        });
    }

    rows.sort_by(|a, b| b.1.cmp(&a.1));
    let shares: Vec<f64> = rows
        .iter()
        .map(|(_, n)| *n as f64 / total as f64 * 100.0)
        .collect();
    let icons = allocate(&shares, icon_budget);

    let entries = rows
        .into_iter()
        .zip(shares)
        .zip(icons)
        .map(|(((category, employees), share), icons)| PictogramEntry {
            category,
            label: category.label(lang),
            employees,
            percentage: round1(share),
            icons,
            color: color_for(category),
        })
        .collect();

    Ok(PictogramSeries {
        entries,
        icon_budget,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RawObservation;

    fn row(sector: &str, year: &str, value: &str) -> RawObservation {
        RawObservation::new(["EMP_TOTAL", sector, MEASURE, year], [value])
    }

    #[test]
    fn exact_shares_map_straight_to_icons() {
        let raw = RawDataset {
            data: vec![
                row("ICT_S_WS", "2022", "300"),
                row("ICT_S_M", "2022", "500"),
                row("ICT_S_S_S1", "2022", "200"),
            ],
        };
        let series = employment(&raw, "2022", Language::En, 200).unwrap();
        let percentages: Vec<_> = series.entries.iter().map(|e| e.percentage).collect();
        assert_eq!(percentages, vec![50.0, 30.0, 20.0]);
        let icons: Vec<_> = series.entries.iter().map(|e| e.icons).collect();
        assert_eq!(icons, vec![100, 60, 40]);
        assert_eq!(series.entries[0].category, Category::Manufacturing);
    }

    #[test]
    fn uneven_shares_still_fill_the_budget() {
        let raw = RawDataset {
            data: vec![
                row("ICT_S_M", "2022", "1"),
                row("ICT_S_WS", "2022", "1"),
                row("ICT_S_S_S3", "2022", "1"),
                row("ICT_S_S_S4", "2022", "4"),
                row("ICT_S_S_S5", "2022", "11"),
            ],
        };
        let series = employment(&raw, "2022", Language::En, 200).unwrap();
        assert_eq!(series.icon_total(), 200);
        assert_eq!(series.columns(), 15);
    }

    #[test]
    fn totals_are_not_counted_as_sectors() {
        let raw = RawDataset {
            data: vec![
                row("ICT_S_TOTAL", "2022", "1000"),
                row("ICT_S_S_TOTAL", "2022", "600"),
                row("ICT_S_M", "2022", "10"),
            ],
        };
        let series = employment(&raw, "2022", Language::En, 200).unwrap();
        assert_eq!(series.entries.len(), 1);
        assert_eq!(series.entries[0].percentage, 100.0);
        assert_eq!(series.entries[0].icons, 200);
    }

    #[test]
    fn nothing_for_the_year_is_empty() {
        let raw = RawDataset { data: vec![] };
        let series = employment(&raw, "2022", Language::En, 200).unwrap();
        assert!(series.entries.is_empty());
        assert_eq!(series.icon_total(), 0);
    }

    #[test]
    fn oversized_counts_fail_the_chart_instead_of_overflowing() {
        let raw = RawDataset {
            data: vec![
                row("ICT_S_M", "2022", "10000000000000000000"),
                row("ICT_S_WS", "2022", "10000000000000000000"),
            ],
        };
        let err = employment(&raw, "2022", Language::En, 200).unwrap_err();
        assert!(matches!(err, DataContractError::OutOfRange { .. }));
    }

    #[test]
    fn largest_accepted_counts_still_sum() {
        let max = crate::data::MAX_COUNT.to_string();
        let raw = RawDataset {
            data: vec![row("ICT_S_M", "2022", &max), row("ICT_S_WS", "2022", &max)],
        };
        let series = employment(&raw, "2022", Language::En, 200).unwrap();
        assert_eq!(series.icon_total(), 200);
        assert_eq!(series.entries[0].percentage, 50.0);
    }
}
