use crate::charts::palette::{color_for, ColorTriple};
use crate::data::{Category, DataContractError, RawDataset};
use crate::i18n::Language;
use crate::t;

const INDICATOR: &str = "EMP_TOTAL";
const MEASURE: &str = "ICT_S_P";

#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub category: Category,
    pub label: String,
    pub value: u64,
    pub color: ColorTriple,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarSeries {
    /// Localized dataset caption ("Annual Profit (mln €)").
    pub dataset_label: String,
    pub entries: Vec<BarEntry>,
}

impl BarSeries {
    pub fn max_value(&self) -> u64 {
        self.entries.iter().map(|e| e.value).max().unwrap_or(0)
    }
}

/// Profits of the seven leaf sectors for `year`, largest first.
pub fn profits(raw: &RawDataset, year: &str, lang: Language) -> Result<BarSeries, DataContractError> {
    let mut entries = Vec::new();
    for obs in &raw.data {
        obs.expect_arity(4)?;
        if obs.key_at(0) != INDICATOR || obs.key_at(2) != MEASURE || obs.key_at(3) != year {
            continue;
        }
        let Some(category) = Category::from_code(obs.key_at(1)).filter(|c| !c.is_aggregate())
        else {
            continue;
        };
        entries.push(BarEntry {
            category,
            label: category.label(lang),
            value: obs.count()?,
            color: color_for(category),
        });
    }
    entries.sort_by(|a, b| b.value.cmp(&a.value));
    Ok(BarSeries {
        dataset_label: t!(lang, "profit-label"),
        entries,
    })
}
