use crate::charts::palette::{color_for, ColorTriple};
use crate::data::{Category, DataContractError, RawDataset};
use crate::i18n::Language;

const INDICATOR: &str = "EMP_TOTAL";
const MEASURE: &str = "ICT_S_VA";

/// Sector the tile is grouped under; manufacturing and wholesale are their own group.
#[derive(Debug, Clone, PartialEq)]
pub struct TreemapGroup {
    pub category: Category,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreemapEntry {
    pub category: Category,
    pub label: String,
    pub group: TreemapGroup,
    pub value: u64,
    /// Tiles take the colour of their group.
    pub color: ColorTriple,
}

impl TreemapEntry {
    pub fn is_service(&self) -> bool {
        self.group.category == Category::ServicesTotal
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TreemapSeries {
    pub entries: Vec<TreemapEntry>,
}

impl TreemapSeries {
    pub fn total(&self) -> u64 {
        self.entries.iter().fold(0u64, |acc, e| acc.saturating_add(e.value))
    }
}

/// Value added per sector for `year`, largest first.
///
/// Service sub-sectors only appear with a positive value.
pub fn value_added(
    raw: &RawDataset,
    year: &str,
    lang: Language,
) -> Result<TreemapSeries, DataContractError> {
    let services_group = TreemapGroup {
        category: Category::ServicesTotal,
        label: Category::ServicesTotal.label(lang),
    };

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
        let value = obs.count()?;
        let group = if category.is_service() {
            if value == 0 {
                continue;
            }
            services_group.clone()
        } else {
            TreemapGroup {
                category,
                label: category.label(lang),
            }
        };
        entries.push(TreemapEntry {
            category,
            label: category.label(lang),
            color: color_for(group.category),
            group,
            value,
        });
    }
    entries.sort_by(|a, b| b.value.cmp(&a.value));
    Ok(TreemapSeries { entries })
}
