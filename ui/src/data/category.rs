//! ICT sub-sector codes used as the join key between datasets, colours and labels.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Manufacturing,
    Wholesale,
    SoftwarePublishing,
    Telecommunications,
    ComputerProgramming,
    InformationServices,
    ComputerRepair,
    ServicesTotal,
    IctTotal,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Manufacturing,
        Category::Wholesale,
        Category::SoftwarePublishing,
        Category::Telecommunications,
        Category::ComputerProgramming,
        Category::InformationServices,
        Category::ComputerRepair,
        Category::ServicesTotal,
        Category::IctTotal,
    ];

    /// The seven non-overlapping sub-sectors.
    pub const LEAVES: [Category; 7] = [
        Category::Manufacturing,
        Category::Wholesale,
        Category::SoftwarePublishing,
        Category::Telecommunications,
        Category::ComputerProgramming,
        Category::InformationServices,
        Category::ComputerRepair,
    ];

    /// Leaves that roll up into `ServicesTotal`.
    pub const SERVICES: [Category; 5] = [
        Category::SoftwarePublishing,
        Category::Telecommunications,
        Category::ComputerProgramming,
        Category::InformationServices,
        Category::ComputerRepair,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Category::Manufacturing => "ICT_S_M",
            Category::Wholesale => "ICT_S_WS",
            Category::SoftwarePublishing => "ICT_S_S_S1",
            Category::Telecommunications => "ICT_S_S_S2",
            Category::ComputerProgramming => "ICT_S_S_S3",
            Category::InformationServices => "ICT_S_S_S4",
            Category::ComputerRepair => "ICT_S_S_S5",
            Category::ServicesTotal => "ICT_S_S_TOTAL",
            Category::IctTotal => "ICT_S_TOTAL",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Fluent message id of the display name.
    pub fn i18n_key(self) -> &'static str {
        match self {
            Category::Manufacturing => "ict-manufacturing",
            Category::Wholesale => "ict-wholesale",
            Category::SoftwarePublishing => "software-publishing",
            Category::Telecommunications => "telecommunications",
            Category::ComputerProgramming => "computer-programming",
            Category::InformationServices => "information-services",
            Category::ComputerRepair => "repair-of-computers",
            Category::ServicesTotal => "ict-services-total",
            Category::IctTotal => "ict-total",
        }
    }

    pub fn label(self, lang: Language) -> String {
        crate::i18n::text(lang, self.i18n_key())
    }

    pub fn is_service(self) -> bool {
        Self::SERVICES.contains(&self)
    }

    pub fn is_aggregate(self) -> bool {
        matches!(self, Category::ServicesTotal | Category::IctTotal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique_and_parse_back() {
        let codes: HashSet<_> = Category::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes.len(), Category::ALL.len());
        for category in Category::ALL {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
        assert_eq!(Category::from_code("ICT_S_X"), None);
    }

    #[test]
    fn leaves_and_aggregates_partition_the_catalogue() {
        let aggregates = Category::ALL.iter().filter(|c| c.is_aggregate()).count();
        assert_eq!(aggregates + Category::LEAVES.len(), Category::ALL.len());
        assert!(Category::LEAVES.iter().all(|c| !c.is_aggregate()));
        assert!(Category::SERVICES.iter().all(|c| c.is_service()));
    }

    #[test]
    fn every_category_has_a_translation_in_both_languages() {
        for category in Category::ALL {
            let en = category.label(Language::En);
            let lv = category.label(Language::Lv);
            assert_ne!(en, category.i18n_key(), "missing en label for {category:?}");
            assert_ne!(lv, category.i18n_key(), "missing lv label for {category:?}");
        }
    }
}
