use crate::data::{DataContractError, RawDataset};
use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BubbleSeries {
    pub year: String,
    /// ICT share of GDP in percent; `None` when the year has no observation.
    pub percentage: Option<f64>,
}

impl BubbleSeries {
    /// Inner-circle radius relative to the outer one (area-proportional).
    pub fn radius_ratio(&self) -> f64 {
        self.percentage
            .map(|p| (p / 100.0).sqrt())
            .unwrap_or(0.0)
    }
}

/// ICT share of GDP for `year`. The language is unused: the bubble carries no
/// category labels, its captions are resolved by the presenter.
pub fn gdp_share(
    raw: &RawDataset,
    year: &str,
    _lang: Language,
) -> Result<BubbleSeries, DataContractError> {
    let mut percentage = None;
    for obs in &raw.data {
        obs.expect_arity(1)?;
        if obs.key_at(0) == year {
            percentage = Some(obs.percentage()?);
        }
    }
    Ok(BubbleSeries {
        year: year.to_string(),
        percentage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RawObservation;

    fn sample() -> RawDataset {
        RawDataset {
            data: vec![
                RawObservation::new(["2022"], ["5.3"]),
                RawObservation::new(["2021"], ["4.9"]),
            ],
        }
    }

    #[test]
    fn picks_the_selected_year() {
        let series = gdp_share(&sample(), "2021", Language::En).unwrap();
        assert_eq!(series.percentage, Some(4.9));
        assert_eq!(series.year, "2021");
    }

    #[test]
    fn absent_year_is_empty() {
        let series = gdp_share(&sample(), "2015", Language::En).unwrap();
        assert_eq!(series.percentage, None);
        assert_eq!(series.radius_ratio(), 0.0);
    }

    #[test]
    fn share_above_the_whole_economy_fails_the_chart() {
        let raw = RawDataset {
            data: vec![RawObservation::new(["2022"], ["140"])],
        };
        let err = gdp_share(&raw, "2022", Language::En).unwrap_err();
        assert!(matches!(err, DataContractError::OutOfRange { .. }));
    }

    #[test]
    fn radius_is_area_proportional() {
        let series = BubbleSeries {
            year: "2020".into(),
            percentage: Some(25.0),
        };
        assert!((series.radius_ratio() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn multi_dimension_keys_are_rejected() {
        let raw = RawDataset {
            data: vec![RawObservation::new(["GDP", "2022"], ["5.3"])],
        };
        assert!(gdp_share(&raw, "2022", Language::En).is_err());
    }
}
