//! The shared year axis the slider and playback step along.

use std::collections::BTreeSet;

use crate::data::{DatasetBundle, Endpoint};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct YearAxis {
    years: Vec<String>,
}

impl YearAxis {
    pub fn new<I, S>(years: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let years: BTreeSet<String> = years.into_iter().map(Into::into).collect();
        Self {
            years: years.into_iter().collect(),
        }
    }

    /// Sorted union of the years found in every loaded dataset.
    pub fn from_bundle(bundle: &DatasetBundle) -> Self {
        let mut years = Vec::new();
        for endpoint in Endpoint::ALL {
            if let Some(ds) = bundle.get(endpoint).dataset() {
                years.extend(
                    ds.dimension_values(endpoint.year_position())
                        .into_iter()
                        .map(str::to_string),
                );
            }
        }
        Self::new(years)
    }

    pub fn years(&self) -> &[String] {
        &self.years
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.years.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.years.last().map(String::as_str)
    }

    pub fn contains(&self, year: &str) -> bool {
        self.position(year).is_some()
    }

    pub fn position(&self, year: &str) -> Option<usize> {
        self.years.iter().position(|y| y == year)
    }

    pub fn is_last(&self, year: &str) -> bool {
        self.last() == Some(year)
    }

    /// Year after `year`, `None` at the end of the axis.
    pub fn next(&self, year: &str) -> Option<&str> {
        let idx = self.position(year)?;
        self.years.get(idx + 1).map(String::as_str)
    }

    /// `preferred` when present, else the latest year.
    pub fn initial(&self, preferred: &str) -> Option<&str> {
        self.years
            .iter()
            .map(String::as_str)
            .find(|y| *y == preferred)
            .or_else(|| self.last())
    }
}
