//! Wire model of the statistical JSON files and the parsing helpers the
//! transformers share.
//!
//! Every file has the shape `{ "data": [ { "key": [..], "values": [..] } ] }`.
//! Keys are ordered dimension codes whose positions are fixed per endpoint;
//! values are string-encoded numbers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDataset {
    #[serde(default)]
    pub data: Vec<RawObservation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    pub key: Vec<String>,
    #[serde(default)]
    pub values: Vec<String>,
}

/// A dataset that does not follow the agreed shape. Fatal for the chart being
/// rendered, never for the page.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataContractError {
    #[error("observation key {key:?} has {actual} dimensions, expected {expected}")]
    KeyShape {
        key: Vec<String>,
        expected: usize,
        actual: usize,
    },
    #[error("value {value:?} for {key:?} is not numeric")]
    NonNumeric { key: Vec<String>, value: String },
    #[error("observation {key:?} carries no value")]
    MissingValue { key: Vec<String> },
    #[error("value {value} for {key:?} is negative")]
    Negative { key: Vec<String>, value: String },
    #[error("value {value} for {key:?} is outside the accepted range")]
    OutOfRange { key: Vec<String>, value: String },
}

/// Largest count accepted from a dataset. Sums over a whole file stay far
/// below `u64::MAX`.
pub const MAX_COUNT: u64 = 1_000_000_000_000;

impl RawDataset {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Distinct values found at key position `index`, in first-seen order.
    /// Observations too short to have that position are skipped.
    pub fn dimension_values(&self, index: usize) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for obs in &self.data {
            if let Some(code) = obs.key.get(index) {
                if !seen.contains(&code.as_str()) {
                    seen.push(code);
                }
            }
        }
        seen
    }
}

impl RawObservation {
    pub fn new<K, V>(key: K, values: V) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            key: key.into_iter().map(Into::into).collect(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Verifies the key has exactly `expected` dimensions.
    pub fn expect_arity(&self, expected: usize) -> Result<(), DataContractError> {
        if self.key.len() == expected {
            Ok(())
        } else {
            Err(DataContractError::KeyShape {
                key: self.key.clone(),
                expected,
                actual: self.key.len(),
            })
        }
    }

    /// Dimension code at `index`. Callers check arity first.
    pub fn key_at(&self, index: usize) -> &str {
        self.key.get(index).map(String::as_str).unwrap_or_default()
    }

    fn first_value(&self) -> Result<&str, DataContractError> {
        self.values
            .first()
            .map(|v| v.trim())
            .ok_or_else(|| DataContractError::MissingValue {
                key: self.key.clone(),
            })
    }

    /// First value as a non-negative whole number no larger than [`MAX_COUNT`].
    pub fn count(&self) -> Result<u64, DataContractError> {
        let raw = self.first_value()?;
        let value = match raw.parse::<u64>() {
            Ok(value) => value,
            // Counts are sometimes exported with a trailing ".0"; real fractions are rejected.
            Err(_) => match raw.parse::<f64>() {
                Ok(value) if value < 0.0 => return Err(self.violation(raw, Violation::Negative)),
                Ok(value) if value.is_finite() && value.fract() == 0.0 => {
                    if value > MAX_COUNT as f64 {
                        return Err(self.violation(raw, Violation::OutOfRange));
                    }
                    value as u64
                }
                _ => return Err(self.violation(raw, Violation::NonNumeric)),
            },
        };
        if value > MAX_COUNT {
            return Err(self.violation(raw, Violation::OutOfRange));
        }
        Ok(value)
    }

    /// First value as a percentage in `[0, 100]`.
    pub fn percentage(&self) -> Result<f64, DataContractError> {
        let raw = self.first_value()?;
        match raw.parse::<f64>() {
            Ok(value) if !value.is_finite() => Err(self.violation(raw, Violation::NonNumeric)),
            Ok(value) if value < 0.0 => Err(self.violation(raw, Violation::Negative)),
            Ok(value) if value > 100.0 => Err(self.violation(raw, Violation::OutOfRange)),
            Ok(value) => Ok(value),
            Err(_) => Err(self.violation(raw, Violation::NonNumeric)),
        }
    }

    fn violation(&self, raw: &str, kind: Violation) -> DataContractError {
        let key = self.key.clone();
        let value = raw.to_string();
        match kind {
            Violation::NonNumeric => DataContractError::NonNumeric { key, value },
            Violation::Negative => DataContractError::Negative { key, value },
            Violation::OutOfRange => DataContractError::OutOfRange { key, value },
        }
    }
}

#[derive(Clone, Copy)]
enum Violation {
    NonNumeric,
    Negative,
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obs(key: &[&str], value: &str) -> RawObservation {
        RawObservation::new(key.iter().copied(), [value])
    }

    #[test]
    fn parses_the_wire_shape() {
        let doc = json!({
            "data": [
                { "key": ["EMP_TOTAL", "ICT_S_M", "ICT_S_VA", "2023"], "values": ["150"] }
            ]
        });
        let ds: RawDataset = serde_json::from_value(doc).unwrap();
        assert_eq!(ds.data.len(), 1);
        assert_eq!(ds.data[0].key_at(1), "ICT_S_M");
        assert_eq!(ds.data[0].count().unwrap(), 150);
    }

    #[test]
    fn missing_data_array_is_empty() {
        let ds = RawDataset::from_json("{}").unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn counts_reject_garbage_instead_of_zeroing() {
        let bad = obs(&["A", "2023"], "n/a");
        assert!(matches!(bad.count(), Err(DataContractError::NonNumeric { .. })));
        let negative = obs(&["A", "2023"], "-4");
        assert!(matches!(negative.count(), Err(DataContractError::Negative { .. })));
        let empty = RawObservation::new(["A", "2023"], Vec::<String>::new());
        assert!(matches!(empty.count(), Err(DataContractError::MissingValue { .. })));
        assert_eq!(obs(&["A"], "12.0").count().unwrap(), 12);
    }

    #[test]
    fn fractional_counts_are_rejected() {
        let o = obs(&["EMP_TOTAL", "ICT_S_M", "ICT_S_VA", "2023"], "150.7");
        assert!(matches!(o.count(), Err(DataContractError::NonNumeric { .. })));
        assert_eq!(obs(&["A"], "150.0").count().unwrap(), 150);
    }

    #[test]
    fn oversized_counts_are_rejected() {
        let huge = obs(&["A"], "10000000000000000000");
        assert!(matches!(huge.count(), Err(DataContractError::OutOfRange { .. })));
        let huge_float = obs(&["A"], "1e20");
        assert!(matches!(huge_float.count(), Err(DataContractError::OutOfRange { .. })));
        assert_eq!(obs(&["A"], &MAX_COUNT.to_string()).count().unwrap(), MAX_COUNT);
    }

    #[test]
    fn percentages_parse_as_floats() {
        assert_eq!(obs(&["2022"], "5.3").percentage().unwrap(), 5.3);
        assert_eq!(obs(&["2022"], "100").percentage().unwrap(), 100.0);
        assert!(obs(&["2022"], "five").percentage().is_err());
    }

    #[test]
    fn percentages_above_one_hundred_are_rejected() {
        let o = obs(&["2022"], "100.5");
        assert!(matches!(o.percentage(), Err(DataContractError::OutOfRange { .. })));
    }

    #[test]
    fn arity_is_checked() {
        let o = obs(&["EMP_TOTAL", "ICT_S_M"], "1");
        assert!(o.expect_arity(2).is_ok());
        let err = o.expect_arity(4).unwrap_err();
        assert!(matches!(err, DataContractError::KeyShape { expected: 4, actual: 2, .. }));
    }

    #[test]
    fn dimension_values_are_distinct_in_order() {
        let ds = RawDataset {
            data: vec![obs(&["2021"], "1"), obs(&["2020"], "2"), obs(&["2021"], "3")],
        };
        assert_eq!(ds.dimension_values(0), vec!["2021", "2020"]);
    }
}
