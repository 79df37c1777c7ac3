//! Fiscal-year labels.
//!
//! EDGAR reports `fy` as a four-digit year. Older feeds deliver it as text,
//! the live API as an integer. Either way the label is only usable when it
//! fits in four zero-padded digits, which is what makes ordering by year and
//! ordering by label text agree.

use crate::error::FiscalYearError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// A validated fiscal year in `0000..=9999`.
///
/// Displays and serializes as its four-digit label (e.g. `"2021"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display("{_0:04}")]
#[serde(try_from = "String", into = "String")]
pub struct FiscalYear(u16);

impl FiscalYear {
    /// Largest representable year.
    pub const MAX: u16 = 9999;

    /// Creates a fiscal year, or `None` if `year` does not fit in four digits.
    pub const fn new(year: u16) -> Option<Self> {
        if year <= Self::MAX {
            Some(Self(year))
        } else {
            None
        }
    }

    /// Returns the year as a number.
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Reads a fiscal year from a JSON `fy` value.
    ///
    /// Accepts a four-digit string or a non-negative integer up to 9999.
    /// Anything else (other strings, floats, booleans, objects) is `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(label) => label.parse().ok(),
            Value::Number(n) => n
                .as_u64()
                .and_then(|year| u16::try_from(year).ok())
                .and_then(Self::new),
            _ => None,
        }
    }
}

impl FromStr for FiscalYear {
    type Err = FiscalYearError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        if label.len() != 4 || !label.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FiscalYearError(label.to_string()));
        }
        label
            .parse::<u16>()
            .map(Self)
            .map_err(|_| FiscalYearError(label.to_string()))
    }
}

impl TryFrom<String> for FiscalYear {
    type Error = FiscalYearError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl From<FiscalYear> for String {
    fn from(year: FiscalYear) -> Self {
        year.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("2021", 2021)]
    #[case("2020", 2020)]
    #[case("0999", 999)]
    #[case("0000", 0)]
    fn test_parse_label(#[case] label: &str, #[case] expected: u16) {
        let fy: FiscalYear = label.parse().unwrap();
        assert_eq!(fy.get(), expected);
        assert_eq!(fy.to_string(), label);
    }

    #[rstest]
    #[case("")]
    #[case("21")]
    #[case("999")]
    #[case("20210")]
    #[case(" 2021")]
    #[case("FY21")]
    #[case("+202")]
    #[case("２０２１")]
    fn test_parse_label_invalid(#[case] label: &str) {
        assert!(label.parse::<FiscalYear>().is_err());
    }

    #[test]
    fn test_from_json() {
        assert_eq!(FiscalYear::from_json(&json!("2022")), FiscalYear::new(2022));
        assert_eq!(FiscalYear::from_json(&json!(2022)), FiscalYear::new(2022));
        assert_eq!(FiscalYear::from_json(&json!(10000)), None);
        assert_eq!(FiscalYear::from_json(&json!(-2022)), None);
        assert_eq!(FiscalYear::from_json(&json!(2022.5)), None);
        assert_eq!(FiscalYear::from_json(&json!(true)), None);
        assert_eq!(FiscalYear::from_json(&json!(null)), None);
    }

    #[test]
    fn test_ordering_matches_label_ordering() {
        let labels = ["0999", "2019", "2020", "2021", "2100"];
        for a in labels {
            for b in labels {
                let (fa, fb): (FiscalYear, FiscalYear) = (a.parse().unwrap(), b.parse().unwrap());
                assert_eq!(fa.cmp(&fb), a.cmp(b), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_serde_as_string() {
        let fy = FiscalYear::new(2021).unwrap();
        assert_eq!(serde_json::to_string(&fy).unwrap(), r#""2021""#);
        let back: FiscalYear = serde_json::from_str(r#""2021""#).unwrap();
        assert_eq!(back, fy);
        assert!(serde_json::from_str::<FiscalYear>(r#""21""#).is_err());
    }

    #[test]
    fn test_new_out_of_range() {
        assert!(FiscalYear::new(9999).is_some());
        assert!(FiscalYear::new(10000).is_none());
    }
}
