//! Fiscal-year cutoff.

use crate::fiscal_year::FiscalYear;

/// Default exclusive cutoff: only fiscal years after 2020 are kept.
pub const DEFAULT_AFTER: FiscalYear = match FiscalYear::new(2020) {
    Some(year) => year,
    None => panic!("2020 is a four-digit year"),
};

/// Keeps observations whose fiscal year is strictly after a cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearFilter {
    after: FiscalYear,
}

impl YearFilter {
    /// Creates a filter that keeps fiscal years strictly greater than `after`.
    pub const fn after(after: FiscalYear) -> Self {
        Self { after }
    }

    /// The exclusive cutoff.
    pub const fn cutoff(&self) -> FiscalYear {
        self.after
    }

    /// Returns true if `year` passes the filter.
    pub fn accepts(&self, year: FiscalYear) -> bool {
        year > self.after
    }
}

impl Default for YearFilter {
    fn default() -> Self {
        Self::after(DEFAULT_AFTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2019", false)]
    #[case("2020", false)]
    #[case("2021", true)]
    #[case("2024", true)]
    #[case("0999", false)]
    fn test_default_cutoff(#[case] label: &str, #[case] kept: bool) {
        let filter = YearFilter::default();
        assert_eq!(filter.accepts(label.parse().unwrap()), kept);
    }

    #[test]
    fn test_custom_cutoff() {
        let filter = YearFilter::after(FiscalYear::new(2022).unwrap());
        assert_eq!(filter.cutoff().to_string(), "2022");
        assert!(!filter.accepts(FiscalYear::new(2022).unwrap()));
        assert!(filter.accepts(FiscalYear::new(2023).unwrap()));
    }
}
