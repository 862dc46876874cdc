//! Month/year timeline of orders.
//!
//! Each order timestamp is reduced to a `TimelineLabel` ("March-2023");
//! the day of month is dropped. Labels are then folded into a
//! year -> [12 monthly counts] table for plotting.

use crate::parser::Order;
use crate::utils::error::AggregateError;
use chrono::{Datelike, Month, NaiveDate};
use log::debug;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// First `YYYY-MM-DD` run inside a timestamp
const DATE_PATTERN: &str = r"[0-9]{4}-[0-9]{2}-[0-9]{2}";

/// A (month, year) bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineLabel {
    pub year: i32,
    pub month: Month,
}

impl TimelineLabel {
    pub fn from_date(date: NaiveDate) -> Self {
        let month = (0..date.month0()).fold(Month::January, |month, _| month.succ());
        Self {
            year: date.year(),
            month,
        }
    }

    /// Zero-based month index (January = 0)
    pub fn month_index(&self) -> usize {
        self.month.number_from_month() as usize - 1
    }
}

impl fmt::Display for TimelineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:04}", self.month.name(), self.year)
    }
}

impl FromStr for TimelineLabel {
    type Err = AggregateError;

    /// Parse "March-2023" back into its month and year
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AggregateError::InvalidLabel(s.to_string());

        let (month, year) = s.rsplit_once('-').ok_or_else(invalid)?;
        let month = month.parse::<Month>().map_err(|_| invalid())?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;

        Ok(Self { year, month })
    }
}

/// Pulls the calendar date out of order timestamps
///
/// **Public** - compile once, reuse for every order
#[derive(Debug, Clone)]
pub struct TimelineExtractor {
    pattern: Regex,
}

impl TimelineExtractor {
    pub fn new() -> Result<Self, AggregateError> {
        Ok(Self {
            pattern: Regex::new(DATE_PATTERN)?,
        })
    }

    /// Label for a single timestamp
    ///
    /// # Errors
    /// * `AggregateError::DateParse` - no date substring, or an impossible date
    pub fn extract_label(&self, index: usize, timestamp: &str) -> Result<TimelineLabel, AggregateError> {
        let found = self
            .pattern
            .find(timestamp)
            .ok_or_else(|| AggregateError::DateParse {
                index,
                timestamp: timestamp.to_string(),
                reason: "no YYYY-MM-DD date found".to_string(),
            })?;

        let date = NaiveDate::parse_from_str(found.as_str(), "%Y-%m-%d").map_err(|e| {
            AggregateError::DateParse {
                index,
                timestamp: timestamp.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(TimelineLabel::from_date(date))
    }
}

/// One label per order, in input order
///
/// **Public** - main entry point for timeline extraction
pub fn extract_timeline(orders: &[Order]) -> Result<Vec<TimelineLabel>, AggregateError> {
    let extractor = TimelineExtractor::new()?;

    let labels = orders
        .iter()
        .enumerate()
        .map(|(index, order)| extractor.extract_label(index, &order.ordered_at))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Extracted {} timeline labels", labels.len());

    Ok(labels)
}

/// Orders per month for each year, January first
///
/// **Public** - input to the timeline bubble chart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyCounts {
    by_year: BTreeMap<i32, [u64; 12]>,
}

impl MonthlyCounts {
    /// Fold labels into per-year monthly counts
    pub fn from_labels(labels: &[TimelineLabel]) -> Self {
        let mut by_year: BTreeMap<i32, [u64; 12]> = BTreeMap::new();
        for label in labels {
            by_year.entry(label.year).or_insert([0; 12])[label.month_index()] += 1;
        }
        Self { by_year }
    }

    /// Years present, ascending
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.by_year.keys().copied()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.by_year.keys().next().copied()
    }

    pub fn last_year(&self) -> Option<i32> {
        self.by_year.keys().next_back().copied()
    }

    /// Monthly counts for `year`
    pub fn months(&self, year: i32) -> Option<&[u64; 12]> {
        self.by_year.get(&year)
    }

    /// Orders in the given (year, month)
    pub fn count(&self, year: i32, month: Month) -> u64 {
        self.by_year
            .get(&year)
            .map(|months| months[month.number_from_month() as usize - 1])
            .unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.by_year.values().flat_map(|m| m.iter()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<i32, [u64; 12]> {
        &self.by_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_display() {
        let label = TimelineLabel {
            year: 2023,
            month: Month::March,
        };
        assert_eq!(label.to_string(), "March-2023");
    }

    #[test]
    fn test_label_round_trip() {
        let extractor = TimelineExtractor::new().unwrap();
        for ts in ["2023-03-15T10:00:00", "2021-12-01 23:59:59", "ordered on 2020-02-29"] {
            let label = extractor.extract_label(0, ts).unwrap();
            let parsed: TimelineLabel = label.to_string().parse().unwrap();
            assert_eq!(parsed, label);
        }
    }

    #[test]
    fn test_extract_uses_first_date() {
        let extractor = TimelineExtractor::new().unwrap();
        let label = extractor
            .extract_label(0, "2022-07-04 (delivered 2022-08-01)")
            .unwrap();
        assert_eq!(label.month, Month::July);
        assert_eq!(label.year, 2022);
    }

    #[test]
    fn test_from_date_every_month() {
        for (m, expected) in [(1, Month::January), (6, Month::June), (12, Month::December)] {
            let date = NaiveDate::from_ymd_opt(2024, m, 1).unwrap();
            assert_eq!(TimelineLabel::from_date(date).month, expected);
        }
    }

    #[test]
    fn test_missing_date() {
        let extractor = TimelineExtractor::new().unwrap();
        let err = extractor.extract_label(7, "yesterday evening").unwrap_err();
        assert!(matches!(err, AggregateError::DateParse { index: 7, .. }));
    }

    #[test]
    fn test_invalid_month() {
        let extractor = TimelineExtractor::new().unwrap();
        let err = extractor.extract_label(1, "2023-13-01T00:00:00").unwrap_err();
        assert!(matches!(err, AggregateError::DateParse { index: 1, .. }));
    }

    #[test]
    fn test_invalid_label() {
        assert!("Smarch-2023".parse::<TimelineLabel>().is_err());
        assert!("March2023".parse::<TimelineLabel>().is_err());
        assert!("March-20x3".parse::<TimelineLabel>().is_err());
    }

    #[test]
    fn test_monthly_counts() {
        let labels = vec![
            TimelineLabel { year: 2023, month: Month::March },
            TimelineLabel { year: 2023, month: Month::March },
            TimelineLabel { year: 2021, month: Month::December },
        ];
        let counts = MonthlyCounts::from_labels(&labels);

        assert_eq!(counts.years().collect::<Vec<_>>(), vec![2021, 2023]);
        assert_eq!(counts.count(2023, Month::March), 2);
        assert_eq!(counts.months(2021).unwrap()[11], 1);
        assert_eq!(counts.count(2022, Month::May), 0);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.first_year(), Some(2021));
        assert_eq!(counts.last_year(), Some(2023));
    }
}
