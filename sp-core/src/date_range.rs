use anyhow::{anyhow, Result};
use chrono::{Days, NaiveDate};
use sp_utils::dates::parse_date;

/// An inclusive calendar-day window.
///
/// Iterating yields every day from start through end; a zero-length
/// window (start == end) yields exactly one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    /// Build a window from "YYYY-MM-DD" strings, rejecting reversed input.
    pub fn from_strs(start: &str, end: &str) -> Result<DateRange> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        if start > end {
            return Err(anyhow!("date range start {} is after end {}", start, end));
        }
        Ok(DateRange(start, end))
    }

    /// Number of days in the window, inclusive of both ends.
    pub fn days(&self) -> u64 {
        (self.1 - self.0).num_days() as u64 + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.0 && date <= self.1
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 > self.1 {
            return None;
        }
        let current = self.0;
        self.0 = self.0.checked_add_days(Days::new(1))?;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterates_inclusive_days() {
        let range = DateRange(
            NaiveDate::from_ymd_opt(2024, 2, 27).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        );
        let days: Vec<NaiveDate> = range.collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 2, 27).unwrap());
        assert_eq!(days[2], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(days[3], NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_zero_length_window_is_one_day() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let range = DateRange(day, day);
        assert_eq!(range.days(), 1);
        assert_eq!(range.collect::<Vec<_>>(), vec![day]);
    }

    #[test]
    fn test_from_strs_rejects_reversed() {
        assert!(DateRange::from_strs("2024-05-10", "2024-05-01").is_err());
        let range = DateRange::from_strs("2024-05-01", "2024-05-10").unwrap();
        assert_eq!(range.days(), 10);
    }

    #[test]
    fn test_contains_bounds() {
        let range = DateRange::from_strs("2024-05-01", "2024-05-10").unwrap();
        assert!(range.contains(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
        assert!(range.contains(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2024, 4, 30).unwrap()));
    }
}
