use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged activity, embedded in the owning user's `logs` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseEntry {
    pub description: String,
    pub duration: f64,
    pub date: NaiveDate,
}

impl ExerciseEntry {
    pub fn new(description: String, duration: f64, date: NaiveDate) -> Self {
        Self {
            description,
            duration,
            date,
        }
    }
}

/// Date window and size cap for a log report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl LogFilter {
    /// Entries inside `[from, to]`, in storage order, capped at `limit`.
    pub fn apply<'a>(&self, entries: &'a [ExerciseEntry]) -> Vec<&'a ExerciseEntry> {
        entries
            .iter()
            .filter(|entry| self.from.map_or(true, |from| entry.date >= from))
            .filter(|entry| self.to.map_or(true, |to| entry.date <= to))
            .take(self.limit.unwrap_or(usize::MAX))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(description: &str, y: i32, m: u32, d: u32) -> ExerciseEntry {
        ExerciseEntry::new(
            description.to_string(),
            10.0,
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    fn descriptions(entries: Vec<&ExerciseEntry>) -> Vec<&str> {
        entries.iter().map(|e| e.description.as_str()).collect()
    }

    fn sample() -> Vec<ExerciseEntry> {
        vec![
            entry("march", 2021, 3, 1),
            entry("january", 2021, 1, 15),
            entry("february", 2021, 2, 10),
            entry("april", 2021, 4, 20),
        ]
    }

    #[test]
    fn empty_filter_keeps_everything_in_storage_order() {
        let logs = sample();
        let kept = LogFilter::default().apply(&logs);
        assert_eq!(
            descriptions(kept),
            vec!["march", "january", "february", "april"]
        );
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let logs = sample();
        let filter = LogFilter {
            from: NaiveDate::from_ymd_opt(2021, 2, 10),
            to: NaiveDate::from_ymd_opt(2021, 3, 1),
            limit: None,
        };
        assert_eq!(descriptions(filter.apply(&logs)), vec!["march", "february"]);
    }

    #[test]
    fn limit_applies_after_date_filtering() {
        let logs = sample();
        let filter = LogFilter {
            from: NaiveDate::from_ymd_opt(2021, 2, 1),
            to: None,
            limit: Some(2),
        };
        assert_eq!(descriptions(filter.apply(&logs)), vec!["march", "february"]);
    }

    #[test]
    fn zero_limit_returns_nothing() {
        let logs = sample();
        let filter = LogFilter {
            limit: Some(0),
            ..LogFilter::default()
        };
        assert!(filter.apply(&logs).is_empty());
    }
}
