use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Trade;

/// Inclusive entry-date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }

    pub fn filter<'a>(&self, trades: &'a [Trade]) -> Vec<&'a Trade> {
        trades.iter().filter(|t| self.contains(t.entry_date)).collect()
    }
}

/// Trades ordered by entry date and time, borrowed from the caller's list.
///
/// The sort is stable, so trades sharing an entry instant keep their input
/// order. Build it once and hand it to every consumer that needs time order.
#[derive(Debug, Clone)]
pub struct Chronological<'a> {
    trades: Vec<&'a Trade>,
}

impl<'a> Chronological<'a> {
    pub fn new<I>(trades: I) -> Self
    where
        I: IntoIterator<Item = &'a Trade>,
    {
        let mut trades: Vec<&'a Trade> = trades.into_iter().collect();
        trades.sort_by_key(|t| t.entry_key());
        Self { trades }
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn last(&self) -> Option<&'a Trade> {
        self.trades.last().copied()
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, &'a Trade>> {
        self.trades.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'a Trade] {
        &self.trades
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;
    use crate::test_helpers::make_trade;

    #[test]
    fn orders_by_date_then_time() {
        let trades = vec![
            make_trade("c", "2024-01-02", "08:00", Outcome::Target, 1.0),
            make_trade("b", "2024-01-01", "15:00", Outcome::Target, 1.0),
            make_trade("a", "2024-01-01", "09:00", Outcome::Target, 1.0),
        ];
        let ids: Vec<&str> = Chronological::new(&trades).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn missing_time_sorts_as_midnight() {
        let trades = vec![
            make_trade("late", "2024-01-01", "00:30", Outcome::Target, 1.0),
            make_trade("untimed", "2024-01-01", "", Outcome::Target, 1.0),
        ];
        let chrono = Chronological::new(&trades);
        assert_eq!(chrono.as_slice()[0].id, "untimed");
        assert!(trades[1].entry_time.is_none());
    }

    #[test]
    fn date_range_is_inclusive() {
        let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        let range = DateRange::new(Some(d("2024-01-02")), Some(d("2024-01-03")));
        assert!(!range.contains(d("2024-01-01")));
        assert!(range.contains(d("2024-01-02")));
        assert!(range.contains(d("2024-01-03")));
        assert!(!range.contains(d("2024-01-04")));
        assert!(DateRange::new(None, None).contains(d("1999-12-31")));
    }
}
