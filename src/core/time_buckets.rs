use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::{Percent, Trade};

pub const FIRST_HOUR: u32 = 6;
pub const LAST_HOUR: u32 = 22;

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBucket {
    /// Weekday (0 = Sunday) or hour of day, depending on the table.
    pub key: u32,
    pub label: String,
    pub count: usize,
    pub wins: usize,
    pub win_rate: Percent,
}

impl TimeBucket {
    fn new(key: u32, label: String) -> Self {
        Self {
            key,
            label,
            count: 0,
            wins: 0,
            win_rate: Percent::ZERO,
        }
    }

    fn add(&mut self, trade: &Trade) {
        self.count += 1;
        if trade.outcome.is_win() {
            self.wins += 1;
        }
    }

    fn finish(&mut self) {
        self.win_rate = Percent::of_count(self.wins, self.count);
    }
}

/// Seven buckets, Sunday first, keyed by the entry date's weekday.
pub fn by_weekday<'a, I>(trades: I) -> Vec<TimeBucket>
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut buckets: Vec<TimeBucket> = WEEKDAY_LABELS
        .iter()
        .enumerate()
        .map(|(i, l)| TimeBucket::new(i as u32, l.to_string()))
        .collect();

    for t in trades {
        let day = t.entry_date.weekday().num_days_from_sunday() as usize;
        buckets[day].add(t);
    }
    buckets.iter_mut().for_each(TimeBucket::finish);
    buckets
}

/// One bucket per entry hour from 06:00 to 22:00. Trades without an entry
/// time or outside that window are not counted.
pub fn by_hour<'a, I>(trades: I) -> Vec<TimeBucket>
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut buckets: Vec<TimeBucket> = (FIRST_HOUR..=LAST_HOUR)
        .map(|h| TimeBucket::new(h, format!("{:02}:00", h)))
        .collect();

    for t in trades {
        let Some(time) = t.entry_time else { continue };
        let hour = time.hour();
        if (FIRST_HOUR..=LAST_HOUR).contains(&hour) {
            buckets[(hour - FIRST_HOUR) as usize].add(t);
        }
    }
    buckets.iter_mut().for_each(TimeBucket::finish);
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;
    use crate::test_helpers::make_trade;

    #[test]
    fn empty_input_gives_zeroed_tables() {
        let none: Vec<Trade> = Vec::new();
        let days = by_weekday(&none);
        let hours = by_hour(&none);
        assert_eq!(days.len(), 7);
        assert_eq!(hours.len(), 17);
        assert!(days
            .iter()
            .chain(hours.iter())
            .all(|b| b.count == 0 && b.win_rate == Percent::ZERO));
        assert_eq!(hours.first().unwrap().label, "06:00");
        assert_eq!(hours.last().unwrap().label, "22:00");
    }

    #[test]
    fn weekday_grouping() {
        // 2024-12-08 is a Sunday, 2024-12-09 a Monday
        let trades = vec![
            make_trade("1", "2024-12-08", "10:00", Outcome::Target, 1.0),
            make_trade("2", "2024-12-08", "11:00", Outcome::StopLoss, -1.0),
            make_trade("3", "2024-12-09", "10:00", Outcome::Partial, 0.5),
        ];
        let days = by_weekday(&trades);
        assert_eq!(days[0].label, "Sun");
        assert_eq!(days[0].count, 2);
        assert!((days[0].win_rate.value() - 50.0).abs() < 1e-9);
        assert_eq!(days[1].count, 1);
        assert!((days[1].win_rate.value() - 100.0).abs() < 1e-9);
        assert_eq!(days[2].count, 0);
    }

    #[test]
    fn hour_grouping_skips_untimed_and_out_of_window() {
        let trades = vec![
            make_trade("1", "2024-12-09", "09:30", Outcome::Target, 1.0),
            make_trade("2", "2024-12-09", "09:59", Outcome::Breakeven, 0.0),
            make_trade("3", "2024-12-09", "", Outcome::Target, 1.0),
            make_trade("4", "2024-12-09", "23:15", Outcome::Target, 1.0),
            make_trade("5", "2024-12-09", "05:00", Outcome::Target, 1.0),
        ];
        let hours = by_hour(&trades);
        let nine = hours.iter().find(|b| b.key == 9).unwrap();
        assert_eq!(nine.count, 2);
        assert_eq!(nine.wins, 1);
        assert_eq!(hours.iter().map(|b| b.count).sum::<usize>(), 2);
    }
}
