use chrono::{NaiveDate, NaiveTime};

use crate::models::{Direction, Outcome, Trade};

/// A closed-for-analysis trade on `date` ("YYYY-MM-DD") at `time` ("HH:MM").
pub fn make_trade(id: &str, date: &str, time: &str, outcome: Outcome, pnl: f64) -> Trade {
    Trade {
        id: id.to_string(),
        entry_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        entry_time: NaiveTime::parse_from_str(time, "%H:%M").ok(),
        exit_date: None,
        exit_time: None,
        instrument: "EURUSD".to_string(),
        direction: Direction::Long,
        target_price: 0.0,
        stop_loss_price: 0.0,
        stop_loss_pips: None,
        take_profit_pips: None,
        risk_reward_ratio: None,
        outcome,
        realized_pnl: pnl,
        emotion: None,
        confluences_for: Vec::new(),
        confluences_against: Vec::new(),
        attachments: Vec::new(),
        notes: String::new(),
    }
}

/// One trade per day starting 2024-01-01 at 09:00, outcome derived from the P&L sign.
pub fn make_series(pnls: &[f64]) -> Vec<Trade> {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    pnls.iter()
        .enumerate()
        .map(|(i, &pnl)| {
            let date = base + chrono::Duration::days(i as i64);
            let outcome = if pnl > 0.0 {
                Outcome::Target
            } else if pnl < 0.0 {
                Outcome::StopLoss
            } else {
                Outcome::Breakeven
            };
            make_trade(
                &(i + 1).to_string(),
                &date.format("%Y-%m-%d").to_string(),
                "09:00",
                outcome,
                pnl,
            )
        })
        .collect()
}
