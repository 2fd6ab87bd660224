use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;
use tracing::{debug, warn};

use super::record::{StoredDecimal, TradeRecord};
use crate::models::{Direction, Outcome, Trade};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("trade {id}: unparseable entry date {date:?}")]
    InvalidEntryDate { id: String, date: String },
}

/// Convert one stored record into a canonical [`Trade`].
///
/// Financial fields fall back to 0 and optional labels to `None`; the only
/// hard failure is an entry date that cannot be placed in time.
pub fn normalize(record: &TradeRecord) -> Result<Trade, NormalizeError> {
    let id = record.id.to_string();
    let entry_date = parse_date(&record.date).ok_or_else(|| NormalizeError::InvalidEntryDate {
        id: id.clone(),
        date: record.date.clone(),
    })?;

    let entry_time = record.time.as_deref().and_then(parse_time);

    // Exit date and time only make sense together.
    let (exit_date, exit_time) = match (
        record.exit_date.as_deref().and_then(parse_date),
        record.exit_time.as_deref().and_then(parse_time),
    ) {
        (Some(d), Some(t)) => (Some(d), Some(t)),
        _ => (None, None),
    };

    let direction = Direction::parse(&record.direction).unwrap_or_else(|| {
        debug!("trade {}: unknown direction {:?}, assuming long", id, record.direction);
        Direction::Long
    });

    Ok(Trade {
        id,
        entry_date,
        entry_time,
        exit_date,
        exit_time,
        instrument: record.pair.trim().to_string(),
        direction,
        target_price: decimal_or_zero(&record.target),
        stop_loss_price: decimal_or_zero(&record.stop_loss),
        stop_loss_pips: optional_decimal(&record.sl_pips),
        take_profit_pips: optional_decimal(&record.tp_pips),
        risk_reward_ratio: optional_decimal(&record.rr),
        outcome: Outcome::parse(&record.result),
        realized_pnl: decimal_or_zero(&record.pnl),
        emotion: non_empty(record.emotion.as_deref()),
        confluences_for: tags(&record.confluences_pro),
        confluences_against: tags(&record.confluences_contro),
        attachments: record.image_urls.clone().unwrap_or_default(),
        notes: record.notes.clone().unwrap_or_default(),
    })
}

/// Normalize a whole collection, skipping records that cannot be dated.
pub fn normalize_all(records: &[TradeRecord]) -> Vec<Trade> {
    let mut trades = Vec::with_capacity(records.len());
    for record in records {
        match normalize(record) {
            Ok(trade) => trades.push(trade),
            Err(e) => warn!("Skipping record: {}", e),
        }
    }
    if trades.len() < records.len() {
        warn!("Normalized {} of {} records", trades.len(), records.len());
    }
    trades
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| raw.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()))
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

fn decimal_or_zero(value: &Option<StoredDecimal>) -> f64 {
    optional_decimal(value).unwrap_or(0.0)
}

fn optional_decimal(value: &Option<StoredDecimal>) -> Option<f64> {
    value.as_ref().and_then(StoredDecimal::to_f64)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn tags(values: &Option<Vec<String>>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in values.iter().flatten() {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::record::StoredId;

    fn record(date: &str) -> TradeRecord {
        TradeRecord {
            id: StoredId::Int(1),
            date: date.to_string(),
            time: Some("14:15".to_string()),
            exit_date: None,
            exit_time: None,
            pair: "GBPUSD".to_string(),
            direction: "short".to_string(),
            target: Some(StoredDecimal::Text("1.25000".to_string())),
            stop_loss: None,
            sl_pips: Some(StoredDecimal::Text("12.5".to_string())),
            tp_pips: None,
            rr: None,
            result: "stop_loss".to_string(),
            pnl: Some(StoredDecimal::Text("-40.00".to_string())),
            emotion: Some("  ".to_string()),
            confluences_pro: Some(vec!["Trend".into(), "Trend".into(), " ".into()]),
            confluences_contro: None,
            image_urls: None,
            notes: None,
        }
    }

    #[test]
    fn converts_decimal_strings() {
        let t = normalize(&record("2024-12-08")).unwrap();
        assert_eq!(t.id, "1");
        assert_eq!(t.direction, Direction::Short);
        assert_eq!(t.outcome, Outcome::StopLoss);
        assert!((t.target_price - 1.25).abs() < 1e-9);
        assert_eq!(t.stop_loss_price, 0.0);
        assert_eq!(t.stop_loss_pips, Some(12.5));
        assert_eq!(t.take_profit_pips, None);
        assert!((t.realized_pnl + 40.0).abs() < 1e-9);
        assert_eq!(t.entry_time, NaiveTime::from_hms_opt(14, 15, 0));
    }

    #[test]
    fn blank_labels_and_duplicate_tags() {
        let t = normalize(&record("2024-12-08")).unwrap();
        assert_eq!(t.emotion, None);
        assert_eq!(t.confluences_for, vec!["Trend".to_string()]);
        assert!(t.confluences_against.is_empty());
    }

    #[test]
    fn missing_pnl_defaults_to_zero() {
        let mut r = record("2024-12-08");
        r.pnl = None;
        r.result = "pending".into();
        let t = normalize(&r).unwrap();
        assert_eq!(t.realized_pnl, 0.0);
        assert_eq!(t.outcome, Outcome::Pending);
    }

    #[test]
    fn exit_requires_both_parts() {
        let mut r = record("2024-12-08");
        r.exit_date = Some("2024-12-09".into());
        let t = normalize(&r).unwrap();
        assert!(t.exit_date.is_none() && t.exit_time.is_none());

        r.exit_time = Some("10:00".into());
        let t = normalize(&r).unwrap();
        assert!(t.is_closed());
    }

    #[test]
    fn bad_date_is_an_error_and_skipped() {
        assert!(normalize(&record("not-a-date")).is_err());
        let trades = normalize_all(&[record("garbage"), record("2024-12-08T00:00:00Z")]);
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].entry_date, NaiveDate::from_ymd_opt(2024, 12, 8).unwrap());
    }
}
